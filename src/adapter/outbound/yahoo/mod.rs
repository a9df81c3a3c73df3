//! Yahoo Finance chart API integration.

pub mod client;
pub mod dto;

pub use client::YahooChartProvider;
