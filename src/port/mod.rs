//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems (data feeds, push services, displays).
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     │                         │                             │
//!     ▼                         ▼                             ▼
//! ┌──────────┐           ┌─────────────┐              ┌───────────┐
//! │  Market  │           │   Report    │              │ Transport │
//! │   Data   │           │    Sink     │              │  Adapter  │
//! └──────────┘           └─────────────┘              └───────────┘
//! ```

pub mod outbound;

pub use outbound::clock::{Clock, SystemClock};
pub use outbound::market_data::MarketDataProvider;
pub use outbound::notifier::NotificationTransport;
pub use outbound::report::{
    CycleReport, LatestQuote, LogReportSink, NullReportSink, ReportSink, UnavailableSymbol,
};
