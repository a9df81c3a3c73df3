//! Serializes tests that mutate process environment variables.

use parking_lot::{const_mutex, Mutex};

pub static ENV_LOCK: Mutex<()> = const_mutex(());
