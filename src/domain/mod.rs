//! Feed-agnostic domain types.

mod alert;
mod cycle;
mod price;
mod symbol;
mod window;

pub use alert::{AlertEvent, AlertKind, NotificationBatch};
pub use cycle::CycleKind;
pub use price::{Interval, Lookback, PatternPeriod, PriceHistory, PricePoint, SamplingWindow};
pub use symbol::TrackedSymbol;
pub use window::{ActiveWindow, WindowOrderError, WindowSchedule};
