pub mod clock;
pub mod decimal_utils;

pub use clock::{Clock, ManualClock, SystemClock};
