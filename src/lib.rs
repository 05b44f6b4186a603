pub mod error;
pub mod math;
pub mod running_average;

pub use error::{ArclineError, Result};
