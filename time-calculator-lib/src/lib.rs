//! Hours-and-minutes arithmetic.
//!
//! Expressions mix decimal hours and `HH:MM` times with `+ - * / ( )`, are
//! evaluated to exact hours and displayed rounded to the minute.
//!
//! ```
//! use time_calculator::format::format_hours;
//! use time_calculator::interpreter::evaluate;
//! # use anyhow::Result;
//!
//! # fn main() -> Result<()> {
//! let hours = evaluate("(8:30 - 0:45) * 5")?;
//! assert_eq!(format_hours(hours).hhmm, "38:45");
//! # Ok::<(), anyhow::Error>(()) }
//! ```

pub mod calculator;
pub mod format;
pub mod history;
pub mod interpreter;
