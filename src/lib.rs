//! Japanese imperial era (元号) dates.
//!
//! Converts between Gregorian dates and the five modern eras, and parses the
//! notations found on Japanese official documents:
//!
//! ```
//! use jptime::parse_date;
//!
//! let a = parse_date("平成三年三月二十三日").unwrap();
//! let b = parse_date("4030323").unwrap();
//! let c = parse_date("1991-3-23").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(b, c);
//! assert_eq!(a.to_tuple(), (4, 3, 3, 23));
//! ```

pub mod date;
pub mod era;
pub mod error;
pub mod normalize;
pub mod numeral;
pub mod parser;
pub mod western;

pub use date::{EraDate, from_gregorian, make_era_date};
pub use era::{Era, era_by_code, era_by_date, match_symbol};
pub use error::{EraError, Error, ParseError, Rejection, ValidationError};
pub use parser::parse_date;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
