//! Human-readable byte counts.
//!
//! Converts a non-negative byte count into a short string such as `"1.0 KiB"`
//! or `"1.0 TB"`, using either binary (1024) or decimal (1000) multiples.
//!
//! ```
//! use humansize_core::approximate_size;
//!
//! assert_eq!(approximate_size(1024, true).unwrap(), "1.0 KiB");
//! assert_eq!(approximate_size(1000, false).unwrap(), "1.0 KB");
//! ```

pub mod error;
pub mod format;
pub mod units;

pub use error::SizeError;
pub use format::{approximate_size, approximate_size_binary, approximate_size_with};
pub use units::{UnitBase, UnitBaseParseError};
