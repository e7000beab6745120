//! Burmese personal names to standardized English spelling.
//!
//! ```no_run
//! use mmnames_rs::Converter;
//!
//! let mut converter = Converter::new(None)?;
//! assert_eq!(converter.convert("ကျော်စွာ"), "Kyaw Swa");
//! # Ok::<(), mmnames_rs::ConfigError>(())
//! ```

pub mod config;
pub mod constants;
pub mod converter;
pub mod dictionary;
pub mod error;
pub mod segmenter;
pub mod stacking;

pub use converter::{Conversion, Converter};
pub use error::ConfigError;
pub use segmenter::segment;
