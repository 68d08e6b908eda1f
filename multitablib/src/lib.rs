//! # multitablib
//!
//! Builds minimal-width multiplication tables and declines counted
//! Russian nouns into genitive case.
//!
//! ## Overview
//!
//! Two independent components, no shared state:
//!
//! - [`MultiplicationTable`]: fills an N×N symmetric product grid with
//!   an additive recurrence, computes the minimal display width of
//!   every column, and renders a right-aligned text grid with a header
//!   row and a row-label gutter.
//! - [`genitive_form`]: picks the noun ending that follows a count,
//!   driven by the count's last digit, from static lookup tables.
//!
//! ## Example
//!
//! ```rust
//! use multitablib::{genitive_form, MultiplicationTable};
//!
//! let table = MultiplicationTable::new(3).unwrap();
//! assert_eq!(table.value(2, 3), 6);
//! assert!(table.render().ends_with("3 | 3 6 9 \n"));
//!
//! assert_eq!(genitive_form(23, "компьютер").unwrap(), "23 компьютера");
//! ```

pub mod declension;
pub mod error;
pub mod table;

pub use declension::{genitive_form, DEFAULT_WORD};
pub use error::MultitabError;
pub use table::MultiplicationTable;

/// Result type for multitablib operations
pub type Result<T> = std::result::Result<T, MultitabError>;
