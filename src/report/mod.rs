//! Report-level views over the core computations: the outstanding report
//! with aging, and the printable tax summary of a document.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use hisaab::core::*;
//! use hisaab::report::*;
//! use rust_decimal_macros::dec;
//!
//! let as_of = NaiveDate::from_ymd_opt(2024, 7, 31).unwrap();
//! let due = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
//!
//! let report = OutstandingReport::build(
//!     vec![OutstandingInput::new("INV0001", dec!(1000), due).payment(Payment::new(dec!(300)))],
//!     as_of,
//! );
//! assert_eq!(report.summary.total_outstanding, dec!(700));
//! ```

mod outstanding;
mod page;
mod tax_summary;

pub use outstanding::{OutstandingInput, OutstandingReport, OutstandingRow, OutstandingSummary};
pub use page::Page;
pub use tax_summary::{TaxSummary, TaxSummaryRow, format_rate};
