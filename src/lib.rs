//! # hisaab
//!
//! Document computation for an inventory/ERP back office: sequential
//! document numbering, GST line and document totals, outstanding balances
//! with aging, and Indian-grouped currency display.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Every computation is a pure function; fetching and scope filtering are left
//! to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use hisaab::core::*;
//! use rust_decimal_macros::dec;
//!
//! let number = next_number(&["DTS0001", "DTS0003", "DTS0002"], "DTS", 4);
//! assert_eq!(number, "DTS0004");
//!
//! let lines = vec![
//!     LineItemBuilder::new(dec!(2), dec!(100)).cgst(dec!(9)).sgst(dec!(9)).build(),
//! ];
//! let totals = aggregate(&lines, dec!(0), dec!(0));
//! assert_eq!(totals.grand_total, dec!(236));
//! assert_eq!(format_currency(Some(totals.grand_total)), "236");
//!
//! let balance = outstanding(dec!(1000), &[Payment::new(dec!(300))]);
//! assert_eq!(balance.outstanding, dec!(700));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Numbering, line/document totals, outstanding, formatting |
//! | `report` | Outstanding report with aging, printable tax summary, paging |
//! | `json` | Load [`core::Settings`] from JSON |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "report")]
pub mod report;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
