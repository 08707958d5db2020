//! Core document computation: numbering, line and document totals,
//! outstanding balances and display formatting.
//!
//! Everything here is a pure function of its inputs. Fetching documents and
//! filtering them to a company/period happens before these are called.

pub mod access;
mod builder;
mod calc;
mod currency;
mod error;
mod numbering;
mod outstanding;
mod scope;
mod settings;
mod types;
mod validation;

pub use access::{Capability, PermissionSet};
pub use builder::*;
pub use calc::*;
pub use currency::*;
pub use error::*;
pub use numbering::*;
pub use outstanding::*;
pub use scope::*;
pub use settings::*;
pub use types::*;
pub use validation::*;
