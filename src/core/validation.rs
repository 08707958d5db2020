//! Opt-in input checks for line items.
//!
//! The computations in this crate accept whatever they are given. Forms call
//! these validators before handing data over, and [`DocumentBuilder::build`]
//! runs them as well.
//!
//! [`DocumentBuilder::build`]: super::DocumentBuilder::build

use rust_decimal::Decimal;

use super::error::ValidationError;
use super::types::*;

/// Rate ceiling; no GST slab is anywhere near this.
const MAX_RATE: Decimal = Decimal::ONE_HUNDRED;

/// Validate one line. `index` is used for the field path.
pub fn validate_line_item(line: &LineItem, index: usize) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let prefix = format!("lines[{index}]");

    if line.quantity < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            "must not be negative",
        ));
    }
    if line.unit_price < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.unit_price"),
            "must not be negative",
        ));
    }

    for kind in TaxKind::ALL {
        let rate = line.rate(kind);
        let field = format!("{prefix}.{}_rate", kind.label().to_lowercase());
        if rate < Decimal::ZERO {
            errors.push(ValidationError::new(field, "must not be negative"));
        } else if rate > MAX_RATE {
            errors.push(ValidationError::new(field, "must not exceed 100%"));
        }
    }

    if let Some(discount) = line.discount {
        if discount < Decimal::ZERO {
            errors.push(ValidationError::new(
                format!("{prefix}.discount"),
                "must not be negative",
            ));
        }
    }

    errors
}

/// Validate all lines, collecting every error.
pub fn validate_lines(lines: &[LineItem]) -> Vec<ValidationError> {
    lines
        .iter()
        .enumerate()
        .flat_map(|(i, line)| validate_line_item(line, i))
        .collect()
}
