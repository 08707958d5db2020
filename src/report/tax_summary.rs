use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{DocumentTotals, TaxKind, custom_round, format_amount};

/// Printable tax block of an invoice/report layout. All values are display
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxSummary {
    pub taxable_value: String,
    pub taxes: Vec<TaxSummaryRow>,
    pub other_charges: String,
    pub other_charges_gst: String,
    pub grand_total: String,
    /// Grand total rounded to whole rupees, as printed in the "amount payable" box.
    pub amount_payable: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxSummaryRow {
    pub kind: TaxKind,
    /// Shared rate such as "9%", or blank when the lines differ.
    pub rate: String,
    pub amount: String,
}

impl TaxSummary {
    pub fn from_totals(totals: &DocumentTotals) -> Self {
        let taxes = TaxKind::ALL
            .iter()
            .map(|kind| TaxSummaryRow {
                kind: *kind,
                rate: totals
                    .common_rates
                    .get(*kind)
                    .map(format_rate)
                    .unwrap_or_default(),
                amount: format_amount(totals.tax(*kind)),
            })
            .collect();

        Self {
            taxable_value: format_amount(totals.taxable_value),
            taxes,
            other_charges: format_amount(totals.other_charges),
            other_charges_gst: format_amount(totals.other_charges_gst),
            grand_total: format_amount(totals.grand_total),
            amount_payable: format_amount(custom_round(totals.grand_total)),
        }
    }

    /// Two-column plain-text rendering for print layouts.
    pub fn render(&self) -> String {
        let mut rows = vec![("Taxable Value".to_string(), self.taxable_value.as_str())];
        for row in &self.taxes {
            let label = if row.rate.is_empty() {
                row.kind.label().to_string()
            } else {
                format!("{} @ {}", row.kind.label(), row.rate)
            };
            rows.push((label, row.amount.as_str()));
        }
        rows.push(("Other Charges".to_string(), self.other_charges.as_str()));
        rows.push(("GST on Charges".to_string(), self.other_charges_gst.as_str()));
        rows.push(("Grand Total".to_string(), self.grand_total.as_str()));
        rows.push(("Amount Payable".to_string(), self.amount_payable.as_str()));

        rows.iter()
            .map(|(label, value)| format!("{label:<20}{value:>14}\n"))
            .collect()
    }
}

/// "18%" style rendering of a rate, without trailing zeros.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", rate.normalize())
}
