use rust_decimal::Decimal;
use tracing::debug;

use super::settings::{DiscountPolicy, Settings};
use super::types::*;

/// Compute the amounts of one line.
///
/// `total_price = quantity × unit_price`; each tax is `total_price × rate / 100`,
/// computed independently; `total` adds all three taxes. The discount is
/// carried through but not subtracted. Nothing is rounded.
///
/// Amounts beyond the range of [`Decimal`] saturate at `Decimal::MAX` (or
/// `Decimal::MIN`) instead of panicking.
pub fn compute_line(item: &LineItem) -> LineAmounts {
    compute_line_with(item, DiscountPolicy::Informational)
}

/// [`compute_line`] under an explicit discount policy.
pub fn compute_line_with(item: &LineItem, policy: DiscountPolicy) -> LineAmounts {
    let discount = item.discount.unwrap_or(Decimal::ZERO);
    let gross = item.quantity.saturating_mul(item.unit_price);
    let total_price = match policy {
        DiscountPolicy::Informational => gross,
        DiscountPolicy::ReducesTaxable => gross.saturating_sub(discount),
    };

    let cgst_value = percent_of(total_price, item.cgst_rate);
    let sgst_value = percent_of(total_price, item.sgst_rate);
    let igst_value = percent_of(total_price, item.igst_rate);

    LineAmounts {
        total_price,
        cgst_value,
        sgst_value,
        igst_value,
        discount,
        total: total_price
            .saturating_add(cgst_value)
            .saturating_add(sgst_value)
            .saturating_add(igst_value),
    }
}

fn percent_of(base: Decimal, rate: Decimal) -> Decimal {
    match base.checked_mul(rate) {
        Some(product) => product / Decimal::ONE_HUNDRED,
        None => (base / Decimal::ONE_HUNDRED).saturating_mul(rate),
    }
}

/// Sum a document's lines into document totals.
///
/// `grand_total = Σ line totals + other_charges + other_charges × gst% / 100`.
/// An empty line list yields zeros with the other charges passed through.
///
/// ```
/// use hisaab::core::*;
/// use rust_decimal_macros::dec;
///
/// let lines = vec![LineItemBuilder::new(dec!(2), dec!(100)).intra_state(dec!(18)).build()];
/// let totals = aggregate(&lines, dec!(50), dec!(0));
/// assert_eq!(totals.taxable_value, dec!(200));
/// assert_eq!(totals.grand_total, dec!(286));
/// assert_eq!(totals.common_rates.cgst, Some(dec!(9)));
/// ```
pub fn aggregate(
    lines: &[LineItem],
    other_charges: Decimal,
    other_charges_gst_percent: Decimal,
) -> DocumentTotals {
    aggregate_lines(
        lines,
        other_charges,
        other_charges_gst_percent,
        DiscountPolicy::Informational,
    )
}

/// [`aggregate`] honouring deployment settings: the discount policy, and
/// whether other charges attract GST at all.
pub fn aggregate_with(
    lines: &[LineItem],
    other_charges: Decimal,
    other_charges_gst_percent: Decimal,
    settings: &Settings,
) -> DocumentTotals {
    let gst_percent = if settings.apply_other_charges_gst {
        other_charges_gst_percent
    } else {
        Decimal::ZERO
    };
    aggregate_lines(lines, other_charges, gst_percent, settings.discount_policy)
}

fn aggregate_lines(
    lines: &[LineItem],
    other_charges: Decimal,
    other_charges_gst_percent: Decimal,
    policy: DiscountPolicy,
) -> DocumentTotals {
    let mut totals = DocumentTotals::default();
    let mut lines_total = Decimal::ZERO;

    for line in lines {
        let amounts = compute_line_with(line, policy);
        totals.quantity = totals.quantity.saturating_add(line.quantity);
        totals.subtotal = totals.subtotal.saturating_add(amounts.total_price);
        totals.taxable_value = totals.taxable_value.saturating_add(amounts.total_price);
        totals.cgst_value = totals.cgst_value.saturating_add(amounts.cgst_value);
        totals.sgst_value = totals.sgst_value.saturating_add(amounts.sgst_value);
        totals.igst_value = totals.igst_value.saturating_add(amounts.igst_value);
        totals.discount = totals.discount.saturating_add(amounts.discount);
        lines_total = lines_total.saturating_add(amounts.total);
    }

    totals.other_charges = other_charges;
    totals.other_charges_gst = percent_of(other_charges, other_charges_gst_percent);
    totals.grand_total = lines_total
        .saturating_add(other_charges)
        .saturating_add(totals.other_charges_gst);
    totals.common_rates = common_rates(lines);
    totals
}

/// The rate every line shares, per tax kind.
///
/// A kind gets `Some(rate)` only when all lines carry the same nonzero rate;
/// mixed rates, all-zero rates or no lines give `None`.
pub fn common_rates(lines: &[LineItem]) -> CommonRates {
    CommonRates {
        cgst: common_rate(lines, TaxKind::Cgst),
        sgst: common_rate(lines, TaxKind::Sgst),
        igst: common_rate(lines, TaxKind::Igst),
    }
}

fn common_rate(lines: &[LineItem], kind: TaxKind) -> Option<Decimal> {
    let first = lines.first()?.rate(kind);
    if first.is_zero() {
        return None;
    }
    lines
        .iter()
        .all(|l| l.rate(kind) == first)
        .then_some(first)
}

impl Document {
    /// Totals of this document.
    pub fn totals(&self) -> DocumentTotals {
        aggregate(
            &self.lines,
            self.other_charges,
            self.other_charges_gst_percent,
        )
    }

    /// Totals of this document under deployment settings.
    pub fn totals_with(&self, settings: &Settings) -> DocumentTotals {
        let totals = aggregate_with(
            &self.lines,
            self.other_charges,
            self.other_charges_gst_percent,
            settings,
        );
        debug!(
            number = %self.number,
            lines = self.lines.len(),
            grand_total = %totals.grand_total,
            "computed document totals"
        );
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::LineItemBuilder;
    use rust_decimal_macros::dec;

    fn gst_line(qty: Decimal, price: Decimal, cgst: Decimal, sgst: Decimal, igst: Decimal) -> LineItem {
        LineItemBuilder::new(qty, price)
            .cgst(cgst)
            .sgst(sgst)
            .igst(igst)
            .build()
    }

    #[test]
    fn intra_state_line() {
        let amounts = compute_line(&gst_line(dec!(2), dec!(100), dec!(9), dec!(9), dec!(0)));
        assert_eq!(amounts.total_price, dec!(200));
        assert_eq!(amounts.cgst_value, dec!(18));
        assert_eq!(amounts.sgst_value, dec!(18));
        assert_eq!(amounts.igst_value, dec!(0));
        assert_eq!(amounts.total, dec!(236));
        assert_eq!(amounts.tax_total(), dec!(36));
    }

    #[test]
    fn all_three_taxes_are_summed() {
        let amounts = compute_line(&gst_line(dec!(1), dec!(100), dec!(9), dec!(9), dec!(18)));
        assert_eq!(amounts.total, dec!(136));
    }

    #[test]
    fn no_rounding_applied() {
        let amounts = compute_line(&gst_line(dec!(3), dec!(33.33), dec!(2.5), dec!(0), dec!(0)));
        assert_eq!(amounts.total_price, dec!(99.99));
        assert_eq!(amounts.cgst_value, dec!(2.49975));
        assert_eq!(amounts.total, dec!(102.48975));
    }

    #[test]
    fn discount_is_informational_by_default() {
        let line = LineItemBuilder::new(dec!(1), dec!(100))
            .igst(dec!(18))
            .discount(dec!(10))
            .build();
        let amounts = compute_line(&line);
        assert_eq!(amounts.discount, dec!(10));
        assert_eq!(amounts.total, dec!(118));
    }

    #[test]
    fn discount_reduces_taxable_when_enabled() {
        let line = LineItemBuilder::new(dec!(1), dec!(100))
            .igst(dec!(18))
            .discount(dec!(10))
            .build();
        let amounts = compute_line_with(&line, DiscountPolicy::ReducesTaxable);
        assert_eq!(amounts.total_price, dec!(90));
        assert_eq!(amounts.igst_value, dec!(16.2));
        assert_eq!(amounts.total, dec!(106.2));
    }

    #[test]
    fn empty_aggregation_passes_other_charges() {
        let totals = aggregate(&[], dec!(75), dec!(0));
        assert_eq!(totals.subtotal, dec!(0));
        assert_eq!(totals.tax_total(), dec!(0));
        assert_eq!(totals.grand_total, dec!(75));
        assert_eq!(totals.common_rates, CommonRates::default());
    }

    #[test]
    fn aggregate_sums_lines() {
        let lines = vec![
            gst_line(dec!(2), dec!(100), dec!(9), dec!(9), dec!(0)),
            gst_line(dec!(1), dec!(50), dec!(6), dec!(6), dec!(0)),
        ];
        let totals = aggregate(&lines, dec!(0), dec!(0));
        assert_eq!(totals.quantity, dec!(3));
        assert_eq!(totals.subtotal, dec!(250));
        assert_eq!(totals.taxable_value, dec!(250));
        assert_eq!(totals.cgst_value, dec!(21));
        assert_eq!(totals.sgst_value, dec!(21));
        assert_eq!(totals.grand_total, dec!(292));
        assert_eq!(totals.common_rates.cgst, None);
    }

    #[test]
    fn other_charges_gst() {
        let lines = vec![gst_line(dec!(1), dec!(1000), dec!(0), dec!(0), dec!(18))];
        let totals = aggregate(&lines, dec!(100), dec!(18));
        assert_eq!(totals.other_charges_gst, dec!(18));
        assert_eq!(totals.grand_total, dec!(1298));
    }

    #[test]
    fn settings_can_disable_other_charges_gst() {
        let lines = vec![gst_line(dec!(1), dec!(1000), dec!(0), dec!(0), dec!(18))];
        let settings = Settings::default();
        let totals = aggregate_with(&lines, dec!(100), dec!(18), &settings);
        assert_eq!(totals.other_charges_gst, dec!(0));
        assert_eq!(totals.grand_total, dec!(1280));

        let settings = Settings {
            apply_other_charges_gst: true,
            ..Settings::default()
        };
        let totals = aggregate_with(&lines, dec!(100), dec!(18), &settings);
        assert_eq!(totals.grand_total, dec!(1298));
    }

    #[test]
    fn common_rate_requires_agreement() {
        let same = vec![
            gst_line(dec!(1), dec!(10), dec!(9), dec!(9), dec!(0)),
            gst_line(dec!(5), dec!(20), dec!(9.00), dec!(9), dec!(0)),
        ];
        let rates = common_rates(&same);
        assert_eq!(rates.cgst, Some(dec!(9)));
        assert_eq!(rates.sgst, Some(dec!(9)));
        assert_eq!(rates.igst, None);

        let mixed = vec![
            gst_line(dec!(1), dec!(10), dec!(9), dec!(9), dec!(0)),
            gst_line(dec!(1), dec!(10), dec!(2.5), dec!(9), dec!(0)),
        ];
        let rates = common_rates(&mixed);
        assert_eq!(rates.cgst, None);
        assert_eq!(rates.sgst, Some(dec!(9)));
    }

    #[test]
    fn oversized_line_saturates() {
        let qty = Decimal::from(1_000_000_000_000_000_i64);
        let price = Decimal::from(100_000_000_000_000_i64);
        let amounts = compute_line(&gst_line(qty, price, dec!(9), dec!(0), dec!(0)));
        assert_eq!(amounts.total_price, Decimal::MAX);
        assert!(amounts.cgst_value > Decimal::ZERO);
        assert_eq!(amounts.total, Decimal::MAX);

        let negative =
            compute_line(&gst_line(Decimal::MIN, Decimal::TEN, dec!(0), dec!(0), dec!(0)));
        assert_eq!(negative.total, Decimal::MIN);
    }

    #[test]
    fn oversized_document_saturates() {
        let line = LineItemBuilder::new(Decimal::MAX, Decimal::ONE).build();
        let totals = aggregate(&[line.clone(), line], Decimal::MAX, dec!(18));
        assert_eq!(totals.quantity, Decimal::MAX);
        assert_eq!(totals.subtotal, Decimal::MAX);
        assert_eq!(totals.grand_total, Decimal::MAX);
        assert_eq!(totals.tax_total(), dec!(0));
    }
}
