#![no_main]

use hisaab::core::{
    DiscountPolicy, LineItem, LineItemBuilder, Settings, aggregate, aggregate_with, compute_line,
};
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

/// Nine bytes per value: an i64 mantissa and a scale byte.
fn decimal(chunk: &[u8]) -> Decimal {
    let mut mantissa = [0u8; 8];
    mantissa.copy_from_slice(&chunk[..8]);
    Decimal::new(i64::from_le_bytes(mantissa), u32::from(chunk[8]) % 29)
}

fn line(chunk: &[u8]) -> LineItem {
    let v: Vec<Decimal> = chunk.chunks_exact(9).map(decimal).collect();
    LineItemBuilder::new(v[0], v[1])
        .cgst(v[2])
        .sgst(v[3])
        .igst(v[4])
        .discount(v[5])
        .build()
}

fuzz_target!(|data: &[u8]| {
    // Arithmetic must saturate, never panic.
    let lines: Vec<LineItem> = data.chunks_exact(54).map(line).collect();
    for item in &lines {
        let amounts = compute_line(item);
        let _ = amounts.tax_total();
    }

    let charges = lines.first().map(|l| l.unit_price).unwrap_or_default();
    let totals = aggregate(&lines, charges, Decimal::ONE_HUNDRED);
    let _ = totals.tax_total();

    let settings = Settings {
        discount_policy: DiscountPolicy::ReducesTaxable,
        apply_other_charges_gst: true,
        ..Settings::default()
    };
    let _ = aggregate_with(&lines, charges, charges, &settings);
});
