use chrono::NaiveDate;
use hisaab::core::*;
use hisaab::report::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn main() -> Result<(), HisaabError> {
    let inputs = vec![
        OutstandingInput::new("INV0001", dec!(11800), date(2024, 4, 30))
            .party("Sharma Traders")
            .payment(Payment::new(dec!(5000))),
        OutstandingInput::new("INV0002", dec!(2360), date(2024, 6, 10)).party("Gupta & Sons"),
        OutstandingInput::new("INV0003", dec!(590), date(2024, 7, 5))
            .party("Gupta & Sons")
            .payment(Payment::new(dec!(590))),
        OutstandingInput::new("INV0004", dec!(125000), date(2024, 8, 15)).party("Mehta Exports"),
    ];

    let report = OutstandingReport::build(inputs, date(2024, 7, 31));
    let page = Page::first(10)?;

    println!("Outstanding as of {}", report.as_of);
    for row in report.page(&page) {
        println!(
            "{:<8} {:<16} {:>12} {:>12}  {:<15} {}",
            row.invoice_number,
            row.party.as_deref().unwrap_or("-"),
            format_amount(row.record.invoice_value),
            format_amount(row.record.outstanding),
            row.record.status.label(),
            row.record.bucket.label(),
        );
    }

    println!();
    for (bucket, amount) in &report.summary.by_bucket {
        println!("{:<12} {:>12}", bucket.label(), format_amount(*amount));
    }
    println!("Total outstanding: {}", format_amount(report.summary.total_outstanding));
    Ok(())
}
