use chrono::NaiveDate;
use hisaab::core::*;
use rust_decimal_macros::dec;

fn main() {
    let settings = Settings::default();
    let issue_date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    // Numbers already issued by this company this financial year
    let issued = ["INV0007", "INV0009", "INV0008"];
    let number = settings.scheme(DocumentKind::Invoice).next_number(&issued);

    let doc = DocumentBuilder::new(DocumentKind::Invoice, number, "acme", issue_date)
        .due_date(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
        .party("Sharma Traders")
        .add_line(
            LineItemBuilder::new(dec!(10), dec!(250))
                .product("Steel bracket")
                .hsn_code("7326")
                .intra_state(dec!(18))
                .build(),
        )
        .add_line(
            LineItemBuilder::new(dec!(4), dec!(125.50))
                .product("Hinge")
                .intra_state(dec!(18))
                .build(),
        )
        .other_charges(dec!(150))
        .build()
        .expect("document should be valid");

    let totals = doc.totals_with(&settings);

    println!("{} {} ({})", doc.kind.label(), doc.number, FinancialYear::containing(issue_date).label());
    for (i, line) in doc.lines.iter().enumerate() {
        let amounts = compute_line(line);
        println!(
            "  {}. {:<16} {:>10}",
            i + 1,
            line.product.as_deref().unwrap_or("-"),
            format_amount(amounts.total)
        );
    }
    println!("Taxable value: {}", format_amount(totals.taxable_value));
    println!("CGST:          {}", format_amount(totals.cgst_value));
    println!("SGST:          {}", format_amount(totals.sgst_value));
    println!("Other charges: {}", format_amount(totals.other_charges));
    println!("Grand total:   {}", format_amount(totals.grand_total));
    println!("Payable:       {}", format_rounded(Some(totals.grand_total)));
}
