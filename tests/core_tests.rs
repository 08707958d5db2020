use chrono::NaiveDate;
use hisaab::core::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sales_invoice() -> Document {
    DocumentBuilder::new(DocumentKind::Invoice, "INV0042", "acme", date(2024, 6, 15))
        .due_date(date(2024, 7, 15))
        .party("Sharma Traders")
        .add_line(
            LineItemBuilder::new(dec!(10), dec!(250))
                .product("Steel bracket")
                .hsn_code("7326")
                .unit("Nos")
                .intra_state(dec!(18))
                .build(),
        )
        .add_line(
            LineItemBuilder::new(dec!(4), dec!(125.50))
                .product("Hinge")
                .intra_state(dec!(18))
                .discount(dec!(20))
                .build(),
        )
        .other_charges_with_gst(dec!(150), dec!(18))
        .build()
        .unwrap()
}

// --- Numbering ---

#[test]
fn dispatch_numbers_continue_after_highest() {
    assert_eq!(
        next_number(&["DTS0001", "DTS0003", "DTS0002"], "DTS", 4),
        "DTS0004"
    );
}

#[test]
fn empty_and_malformed_scopes_start_at_one() {
    let none: Vec<String> = Vec::new();
    assert_eq!(next_number(&none, "DTS", 4), "DTS0001");
    assert_eq!(next_number(&["DTSxyz"], "DTS", 4), "DTS0001");
}

#[test]
fn settings_scheme_drives_numbering() {
    let settings = Settings::default();
    let scheme = settings.scheme(DocumentKind::Quotation);
    assert_eq!(scheme.next_number(&["QUO0010", "QUO0002"]), "QUO0011");
}

#[test]
fn scope_numbering_per_company_and_year() {
    let issued = vec![
        DocumentRef {
            number: "INV0041".into(),
            company_id: "acme".into(),
            issue_date: date(2024, 6, 1),
        },
        DocumentRef {
            number: "INV0100".into(),
            company_id: "other".into(),
            issue_date: date(2024, 6, 1),
        },
    ];
    let scope = SequenceScope::company_year("acme", date(2024, 6, 15));
    let scheme = Settings::default().scheme(DocumentKind::Invoice);
    assert_eq!(scope.next_number(&issued, &scheme), "INV0042");
}

#[test]
fn batch_sequence() {
    let mut seq = DocumentNumberSequence::from_existing(&["DTS0007"], "DTS");
    let batch: Vec<String> = (0..3).map(|_| seq.next_number()).collect();
    assert_eq!(batch, vec!["DTS0008", "DTS0009", "DTS0010"]);
}

// --- Line and document totals ---

#[test]
fn intra_state_line_totals() {
    let line = LineItemBuilder::new(dec!(2), dec!(100))
        .cgst(dec!(9))
        .sgst(dec!(9))
        .igst(dec!(0))
        .build();
    let amounts = compute_line(&line);
    assert_eq!(amounts.total_price, dec!(200));
    assert_eq!(amounts.cgst_value, dec!(18));
    assert_eq!(amounts.sgst_value, dec!(18));
    assert_eq!(amounts.igst_value, dec!(0));
    assert_eq!(amounts.total, dec!(236));
}

#[test]
fn sales_invoice_totals() {
    let totals = sales_invoice().totals();

    // 10 × 250 + 4 × 125.50
    assert_eq!(totals.subtotal, dec!(3002));
    assert_eq!(totals.taxable_value, dec!(3002));
    assert_eq!(totals.quantity, dec!(14));
    assert_eq!(totals.cgst_value, dec!(270.18));
    assert_eq!(totals.sgst_value, dec!(270.18));
    assert_eq!(totals.igst_value, dec!(0));
    // Discount is reported, not subtracted.
    assert_eq!(totals.discount, dec!(20));
    assert_eq!(totals.other_charges_gst, dec!(27));
    assert_eq!(totals.grand_total, dec!(3719.36));
    assert_eq!(totals.common_rates.cgst, Some(dec!(9)));
    assert_eq!(totals.common_rates.igst, None);
}

#[test]
fn settings_change_discount_and_charges() {
    let doc = sales_invoice();
    let settings = Settings {
        discount_policy: DiscountPolicy::ReducesTaxable,
        apply_other_charges_gst: false,
        ..Settings::default()
    };
    let totals = doc.totals_with(&settings);
    assert_eq!(totals.taxable_value, dec!(2982));
    assert_eq!(totals.cgst_value, dec!(268.38));
    assert_eq!(totals.other_charges_gst, dec!(0));
    assert_eq!(totals.grand_total, dec!(3668.76));
}

#[test]
fn empty_aggregation() {
    let totals = aggregate(&[], dec!(120), dec!(0));
    assert_eq!(totals.subtotal, dec!(0));
    assert_eq!(totals.cgst_value, dec!(0));
    assert_eq!(totals.sgst_value, dec!(0));
    assert_eq!(totals.igst_value, dec!(0));
    assert_eq!(totals.taxable_value, dec!(0));
    assert_eq!(totals.grand_total, dec!(120));
}

// --- Formatting ---

#[test]
fn currency_display() {
    assert_eq!(format_currency(None), "");
    assert_eq!(format_currency(Some(dec!(1500))), "1,500");
    assert_eq!(format_currency(Some(dec!(1500.5))), "1,500.50");
    assert_eq!(format_currency(Some(dec!(3719.36))), "3,719.36");
    assert_eq!(format_currency(Some(dec!(2500000))), "25,00,000");
}

#[test]
fn custom_round_examples() {
    assert_eq!(custom_round(dec!(10.49)), dec!(10));
    assert_eq!(custom_round(dec!(10.5)), dec!(11));
    assert_eq!(custom_round(dec!(10.99)), dec!(11));
    for n in [-3, 0, 7, 1_000_000] {
        let d = rust_decimal::Decimal::from(n);
        assert_eq!(custom_round(d), d);
    }
}

// --- Outstanding ---

#[test]
fn outstanding_examples() {
    let settled = outstanding(
        dec!(1000),
        &[Payment::new(dec!(400)), Payment::new(dec!(600))],
    );
    assert_eq!(settled.outstanding, dec!(0));

    let open = outstanding(dec!(1000), &[Payment::new(dec!(300))]);
    assert_eq!(open.total_paid, dec!(300));
    assert_eq!(open.outstanding, dec!(700));
}

#[test]
fn outstanding_record_for_invoice() {
    let doc = sales_invoice();
    let record = OutstandingRecord::compute(
        doc.totals().grand_total,
        &[Payment {
            amount: dec!(2000),
            date: Some(date(2024, 7, 1)),
            reference: Some("UTR123".into()),
        }],
        doc.due_date.unwrap(),
        date(2024, 8, 20),
    );
    assert_eq!(record.outstanding, dec!(1719.36));
    assert_eq!(record.due_days, 36);
    assert_eq!(record.bucket, AgingBucket::Days31To60);
    assert_eq!(record.status.label(), "Partially Paid");
}

// --- Permissions ---

#[test]
fn capability_injected_into_view_logic() {
    fn can_edit_invoice(caps: &impl Capability) -> bool {
        caps.has_all(&["invoice.view", "invoice.edit"])
    }

    let clerk: PermissionSet = ["invoice.view"].into_iter().collect();
    let admin = PermissionSet::new().grant(access::ALL_PERMISSIONS);
    assert!(!can_edit_invoice(&clerk));
    assert!(can_edit_invoice(&admin));
}

// --- Thread safety ---

#[test]
fn shared_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<DocumentTotals>();
    assert_send_sync::<LineAmounts>();
    assert_send_sync::<Document>();
    assert_send_sync::<DocumentNumberSequence>();
    assert_send_sync::<SequenceValue>();
    assert_send_sync::<Settings>();
    assert_send_sync::<OutstandingRecord>();
    assert_send_sync::<PermissionSet>();
    assert_send_sync::<HisaabError>();
    #[cfg(feature = "report")]
    {
        assert_send_sync::<hisaab::report::OutstandingReport>();
        assert_send_sync::<hisaab::report::TaxSummary>();
    }
}
