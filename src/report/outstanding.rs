use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::page::Page;
use crate::core::{AgingBucket, Document, OutstandingRecord, Payment, Settings};

/// An invoice and its payments, as fetched for the outstanding report.
#[derive(Debug, Clone)]
pub struct OutstandingInput {
    pub invoice_number: String,
    pub party: Option<String>,
    pub invoice_value: Decimal,
    pub due_date: NaiveDate,
    pub payments: Vec<Payment>,
}

impl OutstandingInput {
    pub fn new(invoice_number: impl Into<String>, invoice_value: Decimal, due_date: NaiveDate) -> Self {
        Self {
            invoice_number: invoice_number.into(),
            party: None,
            invoice_value,
            due_date,
            payments: Vec::new(),
        }
    }

    /// Input for a document; its grand total under `settings` is the invoice
    /// value, matching what the printed document shows. Documents without a
    /// due date are due on issue.
    pub fn from_document(doc: &Document, settings: &Settings, payments: Vec<Payment>) -> Self {
        Self {
            invoice_number: doc.number.clone(),
            party: doc.party.clone(),
            invoice_value: doc.totals_with(settings).grand_total,
            due_date: doc.due_date.unwrap_or(doc.issue_date),
            payments,
        }
    }

    pub fn party(mut self, name: impl Into<String>) -> Self {
        self.party = Some(name.into());
        self
    }

    pub fn payment(mut self, payment: Payment) -> Self {
        self.payments.push(payment);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutstandingRow {
    pub invoice_number: String,
    pub party: Option<String>,
    pub due_date: NaiveDate,
    pub record: OutstandingRecord,
}

/// Report footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutstandingSummary {
    pub invoice_count: usize,
    pub total_invoiced: Decimal,
    pub total_paid: Decimal,
    /// Sum of positive balances; overpayments do not offset other invoices.
    pub total_outstanding: Decimal,
    pub overdue_count: usize,
    /// Outstanding balance per aging bucket.
    pub by_bucket: BTreeMap<AgingBucket, Decimal>,
}

/// Outstanding report as of a given date. Rows are ordered by due date, then
/// invoice number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutstandingReport {
    pub as_of: NaiveDate,
    pub rows: Vec<OutstandingRow>,
    pub summary: OutstandingSummary,
}

impl OutstandingReport {
    pub fn build(inputs: Vec<OutstandingInput>, as_of: NaiveDate) -> Self {
        let mut rows: Vec<OutstandingRow> = inputs
            .into_iter()
            .map(|input| OutstandingRow {
                record: OutstandingRecord::compute(
                    input.invoice_value,
                    &input.payments,
                    input.due_date,
                    as_of,
                ),
                invoice_number: input.invoice_number,
                party: input.party,
                due_date: input.due_date,
            })
            .collect();
        rows.sort_by(|a, b| {
            a.due_date
                .cmp(&b.due_date)
                .then_with(|| a.invoice_number.cmp(&b.invoice_number))
        });

        let mut summary = OutstandingSummary {
            by_bucket: AgingBucket::ALL.iter().map(|b| (*b, Decimal::ZERO)).collect(),
            ..OutstandingSummary::default()
        };
        for row in &rows {
            let record = &row.record;
            summary.invoice_count += 1;
            summary.total_invoiced = summary.total_invoiced.saturating_add(record.invoice_value);
            summary.total_paid = summary.total_paid.saturating_add(record.total_paid);
            if record.outstanding > Decimal::ZERO {
                summary.total_outstanding =
                    summary.total_outstanding.saturating_add(record.outstanding);
                let bucket = summary.by_bucket.entry(record.bucket).or_insert(Decimal::ZERO);
                *bucket = bucket.saturating_add(record.outstanding);
            }
            if record.is_overdue() {
                summary.overdue_count += 1;
            }
        }

        debug!(
            %as_of,
            invoices = summary.invoice_count,
            outstanding = %summary.total_outstanding,
            "built outstanding report"
        );

        Self {
            as_of,
            rows,
            summary,
        }
    }

    /// Rows still carrying a balance.
    pub fn open_rows(&self) -> impl Iterator<Item = &OutstandingRow> {
        self.rows.iter().filter(|r| !r.record.status.is_settled())
    }

    /// Rows on one page of the report table.
    pub fn page(&self, page: &Page) -> &[OutstandingRow] {
        page.slice(&self.rows)
    }
}
