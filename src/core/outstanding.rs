use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::Payment;

/// Invoice value netted against payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outstanding {
    pub total_paid: Decimal,
    /// invoice_value − total_paid; negative when overpaid.
    pub outstanding: Decimal,
}

/// Net an invoice value against the payments received so far.
///
/// ```
/// use hisaab::core::*;
/// use rust_decimal_macros::dec;
///
/// let paid = outstanding(dec!(1000), &[Payment::new(dec!(400)), Payment::new(dec!(600))]);
/// assert_eq!(paid.outstanding, dec!(0));
///
/// let partial = outstanding(dec!(1000), &[Payment::new(dec!(300))]);
/// assert_eq!(partial.outstanding, dec!(700));
/// ```
pub fn outstanding(invoice_value: Decimal, payments: &[Payment]) -> Outstanding {
    let total_paid = payments
        .iter()
        .fold(Decimal::ZERO, |sum, p| sum.saturating_add(p.amount));
    Outstanding {
        total_paid,
        outstanding: invoice_value.saturating_sub(total_paid),
    }
}

/// Settlement state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Nothing left to collect (outstanding ≤ 0).
    Paid,
    /// Some payment received, balance remaining.
    PartiallyPaid,
    /// No payment received.
    Unpaid,
}

impl PaymentStatus {
    pub fn from_amounts(total_paid: Decimal, outstanding: Decimal) -> Self {
        if outstanding <= Decimal::ZERO {
            Self::Paid
        } else if total_paid > Decimal::ZERO {
            Self::PartiallyPaid
        } else {
            Self::Unpaid
        }
    }

    /// Label shown in the outstanding report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::PartiallyPaid => "Partially Paid",
            Self::Unpaid => "Outstanding",
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Paid)
    }
}

/// Age of an unpaid balance past its due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgingBucket {
    NotDue,
    Days1To30,
    Days31To60,
    Days61To90,
    Over90,
}

impl AgingBucket {
    pub const ALL: [AgingBucket; 5] = [
        Self::NotDue,
        Self::Days1To30,
        Self::Days31To60,
        Self::Days61To90,
        Self::Over90,
    ];

    /// Bucket for a number of days past due (≤ 0 is not yet due).
    pub fn from_due_days(due_days: i64) -> Self {
        match due_days {
            i64::MIN..=0 => Self::NotDue,
            1..=30 => Self::Days1To30,
            31..=60 => Self::Days31To60,
            61..=90 => Self::Days61To90,
            _ => Self::Over90,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NotDue => "Not due",
            Self::Days1To30 => "1-30 days",
            Self::Days31To60 => "31-60 days",
            Self::Days61To90 => "61-90 days",
            Self::Over90 => "90+ days",
        }
    }
}

/// One row of an outstanding report. Computed per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutstandingRecord {
    pub invoice_value: Decimal,
    pub total_paid: Decimal,
    pub outstanding: Decimal,
    /// Days past the due date as of the report date; negative = not yet due.
    pub due_days: i64,
    pub status: PaymentStatus,
    pub bucket: AgingBucket,
}

impl OutstandingRecord {
    /// Compute the record of one invoice as of `as_of`.
    ///
    /// Settled invoices always land in [`AgingBucket::NotDue`].
    pub fn compute(
        invoice_value: Decimal,
        payments: &[Payment],
        due_date: NaiveDate,
        as_of: NaiveDate,
    ) -> Self {
        let Outstanding {
            total_paid,
            outstanding,
        } = outstanding(invoice_value, payments);
        let due_days = as_of.signed_duration_since(due_date).num_days();
        let status = PaymentStatus::from_amounts(total_paid, outstanding);
        let bucket = if status.is_settled() {
            AgingBucket::NotDue
        } else {
            AgingBucket::from_due_days(due_days)
        };

        Self {
            invoice_value,
            total_paid,
            outstanding,
            due_days,
            status,
            bucket,
        }
    }

    pub fn is_overdue(&self) -> bool {
        !self.status.is_settled() && self.due_days > 0
    }
}
