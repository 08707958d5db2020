//! Numbering scope: which already-issued documents a new number continues from.
//!
//! Document numbers restart every Indian financial year (1 April – 31 March)
//! and are kept per company. The API usually filters server-side; these
//! helpers do the same filtering for callers holding an unfiltered list.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::numbering;
use super::settings::NumberingScheme;

/// Indian financial year, identified by the calendar year it starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FinancialYear {
    start_year: i32,
}

impl FinancialYear {
    pub fn new(start_year: i32) -> Self {
        Self { start_year }
    }

    /// The financial year a date falls in. January–March belong to the year
    /// that started the previous April.
    pub fn containing(date: NaiveDate) -> Self {
        let start_year = if date.month() >= 4 {
            date.year()
        } else {
            date.year() - 1
        };
        Self { start_year }
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// 1 April of the start year.
    pub fn start(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.start_year, 4, 1)
    }

    /// 31 March of the following year.
    pub fn end(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.start_year + 1, 3, 31)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::containing(date) == *self
    }

    /// Short label as printed on documents, e.g. "2024-25".
    pub fn label(&self) -> String {
        format!(
            "{}-{:02}",
            self.start_year,
            (self.start_year + 1).rem_euclid(100)
        )
    }
}

/// Minimal view of an issued document, as returned by a list fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub number: String,
    pub company_id: String,
    pub issue_date: NaiveDate,
}

/// Company plus optional financial year a sequence runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceScope {
    pub company_id: String,
    /// `None` numbers continuously across years.
    pub financial_year: Option<FinancialYear>,
}

impl SequenceScope {
    /// Scope for one company, numbering continuously.
    pub fn company(company_id: impl Into<String>) -> Self {
        Self {
            company_id: company_id.into(),
            financial_year: None,
        }
    }

    /// Scope for one company within the financial year containing `date`.
    pub fn company_year(company_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            company_id: company_id.into(),
            financial_year: Some(FinancialYear::containing(date)),
        }
    }

    pub fn matches(&self, doc: &DocumentRef) -> bool {
        doc.company_id == self.company_id
            && self
                .financial_year
                .is_none_or(|fy| fy.contains(doc.issue_date))
    }

    /// Numbers of the documents inside this scope.
    pub fn filter<'a>(&self, docs: &'a [DocumentRef]) -> Vec<&'a str> {
        docs.iter()
            .filter(|d| self.matches(d))
            .map(|d| d.number.as_str())
            .collect()
    }

    /// Next number for this scope under the given scheme.
    pub fn next_number(&self, docs: &[DocumentRef], scheme: &NumberingScheme) -> String {
        let numbers = self.filter(docs);
        numbering::next_number(&numbers, &scheme.prefix, scheme.pad_width)
    }
}
