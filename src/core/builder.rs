use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::{HisaabError, ValidationError, into_result};
use super::types::*;
use super::validation;

/// Builder for constructing documents.
///
/// ```
/// use hisaab::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let doc = DocumentBuilder::new(
///     DocumentKind::Invoice,
///     "INV0001",
///     "company-1",
///     NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
/// )
/// .party("Sharma Traders")
/// .add_line(LineItemBuilder::new(dec!(2), dec!(100)).intra_state(dec!(18)).build())
/// .build()
/// .unwrap();
///
/// assert_eq!(doc.totals().grand_total, dec!(236));
/// ```
pub struct DocumentBuilder {
    kind: DocumentKind,
    number: String,
    company_id: String,
    issue_date: NaiveDate,
    due_date: Option<NaiveDate>,
    party: Option<String>,
    lines: Vec<LineItem>,
    other_charges: Decimal,
    other_charges_gst_percent: Decimal,
}

impl DocumentBuilder {
    pub fn new(
        kind: DocumentKind,
        number: impl Into<String>,
        company_id: impl Into<String>,
        issue_date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            number: number.into(),
            company_id: company_id.into(),
            issue_date,
            due_date: None,
            party: None,
            lines: Vec::new(),
            other_charges: Decimal::ZERO,
            other_charges_gst_percent: Decimal::ZERO,
        }
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn party(mut self, name: impl Into<String>) -> Self {
        self.party = Some(name.into());
        self
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.lines.push(line);
        self
    }

    /// Other charges (freight, packing …) without GST.
    pub fn other_charges(mut self, amount: Decimal) -> Self {
        self.other_charges = amount;
        self
    }

    /// Other charges with a GST percentage levied on them.
    pub fn other_charges_with_gst(mut self, amount: Decimal, gst_percent: Decimal) -> Self {
        self.other_charges = amount;
        self.other_charges_gst_percent = gst_percent;
        self
    }

    /// Build the document, running line validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Document, HisaabError> {
        if self.number.trim().is_empty() {
            return Err(HisaabError::Builder("document number is required".into()));
        }
        if self.company_id.trim().is_empty() {
            return Err(HisaabError::Builder("company id is required".into()));
        }
        if self.lines.is_empty() {
            return Err(HisaabError::Builder(
                "at least one line item is required".into(),
            ));
        }

        // Input limits to prevent abuse
        if self.lines.len() > 10_000 {
            return Err(HisaabError::Builder(
                "document cannot have more than 10,000 line items".into(),
            ));
        }
        if self.number.len() > 200 {
            return Err(HisaabError::Builder(
                "document number cannot exceed 200 characters".into(),
            ));
        }

        let mut errors = validation::validate_lines(&self.lines);
        if self.other_charges < Decimal::ZERO {
            errors.push(ValidationError::new(
                "other_charges",
                "must not be negative",
            ));
        }
        if self.other_charges_gst_percent < Decimal::ZERO {
            errors.push(ValidationError::new(
                "other_charges_gst_percent",
                "must not be negative",
            ));
        }
        into_result(errors)?;

        Ok(self.assemble())
    }

    /// Build without validation, for data that was already checked upstream.
    pub fn build_unchecked(self) -> Document {
        self.assemble()
    }

    fn assemble(self) -> Document {
        Document {
            number: self.number,
            kind: self.kind,
            company_id: self.company_id,
            issue_date: self.issue_date,
            due_date: self.due_date,
            party: self.party,
            lines: self.lines,
            other_charges: self.other_charges,
            other_charges_gst_percent: self.other_charges_gst_percent,
        }
    }
}

/// Builder for LineItem. Tax rates default to zero.
pub struct LineItemBuilder {
    quantity: Decimal,
    unit_price: Decimal,
    cgst_rate: Decimal,
    sgst_rate: Decimal,
    igst_rate: Decimal,
    discount: Option<Decimal>,
    product: Option<String>,
    hsn_code: Option<String>,
    unit: Option<String>,
}

impl LineItemBuilder {
    pub fn new(quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            quantity,
            unit_price,
            cgst_rate: Decimal::ZERO,
            sgst_rate: Decimal::ZERO,
            igst_rate: Decimal::ZERO,
            discount: None,
            product: None,
            hsn_code: None,
            unit: None,
        }
    }

    pub fn cgst(mut self, rate: Decimal) -> Self {
        self.cgst_rate = rate;
        self
    }

    pub fn sgst(mut self, rate: Decimal) -> Self {
        self.sgst_rate = rate;
        self
    }

    pub fn igst(mut self, rate: Decimal) -> Self {
        self.igst_rate = rate;
        self
    }

    /// Intra-state supply: split a GST slab evenly into CGST and SGST
    /// (18% becomes 9% + 9%).
    pub fn intra_state(mut self, gst_rate: Decimal) -> Self {
        let half = gst_rate / Decimal::TWO;
        self.cgst_rate = half;
        self.sgst_rate = half;
        self
    }

    /// Inter-state supply: the whole slab is IGST.
    pub fn inter_state(self, gst_rate: Decimal) -> Self {
        self.igst(gst_rate)
    }

    pub fn discount(mut self, amount: Decimal) -> Self {
        self.discount = Some(amount);
        self
    }

    pub fn product(mut self, name: impl Into<String>) -> Self {
        self.product = Some(name.into());
        self
    }

    pub fn hsn_code(mut self, code: impl Into<String>) -> Self {
        self.hsn_code = Some(code.into());
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            product: self.product,
            hsn_code: self.hsn_code,
            unit: self.unit,
            quantity: self.quantity,
            unit_price: self.unit_price,
            cgst_rate: self.cgst_rate,
            sgst_rate: self.sgst_rate,
            igst_rate: self.igst_rate,
            discount: self.discount,
        }
    }
}
