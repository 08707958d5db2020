use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of transaction document; each kind carries its own number sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Sales invoice.
    Invoice,
    /// Quotation / proforma sent before an order.
    Quotation,
    /// Dispatch note (delivery challan).
    Dispatch,
    /// Purchase order raised on a supplier.
    PurchaseOrder,
    /// Credit note against an earlier invoice.
    CreditNote,
}

impl DocumentKind {
    /// All kinds, in declaration order.
    pub const ALL: [DocumentKind; 5] = [
        Self::Invoice,
        Self::Quotation,
        Self::Dispatch,
        Self::PurchaseOrder,
        Self::CreditNote,
    ];

    /// Conventional number prefix for this kind.
    pub fn default_prefix(&self) -> &'static str {
        match self {
            Self::Invoice => "INV",
            Self::Quotation => "QUO",
            Self::Dispatch => "DTS",
            Self::PurchaseOrder => "PO",
            Self::CreditNote => "CN",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Invoice => "Invoice",
            Self::Quotation => "Quotation",
            Self::Dispatch => "Dispatch",
            Self::PurchaseOrder => "Purchase Order",
            Self::CreditNote => "Credit Note",
        }
    }
}

/// GST component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxKind {
    /// Central GST (intra-state, collected by the centre).
    Cgst,
    /// State GST (intra-state, collected by the state).
    Sgst,
    /// Integrated GST (inter-state).
    Igst,
}

impl TaxKind {
    pub const ALL: [TaxKind; 3] = [Self::Cgst, Self::Sgst, Self::Igst];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cgst => "CGST",
            Self::Sgst => "SGST",
            Self::Igst => "IGST",
        }
    }
}

/// A single document line as entered on a transaction form.
///
/// Tax rates are percentages. All three rates apply at the same time; nothing
/// here makes CGST/SGST and IGST mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name, for display only.
    #[serde(default)]
    pub product: Option<String>,
    /// HSN/SAC classification code, for display only.
    #[serde(default)]
    pub hsn_code: Option<String>,
    /// Unit of measure (e.g. "Nos", "Kg"), for display only.
    #[serde(default)]
    pub unit: Option<String>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    #[serde(default)]
    pub cgst_rate: Decimal,
    #[serde(default)]
    pub sgst_rate: Decimal,
    #[serde(default)]
    pub igst_rate: Decimal,
    /// Discount amount. Reported alongside the line, see [`DiscountPolicy`](super::DiscountPolicy).
    #[serde(default)]
    pub discount: Option<Decimal>,
}

impl LineItem {
    /// Rate of the given tax component.
    pub fn rate(&self, kind: TaxKind) -> Decimal {
        match kind {
            TaxKind::Cgst => self.cgst_rate,
            TaxKind::Sgst => self.sgst_rate,
            TaxKind::Igst => self.igst_rate,
        }
    }
}

/// Computed amounts of one line. Full precision, no rounding applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAmounts {
    /// quantity × unit price.
    pub total_price: Decimal,
    pub cgst_value: Decimal,
    pub sgst_value: Decimal,
    pub igst_value: Decimal,
    /// Discount carried through for reporting.
    pub discount: Decimal,
    /// total_price + all three tax values.
    pub total: Decimal,
}

impl LineAmounts {
    /// Sum of all tax components.
    pub fn tax_total(&self) -> Decimal {
        self.cgst_value
            .saturating_add(self.sgst_value)
            .saturating_add(self.igst_value)
    }
}

/// Tax rate shared by every line of a document, per tax component.
///
/// `None` means the lines disagree (or the shared rate is zero) and the
/// printed report leaves the rate column blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonRates {
    pub cgst: Option<Decimal>,
    pub sgst: Option<Decimal>,
    pub igst: Option<Decimal>,
}

impl CommonRates {
    pub fn get(&self, kind: TaxKind) -> Option<Decimal> {
        match kind {
            TaxKind::Cgst => self.cgst,
            TaxKind::Sgst => self.sgst,
            TaxKind::Igst => self.igst,
        }
    }
}

/// Document-level totals. Always recomputed from the lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTotals {
    /// Sum of line quantities.
    pub quantity: Decimal,
    /// Sum of line total prices (pre-tax).
    pub subtotal: Decimal,
    pub cgst_value: Decimal,
    pub sgst_value: Decimal,
    pub igst_value: Decimal,
    /// Pre-tax value the taxes were computed on.
    pub taxable_value: Decimal,
    /// Sum of line discounts (informational unless the policy says otherwise).
    pub discount: Decimal,
    pub other_charges: Decimal,
    /// GST levied on other charges (sales invoices only, otherwise zero).
    pub other_charges_gst: Decimal,
    /// Σ line totals + other charges + their GST.
    pub grand_total: Decimal,
    pub common_rates: CommonRates,
}

impl DocumentTotals {
    /// Sum of the three line-level tax totals.
    pub fn tax_total(&self) -> Decimal {
        self.cgst_value
            .saturating_add(self.sgst_value)
            .saturating_add(self.igst_value)
    }

    /// Tax total for one component.
    pub fn tax(&self, kind: TaxKind) -> Decimal {
        match kind {
            TaxKind::Cgst => self.cgst_value,
            TaxKind::Sgst => self.sgst_value,
            TaxKind::Igst => self.igst_value,
        }
    }
}

/// A payment received against a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub amount: Decimal,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Cheque / UTR / receipt number.
    #[serde(default)]
    pub reference: Option<String>,
}

impl Payment {
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            date: None,
            reference: None,
        }
    }
}

/// A transaction document as returned by the API, with its lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub number: String,
    pub kind: DocumentKind,
    pub company_id: String,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Customer or supplier name.
    #[serde(default)]
    pub party: Option<String>,
    pub lines: Vec<LineItem>,
    #[serde(default)]
    pub other_charges: Decimal,
    /// GST percentage on other charges; zero outside sales invoices.
    #[serde(default)]
    pub other_charges_gst_percent: Decimal,
}
