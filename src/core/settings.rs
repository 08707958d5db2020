//! Computation settings a deployment can tune.
//!
//! Every field has a default, so an empty settings document is valid. With the
//! `json` feature, settings load from the same JSON the admin API serves.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::HisaabError;
use super::types::DocumentKind;

/// Prefix and zero-padding of one document number sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberingScheme {
    pub prefix: String,
    #[serde(default = "default_pad_width")]
    pub pad_width: usize,
}

fn default_pad_width() -> usize {
    4
}

impl NumberingScheme {
    pub fn new(prefix: impl Into<String>, pad_width: usize) -> Self {
        Self {
            prefix: prefix.into(),
            pad_width,
        }
    }

    /// Conventional scheme for a document kind ("INV", width 4, …).
    pub fn default_for(kind: DocumentKind) -> Self {
        Self::new(kind.default_prefix(), default_pad_width())
    }

    /// Next number after the given existing ones.
    pub fn next_number<S: AsRef<str>>(&self, existing: &[S]) -> String {
        super::numbering::next_number(existing, &self.prefix, self.pad_width)
    }
}

/// How a line discount affects the line total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountPolicy {
    /// Discount is reported but not subtracted from any amount.
    #[default]
    Informational,
    /// Discount is subtracted from the line price before taxes are applied.
    ReducesTaxable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number schemes per document kind; kinds not listed use their defaults.
    pub numbering: BTreeMap<DocumentKind, NumberingScheme>,
    pub discount_policy: DiscountPolicy,
    /// Levy GST on other charges (sales invoices).
    pub apply_other_charges_gst: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            numbering: DocumentKind::ALL
                .iter()
                .map(|k| (*k, NumberingScheme::default_for(*k)))
                .collect(),
            discount_policy: DiscountPolicy::default(),
            apply_other_charges_gst: false,
        }
    }
}

impl Settings {
    /// Numbering scheme for a kind, falling back to the conventional one.
    pub fn scheme(&self, kind: DocumentKind) -> NumberingScheme {
        self.numbering
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| NumberingScheme::default_for(kind))
    }

    /// Reject settings that would produce ambiguous numbers.
    pub fn check(&self) -> Result<(), HisaabError> {
        for (kind, scheme) in &self.numbering {
            if scheme.prefix.chars().last().is_some_and(|c| c.is_ascii_digit()) {
                return Err(HisaabError::Settings(format!(
                    "{} prefix {:?} must not end in a digit",
                    kind.label(),
                    scheme.prefix
                )));
            }
            if scheme.pad_width > 18 {
                return Err(HisaabError::Settings(format!(
                    "{} pad width {} exceeds 18",
                    kind.label(),
                    scheme.pad_width
                )));
            }
        }
        Ok(())
    }

    /// Parse settings from JSON and check them.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, HisaabError> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|e| HisaabError::Settings(e.to_string()))?;
        settings.check()?;
        debug!(
            schemes = settings.numbering.len(),
            discount_policy = ?settings.discount_policy,
            "loaded settings"
        );
        Ok(settings)
    }

    /// Override the scheme of one document kind.
    pub fn with_scheme(mut self, kind: DocumentKind, scheme: NumberingScheme) -> Self {
        debug!(kind = kind.label(), prefix = %scheme.prefix, "overriding numbering scheme");
        self.numbering.insert(kind, scheme);
        self
    }
}
