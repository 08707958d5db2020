use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use super::error::HisaabError;

/// Derive the next document number from the numbers already issued in a scope.
///
/// Each existing number has `prefix` stripped and the remainder parsed as an
/// unsigned integer (see [`parse_suffix`]). The result is the prefix followed
/// by `max + 1`, zero-padded to `pad_width`. An empty scope starts at 1.
///
/// Malformed numbers count as 0 rather than failing, so they can never push
/// the sequence backwards or raise an error. The caller is expected to pass a
/// list already filtered to one company/period.
///
/// ```
/// use hisaab::core::next_number;
///
/// assert_eq!(next_number(&["DTS0001", "DTS0003", "DTS0002"], "DTS", 4), "DTS0004");
/// assert_eq!(next_number::<&str>(&[], "DTS", 4), "DTS0001");
/// assert_eq!(next_number(&["DTSxyz"], "DTS", 4), "DTS0001");
/// ```
pub fn next_number<S: AsRef<str>>(existing: &[S], prefix: &str, pad_width: usize) -> String {
    format_number(prefix, latest(existing, prefix).successor(), pad_width)
}

fn latest<S: AsRef<str>>(existing: &[S], prefix: &str) -> SequenceValue {
    existing
        .iter()
        .map(|n| parse_suffix(n.as_ref(), prefix))
        .max()
        .unwrap_or_default()
}

/// Numeric part of a document number, or 0 when there is none.
///
/// The prefix is removed when present, surrounding whitespace is ignored and
/// the leading run of ASCII digits is parsed (`"INV0012-A"` gives 12). No
/// leading digit yields 0. Runs of any length are kept exactly.
pub fn parse_suffix(number: &str, prefix: &str) -> SequenceValue {
    let trimmed = number.trim();
    let rest = trimmed.strip_prefix(prefix).unwrap_or(trimmed);
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    match SequenceValue::from_digits(&rest[..digits_end]) {
        Some(value) => value,
        None => {
            debug!(number, prefix, "document number has no numeric suffix, counting as 0");
            SequenceValue::default()
        }
    }
}

/// `prefix` followed by `value` zero-padded to `pad_width`. Wider values are
/// never truncated.
pub fn format_number(prefix: &str, value: impl fmt::Display, pad_width: usize) -> String {
    format!("{prefix}{value:0>pad_width$}")
}

/// The numeric part of a document number.
///
/// Stored as decimal digits without leading zeros, so suffixes wider than any
/// integer type still order and increment exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceValue(String);

impl SequenceValue {
    /// Value of a non-empty run of ASCII digits; leading zeros are dropped.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            Some(Self::default())
        } else {
            Some(Self(significant.to_string()))
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// `self + 1`, carrying into a new leading digit when needed.
    pub fn successor(&self) -> Self {
        let mut digits = self.0.as_bytes().to_vec();
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
        Self(digits.into_iter().map(char::from).collect())
    }

    /// The value as an integer, if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        self.0.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SequenceValue {
    fn default() -> Self {
        Self("0".to_string())
    }
}

impl From<u64> for SequenceValue {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<u64> for SequenceValue {
    fn eq(&self, other: &u64) -> bool {
        self.0 == other.to_string()
    }
}

impl Ord for SequenceValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for SequenceValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SequenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Number sequence for issuing several documents in one batch.
///
/// Generates numbers in the format `{prefix}{sequential}`, e.g. "INV0001",
/// "INV0002". Seed it from the numbers already issued in the scope with
/// [`from_existing`](Self::from_existing).
#[derive(Debug, Clone)]
pub struct DocumentNumberSequence {
    prefix: String,
    next_number: SequenceValue,
    pad_width: usize,
}

impl DocumentNumberSequence {
    /// Create a new sequence starting at 1.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next_number: SequenceValue::from(1_u64),
            pad_width: 4,
        }
    }

    /// Create a sequence continuing from a given number. Sequences start at 1,
    /// so 0 is rejected.
    pub fn starting_at(prefix: impl Into<String>, next_number: u64) -> Result<Self, HisaabError> {
        if next_number == 0 {
            return Err(HisaabError::Numbering(
                "sequence must start at 1 or later".into(),
            ));
        }
        Ok(Self {
            prefix: prefix.into(),
            next_number: SequenceValue::from(next_number),
            pad_width: 4,
        })
    }

    /// Continue after the highest number already issued.
    pub fn from_existing<S: AsRef<str>>(existing: &[S], prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let next_number = latest(existing, &prefix).successor();
        Self {
            prefix,
            next_number,
            pad_width: 4,
        }
    }

    /// Set zero-padding width (default: 4, so "0001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.pad_width = width;
        self
    }

    /// Issue the next number.
    pub fn next_number(&mut self) -> String {
        let issued = format_number(&self.prefix, &self.next_number, self.pad_width);
        self.next_number = self.next_number.successor();
        issued
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        format_number(&self.prefix, &self.next_number, self.pad_width)
    }

    /// The next number that will be issued (without prefix/formatting).
    pub fn next_raw(&self) -> &SequenceValue {
        &self.next_number
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
