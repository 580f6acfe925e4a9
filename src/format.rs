//! Value and label formatters.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::types::DomainValue;

/// Default pattern for temporal column labels.
pub const DEFAULT_TIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Formatter applied to cell values and axis labels.
///
/// Every variant except `Custom` round-trips through serde as
/// `{"kind": "fixed", "decimals": 2}` and friends; a custom closure
/// serializes as the default formatter.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(from = "FormatterRepr", into = "FormatterRepr")]
pub enum Formatter {
    /// Plain display: numbers without trailing zeros, text as-is.
    #[default]
    Default,
    /// Numbers with a fixed number of decimals.
    Fixed(usize),
    /// Epoch milliseconds rendered with a `chrono` strftime pattern.
    Timestamp(String),
    /// Caller-supplied closure.
    Custom(Arc<dyn Fn(&DomainValue) -> String + Send + Sync>),
}

impl Formatter {
    pub fn timestamp() -> Self {
        Self::Timestamp(DEFAULT_TIME_PATTERN.to_string())
    }

    pub fn custom(f: impl Fn(&DomainValue) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Format a domain value; `offset` applies to timestamps only.
    pub fn format(&self, value: &DomainValue, offset: FixedOffset) -> String {
        match self {
            Self::Default => value.to_string(),
            Self::Fixed(decimals) => match value.as_number() {
                Some(n) => format!("{n:.decimals$}"),
                None => value.to_string(),
            },
            Self::Timestamp(pattern) => value
                .as_number()
                .and_then(|ms| format_timestamp(ms, pattern, offset))
                .unwrap_or_else(|| value.to_string()),
            Self::Custom(f) => f(value),
        }
    }

    /// Format a numeric cell value.
    pub fn format_number(&self, value: f64, offset: FixedOffset) -> String {
        self.format(&DomainValue::from(value), offset)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn format_timestamp(ms: f64, pattern: &str, offset: FixedOffset) -> Option<String> {
    if !ms.is_finite() {
        return None;
    }
    let utc = DateTime::<Utc>::from_timestamp_millis(ms.round() as i64)?;
    Some(utc.with_timezone(&offset).format(pattern).to_string())
}

/// Fixed offset for a signed number of minutes east of UTC; out-of-range
/// offsets fall back to UTC.
pub fn offset_from_minutes(minutes: i32) -> FixedOffset {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix())
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "Formatter::Default"),
            Self::Fixed(d) => write!(f, "Formatter::Fixed({d})"),
            Self::Timestamp(p) => write!(f, "Formatter::Timestamp({p:?})"),
            Self::Custom(_) => write!(f, "Formatter::Custom(..)"),
        }
    }
}

impl PartialEq for Formatter {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Default, Self::Default) => true,
            (Self::Fixed(a), Self::Fixed(b)) => a == b,
            (Self::Timestamp(a), Self::Timestamp(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum FormatterRepr {
    Default,
    Fixed { decimals: usize },
    Timestamp { pattern: String },
}

impl From<FormatterRepr> for Formatter {
    fn from(repr: FormatterRepr) -> Self {
        match repr {
            FormatterRepr::Default => Self::Default,
            FormatterRepr::Fixed { decimals } => Self::Fixed(decimals),
            FormatterRepr::Timestamp { pattern } => Self::Timestamp(pattern),
        }
    }
}

impl From<Formatter> for FormatterRepr {
    fn from(formatter: Formatter) -> Self {
        match formatter {
            Formatter::Default | Formatter::Custom(_) => Self::Default,
            Formatter::Fixed(decimals) => Self::Fixed { decimals },
            Formatter::Timestamp(pattern) => Self::Timestamp { pattern },
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn utc() -> FixedOffset {
        offset_from_minutes(0)
    }

    #[test_case(Formatter::Default, 1.0 => "1".to_string(); "default drops trailing zeros")]
    #[test_case(Formatter::Default, 2.5 => "2.5".to_string(); "default keeps fraction")]
    #[test_case(Formatter::Fixed(2), 2.5 => "2.50".to_string(); "fixed pads decimals")]
    #[test_case(Formatter::Fixed(0), 2.4 => "2".to_string(); "fixed rounds")]
    fn formats_numbers(formatter: Formatter, value: f64) -> String {
        formatter.format_number(value, utc())
    }

    #[test]
    fn timestamp_respects_offset() {
        let formatter = Formatter::Timestamp("%H:%M".to_string());
        let noon = DomainValue::from(43_200_000.0);
        assert_eq!(formatter.format(&noon, utc()), "12:00");
        assert_eq!(formatter.format(&noon, offset_from_minutes(90)), "13:30");
    }

    #[test]
    fn timestamp_falls_back_for_text() {
        let formatter = Formatter::timestamp();
        assert_eq!(formatter.format(&"n/a".into(), utc()), "n/a");
    }

    #[test]
    fn custom_closure_is_called() {
        let formatter = Formatter::custom(|v| format!("<{v}>"));
        assert_eq!(formatter.format(&"a".into(), utc()), "<a>");
    }

    #[test]
    fn serde_uses_kind_tag() {
        let f: Formatter = serde_json::from_str(r#"{"kind":"fixed","decimals":3}"#).unwrap();
        assert_eq!(f, Formatter::Fixed(3));
        let json = serde_json::to_string(&Formatter::custom(|_| String::new())).unwrap();
        assert_eq!(json, r#"{"kind":"default"}"#);
    }

    #[test]
    fn out_of_range_offset_falls_back_to_utc() {
        assert_eq!(offset_from_minutes(i32::MAX), utc());
        assert_eq!(offset_from_minutes(60 * 30), utc());
    }
}
