use alloc::format;
use alloc::string::String;

/// A CSS length input: a bare number to be suffixed with a unit, or an
/// already-formatted string passed through untouched.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CssValue {
    Number(f64),
    Raw(String),
}

impl From<f64> for CssValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for CssValue {
    fn from(value: i32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u32> for CssValue {
    fn from(value: u32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        Self::Raw(String::from(value))
    }
}

impl From<String> for CssValue {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

/// Formats a CSS length: numbers get `unit` appended (`16` → `"16px"`),
/// raw strings pass through (`"2rem"` → `"2rem"`).
pub fn to_unit(value: impl Into<CssValue>, unit: &str) -> String {
    match value.into() {
        CssValue::Number(number) => format!("{number}{unit}"),
        CssValue::Raw(raw) => raw,
    }
}

/// `value` as a percentage of `max`, clamped to `0..=100` and rounded to two
/// decimals. The degenerate `0 / 0` reads as 0.
pub fn percentage(value: f64, max: f64) -> f64 {
    let clamped = ((value / max) * 100.0).clamp(0.0, 100.0);
    if clamped.is_nan() {
        return 0.0;
    }
    // round half-up to two decimals; no_std has no f64::round
    ((clamped * 100.0) + 0.5) as u64 as f64 / 100.0
}
