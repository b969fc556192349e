//! PID parameter capture.
//!
//! Each order has four numeric text fields (set point, P, I, D). Applying them
//! reads every field leniently: the longest numeric prefix is used and a field
//! without one yields NaN. Only the set point is displayed afterwards; P, I
//! and D are recorded and logged but drive nothing.

use std::sync::LazyLock;

use regex::Regex;

use crate::state::DEFAULT_SET_POINT;

/// Longest leading decimal literal (after leading whitespace)
static NUMERIC_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("Invalid regex pattern")
});

/// Parse the longest numeric prefix of `text`, or NaN when there is none.
///
/// `"12.5abc"` gives 12.5, `"  -3e2"` gives -300, `"abc"` gives NaN.
pub fn parse_lenient(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let Some(m) = NUMERIC_PREFIX_REGEX.find(trimmed) else {
        return f64::NAN;
    };
    let literal = m.as_str();
    let (negative, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };
    let magnitude = if unsigned == "Infinity" {
        f64::INFINITY
    } else {
        unsigned.parse::<f64>().unwrap_or(f64::NAN)
    };
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Format a value for the readout cards (one decimal, `NaN` kept as text)
pub fn format_readout(value: f64) -> String {
    format!("{:.1}", value)
}

/// Raw text of an order's parameter fields
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PidInputs {
    pub set_point: String,
    pub p: String,
    pub i: String,
    pub d: String,
}

impl Default for PidInputs {
    fn default() -> Self {
        Self {
            set_point: format!("{}", DEFAULT_SET_POINT),
            p: "1".to_string(),
            i: "0".to_string(),
            d: "0".to_string(),
        }
    }
}

impl PidInputs {
    /// Read all four fields
    pub fn capture(&self) -> PidParams {
        PidParams {
            set_point: parse_lenient(&self.set_point),
            p: parse_lenient(&self.p),
            i: parse_lenient(&self.i),
            d: parse_lenient(&self.d),
        }
    }
}

/// Parameters captured on apply
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PidParams {
    pub set_point: f64,
    pub p: f64,
    pub i: f64,
    pub d: f64,
}
