use crate::foundation::value::parse_float;

/// Duration used when the requested one is absent, unparsable or not positive.
pub const DEFAULT_DURATION_MS: f64 = 400.0;

/// Raw duration as supplied by callers or JSON options.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum DurationSpec {
    /// Milliseconds.
    Millis(f64),
    /// Text such as `"2s"`, `"0.5s"`, `"150"` or `"150ms"`.
    Text(String),
}

impl From<f64> for DurationSpec {
    fn from(ms: f64) -> Self {
        Self::Millis(ms)
    }
}

impl From<u32> for DurationSpec {
    fn from(ms: u32) -> Self {
        Self::Millis(f64::from(ms))
    }
}

impl From<&str> for DurationSpec {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for DurationSpec {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Normalize a duration to milliseconds.
///
/// Text ending in a digit followed by `s` is read as seconds; any other text
/// is read as milliseconds from its numeric prefix.
pub fn to_ms(spec: Option<&DurationSpec>) -> f64 {
    let ms = match spec {
        Some(DurationSpec::Millis(ms)) => Some(*ms),
        Some(DurationSpec::Text(text)) => {
            let text = text.trim();
            let secs = is_seconds(text);
            parse_float(text).map(|v| if secs { v * 1000.0 } else { v })
        }
        None => None,
    };
    match ms {
        Some(ms) if ms.is_finite() && ms > 0.0 => ms,
        _ => DEFAULT_DURATION_MS,
    }
}

fn is_seconds(text: &str) -> bool {
    let mut rev = text.bytes().rev();
    rev.next() == Some(b's') && rev.next().is_some_and(|b| b.is_ascii_digit())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/duration.rs"]
mod tests;
