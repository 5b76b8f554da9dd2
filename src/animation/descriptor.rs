use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::{
    animation::duration::{DurationSpec, to_ms},
    animation::ease::{EaseFn, EasingRegistry},
    foundation::error::{AnimError, AnimResult},
    foundation::value::{StyleMap, StyleValue},
};

/// Caller-facing options for one queued animation.
///
/// JSON shape: `{"from": {..}, "to": {..}, "duration": 400 | "1s", "tween": "Quad.easeIn"}`,
/// every key optional.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimOptions {
    /// Explicit start values; missing keys are read from the element when the animation begins.
    pub from: StyleMap,
    /// Target values.
    pub to: StyleMap,
    /// Requested duration, normalized with [`to_ms`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationSpec>,
    /// Dotted easing identifier; non-string JSON values are treated as absent.
    #[serde(
        rename = "tween",
        alias = "easing",
        deserialize_with = "easing_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub easing: Option<String>,
}

fn easing_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned))
}

impl AnimOptions {
    /// Empty options: no targets, default duration, no easing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON text.
    pub fn from_json_str(s: &str) -> AnimResult<Self> {
        serde_json::from_str(s).map_err(|e| AnimError::serde(e.to_string()))
    }

    /// Read and parse options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> AnimResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read animation options from '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Set an explicit start value.
    pub fn with_from(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.from.insert(property.into(), value.into());
        self
    }

    /// Set a target value.
    pub fn with_to(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.to.insert(property.into(), value.into());
        self
    }

    /// Set the duration (`"1s"`, `"250"`, `250.0`).
    pub fn with_duration(mut self, duration: impl Into<DurationSpec>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Set the easing identifier.
    pub fn with_easing(mut self, id: impl Into<String>) -> Self {
        self.easing = Some(id.into());
        self
    }
}

/// One normalized entry of an animator's queue.
#[derive(Clone, Debug)]
pub struct AnimationDescriptor {
    /// Start values, filled lazily from the element for keys present only in `to`.
    pub from: StyleMap,
    /// Target values, written verbatim on completion.
    pub to: StyleMap,
    /// Duration in milliseconds.
    pub duration_ms: f64,
    /// Identifier the easing was resolved from.
    pub easing_id: Option<String>,
    /// Resolved easing; `None` makes the descriptor unrunnable.
    pub ease: Option<EaseFn>,
}

impl AnimationDescriptor {
    /// Normalize options against `registry`.
    pub fn from_options(options: AnimOptions, registry: &EasingRegistry) -> Self {
        let ease = options.easing.as_deref().and_then(|id| registry.resolve(id));
        Self {
            from: options.from,
            to: options.to,
            duration_ms: to_ms(options.duration.as_ref()),
            easing_id: options.easing,
            ease,
        }
    }

    /// Apply a field update; easing updates re-resolve against `registry`.
    pub fn apply(&mut self, patch: DescriptorPatch, registry: &EasingRegistry) {
        match patch {
            DescriptorPatch::From(from) => self.from = from,
            DescriptorPatch::To(to) => self.to = to,
            DescriptorPatch::DurationMs(ms) => self.duration_ms = ms,
            DescriptorPatch::Tween(id) => {
                self.ease = registry.resolve(&id);
                self.easing_id = Some(id);
            }
        }
    }

    pub(crate) fn missing_easing(&self) -> AnimError {
        AnimError::easing(format!(
            "no easing function resolved for '{}'",
            self.easing_id.as_deref().unwrap_or("<none>")
        ))
    }

    /// Interpolated value of every numeric `to` property at `elapsed_ms`.
    ///
    /// Properties whose start or target is not numeric are left out; they
    /// only take effect on completion.
    pub fn sample(&self, elapsed_ms: f64) -> AnimResult<StyleMap> {
        let ease = self.ease.ok_or_else(|| self.missing_easing())?;

        let mut out = StyleMap::new();
        for (name, target) in &self.to {
            let start = self.from.get(name).and_then(StyleValue::numeric);
            let (Some(b), Some(end)) = (start, target.numeric()) else {
                tracing::trace!(property = %name, "skipping non-numeric property");
                continue;
            };
            let value = ease(elapsed_ms, b, end - b, self.duration_ms);
            out.insert(name.clone(), StyleValue::Number(value));
        }
        Ok(out)
    }
}

/// In-place update of the active descriptor.
#[derive(Clone, Debug, PartialEq)]
pub enum DescriptorPatch {
    /// Replace the start values.
    From(StyleMap),
    /// Replace the target values.
    To(StyleMap),
    /// Replace the duration, in milliseconds, without normalization.
    DurationMs(f64),
    /// Re-resolve the easing from a dotted identifier.
    Tween(String),
}

#[cfg(test)]
#[path = "../../tests/unit/animation/descriptor.rs"]
mod tests;
