use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::{Arc, LazyLock};

/// Interpolator over elapsed time `t`, start value `b`, delta `c` and total duration `d`.
pub type EaseFn = fn(t: f64, b: f64, c: f64, d: f64) -> f64;

/// Group name that resolves to linear easing regardless of the variant segment.
pub const LINEAR: &str = "Linear";
/// Variant name for the accelerating half of a curve.
pub const EASE_IN: &str = "easeIn";
/// Variant name for the decelerating half of a curve.
pub const EASE_OUT: &str = "easeOut";
/// Variant name for the symmetric curve.
pub const EASE_IN_OUT: &str = "easeInOut";

/// One named family in an [`EasingRegistry`].
#[derive(Clone, Debug)]
pub enum EaseGroup {
    /// A group that is itself the function (`"Linear"`).
    Single(EaseFn),
    /// A group addressed as `"Group.variant"`.
    Variants(HashMap<String, EaseFn>),
}

/// Immutable-by-convention lookup of easing functions by dotted identifier.
///
/// Animators receive a registry at construction so tests and hosts can swap
/// the table; [`EasingRegistry::shared_standard`] is the stock one.
#[derive(Clone, Debug, Default)]
pub struct EasingRegistry {
    groups: HashMap<String, EaseGroup>,
}

static STANDARD: LazyLock<Arc<EasingRegistry>> =
    LazyLock::new(|| Arc::new(EasingRegistry::standard()));

impl EasingRegistry {
    /// Registry with no groups.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding `Linear` plus the Quad, Cubic, Quart, Quint, Sine,
    /// Expo, Circ, Elastic, Back and Bounce families.
    pub fn standard() -> Self {
        let mut reg = Self::empty();
        reg.register_group(LINEAR, EaseGroup::Single(linear));
        let families: [(&str, [EaseFn; 3]); 10] = [
            ("Quad", [quad_in, quad_out, quad_in_out]),
            ("Cubic", [cubic_in, cubic_out, cubic_in_out]),
            ("Quart", [quart_in, quart_out, quart_in_out]),
            ("Quint", [quint_in, quint_out, quint_in_out]),
            ("Sine", [sine_in, sine_out, sine_in_out]),
            ("Expo", [expo_in, expo_out, expo_in_out]),
            ("Circ", [circ_in, circ_out, circ_in_out]),
            ("Elastic", [elastic_in, elastic_out, elastic_in_out]),
            ("Back", [back_in, back_out, back_in_out]),
            ("Bounce", [bounce_in, bounce_out, bounce_in_out]),
        ];
        for (group, [ease_in, ease_out, ease_in_out]) in families {
            reg.register_variant(group, EASE_IN, ease_in)
                .register_variant(group, EASE_OUT, ease_out)
                .register_variant(group, EASE_IN_OUT, ease_in_out);
        }
        reg
    }

    /// Process-wide instance of [`EasingRegistry::standard`].
    pub fn shared_standard() -> Arc<Self> {
        Arc::clone(&STANDARD)
    }

    /// Insert or replace a whole group.
    pub fn register_group(&mut self, name: impl Into<String>, group: EaseGroup) -> &mut Self {
        self.groups.insert(name.into(), group);
        self
    }

    /// Insert or replace one variant; a `Single` group is turned into a variant group.
    pub fn register_variant(
        &mut self,
        group: impl Into<String>,
        variant: impl Into<String>,
        ease: EaseFn,
    ) -> &mut Self {
        let entry = self
            .groups
            .entry(group.into())
            .or_insert_with(|| EaseGroup::Variants(HashMap::new()));
        if let EaseGroup::Single(_) = entry {
            *entry = EaseGroup::Variants(HashMap::new());
        }
        if let EaseGroup::Variants(variants) = entry {
            variants.insert(variant.into(), ease);
        }
        self
    }

    /// Resolve `"Group"` or `"Group.variant"`; unknown names yield `None`.
    pub fn resolve(&self, id: &str) -> Option<EaseFn> {
        let mut segments = id.split('.');
        let group = self.groups.get(segments.next()?)?;
        match group {
            EaseGroup::Single(ease) => Some(*ease),
            EaseGroup::Variants(variants) => variants.get(segments.next()?).copied(),
        }
    }

    /// Resolve a loosely typed identifier; anything but a string yields `None`.
    pub fn resolve_value(&self, id: &serde_json::Value) -> Option<EaseFn> {
        id.as_str().and_then(|s| self.resolve(s))
    }

    /// Names of the registered groups, in no particular order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}

fn linear(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * t / d + b
}

fn quad_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t + b
}

fn quad_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    -c * t * (t - 2.0) + b
}

fn quad_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    let t = t - 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

fn cubic_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * (t / d).powi(3) + b
}

fn cubic_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * ((t / d - 1.0).powi(3) + 1.0) + b
}

fn cubic_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t.powi(3) + b;
    }
    c / 2.0 * ((t - 2.0).powi(3) + 2.0) + b
}

fn quart_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * (t / d).powi(4) + b
}

fn quart_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    -c * ((t / d - 1.0).powi(4) - 1.0) + b
}

fn quart_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t.powi(4) + b;
    }
    -c / 2.0 * ((t - 2.0).powi(4) - 2.0) + b
}

fn quint_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * (t / d).powi(5) + b
}

fn quint_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * ((t / d - 1.0).powi(5) + 1.0) + b
}

fn quint_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t.powi(5) + b;
    }
    c / 2.0 * ((t - 2.0).powi(5) + 2.0) + b
}

fn sine_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    -c * (t / d * (PI / 2.0)).cos() + c + b
}

fn sine_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * (t / d * (PI / 2.0)).sin() + b
}

fn sine_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    -c / 2.0 * ((PI * t / d).cos() - 1.0) + b
}

fn expo_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        return b;
    }
    c * 2f64.powf(10.0 * (t / d - 1.0)) + b
}

fn expo_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == d {
        return b + c;
    }
    c * (1.0 - 2f64.powf(-10.0 * t / d)) + b
}

fn expo_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        return b;
    }
    if t == d {
        return b + c;
    }
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * 2f64.powf(10.0 * (t - 1.0)) + b;
    }
    c / 2.0 * (2.0 - 2f64.powf(-10.0 * (t - 1.0))) + b
}

fn circ_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    -c * ((1.0 - t * t).sqrt() - 1.0) + b
}

fn circ_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    c * (1.0 - t * t).sqrt() + b
}

fn circ_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b;
    }
    let t = t - 2.0;
    c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
}

// Amplitude is taken as `c`, so the phase shift is a quarter period.
fn elastic_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = d * 0.3;
    let s = p / 4.0;
    let t = t - 1.0;
    -(c * 2f64.powf(10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin()) + b
}

fn elastic_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = d * 0.3;
    let s = p / 4.0;
    c * 2f64.powf(-10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin() + c + b
}

fn elastic_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        return b;
    }
    let t = t / (d / 2.0);
    if t == 2.0 {
        return b + c;
    }
    let p = d * (0.3 * 1.5);
    let s = p / 4.0;
    let t = t - 1.0;
    let wave = ((t * d - s) * (2.0 * PI) / p).sin();
    if t < 0.0 {
        return -0.5 * (c * 2f64.powf(10.0 * t) * wave) + b;
    }
    c * 2f64.powf(-10.0 * t) * wave * 0.5 + c + b
}

const BACK_OVERSHOOT: f64 = 1.70158;

fn back_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let s = BACK_OVERSHOOT;
    let t = t / d;
    c * t * t * ((s + 1.0) * t - s) + b
}

fn back_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let s = BACK_OVERSHOOT;
    let t = t / d - 1.0;
    c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
}

fn back_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let s = BACK_OVERSHOOT * 1.525;
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
}

fn bounce_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    if t < 1.0 / 2.75 {
        c * (7.5625 * t * t) + b
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        c * (7.5625 * t * t + 0.75) + b
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        c * (7.5625 * t * t + 0.9375) + b
    } else {
        let t = t - 2.625 / 2.75;
        c * (7.5625 * t * t + 0.984375) + b
    }
}

fn bounce_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c - bounce_out(d - t, 0.0, c, d) + b
}

fn bounce_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t < d / 2.0 {
        bounce_in(t * 2.0, 0.0, c, d) * 0.5 + b
    } else {
        bounce_out(t * 2.0 - d, 0.0, c, d) * 0.5 + c * 0.5 + b
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
