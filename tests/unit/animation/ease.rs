use super::*;

fn all_standard() -> Vec<(String, EaseFn)> {
    let reg = EasingRegistry::standard();
    let mut out = vec![(LINEAR.to_owned(), reg.resolve(LINEAR).unwrap())];
    for group in reg.group_names().filter(|g| *g != LINEAR) {
        for variant in [EASE_IN, EASE_OUT, EASE_IN_OUT] {
            let id = format!("{group}.{variant}");
            let ease = reg.resolve(&id).unwrap();
            out.push((id, ease));
        }
    }
    out
}

#[test]
fn linear_resolves_from_single_segment() {
    let reg = EasingRegistry::standard();
    let ease = reg.resolve("Linear").unwrap();
    assert!(std::ptr::fn_addr_eq(ease, linear as EaseFn));
    let dotted = reg.resolve("Linear.easeIn").unwrap();
    assert!(std::ptr::fn_addr_eq(dotted, linear as EaseFn));
}

#[test]
fn group_variant_resolves_exact_function() {
    let reg = EasingRegistry::standard();
    let ease = reg.resolve("Quad.easeIn").unwrap();
    assert!(std::ptr::fn_addr_eq(ease, quad_in as EaseFn));
    let ease = reg.resolve("Bounce.easeInOut").unwrap();
    assert!(std::ptr::fn_addr_eq(ease, bounce_in_out as EaseFn));
}

#[test]
fn unknown_and_incomplete_ids_are_unresolved() {
    let reg = EasingRegistry::standard();
    assert!(reg.resolve("Nope.easeIn").is_none());
    assert!(reg.resolve("Quad").is_none());
    assert!(reg.resolve("Quad.sideways").is_none());
    assert!(reg.resolve("").is_none());
}

#[test]
fn non_string_values_are_unresolved() {
    let reg = EasingRegistry::standard();
    assert!(reg.resolve_value(&serde_json::json!(42)).is_none());
    assert!(reg.resolve_value(&serde_json::Value::Null).is_none());
    assert!(reg.resolve_value(&serde_json::json!("Cubic.easeOut")).is_some());
}

#[test]
fn standard_has_ten_families_plus_linear() {
    assert_eq!(EasingRegistry::standard().group_names().count(), 11);
    assert_eq!(all_standard().len(), 31);
}

#[test]
fn endpoints_are_stable() {
    for (id, ease) in all_standard() {
        let start = ease(0.0, 10.0, 90.0, 400.0);
        let end = ease(400.0, 10.0, 90.0, 400.0);
        assert!((start - 10.0).abs() < 1e-9, "{id} starts at {start}");
        assert!((end - 100.0).abs() < 1e-9, "{id} ends at {end}");
    }
}

#[test]
fn linear_is_monotonic_between_endpoints() {
    let ease = EasingRegistry::standard().resolve("Linear").unwrap();
    let mut prev = ease(0.0, 1.0, -1.0, 1000.0);
    for step in 1..=10 {
        let v = ease(f64::from(step) * 100.0, 1.0, -1.0, 1000.0);
        assert!(v < prev);
        assert!((0.0..=1.0).contains(&v));
        prev = v;
    }
}

#[test]
fn monotonic_spot_check() {
    for id in [
        "Quad.easeIn",
        "Quad.easeOut",
        "Quad.easeInOut",
        "Cubic.easeInOut",
        "Quart.easeOut",
        "Quint.easeIn",
        "Sine.easeInOut",
        "Expo.easeOut",
        "Circ.easeIn",
    ] {
        let ease = EasingRegistry::standard().resolve(id).unwrap();
        let a = ease(25.0, 0.0, 1.0, 100.0);
        let b = ease(50.0, 0.0, 1.0, 100.0);
        let c = ease(75.0, 0.0, 1.0, 100.0);
        assert!(a < b, "{id}");
        assert!(b < c, "{id}");
    }
}

#[test]
fn back_overshoots_below_start() {
    let ease = EasingRegistry::standard().resolve("Back.easeIn").unwrap();
    assert!(ease(20.0, 0.0, 1.0, 100.0) < 0.0);
}

#[test]
fn custom_registry_can_override_variants() {
    fn halfway(_t: f64, b: f64, c: f64, _d: f64) -> f64 {
        b + c / 2.0
    }

    let mut reg = EasingRegistry::empty();
    assert!(reg.resolve("Linear").is_none());
    reg.register_variant("Step", "mid", halfway);
    let ease = reg.resolve("Step.mid").unwrap();
    assert_eq!(ease(3.0, 0.0, 10.0, 100.0), 5.0);

    reg.register_group("Step", EaseGroup::Single(halfway));
    assert!(reg.resolve("Step").is_some());
    reg.register_variant("Step", "mid", linear);
    assert!(reg.resolve("Step").is_none());
    assert!(reg.resolve("Step.mid").is_some());
}

#[test]
fn shared_standard_is_one_instance() {
    let a = EasingRegistry::shared_standard();
    let b = EasingRegistry::shared_standard();
    assert!(Arc::ptr_eq(&a, &b));
}
