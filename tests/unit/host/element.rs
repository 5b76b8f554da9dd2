use super::*;

#[test]
fn computed_style_prefers_inline_over_stylesheet() {
    let el = MemoryElement::with_stylesheet("left", "10px");
    assert_eq!(el.computed_style("left").as_deref(), Some("10px"));
    el.set_style("left", &StyleValue::from(42.0));
    assert_eq!(el.computed_style("left").as_deref(), Some("42"));
    assert_eq!(el.computed_style("top"), None);
}

#[test]
fn clones_share_the_node() {
    let el = MemoryElement::new();
    let handle = el.clone();
    el.set_style("opacity", &StyleValue::from(0.5));
    assert_eq!(handle.style("opacity"), Some(StyleValue::Number(0.5)));
    assert!(el.same_node(&handle));
    assert!(!el.same_node(&MemoryElement::new()));
}

#[test]
fn set_styles_writes_every_entry() {
    let el = MemoryElement::new();
    let mut styles = StyleMap::new();
    styles.insert("left".to_owned(), StyleValue::from(1.0));
    styles.insert("color".to_owned(), StyleValue::from("red"));
    el.set_styles(&styles);
    assert_eq!(el.write_count(), 2);
    assert_eq!(el.style("color"), Some(StyleValue::from("red")));
}
