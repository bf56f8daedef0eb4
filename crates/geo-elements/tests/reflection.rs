// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Reflected property laws across every layer kind.
#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use geo_elements::{CustomElement, LayerElement, LayerKind, Literal, PropertyClass};
use geo_engine_codec::is_structured;
use proptest::prelude::*;
use serde_json::{json, Value};

fn kind() -> impl Strategy<Value = LayerKind> {
    prop::sample::select(LayerKind::ALL.to_vec())
}

fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        (0u32..10_000).prop_map(|n| json!(n)),
        (0u32..10_000).prop_map(|n| json!(f64::from(n) / 8.0)),
        any::<bool>().prop_map(|b| json!(b)),
        "[a-z#][a-z0-9 -]{0,12}"
            .prop_filter("plain", |s| !is_structured(s))
            .prop_map(Value::String),
        (0u32..100, "[a-z]{1,8}").prop_map(|(n, s)| json!(["coalesce", ["get", s], n])),
    ]
}

proptest! {
    #[test]
    fn set_then_get_returns_the_value(
        kind in kind(),
        index in any::<prop::sample::Index>(),
        v in value()
    ) {
        let table = kind.spec();
        let names: Vec<_> = table.observed_attributes().collect();
        let name = names[index.index(names.len())];
        let mut layer = LayerElement::new(kind);
        layer.set_property(name, &v).unwrap();
        prop_assert_eq!(layer.property(name).unwrap(), v);
    }

    #[test]
    fn specification_holds_defaults_and_set_values_only(
        kind in kind(),
        index in any::<prop::sample::Index>(),
        v in value()
    ) {
        let table = kind.spec();
        let names: Vec<_> = table.observed_attributes().collect();
        let name = names[index.index(names.len())];
        let mut layer = LayerElement::new(kind);
        layer.set_attribute("layer-id", "l").unwrap();
        layer.set_property(name, &v).unwrap();
        let spec = layer.specification().unwrap();

        let (class, _) = table.lookup(name).unwrap();
        let (own, other) = match class {
            PropertyClass::Paint => (&spec.paint, &spec.layout),
            PropertyClass::Layout => (&spec.layout, &spec.paint),
        };
        prop_assert_eq!(&own[name], &v);
        prop_assert!(!other.contains_key(name));

        let expected = table
            .paint
            .iter()
            .chain(table.layout)
            .filter(|p| p.default.is_some() || p.name == name)
            .count();
        prop_assert_eq!(spec.paint.len() + spec.layout.len(), expected);
    }
}

#[test]
fn fresh_layers_report_declared_defaults() {
    for kind in LayerKind::ALL {
        let layer = LayerElement::new(kind);
        let table = kind.spec();
        for p in table.paint.iter().chain(table.layout) {
            let expected = p.default.map_or(Value::Null, Literal::to_value);
            assert_eq!(layer.property(p.name).unwrap(), expected, "{}", p.name);
            assert_eq!(layer.property(&p.camel_name()).unwrap(), expected);
        }
    }
}

#[test]
fn symbol_text_field_with_leading_digit_is_misread() {
    // Plain strings starting with a digit are decoded as structured literals.
    let mut layer = LayerElement::new(LayerKind::Symbol);
    layer.set_attribute("text-field", "42nd Street").unwrap();
    assert!(layer.property("text-field").is_err());
    layer.set_attribute("text-field", "Main Street").unwrap();
    assert_eq!(layer.property("textField").unwrap(), json!("Main Street"));
}
