// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Table-driven property reflection.
//!
//! One getter and one setter serve every descriptor of every layer kind. The
//! getter is a pure function of the attribute store and the descriptor.

use geo_engine_codec::{decode, encode, CodecError};
use serde_json::{Map, Value};

use crate::schema::{Literal, PropertyDescriptor};
use crate::{Attributes, CustomElement, ElementError};

/// Current value of a reflected property.
///
/// Absent attributes yield the descriptor default, or `null` when there is
/// none. Present attributes are decoded; decode failures propagate.
pub fn read(attributes: &Attributes, descriptor: &PropertyDescriptor) -> Result<Value, CodecError> {
    match attributes.get(descriptor.name) {
        Some(raw) => decode(raw),
        None => Ok(descriptor.default.map_or(Value::Null, Literal::to_value)),
    }
}

/// Write a reflected property through the element's attribute path, so the
/// mutation callback runs exactly as for a markup edit.
pub fn write<E>(
    element: &mut E,
    descriptor: &PropertyDescriptor,
    value: &Value,
) -> Result<(), ElementError>
where
    E: CustomElement + ?Sized,
{
    element.set_attribute(descriptor.name, &encode(value))
}

/// Fold descriptors into a property map for a layer specification.
///
/// A property is included when it declares a default or its current value is
/// not `null`; unset properties without a default are left to the engine.
pub fn fold(
    attributes: &Attributes,
    descriptors: &[PropertyDescriptor],
) -> Result<Map<String, Value>, CodecError> {
    let mut out = Map::new();
    for descriptor in descriptors {
        let value = read(attributes, descriptor)?;
        if descriptor.default.is_some() || !value.is_null() {
            out.insert(descriptor.name.to_owned(), value);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::schema::LayerKind;
    use serde_json::json;

    const RADIUS: PropertyDescriptor =
        PropertyDescriptor::with_default("circle-radius", Literal::Int(5));
    const SORT_KEY: PropertyDescriptor = PropertyDescriptor::new("circle-sort-key");

    #[test]
    fn absent_attribute_reads_default_or_null() {
        let attrs = Attributes::new();
        assert_eq!(read(&attrs, &RADIUS).unwrap(), json!(5));
        assert_eq!(read(&attrs, &SORT_KEY).unwrap(), Value::Null);
    }

    #[test]
    fn present_attribute_is_decoded() {
        let mut attrs = Attributes::new();
        attrs.set("circle-radius", "12".into());
        attrs.set("circle-sort-key", "['get','rank']".into());
        assert_eq!(read(&attrs, &RADIUS).unwrap(), json!(12));
        assert_eq!(read(&attrs, &SORT_KEY).unwrap(), json!(["get", "rank"]));
    }

    #[test]
    fn malformed_attribute_propagates() {
        let mut attrs = Attributes::new();
        attrs.set("circle-radius", "[1,".into());
        assert!(matches!(read(&attrs, &RADIUS), Err(CodecError::Malformed { .. })));
    }

    #[test]
    fn fold_omits_unset_properties_without_default() {
        let mut attrs = Attributes::new();
        let folded = fold(&attrs, &[RADIUS, SORT_KEY]).unwrap();
        assert_eq!(Value::Object(folded), json!({ "circle-radius": 5 }));

        attrs.set("circle-sort-key", "2".into());
        let folded = fold(&attrs, &[RADIUS, SORT_KEY]).unwrap();
        assert_eq!(
            Value::Object(folded),
            json!({ "circle-radius": 5, "circle-sort-key": 2 })
        );
    }

    #[test]
    fn fold_of_defaults_covers_every_defaulted_descriptor() {
        let spec = LayerKind::Line.spec();
        let paint = fold(&Attributes::new(), spec.paint).unwrap();
        let defaulted = spec.paint.iter().filter(|p| p.default.is_some()).count();
        assert_eq!(paint.len(), defaulted);
        assert_eq!(paint["line-width"], json!(1));
    }
}
