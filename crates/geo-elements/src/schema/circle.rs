// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Circle layer properties.

use super::{LayerKindSpec, Literal, PropertyDescriptor};

pub(super) static SPEC: LayerKindSpec = LayerKindSpec {
    type_tag: "circle",
    layout: &[
        PropertyDescriptor::new("circle-sort-key"),
        PropertyDescriptor::with_default("visibility", Literal::Str("visible")),
    ],
    paint: &[
        PropertyDescriptor::with_default("circle-color", Literal::Str("#000000")),
        PropertyDescriptor::with_default("circle-radius", Literal::Int(5)),
        PropertyDescriptor::with_default("circle-stroke-width", Literal::Int(0)),
        PropertyDescriptor::with_default("circle-stroke-color", Literal::Str("#000000")),
        PropertyDescriptor::with_default("circle-opacity", Literal::Int(1)),
        PropertyDescriptor::with_default("circle-blur", Literal::Int(0)),
        PropertyDescriptor::with_default(
            "circle-translate",
            Literal::List(&[Literal::Int(0), Literal::Int(0)]),
        ),
        PropertyDescriptor::with_default("circle-translate-anchor", Literal::Str("map")),
        PropertyDescriptor::with_default("circle-pitch-scale", Literal::Str("map")),
        PropertyDescriptor::with_default("circle-pitch-alignment", Literal::Str("viewport")),
    ],
};
