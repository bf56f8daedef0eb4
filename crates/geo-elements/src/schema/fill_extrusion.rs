// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fill-extrusion layer properties.

use super::{LayerKindSpec, Literal, PropertyDescriptor};

pub(super) static SPEC: LayerKindSpec = LayerKindSpec {
    type_tag: "fill-extrusion",
    layout: &[
        PropertyDescriptor::with_default("visibility", Literal::Str("visible")),
    ],
    paint: &[
        PropertyDescriptor::with_default("fill-extrusion-opacity", Literal::Int(1)),
        PropertyDescriptor::with_default("fill-extrusion-color", Literal::Str("#000000")),
        PropertyDescriptor::with_default(
            "fill-extrusion-translate",
            Literal::List(&[Literal::Int(0), Literal::Int(0)]),
        ),
        PropertyDescriptor::with_default("fill-extrusion-translate-anchor", Literal::Str("map")),
        PropertyDescriptor::new("fill-extrusion-pattern"),
        PropertyDescriptor::with_default("fill-extrusion-height", Literal::Int(0)),
        PropertyDescriptor::with_default("fill-extrusion-base", Literal::Int(0)),
        PropertyDescriptor::with_default("fill-extrusion-vertical-gradient", Literal::Bool(true)),
    ],
};
