// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fill layer properties.

use super::{LayerKindSpec, Literal, PropertyDescriptor};

pub(super) static SPEC: LayerKindSpec = LayerKindSpec {
    type_tag: "fill",
    layout: &[
        PropertyDescriptor::new("fill-sort-key"),
        PropertyDescriptor::with_default("visibility", Literal::Str("visible")),
    ],
    paint: &[
        PropertyDescriptor::with_default("fill-antialias", Literal::Bool(true)),
        PropertyDescriptor::with_default("fill-opacity", Literal::Int(1)),
        PropertyDescriptor::with_default("fill-color", Literal::Str("#000000")),
        PropertyDescriptor::new("fill-outline-color"),
        PropertyDescriptor::with_default(
            "fill-translate",
            Literal::List(&[Literal::Int(0), Literal::Int(0)]),
        ),
        PropertyDescriptor::with_default("fill-translate-anchor", Literal::Str("map")),
        PropertyDescriptor::new("fill-pattern"),
    ],
};
