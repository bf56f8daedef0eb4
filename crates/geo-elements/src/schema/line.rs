// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Line layer properties.

use super::{LayerKindSpec, Literal, PropertyDescriptor};

pub(super) static SPEC: LayerKindSpec = LayerKindSpec {
    type_tag: "line",
    layout: &[
        PropertyDescriptor::with_default("line-cap", Literal::Str("butt")),
        PropertyDescriptor::with_default("line-join", Literal::Str("miter")),
        PropertyDescriptor::with_default("line-miter-limit", Literal::Int(2)),
        PropertyDescriptor::with_default("line-round-limit", Literal::Float(1.05)),
        PropertyDescriptor::new("line-sort-key"),
        PropertyDescriptor::with_default("visibility", Literal::Str("visible")),
    ],
    paint: &[
        PropertyDescriptor::with_default("line-opacity", Literal::Int(1)),
        PropertyDescriptor::with_default("line-color", Literal::Str("#000000")),
        PropertyDescriptor::with_default(
            "line-translate",
            Literal::List(&[Literal::Int(0), Literal::Int(0)]),
        ),
        PropertyDescriptor::with_default("line-translate-anchor", Literal::Str("map")),
        PropertyDescriptor::with_default("line-width", Literal::Int(1)),
        PropertyDescriptor::with_default("line-gap-width", Literal::Int(0)),
        PropertyDescriptor::with_default("line-offset", Literal::Int(0)),
        PropertyDescriptor::with_default("line-blur", Literal::Int(0)),
        PropertyDescriptor::new("line-dasharray"),
        PropertyDescriptor::new("line-pattern"),
        PropertyDescriptor::new("line-gradient"),
    ],
};
