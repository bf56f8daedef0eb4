// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Heatmap layer properties.

use super::{LayerKindSpec, Literal, PropertyDescriptor};

pub(super) static SPEC: LayerKindSpec = LayerKindSpec {
    type_tag: "heatmap",
    layout: &[
        PropertyDescriptor::with_default("visibility", Literal::Str("visible")),
    ],
    paint: &[
        PropertyDescriptor::with_default("heatmap-radius", Literal::Int(30)),
        PropertyDescriptor::with_default("heatmap-weight", Literal::Int(1)),
        PropertyDescriptor::with_default("heatmap-intensity", Literal::Int(1)),
        PropertyDescriptor::with_default(
            "heatmap-color",
            Literal::List(&[
                Literal::Str("interpolate"),
                Literal::List(&[Literal::Str("linear")]),
                Literal::List(&[Literal::Str("heatmap-density")]),
                Literal::Int(0),
                Literal::Str("rgba(0, 0, 255, 0)"),
                Literal::Float(0.1),
                Literal::Str("royalblue"),
                Literal::Float(0.3),
                Literal::Str("cyan"),
                Literal::Float(0.5),
                Literal::Str("lime"),
                Literal::Float(0.7),
                Literal::Str("yellow"),
                Literal::Int(1),
                Literal::Str("red"),
            ]),
        ),
        PropertyDescriptor::with_default("heatmap-opacity", Literal::Int(1)),
    ],
};
