// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Hillshade layer properties.

use super::{LayerKindSpec, Literal, PropertyDescriptor};

pub(super) static SPEC: LayerKindSpec = LayerKindSpec {
    type_tag: "hillshade",
    layout: &[
        PropertyDescriptor::with_default("visibility", Literal::Str("visible")),
    ],
    paint: &[
        PropertyDescriptor::with_default("hillshade-illumination-direction", Literal::Int(335)),
        PropertyDescriptor::with_default("hillshade-illumination-anchor", Literal::Str("viewport")),
        PropertyDescriptor::with_default("hillshade-exaggeration", Literal::Float(0.5)),
        PropertyDescriptor::with_default("hillshade-shadow-color", Literal::Str("#000000")),
        PropertyDescriptor::with_default("hillshade-highlight-color", Literal::Str("#FFFFFF")),
        PropertyDescriptor::with_default("hillshade-accent-color", Literal::Str("#000000")),
    ],
};
