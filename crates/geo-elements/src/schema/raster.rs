// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Raster layer properties.

use super::{LayerKindSpec, Literal, PropertyDescriptor};

pub(super) static SPEC: LayerKindSpec = LayerKindSpec {
    type_tag: "raster",
    layout: &[
        PropertyDescriptor::with_default("visibility", Literal::Str("visible")),
    ],
    paint: &[
        PropertyDescriptor::with_default("raster-opacity", Literal::Int(1)),
        PropertyDescriptor::with_default("raster-hue-rotate", Literal::Int(0)),
        PropertyDescriptor::with_default("raster-brightness-min", Literal::Int(0)),
        PropertyDescriptor::with_default("raster-brightness-max", Literal::Int(1)),
        PropertyDescriptor::with_default("raster-saturation", Literal::Int(0)),
        PropertyDescriptor::with_default("raster-resampling", Literal::Str("linear")),
        PropertyDescriptor::with_default("raster-fade-duration", Literal::Int(300)),
    ],
};
