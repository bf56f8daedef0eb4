// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Background layer properties.

use super::{LayerKindSpec, Literal, PropertyDescriptor};

pub(super) static SPEC: LayerKindSpec = LayerKindSpec {
    type_tag: "background",
    layout: &[
        PropertyDescriptor::with_default("visibility", Literal::Str("visible")),
    ],
    paint: &[
        PropertyDescriptor::with_default("background-color", Literal::Str("#000000")),
        PropertyDescriptor::new("background-pattern"),
        PropertyDescriptor::with_default("background-opacity", Literal::Int(1)),
    ],
};
