// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Symbol layer properties (icons and text).

use super::{LayerKindSpec, Literal, PropertyDescriptor};

pub(super) static SPEC: LayerKindSpec = LayerKindSpec {
    type_tag: "symbol",
    layout: &[
        PropertyDescriptor::with_default("symbol-placement", Literal::Str("point")),
        PropertyDescriptor::with_default("symbol-spacing", Literal::Int(250)),
        PropertyDescriptor::with_default("symbol-avoid-edges", Literal::Bool(false)),
        PropertyDescriptor::new("symbol-sort-key"),
        PropertyDescriptor::with_default("symbol-z-order", Literal::Str("auto")),
        PropertyDescriptor::with_default("icon-allow-overlap", Literal::Bool(false)),
        PropertyDescriptor::with_default("icon-ignore-placement", Literal::Bool(false)),
        PropertyDescriptor::with_default("icon-optional", Literal::Bool(false)),
        PropertyDescriptor::with_default("icon-rotation-alignment", Literal::Str("auto")),
        PropertyDescriptor::with_default("icon-size", Literal::Int(1)),
        PropertyDescriptor::with_default("icon-text-fit", Literal::Str("none")),
        PropertyDescriptor::with_default(
            "icon-text-fit-padding",
            Literal::List(&[Literal::Int(0), Literal::Int(0), Literal::Int(0), Literal::Int(0)]),
        ),
        PropertyDescriptor::new("icon-image"),
        PropertyDescriptor::with_default("icon-rotate", Literal::Int(0)),
        PropertyDescriptor::with_default("icon-padding", Literal::Int(2)),
        PropertyDescriptor::with_default("icon-keep-upright", Literal::Bool(false)),
        PropertyDescriptor::with_default(
            "icon-offset",
            Literal::List(&[Literal::Int(0), Literal::Int(0)]),
        ),
        PropertyDescriptor::with_default("icon-anchor", Literal::Str("center")),
        PropertyDescriptor::with_default("icon-pitch-alignment", Literal::Str("auto")),
        PropertyDescriptor::with_default("text-pitch-alignment", Literal::Str("auto")),
        PropertyDescriptor::with_default("text-rotation-alignment", Literal::Str("auto")),
        PropertyDescriptor::with_default("text-field", Literal::Str("")),
        PropertyDescriptor::with_default(
            "text-font",
            Literal::List(&[
                Literal::Str("Open Sans Regular"),
                Literal::Str("Arial Unicode MS Regular"),
            ]),
        ),
        PropertyDescriptor::with_default("text-size", Literal::Int(16)),
        PropertyDescriptor::with_default("text-max-width", Literal::Int(10)),
        PropertyDescriptor::with_default("text-line-height", Literal::Float(1.2)),
        PropertyDescriptor::with_default("text-letter-spacing", Literal::Int(0)),
        PropertyDescriptor::with_default("text-justify", Literal::Str("center")),
        PropertyDescriptor::with_default("text-radial-offset", Literal::Int(0)),
        PropertyDescriptor::new("text-variable-anchor"),
        PropertyDescriptor::with_default("text-anchor", Literal::Str("center")),
        PropertyDescriptor::with_default("text-max-angle", Literal::Int(45)),
        PropertyDescriptor::new("text-writing-mode"),
        PropertyDescriptor::with_default("text-rotate", Literal::Int(0)),
        PropertyDescriptor::with_default("text-padding", Literal::Int(2)),
        PropertyDescriptor::with_default("text-keep-upright", Literal::Bool(true)),
        PropertyDescriptor::with_default("text-transform", Literal::Str("none")),
        PropertyDescriptor::with_default(
            "text-offset",
            Literal::List(&[Literal::Int(0), Literal::Int(0)]),
        ),
        PropertyDescriptor::with_default("text-allow-overlap", Literal::Bool(false)),
        PropertyDescriptor::with_default("text-ignore-placement", Literal::Bool(false)),
        PropertyDescriptor::with_default("text-optional", Literal::Bool(false)),
        PropertyDescriptor::with_default("visibility", Literal::Str("visible")),
    ],
    paint: &[
        PropertyDescriptor::with_default("icon-opacity", Literal::Int(1)),
        PropertyDescriptor::with_default("icon-color", Literal::Str("#000000")),
        PropertyDescriptor::with_default("icon-halo-color", Literal::Str("rgba(0,0,0,0)")),
        PropertyDescriptor::with_default("icon-halo-width", Literal::Int(0)),
        PropertyDescriptor::with_default("icon-halo-blur", Literal::Int(0)),
        PropertyDescriptor::with_default(
            "icon-translate",
            Literal::List(&[Literal::Int(0), Literal::Int(0)]),
        ),
        PropertyDescriptor::with_default("icon-translate-anchor", Literal::Str("map")),
        PropertyDescriptor::with_default("text-opacity", Literal::Int(1)),
        PropertyDescriptor::with_default("text-color", Literal::Str("#000000")),
        PropertyDescriptor::with_default("text-halo-color", Literal::Str("rgba(0,0,0,0)")),
        PropertyDescriptor::with_default("text-halo-width", Literal::Int(0)),
        PropertyDescriptor::with_default("text-halo-blur", Literal::Int(0)),
        PropertyDescriptor::with_default(
            "text-translate",
            Literal::List(&[Literal::Int(0), Literal::Int(0)]),
        ),
        PropertyDescriptor::with_default("text-translate-anchor", Literal::Str("map")),
    ],
};
