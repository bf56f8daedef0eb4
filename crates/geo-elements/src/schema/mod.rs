// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-layer-kind property tables.
//!
//! Nine constant tables, one per engine layer type. Each lists the layout
//! (structural) and paint (repaint-only) properties a layer element reflects,
//! with the engine default where one is declared. A name appears in at most one
//! of the two lists of a kind.

use geo_engine_codec::kebab_to_camel;
use serde_json::{Number, Value};

mod background;
mod circle;
mod fill;
mod fill_extrusion;
mod heatmap;
mod hillshade;
mod line;
mod raster;
mod symbol;

/// Const-constructible literal used for property defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Literal {
    /// String literal.
    Str(&'static str),
    /// Integer literal.
    Int(i64),
    /// Floating point literal.
    Float(f64),
    /// Boolean literal.
    Bool(bool),
    /// Array / expression literal.
    List(&'static [Literal]),
}

impl Literal {
    /// Materialise as a JSON value.
    pub fn to_value(self) -> Value {
        match self {
            Self::Str(s) => Value::String(s.to_owned()),
            Self::Int(n) => Value::Number(n.into()),
            Self::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
            Self::Bool(b) => Value::Bool(b),
            Self::List(items) => Value::Array(items.iter().map(|l| l.to_value()).collect()),
        }
    }
}

/// One reflected property: kebab-case name plus optional engine default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyDescriptor {
    /// Attribute and engine property name.
    pub name: &'static str,
    /// Value reported (and submitted) while the attribute is absent.
    pub default: Option<Literal>,
}

impl PropertyDescriptor {
    /// Property without a default.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            default: None,
        }
    }

    /// Property with a default.
    pub const fn with_default(name: &'static str, default: Literal) -> Self {
        Self {
            name,
            default: Some(default),
        }
    }

    /// Script-visible property name (`circle-radius` → `circleRadius`).
    pub fn camel_name(&self) -> String {
        kebab_to_camel(self.name)
    }
}

/// Which engine update call a property goes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyClass {
    /// `set_layout_property`.
    Layout,
    /// `set_paint_property`.
    Paint,
}

/// Static description of one layer kind.
#[derive(Debug)]
pub struct LayerKindSpec {
    /// Engine layer type tag.
    pub type_tag: &'static str,
    /// Layout properties.
    pub layout: &'static [PropertyDescriptor],
    /// Paint properties.
    pub paint: &'static [PropertyDescriptor],
}

impl LayerKindSpec {
    /// Attribute names whose mutation is observed: paint names, then layout names.
    pub fn observed_attributes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.paint
            .iter()
            .chain(self.layout.iter())
            .map(|p| p.name)
    }

    /// Find a property by attribute name.
    pub fn lookup(&self, name: &str) -> Option<(PropertyClass, &'static PropertyDescriptor)> {
        if let Some(p) = self.paint.iter().find(|p| p.name == name) {
            return Some((PropertyClass::Paint, p));
        }
        self.layout
            .iter()
            .find(|p| p.name == name)
            .map(|p| (PropertyClass::Layout, p))
    }

    /// Find a property by its script-visible camelCase name.
    pub fn lookup_camel(
        &self,
        camel: &str,
    ) -> Option<(PropertyClass, &'static PropertyDescriptor)> {
        self.paint
            .iter()
            .map(|p| (PropertyClass::Paint, p))
            .chain(self.layout.iter().map(|p| (PropertyClass::Layout, p)))
            .find(|(_, p)| p.camel_name() == camel)
    }

    /// Number of distinct properties of this kind.
    pub fn len(&self) -> usize {
        self.paint.len() + self.layout.len()
    }

    /// `true` when the kind reflects no property at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The nine supported layer kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// Solid or patterned map background.
    Background,
    /// Point circles.
    Circle,
    /// Polygon fills.
    Fill,
    /// Polylines.
    Line,
    /// Icons and text labels.
    Symbol,
    /// Raster tiles.
    Raster,
    /// Extruded 3D polygons.
    FillExtrusion,
    /// Point density heatmap.
    Heatmap,
    /// Terrain hillshading.
    Hillshade,
}

impl LayerKind {
    /// Every kind.
    pub const ALL: [Self; 9] = [
        Self::Background,
        Self::Circle,
        Self::Fill,
        Self::Line,
        Self::Symbol,
        Self::Raster,
        Self::FillExtrusion,
        Self::Heatmap,
        Self::Hillshade,
    ];

    /// Property table of this kind.
    pub fn spec(self) -> &'static LayerKindSpec {
        match self {
            Self::Background => &background::SPEC,
            Self::Circle => &circle::SPEC,
            Self::Fill => &fill::SPEC,
            Self::Line => &line::SPEC,
            Self::Symbol => &symbol::SPEC,
            Self::Raster => &raster::SPEC,
            Self::FillExtrusion => &fill_extrusion::SPEC,
            Self::Heatmap => &heatmap::SPEC,
            Self::Hillshade => &hillshade::SPEC,
        }
    }

    /// Engine layer type tag.
    pub fn type_tag(self) -> &'static str {
        self.spec().type_tag
    }

    /// Element tag name (`circle-layer`, `fill-extrusion-layer`, ...).
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::Background => "background-layer",
            Self::Circle => "circle-layer",
            Self::Fill => "fill-layer",
            Self::Line => "line-layer",
            Self::Symbol => "symbol-layer",
            Self::Raster => "raster-layer",
            Self::FillExtrusion => "fill-extrusion-layer",
            Self::Heatmap => "heatmap-layer",
            Self::Hillshade => "hillshade-layer",
        }
    }

    /// Parse an engine type tag.
    pub fn from_type_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.type_tag() == tag)
    }

    /// Parse an element tag name.
    pub fn from_tag_name(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.tag_name() == tag)
    }
}
