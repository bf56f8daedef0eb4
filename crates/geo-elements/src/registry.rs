// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tag name → element constructor table.

use crate::layer::{LayerElement, LayerRef};
use crate::map::{GeoMap, CAMERA_ATTRIBUTES};
use crate::schema::LayerKind;
use crate::source::{GeoJsonSource, SourceRef};
use crate::{CustomElement, ElementError};

/// Tag of the map root.
pub const MAP_TAG: &str = "geo-map";
/// Tag of the GeoJSON source.
pub const SOURCE_TAG: &str = "geo-json-source";

/// What a tag name constructs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `geo-map`.
    Map,
    /// `geo-json-source`.
    GeoJsonSource,
    /// One of the nine `*-layer` tags.
    Layer(LayerKind),
}

impl ElementKind {
    /// Tag name.
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::Map => MAP_TAG,
            Self::GeoJsonSource => SOURCE_TAG,
            Self::Layer(kind) => kind.tag_name(),
        }
    }

    /// Parse a tag name.
    pub fn from_tag_name(tag: &str) -> Option<Self> {
        match tag {
            MAP_TAG => Some(Self::Map),
            SOURCE_TAG => Some(Self::GeoJsonSource),
            other => LayerKind::from_tag_name(other).map(Self::Layer),
        }
    }

    /// Attribute names whose mutation the element observes.
    pub fn observed_attributes(self) -> Vec<&'static str> {
        match self {
            Self::Map => CAMERA_ATTRIBUTES.to_vec(),
            Self::GeoJsonSource => vec!["data-url"],
            Self::Layer(kind) => kind.spec().observed_attributes().collect(),
        }
    }
}

/// A constructed element.
#[derive(Debug)]
pub enum Element {
    /// Map root.
    Map(Box<GeoMap>),
    /// GeoJSON source.
    Source(SourceRef),
    /// Layer of any kind.
    Layer(LayerRef),
}

impl Element {
    /// Kind of this element.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Map(_) => ElementKind::Map,
            Self::Source(_) => ElementKind::GeoJsonSource,
            Self::Layer(layer) => ElementKind::Layer(layer.borrow().kind()),
        }
    }

    /// Set an attribute with callback semantics.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ElementError> {
        match self {
            Self::Map(map) => map.set_attribute(name, value),
            Self::Source(source) => source.borrow_mut().set_attribute(name, value),
            Self::Layer(layer) => layer.borrow_mut().set_attribute(name, value),
        }
    }

    /// Remove an attribute with callback semantics.
    pub fn remove_attribute(&mut self, name: &str) -> Result<(), ElementError> {
        match self {
            Self::Map(map) => map.remove_attribute(name),
            Self::Source(source) => source.borrow_mut().remove_attribute(name),
            Self::Layer(layer) => layer.borrow_mut().remove_attribute(name),
        }
    }

    /// Attribute value, if present.
    pub fn get_attribute(&self, name: &str) -> Option<String> {
        match self {
            Self::Map(map) => map.get_attribute(name).map(str::to_owned),
            Self::Source(source) => source.borrow().get_attribute(name).map(str::to_owned),
            Self::Layer(layer) => layer.borrow().get_attribute(name).map(str::to_owned),
        }
    }
}

/// Defined custom elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementRegistry {
    kinds: Vec<ElementKind>,
}

impl Default for ElementRegistry {
    fn default() -> Self {
        let mut kinds = vec![ElementKind::Map, ElementKind::GeoJsonSource];
        kinds.extend(LayerKind::ALL.into_iter().map(ElementKind::Layer));
        Self { kinds }
    }
}

impl ElementRegistry {
    /// Registry with every element defined.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defined tag names, map first, then source, then layers.
    pub fn tag_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.iter().map(|k| k.tag_name())
    }

    /// `true` when `tag` is defined.
    pub fn is_defined(&self, tag: &str) -> bool {
        ElementKind::from_tag_name(tag).is_some_and(|k| self.kinds.contains(&k))
    }

    /// Construct a fresh element for `tag`.
    pub fn create(&self, tag: &str) -> Result<Element, ElementError> {
        let kind = ElementKind::from_tag_name(tag)
            .filter(|k| self.kinds.contains(k))
            .ok_or_else(|| ElementError::UnknownElement(tag.to_owned()))?;
        Ok(match kind {
            ElementKind::Map => Element::Map(Box::default()),
            ElementKind::GeoJsonSource => Element::Source(GeoJsonSource::shared()),
            ElementKind::Layer(kind) => Element::Layer(LayerElement::shared(kind)),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn defines_eleven_tags() {
        let registry = ElementRegistry::new();
        let tags: Vec<_> = registry.tag_names().collect();
        assert_eq!(tags.len(), 11);
        assert_eq!(tags[0], "geo-map");
        assert_eq!(tags[1], "geo-json-source");
        assert!(registry.is_defined("fill-extrusion-layer"));
        assert!(!registry.is_defined("video-layer"));
    }

    #[test]
    fn create_builds_the_matching_element() {
        let registry = ElementRegistry::new();
        let mut layer = registry.create("heatmap-layer").unwrap();
        assert_eq!(layer.kind(), ElementKind::Layer(LayerKind::Heatmap));
        layer.set_attribute("layer-id", "heat").unwrap();
        assert_eq!(layer.get_attribute("layer-id").as_deref(), Some("heat"));

        assert!(matches!(registry.create("geo-map"), Ok(Element::Map(_))));
        assert!(matches!(
            registry.create("geo-json-source"),
            Ok(Element::Source(_))
        ));
        assert!(matches!(
            registry.create("div"),
            Err(ElementError::UnknownElement(tag)) if tag == "div"
        ));
    }

    #[test]
    fn observed_attributes_per_kind() {
        assert_eq!(
            ElementKind::Map.observed_attributes(),
            ["zoom", "center", "bearing", "pitch"]
        );
        assert_eq!(ElementKind::GeoJsonSource.observed_attributes(), ["data-url"]);
        let raster = ElementKind::Layer(LayerKind::Raster).observed_attributes();
        assert_eq!(raster.last(), Some(&"visibility"));
        assert_eq!(raster.len(), 8);
    }
}
