// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Declarative map elements over an abstract map engine.
//!
//! A map is described as a tree of elements: one `geo-map` root, any number of
//! `geo-json-source` children, and layers of nine kinds, either nested in a
//! source or placed directly under the root. Every property lives in the
//! element's attributes; the engine only ever sees what those attributes
//! encode.
//!
//! # Wiring order
//!
//! 1. [`GeoMap::connect`] creates the engine through an
//!    [`EngineFactory`](geo_engine_port::EngineFactory).
//! 2. On [`EngineEvent::Load`](geo_engine_port::EngineEvent), the map binds
//!    each projected source; a source registers itself, then binds its nested
//!    layers with `source` set to its own id.
//! 3. Top-level layers declaring both `source` and `layer-id` are bound last.
//!
//! After that, attribute mutations become incremental engine calls: paint and
//! layout updates for layers, payload replacement for sources, camera setters
//! for the map root.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use geo_elements::{CustomElement, GeoJsonSource, GeoMap, LayerElement, LayerKind};
//! use geo_engine_codec::MockFactory;
//! use geo_engine_port::EngineEvent;
//!
//! # fn main() -> Result<(), geo_elements::ElementError> {
//! let factory = MockFactory::strict();
//! let mut map = GeoMap::new();
//! map.set_attribute("zoom", "4")?;
//!
//! let source = GeoJsonSource::shared();
//! source.borrow_mut().set_attribute("source-id", "quakes")?;
//! let circles = LayerElement::shared(LayerKind::Circle);
//! circles.borrow_mut().set_attribute("layer-id", "quake-dots")?;
//! source.borrow_mut().project_layer(Rc::clone(&circles))?;
//! map.append_source(source)?;
//!
//! map.connect(&factory)?;
//! map.handle_engine_event(EngineEvent::Load)?;
//! assert_eq!(circles.borrow().source(), Some("quakes"));
//!
//! circles.borrow_mut().set_attribute("circle-radius", "8")?;
//! # Ok(())
//! # }
//! ```

pub mod accessor;
mod attributes;
mod error;
mod layer;
mod listeners;
mod map;
mod registry;
pub mod schema;
mod slot;
mod source;

pub use attributes::{Attributes, CustomElement};
pub use error::ElementError;
pub use layer::{LayerElement, LayerRef, Lifecycle, LAYERS_SLOT};
pub use listeners::{is_layer_event, ListenerQueue, LAYER_EVENTS};
pub use map::{format_center, round_camera, CameraChange, GeoMap, CAMERA_ATTRIBUTES};
pub use registry::{Element, ElementKind, ElementRegistry, MAP_TAG, SOURCE_TAG};
pub use schema::{LayerKind, LayerKindSpec, Literal, PropertyClass, PropertyDescriptor};
pub use slot::Slot;
pub use source::{empty_feature_collection, GeoJsonSource, SourceRef, SOURCES_SLOT};
