// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! GeoJSON source element and the layers nested inside it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use geo_engine_port::{EngineError, EngineHandle, SourceData, SourceSpec};
use serde_json::{json, Value};
use tracing::{debug, trace, warn};

use crate::layer::{LayerElement, LayerRef, Lifecycle, LAYERS_SLOT};
use crate::slot::Slot;
use crate::{Attributes, CustomElement, ElementError};

/// Shared reference to a source element, as held by the map root.
pub type SourceRef = Rc<RefCell<GeoJsonSource>>;

/// Slot name sources project into.
pub const SOURCES_SLOT: &str = "sources";

/// Payload registered when neither `data-url` nor data was provided.
pub fn empty_feature_collection() -> Value {
    json!({ "type": "FeatureCollection", "features": [] })
}

/// `geo-json-source` element.
pub struct GeoJsonSource {
    attributes: Attributes,
    data: Value,
    engine: Option<EngineHandle>,
    lifecycle: Lifecycle,
    layers: Slot<LayerElement>,
}

impl Default for GeoJsonSource {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoJsonSource {
    /// Fresh, unattached source holding an empty feature collection.
    pub fn new() -> Self {
        Self {
            attributes: Attributes::new(),
            data: empty_feature_collection(),
            engine: None,
            lifecycle: Lifecycle::Unattached,
            layers: Slot::new(LAYERS_SLOT),
        }
    }

    /// Fresh source behind a shared reference.
    pub fn shared() -> SourceRef {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Binding state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Engine this source is registered with.
    pub fn engine(&self) -> Option<&EngineHandle> {
        self.engine.as_ref()
    }

    /// `source-id` attribute.
    pub fn source_id(&self) -> Option<&str> {
        self.attributes.get("source-id")
    }

    /// `data-url` attribute.
    pub fn data_url(&self) -> Option<&str> {
        self.attributes.get("data-url")
    }

    /// Write the `data-url` attribute.
    pub fn set_data_url(&mut self, url: &str) -> Result<(), ElementError> {
        self.set_attribute("data-url", url)
    }

    /// Copy of the in-memory payload.
    pub fn data(&self) -> Value {
        self.data.clone()
    }

    /// Replace the in-memory payload, and the engine payload when attached.
    pub fn set_data(&mut self, data: Value) -> Result<(), ElementError> {
        self.data = data;
        if self.lifecycle == Lifecycle::Attached {
            self.replace_payload(SourceData::GeoJson(self.data.clone()))?;
        }
        Ok(())
    }

    /// Layers projected into this source.
    pub fn layers(&self) -> &Slot<LayerElement> {
        &self.layers
    }

    /// Payload used at registration: `data-url` wins over in-memory data.
    pub fn initial_payload(&self) -> SourceData {
        match self.data_url() {
            Some(url) => SourceData::Url(url.to_owned()),
            None => SourceData::GeoJson(self.data.clone()),
        }
    }

    /// Register with `engine`, then wire nested layers.
    ///
    /// Rebinding to the engine already held is a no-op; a detached source
    /// never binds again.
    pub fn bind(&mut self, engine: &EngineHandle) -> Result<(), ElementError> {
        if self.lifecycle == Lifecycle::Detached {
            warn!(source_id = ?self.source_id(), "detached source asked to bind");
            return Ok(());
        }
        if self.engine.as_ref().is_some_and(|e| e.same(engine)) {
            return Ok(());
        }
        let id = self.source_id().unwrap_or_default().to_owned();
        engine
            .borrow_mut()
            .add_source(&id, &SourceSpec::geojson(self.initial_payload()))?;
        self.engine = Some(engine.clone());
        self.lifecycle = Lifecycle::Attached;
        debug!(source_id = %id, "source registered");
        self.wire_layers()
    }

    /// Nest `layer` under this source. Wiring reruns when attached.
    pub fn project_layer(&mut self, layer: LayerRef) -> Result<(), ElementError> {
        layer.borrow_mut().connect();
        if self.layers.assign(layer) {
            self.wire_layers()?;
        }
        Ok(())
    }

    /// Remove a nested layer from the document.
    pub fn withdraw_layer(&mut self, layer: &LayerRef) -> Result<(), ElementError> {
        if self.layers.withdraw(layer) {
            layer.borrow_mut().disconnect()?;
        }
        Ok(())
    }

    /// Insertion into a map root: mark for the sources slot.
    pub fn connect(&mut self) {
        self.attributes.set("slot", SOURCES_SLOT.to_owned());
    }

    /// Removal from the document. Nested layers go first, then the source
    /// is deregistered if it was ever registered.
    pub fn disconnect(&mut self) -> Result<(), ElementError> {
        for layer in self.layers.assigned() {
            layer.borrow_mut().disconnect()?;
        }
        let previous = std::mem::replace(&mut self.lifecycle, Lifecycle::Detached);
        let Some(engine) = self.engine.take() else {
            return Ok(());
        };
        if previous == Lifecycle::Attached {
            let id = self.source_id().unwrap_or_default();
            engine.borrow_mut().remove_source(id)?;
            debug!(source_id = id, "source removed");
        }
        Ok(())
    }

    // Only layers declaring `layer-id` and not yet bound to this engine.
    fn wire_layers(&self) -> Result<(), ElementError> {
        if self.lifecycle != Lifecycle::Attached {
            return Ok(());
        }
        let Some(engine) = self.engine.as_ref() else {
            return Ok(());
        };
        let id = self.attributes.get("source-id").unwrap_or_default();
        for layer in self.layers.assigned() {
            let mut layer = layer.borrow_mut();
            if !layer.has_attribute("layer-id") || layer.is_bound_to(engine) {
                continue;
            }
            layer.set_attribute("source", id)?;
            layer.bind(engine)?;
        }
        Ok(())
    }

    fn replace_payload(&self, data: SourceData) -> Result<(), ElementError> {
        let Some(engine) = self.engine.as_ref() else {
            return Ok(());
        };
        let id = self.source_id().unwrap_or_default();
        trace!(source_id = id, "source payload replaced");
        let mut engine = engine.borrow_mut();
        let source = engine
            .get_source(id)
            .ok_or_else(|| EngineError::UnknownSource(id.to_owned()))?;
        source.set_data(&data)?;
        Ok(())
    }
}

impl CustomElement for GeoJsonSource {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn is_observed(&self, name: &str) -> bool {
        name == "data-url"
    }

    fn attribute_changed(
        &mut self,
        _name: &str,
        old: Option<&str>,
        new: Option<&str>,
    ) -> Result<(), ElementError> {
        if self.lifecycle != Lifecycle::Attached || old == new {
            return Ok(());
        }
        let data = match new {
            Some(url) => SourceData::Url(url.to_owned()),
            None => SourceData::GeoJson(self.data.clone()),
        };
        self.replace_payload(data)
    }
}

impl fmt::Debug for GeoJsonSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeoJsonSource")
            .field("source_id", &self.source_id())
            .field("lifecycle", &self.lifecycle)
            .field("layers", &self.layers)
            .finish_non_exhaustive()
    }
}
