// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Generic layer element.
//!
//! One element type serves all nine layer kinds; the kind only selects the
//! property table. The engine sees a layer exactly once as a full
//! specification, then only as incremental paint and layout updates.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use geo_engine_codec::{decode, decode_attribute, encode};
use geo_engine_port::{EngineHandle, LayerSpec, Listener};
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::accessor;
use crate::listeners::{is_layer_event, ListenerQueue};
use crate::schema::{LayerKind, PropertyClass, PropertyDescriptor};
use crate::{Attributes, CustomElement, ElementError};

/// Shared reference to a layer element, as held by containers.
pub type LayerRef = Rc<RefCell<LayerElement>>;

/// Slot name layers project into.
pub const LAYERS_SLOT: &str = "layers";

/// Engine binding state of a layer or source element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, no engine yet.
    #[default]
    Unattached,
    /// Registered with an engine.
    Attached,
    /// Removed from the document. Terminal.
    Detached,
}

/// Layer element of one kind.
pub struct LayerElement {
    kind: LayerKind,
    attributes: Attributes,
    engine: Option<EngineHandle>,
    lifecycle: Lifecycle,
    listeners: ListenerQueue,
}

impl LayerElement {
    /// Fresh, unattached layer.
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            attributes: Attributes::new(),
            engine: None,
            lifecycle: Lifecycle::Unattached,
            listeners: ListenerQueue::new(),
        }
    }

    /// Fresh layer behind a shared reference.
    pub fn shared(kind: LayerKind) -> LayerRef {
        Rc::new(RefCell::new(Self::new(kind)))
    }

    /// Layer kind.
    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    /// Binding state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Engine this layer is bound to.
    pub fn engine(&self) -> Option<&EngineHandle> {
        self.engine.as_ref()
    }

    /// `true` when bound to `engine`.
    pub fn is_bound_to(&self, engine: &EngineHandle) -> bool {
        self.engine.as_ref().is_some_and(|e| e.same(engine))
    }

    /// `layer-id` attribute.
    pub fn layer_id(&self) -> Option<&str> {
        self.attributes.get("layer-id")
    }

    /// `source` attribute.
    pub fn source(&self) -> Option<&str> {
        self.attributes.get("source")
    }

    /// `source-layer` attribute.
    pub fn source_layer(&self) -> Option<&str> {
        self.attributes.get("source-layer")
    }

    /// Decoded `filter` attribute, `null` when absent.
    pub fn filter(&self) -> Result<Value, ElementError> {
        Ok(decode_attribute(self.attributes.get("filter"))?)
    }

    /// Write the `filter` attribute.
    pub fn set_filter(&mut self, filter: &Value) -> Result<(), ElementError> {
        self.set_attribute("filter", &encode(filter))
    }

    /// Current value of a paint or layout property, by attribute name or
    /// camelCase property name.
    pub fn property(&self, name: &str) -> Result<Value, ElementError> {
        let descriptor = self.descriptor(name)?;
        Ok(accessor::read(&self.attributes, descriptor)?)
    }

    /// Set a paint or layout property, by attribute name or camelCase name.
    pub fn set_property(&mut self, name: &str, value: &Value) -> Result<(), ElementError> {
        let descriptor = self.descriptor(name)?;
        accessor::write(self, descriptor, value)
    }

    /// Full specification as the engine would receive it now.
    pub fn specification(&self) -> Result<LayerSpec, ElementError> {
        let table = self.kind.spec();
        let filter = self.attributes.get("filter").map(decode).transpose()?;
        Ok(LayerSpec {
            kind: table.type_tag.to_owned(),
            id: self.layer_id().map(str::to_owned),
            source: non_empty(self.source()),
            source_layer: non_empty(self.source_layer()),
            filter,
            paint: accessor::fold(&self.attributes, table.paint)?,
            layout: accessor::fold(&self.attributes, table.layout)?,
        })
    }

    /// Submit this layer to `engine`.
    ///
    /// Rebinding to the engine already held is a no-op; a detached layer
    /// never binds again. Buffered listeners are subscribed after the layer
    /// is registered.
    pub fn bind(&mut self, engine: &EngineHandle) -> Result<(), ElementError> {
        if self.lifecycle == Lifecycle::Detached {
            warn!(layer_id = ?self.layer_id(), "detached layer asked to bind");
            return Ok(());
        }
        if self.is_bound_to(engine) {
            return Ok(());
        }
        let spec = self.specification()?;
        engine.borrow_mut().add_layer(&spec)?;
        self.engine = Some(engine.clone());
        self.lifecycle = Lifecycle::Attached;
        let scope = spec.id;
        let drained = self.listeners.drain_into(engine, scope.as_deref());
        debug!(
            layer_id = ?scope,
            kind = self.kind.type_tag(),
            listeners = drained,
            "layer bound"
        );
        Ok(())
    }

    /// Insertion into a container: mark for the layers slot.
    pub fn connect(&mut self) {
        self.attributes.set("slot", LAYERS_SLOT.to_owned());
    }

    /// Removal from the document. Retracts the layer if it was ever bound.
    pub fn disconnect(&mut self) -> Result<(), ElementError> {
        let previous = std::mem::replace(&mut self.lifecycle, Lifecycle::Detached);
        let Some(engine) = self.engine.take() else {
            return Ok(());
        };
        if previous == Lifecycle::Attached {
            let id = self.layer_id().unwrap_or_default();
            engine.borrow_mut().remove_layer(id)?;
            debug!(layer_id = id, "layer removed");
        }
        Ok(())
    }

    /// Subscribe to an interaction event on this layer.
    pub fn add_event_listener(
        &mut self,
        event: &str,
        listener: Listener,
    ) -> Result<(), ElementError> {
        if !is_layer_event(event) {
            return Err(ElementError::UnsupportedEvent(event.to_owned()));
        }
        let scope = self.attributes.get("layer-id");
        self.listeners
            .register(self.engine.as_ref(), scope, event, listener);
        Ok(())
    }

    /// Drop a subscription made with [`LayerElement::add_event_listener`].
    pub fn remove_event_listener(
        &mut self,
        event: &str,
        listener: &Listener,
    ) -> Result<(), ElementError> {
        if !is_layer_event(event) {
            return Err(ElementError::UnsupportedEvent(event.to_owned()));
        }
        let scope = self.attributes.get("layer-id");
        self.listeners
            .unregister(self.engine.as_ref(), scope, event, listener);
        Ok(())
    }

    /// Listener registrations still waiting for an engine.
    pub fn pending_listeners(&self) -> usize {
        self.listeners.pending()
    }

    fn descriptor(&self, name: &str) -> Result<&'static PropertyDescriptor, ElementError> {
        let table = self.kind.spec();
        table
            .lookup(name)
            .or_else(|| table.lookup_camel(name))
            .map(|(_, descriptor)| descriptor)
            .ok_or_else(|| ElementError::UnknownProperty(name.to_owned()))
    }
}

impl CustomElement for LayerElement {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn is_observed(&self, name: &str) -> bool {
        self.kind.spec().lookup(name).is_some()
    }

    fn attribute_changed(
        &mut self,
        name: &str,
        _old: Option<&str>,
        new: Option<&str>,
    ) -> Result<(), ElementError> {
        if self.lifecycle != Lifecycle::Attached {
            return Ok(());
        }
        let Some(engine) = self.engine.as_ref() else {
            return Ok(());
        };
        let Some((class, _)) = self.kind.spec().lookup(name) else {
            return Ok(());
        };
        let value = decode_attribute(new)?;
        let layer_id = self.attributes.get("layer-id").unwrap_or_default();
        trace!(layer_id, name, ?class, %value, "layer property update");
        let mut engine = engine.borrow_mut();
        match class {
            PropertyClass::Paint => engine.set_paint_property(layer_id, name, &value)?,
            PropertyClass::Layout => engine.set_layout_property(layer_id, name, &value)?,
        }
        Ok(())
    }
}

impl fmt::Debug for LayerElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerElement")
            .field("kind", &self.kind)
            .field("layer_id", &self.layer_id())
            .field("lifecycle", &self.lifecycle)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_owned)
}
