// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mock engine for headless testing of element wiring.
//!
//! MockEngine records every port call in order and tracks the resulting
//! engine state (sources, layers, camera, subscriptions) without rendering.
//! Use it to verify call sequences, redundant-call suppression and ordering.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use geo_engine_port::{
    CameraState, EngineError, EngineFactory, EngineHandle, LayerSpec, Listener, LngLat, MapEngine,
    MapEvent, MapOptions, SourceData, SourceHandle, SourceSpec,
};
use serde_json::Value;

/// One recorded port call.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineCall {
    /// `set_zoom`.
    SetZoom(f64),
    /// `set_center`.
    SetCenter(LngLat),
    /// `set_bearing`.
    SetBearing(f64),
    /// `set_pitch`.
    SetPitch(f64),
    /// `add_source`.
    AddSource {
        /// Source id.
        id: String,
        /// Registration payload.
        spec: SourceSpec,
    },
    /// `get_source(id).set_data(data)`.
    SetData {
        /// Source id.
        id: String,
        /// Replacement payload.
        data: SourceData,
    },
    /// `remove_source`.
    RemoveSource(String),
    /// `add_layer`.
    AddLayer(LayerSpec),
    /// `set_paint_property`.
    SetPaintProperty {
        /// Layer id.
        layer_id: String,
        /// Property name.
        name: String,
        /// New value.
        value: Value,
    },
    /// `set_layout_property`.
    SetLayoutProperty {
        /// Layer id.
        layer_id: String,
        /// Property name.
        name: String,
        /// New value.
        value: Value,
    },
    /// `remove_layer`.
    RemoveLayer(String),
    /// `on`.
    On {
        /// Event name.
        event: String,
        /// Layer scope.
        layer_id: Option<String>,
    },
    /// `off`.
    Off {
        /// Event name.
        event: String,
        /// Layer scope.
        layer_id: Option<String>,
    },
}

impl EngineCall {
    /// `true` for the four camera setters.
    pub const fn is_camera_mutation(&self) -> bool {
        matches!(
            self,
            Self::SetZoom(_) | Self::SetCenter(_) | Self::SetBearing(_) | Self::SetPitch(_)
        )
    }
}

type Journal = Rc<RefCell<Vec<EngineCall>>>;

/// Engine-side GeoJSON source tracked by [`MockEngine`].
#[derive(Debug)]
pub struct MockSource {
    id: String,
    /// Current payload.
    pub data: SourceData,
    journal: Journal,
}

impl SourceHandle for MockSource {
    fn set_data(&mut self, data: &SourceData) -> Result<(), EngineError> {
        self.journal.borrow_mut().push(EngineCall::SetData {
            id: self.id.clone(),
            data: data.clone(),
        });
        self.data = data.clone();
        Ok(())
    }
}

struct Subscription {
    event: String,
    layer_id: Option<String>,
    listener: Listener,
}

/// Mock map engine for testing.
///
/// Lenient by default, like a bare stub: unknown ids are recorded, not
/// rejected. [`MockEngine::strict`] turns on the checks a real engine makes
/// (duplicate ids, layers referencing unregistered sources, removing a source
/// still in use).
#[derive(Default)]
pub struct MockEngine {
    journal: Journal,
    /// Options the engine was created with.
    pub options: MapOptions,
    /// Current camera.
    pub camera: CameraState,
    sources: BTreeMap<String, MockSource>,
    layers: Vec<LayerSpec>,
    subscriptions: Vec<Subscription>,
    strict: bool,
}

impl MockEngine {
    /// Create a lenient mock engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock engine that rejects inconsistent calls.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Create an engine from construction options, seeding the camera.
    pub fn with_options(options: MapOptions, strict: bool) -> Self {
        Self {
            camera: CameraState {
                center: options.center,
                zoom: options.zoom,
                bearing: options.bearing,
                pitch: options.pitch,
            },
            options,
            strict,
            ..Self::default()
        }
    }

    /// Every recorded call, in order.
    pub fn calls(&self) -> Vec<EngineCall> {
        self.journal.borrow().clone()
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&EngineCall) -> bool) -> usize {
        self.journal.borrow().iter().filter(|c| pred(c)).count()
    }

    /// Forget recorded calls (state is kept).
    pub fn clear_calls(&self) {
        self.journal.borrow_mut().clear();
    }

    /// Every `add_layer` payload, in order.
    pub fn added_layers(&self) -> Vec<LayerSpec> {
        self.journal
            .borrow()
            .iter()
            .filter_map(|c| match c {
                EngineCall::AddLayer(spec) => Some(spec.clone()),
                _ => None,
            })
            .collect()
    }

    /// Registered source payload.
    pub fn source_data(&self, id: &str) -> Option<&SourceData> {
        self.sources.get(id).map(|s| &s.data)
    }

    /// Number of registered sources.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Current state of a registered layer, with applied property updates.
    pub fn layer(&self, id: &str) -> Option<&LayerSpec> {
        self.layers.iter().find(|l| l.id.as_deref() == Some(id))
    }

    /// Number of registered layers.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Number of live subscriptions for `event` with the given scope.
    pub fn subscription_count(&self, event: &str, layer_id: Option<&str>) -> usize {
        self.subscriptions
            .iter()
            .filter(|s| s.event == event && s.layer_id.as_deref() == layer_id)
            .count()
    }

    /// Simulate a user gesture moving the camera without going through the
    /// recorded setters.
    pub fn move_camera(&mut self, camera: CameraState) {
        self.camera = camera;
    }

    /// Deliver `event` to every matching subscriber and return how many ran.
    ///
    /// Listeners are collected first and invoked after the borrow is released,
    /// so a listener may call back into the engine.
    pub fn emit(engine: &RefCell<Self>, event: &MapEvent) -> usize {
        let listeners: Vec<Listener> = engine
            .borrow()
            .subscriptions
            .iter()
            .filter(|s| s.event == event.name && s.layer_id == event.layer_id)
            .map(|s| Rc::clone(&s.listener))
            .collect();
        for listener in &listeners {
            listener(event);
        }
        listeners.len()
    }

    fn record(&self, call: EngineCall) {
        self.journal.borrow_mut().push(call);
    }

    fn layer_mut(&mut self, id: &str) -> Result<Option<&mut LayerSpec>, EngineError> {
        let strict = self.strict;
        match self.layers.iter_mut().find(|l| l.id.as_deref() == Some(id)) {
            Some(layer) => Ok(Some(layer)),
            None if strict => Err(EngineError::UnknownLayer(id.to_owned())),
            None => Ok(None),
        }
    }
}

impl fmt::Debug for MockEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockEngine")
            .field("camera", &self.camera)
            .field("sources", &self.sources.keys().collect::<Vec<_>>())
            .field("layers", &self.layers.len())
            .field("subscriptions", &self.subscriptions.len())
            .field("strict", &self.strict)
            .finish_non_exhaustive()
    }
}

impl MapEngine for MockEngine {
    fn zoom(&self) -> f64 {
        self.camera.zoom
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.record(EngineCall::SetZoom(zoom));
        self.camera.zoom = zoom;
    }

    fn center(&self) -> LngLat {
        self.camera.center
    }

    fn set_center(&mut self, center: LngLat) {
        self.record(EngineCall::SetCenter(center));
        self.camera.center = center;
    }

    fn bearing(&self) -> f64 {
        self.camera.bearing
    }

    fn set_bearing(&mut self, bearing: f64) {
        self.record(EngineCall::SetBearing(bearing));
        self.camera.bearing = bearing;
    }

    fn pitch(&self) -> f64 {
        self.camera.pitch
    }

    fn set_pitch(&mut self, pitch: f64) {
        self.record(EngineCall::SetPitch(pitch));
        self.camera.pitch = pitch;
    }

    fn add_source(&mut self, id: &str, source: &SourceSpec) -> Result<(), EngineError> {
        self.record(EngineCall::AddSource {
            id: id.to_owned(),
            spec: source.clone(),
        });
        if self.sources.contains_key(id) && self.strict {
            return Err(EngineError::DuplicateSource(id.to_owned()));
        }
        self.sources.insert(
            id.to_owned(),
            MockSource {
                id: id.to_owned(),
                data: source.data.clone(),
                journal: Rc::clone(&self.journal),
            },
        );
        Ok(())
    }

    fn get_source(&mut self, id: &str) -> Option<&mut dyn SourceHandle> {
        self.sources
            .get_mut(id)
            .map(|s| s as &mut dyn SourceHandle)
    }

    fn remove_source(&mut self, id: &str) -> Result<(), EngineError> {
        self.record(EngineCall::RemoveSource(id.to_owned()));
        if self.strict {
            if !self.sources.contains_key(id) {
                return Err(EngineError::UnknownSource(id.to_owned()));
            }
            if self.layers.iter().any(|l| l.source.as_deref() == Some(id)) {
                return Err(EngineError::Backend(format!(
                    "source {id} is still used by a layer"
                )));
            }
        }
        self.sources.remove(id);
        Ok(())
    }

    fn add_layer(&mut self, spec: &LayerSpec) -> Result<(), EngineError> {
        self.record(EngineCall::AddLayer(spec.clone()));
        if self.strict {
            let id = spec.id.clone().unwrap_or_default();
            if self.layer(&id).is_some() {
                return Err(EngineError::DuplicateLayer(id));
            }
            if let Some(source) = &spec.source {
                if !self.sources.contains_key(source) {
                    return Err(EngineError::UnknownSource(source.clone()));
                }
            }
        }
        self.layers.push(spec.clone());
        Ok(())
    }

    fn set_paint_property(
        &mut self,
        layer_id: &str,
        name: &str,
        value: &Value,
    ) -> Result<(), EngineError> {
        self.record(EngineCall::SetPaintProperty {
            layer_id: layer_id.to_owned(),
            name: name.to_owned(),
            value: value.clone(),
        });
        if let Some(layer) = self.layer_mut(layer_id)? {
            layer.paint.insert(name.to_owned(), value.clone());
        }
        Ok(())
    }

    fn set_layout_property(
        &mut self,
        layer_id: &str,
        name: &str,
        value: &Value,
    ) -> Result<(), EngineError> {
        self.record(EngineCall::SetLayoutProperty {
            layer_id: layer_id.to_owned(),
            name: name.to_owned(),
            value: value.clone(),
        });
        if let Some(layer) = self.layer_mut(layer_id)? {
            layer.layout.insert(name.to_owned(), value.clone());
        }
        Ok(())
    }

    fn remove_layer(&mut self, id: &str) -> Result<(), EngineError> {
        self.record(EngineCall::RemoveLayer(id.to_owned()));
        let before = self.layers.len();
        self.layers.retain(|l| l.id.as_deref() != Some(id));
        if self.strict && self.layers.len() == before {
            return Err(EngineError::UnknownLayer(id.to_owned()));
        }
        Ok(())
    }

    fn on(&mut self, event: &str, layer_id: Option<&str>, listener: Listener) {
        self.record(EngineCall::On {
            event: event.to_owned(),
            layer_id: layer_id.map(str::to_owned),
        });
        self.subscriptions.push(Subscription {
            event: event.to_owned(),
            layer_id: layer_id.map(str::to_owned),
            listener,
        });
    }

    fn off(&mut self, event: &str, layer_id: Option<&str>, listener: &Listener) {
        self.record(EngineCall::Off {
            event: event.to_owned(),
            layer_id: layer_id.map(str::to_owned),
        });
        self.subscriptions.retain(|s| {
            !(s.event == event
                && s.layer_id.as_deref() == layer_id
                && Rc::ptr_eq(&s.listener, listener))
        });
    }
}

/// Factory producing [`MockEngine`]s and keeping typed references to them.
#[derive(Debug, Default)]
pub struct MockFactory {
    created: RefCell<Vec<Rc<RefCell<MockEngine>>>>,
    strict: bool,
}

impl MockFactory {
    /// Factory for lenient engines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory for strict engines.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Number of engines created so far.
    pub fn created_count(&self) -> usize {
        self.created.borrow().len()
    }

    /// Most recently created engine.
    pub fn last(&self) -> Option<Rc<RefCell<MockEngine>>> {
        self.created.borrow().last().cloned()
    }
}

impl EngineFactory for MockFactory {
    fn create(&self, options: &MapOptions) -> Result<EngineHandle, EngineError> {
        let engine = Rc::new(RefCell::new(MockEngine::with_options(
            options.clone(),
            self.strict,
        )));
        self.created.borrow_mut().push(Rc::clone(&engine));
        Ok(EngineHandle::from_shared(engine))
    }
}
