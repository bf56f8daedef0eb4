// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Map engine port traits.

use serde_json::Value;

use crate::{
    EngineError, EngineHandle, LayerSpec, Listener, LngLat, MapOptions, SourceData, SourceSpec,
};

/// Map engine port trait.
///
/// Implementors own rendering, tiling and projection. The element layer only
/// shapes configuration objects and forwards them here.
///
/// # Design
///
/// This trait is a hexagonal port. The element layer drives it; adapters
/// (a browser engine binding, the headless mock) implement it. Every call is a
/// one-shot mutation: callers never retry, and engine errors are surfaced
/// unmodified.
pub trait MapEngine {
    /// Current zoom level.
    fn zoom(&self) -> f64;
    /// Jump to a zoom level.
    fn set_zoom(&mut self, zoom: f64);
    /// Current map center.
    fn center(&self) -> LngLat;
    /// Jump to a center.
    fn set_center(&mut self, center: LngLat);
    /// Current bearing.
    fn bearing(&self) -> f64;
    /// Rotate to a bearing.
    fn set_bearing(&mut self, bearing: f64);
    /// Current pitch.
    fn pitch(&self) -> f64;
    /// Tilt to a pitch.
    fn set_pitch(&mut self, pitch: f64);

    /// Register a source under `id`.
    fn add_source(&mut self, id: &str, source: &SourceSpec) -> Result<(), EngineError>;
    /// Look up a registered source.
    fn get_source(&mut self, id: &str) -> Option<&mut dyn SourceHandle>;
    /// Deregister a source.
    fn remove_source(&mut self, id: &str) -> Result<(), EngineError>;

    /// Submit a full layer specification.
    fn add_layer(&mut self, spec: &LayerSpec) -> Result<(), EngineError>;
    /// Update one paint property of a layer.
    fn set_paint_property(
        &mut self,
        layer_id: &str,
        name: &str,
        value: &Value,
    ) -> Result<(), EngineError>;
    /// Update one layout property of a layer.
    fn set_layout_property(
        &mut self,
        layer_id: &str,
        name: &str,
        value: &Value,
    ) -> Result<(), EngineError>;
    /// Remove a layer.
    fn remove_layer(&mut self, id: &str) -> Result<(), EngineError>;

    /// Subscribe to an event, optionally scoped to a layer.
    fn on(&mut self, event: &str, layer_id: Option<&str>, listener: Listener);
    /// Drop a subscription made with the same arguments.
    fn off(&mut self, event: &str, layer_id: Option<&str>, listener: &Listener);
}

/// Engine-side source object returned by [`MapEngine::get_source`].
pub trait SourceHandle {
    /// Replace the source payload in place.
    fn set_data(&mut self, data: &SourceData) -> Result<(), EngineError>;
}

/// Engine constructor (`createInstance`).
pub trait EngineFactory {
    /// Create one live engine instance.
    fn create(&self, options: &MapOptions) -> Result<EngineHandle, EngineError>;
}
