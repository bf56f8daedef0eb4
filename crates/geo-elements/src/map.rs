// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Map root coordinator.
//!
//! The map root owns the engine. It creates it on connection, wires the
//! projected sources and top-level layers once the engine reports ready, and
//! keeps its camera attributes converged with the engine's live camera.
//!
//! Camera attributes and the engine camera feed each other: a camera-end
//! event writes the engine value back into the attribute, and an attribute
//! write pushes the value into the engine. The push is skipped whenever the
//! attribute already matches the live value, which is what ends the cycle.

use std::fmt;

use geo_engine_codec::{decode_attribute, format_number};
use geo_engine_port::{
    EngineEvent, EngineFactory, EngineHandle, Listener, LngLat, MapEngine, MapOptions,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::layer::{LayerElement, LayerRef, LAYERS_SLOT};
use crate::listeners::ListenerQueue;
use crate::slot::Slot;
use crate::source::{GeoJsonSource, SourceRef, SOURCES_SLOT};
use crate::{Attributes, CustomElement, ElementError};

/// Observed camera attributes.
pub const CAMERA_ATTRIBUTES: [&str; 4] = ["zoom", "center", "bearing", "pitch"];

/// Payload of the `camera-change` notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraChange {
    /// Map center.
    pub center: LngLat,
    /// Bearing in degrees.
    pub bearing: f64,
    /// Pitch in degrees.
    pub pitch: f64,
    /// Zoom level.
    pub zoom: f64,
}

type CameraListener = Box<dyn FnMut(&CameraChange)>;

/// Round half up to two decimals, the precision camera attributes carry.
pub fn round_camera(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Attribute text of a center: `lng,lat`.
pub fn format_center(center: LngLat) -> String {
    format!("{},{}", format_number(center.lng), format_number(center.lat))
}

/// `geo-map` element.
pub struct GeoMap {
    attributes: Attributes,
    engine: Option<EngineHandle>,
    loading: bool,
    placeholder: bool,
    observing: bool,
    sources: Slot<GeoJsonSource>,
    layers: Slot<LayerElement>,
    listeners: ListenerQueue,
    camera_listeners: Vec<CameraListener>,
}

impl Default for GeoMap {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoMap {
    /// Fresh map root showing its placeholder.
    pub fn new() -> Self {
        Self {
            attributes: Attributes::new(),
            engine: None,
            loading: true,
            placeholder: true,
            observing: false,
            sources: Slot::new(SOURCES_SLOT),
            layers: Slot::new(LAYERS_SLOT),
            listeners: ListenerQueue::new(),
            camera_listeners: Vec::new(),
        }
    }

    /// Engine owned by this map.
    pub fn engine(&self) -> Option<&EngineHandle> {
        self.engine.as_ref()
    }

    /// `true` until the engine reports ready.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// `true` while the loading placeholder is shown.
    pub fn has_placeholder(&self) -> bool {
        self.placeholder
    }

    /// `true` once slot changes trigger wiring.
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Zoom attribute, `0` when absent.
    pub fn zoom(&self) -> Result<f64, ElementError> {
        parse_number("zoom", self.attributes.get("zoom"))
    }

    /// Write the zoom attribute, rounded to two decimals.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), ElementError> {
        self.set_attribute("zoom", &format_number(round_camera(zoom)))
    }

    /// Center attribute, `(0, 0)` when absent.
    pub fn center(&self) -> Result<LngLat, ElementError> {
        parse_center(self.attributes.get("center"))
    }

    /// Write the center attribute. Coordinates are not rounded.
    pub fn set_center(&mut self, center: LngLat) -> Result<(), ElementError> {
        self.set_attribute("center", &format_center(center))
    }

    /// Bearing attribute, `0` when absent.
    pub fn bearing(&self) -> Result<f64, ElementError> {
        parse_number("bearing", self.attributes.get("bearing"))
    }

    /// Write the bearing attribute, rounded to two decimals.
    pub fn set_bearing(&mut self, bearing: f64) -> Result<(), ElementError> {
        self.set_attribute("bearing", &format_number(round_camera(bearing)))
    }

    /// Pitch attribute, `0` when absent.
    pub fn pitch(&self) -> Result<f64, ElementError> {
        parse_number("pitch", self.attributes.get("pitch"))
    }

    /// Write the pitch attribute, rounded to two decimals.
    pub fn set_pitch(&mut self, pitch: f64) -> Result<(), ElementError> {
        self.set_attribute("pitch", &format_number(round_camera(pitch)))
    }

    /// Camera as currently reflected in attributes.
    pub fn camera(&self) -> Result<CameraChange, ElementError> {
        Ok(CameraChange {
            center: self.center()?,
            bearing: self.bearing()?,
            pitch: self.pitch()?,
            zoom: self.zoom()?,
        })
    }

    /// `mb-style` attribute.
    pub fn style(&self) -> Option<&str> {
        self.attributes.get("mb-style")
    }

    /// `access-token` attribute.
    pub fn access_token(&self) -> Option<&str> {
        self.attributes.get("access-token")
    }

    /// `interactive` attribute. Absent means `true`; only a decoded `false`
    /// turns interaction off.
    pub fn interactive(&self) -> Result<bool, ElementError> {
        Ok(!matches!(
            decode_attribute(self.attributes.get("interactive"))?,
            Value::Bool(false)
        ))
    }

    /// `min-zoom` attribute.
    pub fn min_zoom(&self) -> Result<Option<f64>, ElementError> {
        self.optional_number("min-zoom")
    }

    /// `max-zoom` attribute.
    pub fn max_zoom(&self) -> Result<Option<f64>, ElementError> {
        self.optional_number("max-zoom")
    }

    /// Engine construction options derived from the attributes.
    pub fn options(&self) -> Result<MapOptions, ElementError> {
        Ok(MapOptions {
            style: self.style().map(str::to_owned),
            center: self.center()?,
            zoom: self.zoom()?,
            bearing: self.bearing()?,
            pitch: self.pitch()?,
            interactive: self.interactive()?,
            access_token: self.access_token().map(str::to_owned),
            min_zoom: self.min_zoom()?,
            max_zoom: self.max_zoom()?,
        })
    }

    /// Insertion into the document: create the engine.
    ///
    /// A map that already owns an engine keeps it. Buffered map-level
    /// listeners are subscribed to the new engine, unscoped.
    pub fn connect(&mut self, factory: &dyn EngineFactory) -> Result<(), ElementError> {
        if self.engine.is_some() {
            return Ok(());
        }
        let options = self.options()?;
        let engine = factory.create(&options)?;
        let drained = self.listeners.drain_into(&engine, None);
        self.engine = Some(engine);
        debug!(
            zoom = options.zoom,
            center = %format_center(options.center),
            style = ?options.style,
            listeners = drained,
            "map engine created"
        );
        Ok(())
    }

    /// Removal from the document: stop wiring and release the engine.
    /// Children keep their own references.
    pub fn disconnect(&mut self) {
        self.observing = false;
        if self.engine.take().is_some() {
            debug!("map engine released");
        }
    }

    /// Deliver an engine notification.
    ///
    /// `Load` wires projected children; camera-end events reflect the live
    /// camera into attributes and then notify `camera-change` subscribers.
    pub fn handle_engine_event(&mut self, event: EngineEvent) -> Result<(), ElementError> {
        let Some(engine) = self.engine.clone() else {
            return Ok(());
        };
        match event {
            EngineEvent::Load => return self.on_load(),
            EngineEvent::ZoomEnd => {
                let zoom = engine.borrow().zoom();
                self.set_zoom(zoom)?;
            }
            EngineEvent::MoveEnd => {
                let center = engine.borrow().center();
                self.set_center(center)?;
            }
            EngineEvent::RotateEnd => {
                let bearing = engine.borrow().bearing();
                self.set_bearing(bearing)?;
            }
            EngineEvent::PitchEnd => {
                let pitch = engine.borrow().pitch();
                self.set_pitch(pitch)?;
            }
        }
        self.emit_camera_change()
    }

    /// Subscribe to `camera-change` notifications.
    pub fn on_camera_change(&mut self, listener: impl FnMut(&CameraChange) + 'static) {
        self.camera_listeners.push(Box::new(listener));
    }

    /// Subscribe to a map-level engine event, buffered until the engine
    /// exists.
    pub fn add_event_listener(&mut self, event: &str, listener: Listener) {
        self.listeners
            .register(self.engine.as_ref(), None, event, listener);
    }

    /// Drop a map-level subscription.
    pub fn remove_event_listener(&mut self, event: &str, listener: &Listener) {
        self.listeners
            .unregister(self.engine.as_ref(), None, event, listener);
    }

    /// Project a source into the sources slot.
    pub fn append_source(&mut self, source: SourceRef) -> Result<(), ElementError> {
        source.borrow_mut().connect();
        if self.sources.assign(source) && self.observing {
            self.wire_sources()?;
        }
        Ok(())
    }

    /// Remove a source from the document.
    pub fn remove_source(&mut self, source: &SourceRef) -> Result<(), ElementError> {
        if self.sources.withdraw(source) {
            source.borrow_mut().disconnect()?;
        }
        Ok(())
    }

    /// Project a top-level layer into the layers slot.
    pub fn append_layer(&mut self, layer: LayerRef) -> Result<(), ElementError> {
        layer.borrow_mut().connect();
        if self.layers.assign(layer) && self.observing {
            self.wire_layers()?;
        }
        Ok(())
    }

    /// Remove a top-level layer from the document.
    pub fn remove_layer(&mut self, layer: &LayerRef) -> Result<(), ElementError> {
        if self.layers.withdraw(layer) {
            layer.borrow_mut().disconnect()?;
        }
        Ok(())
    }

    /// Projected sources.
    pub fn sources(&self) -> &Slot<GeoJsonSource> {
        &self.sources
    }

    /// Projected top-level layers.
    pub fn layers(&self) -> &Slot<LayerElement> {
        &self.layers
    }

    fn on_load(&mut self) -> Result<(), ElementError> {
        self.placeholder = false;
        self.loading = false;
        self.observing = true;
        debug!(
            sources = self.sources.len(),
            layers = self.layers.len(),
            "map loaded"
        );
        self.wire_sources()?;
        self.wire_layers()
    }

    fn wire_sources(&self) -> Result<(), ElementError> {
        let Some(engine) = self.engine.as_ref() else {
            return Ok(());
        };
        for source in self.sources.assigned() {
            let mut source = source.borrow_mut();
            if source.has_attribute("source-id") {
                source.bind(engine)?;
            }
        }
        Ok(())
    }

    fn wire_layers(&self) -> Result<(), ElementError> {
        let Some(engine) = self.engine.as_ref() else {
            return Ok(());
        };
        for layer in self.layers.assigned() {
            let mut layer = layer.borrow_mut();
            if layer.has_attribute("source") && layer.has_attribute("layer-id") {
                layer.bind(engine)?;
            }
        }
        Ok(())
    }

    fn emit_camera_change(&mut self) -> Result<(), ElementError> {
        let change = self.camera()?;
        for listener in &mut self.camera_listeners {
            listener(&change);
        }
        Ok(())
    }

    fn optional_number(&self, name: &str) -> Result<Option<f64>, ElementError> {
        self.attributes
            .get(name)
            .map(|raw| parse_number(name, Some(raw)))
            .transpose()
    }
}

impl CustomElement for GeoMap {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn is_observed(&self, name: &str) -> bool {
        CAMERA_ATTRIBUTES.contains(&name)
    }

    // Exact comparison with the live value is what ends a reflection cycle.
    #[allow(clippy::float_cmp)]
    fn attribute_changed(
        &mut self,
        name: &str,
        _old: Option<&str>,
        new: Option<&str>,
    ) -> Result<(), ElementError> {
        let Some(engine) = self.engine.as_ref() else {
            return Ok(());
        };
        if name == "center" {
            let live = format_center(engine.borrow().center());
            if new != Some(live.as_str()) {
                let center = parse_center(new)?;
                trace!(from = %live, to = ?new, "center pushed to engine");
                engine.borrow_mut().set_center(center);
            }
            return Ok(());
        }
        let Some(field) = CameraScalar::from_name(name) else {
            return Ok(());
        };
        let value = parse_number(name, new)?;
        let live = field.live(&*engine.borrow());
        if value != live {
            trace!(name, live, value, "camera pushed to engine");
            field.apply(&mut *engine.borrow_mut(), value);
        }
        Ok(())
    }
}

impl fmt::Debug for GeoMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeoMap")
            .field("engine", &self.engine)
            .field("loading", &self.loading)
            .field("observing", &self.observing)
            .field("sources", &self.sources)
            .field("layers", &self.layers)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Copy)]
enum CameraScalar {
    Zoom,
    Bearing,
    Pitch,
}

impl CameraScalar {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "zoom" => Some(Self::Zoom),
            "bearing" => Some(Self::Bearing),
            "pitch" => Some(Self::Pitch),
            _ => None,
        }
    }

    fn live(self, engine: &dyn MapEngine) -> f64 {
        match self {
            Self::Zoom => engine.zoom(),
            Self::Bearing => engine.bearing(),
            Self::Pitch => engine.pitch(),
        }
    }

    fn apply(self, engine: &mut dyn MapEngine, value: f64) {
        match self {
            Self::Zoom => engine.set_zoom(value),
            Self::Bearing => engine.set_bearing(value),
            Self::Pitch => engine.set_pitch(value),
        }
    }
}

// Absent or blank reads as 0.
fn parse_number(name: &str, raw: Option<&str>) -> Result<f64, ElementError> {
    let text = raw.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Ok(0.0);
    }
    text.parse().map_err(|_| ElementError::InvalidNumber {
        name: name.to_owned(),
        raw: text.to_owned(),
    })
}

fn parse_center(raw: Option<&str>) -> Result<LngLat, ElementError> {
    let Some(raw) = raw else {
        return Ok(LngLat::default());
    };
    let parts = raw
        .split(',')
        .map(|part| parse_number("center", Some(part)))
        .collect::<Result<Vec<_>, _>>()?;
    match parts[..] {
        [lng, lat] => Ok(LngLat::new(lng, lat)),
        _ => Err(ElementError::InvalidNumber {
            name: "center".to_owned(),
            raw: raw.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;
    use geo_engine_codec::{EngineCall, MockFactory};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn camera_defaults_when_absent() {
        let map = GeoMap::new();
        assert_eq!(map.camera().unwrap(), CameraChange::default());
        assert!(map.is_loading());
        assert!(map.has_placeholder());
    }

    #[test]
    fn setters_round_to_two_decimals() {
        let mut map = GeoMap::new();
        map.set_zoom(12.3456).unwrap();
        map.set_bearing(-17.125).unwrap();
        map.set_pitch(45.0).unwrap();
        map.set_center(LngLat::new(2.123456, 48.5)).unwrap();
        assert_eq!(map.get_attribute("zoom"), Some("12.35"));
        assert_eq!(map.get_attribute("bearing"), Some("-17.12"));
        assert_eq!(map.get_attribute("pitch"), Some("45"));
        assert_eq!(map.get_attribute("center"), Some("2.123456,48.5"));
        assert_eq!(map.center().unwrap(), LngLat::new(2.123456, 48.5));
    }

    #[test]
    fn malformed_numbers_are_reported() {
        let mut map = GeoMap::new();
        map.set_attribute("zoom", "near").unwrap();
        assert!(matches!(
            map.zoom(),
            Err(ElementError::InvalidNumber { ref name, .. }) if name == "zoom"
        ));
        map.set_attribute("center", "1").unwrap();
        assert!(map.center().is_err());
    }

    #[test]
    fn options_reflect_passthrough_attributes() {
        let mut map = GeoMap::new();
        map.set_attribute("mb-style", "mapbox://styles/mapbox/streets-v11")
            .unwrap();
        map.set_attribute("access-token", "pk.test").unwrap();
        map.set_attribute("interactive", "false").unwrap();
        map.set_attribute("max-zoom", "18").unwrap();
        map.set_attribute("zoom", "3").unwrap();

        let options = map.options().unwrap();
        assert_eq!(
            options.style.as_deref(),
            Some("mapbox://styles/mapbox/streets-v11")
        );
        assert_eq!(options.access_token.as_deref(), Some("pk.test"));
        assert!(!options.interactive);
        assert_eq!(options.min_zoom, None);
        assert_eq!(options.max_zoom, Some(18.0));
        assert_eq!(options.zoom, 3.0);
        assert!(GeoMap::new().interactive().unwrap());
    }

    #[test]
    fn connect_creates_engine_once() {
        let factory = MockFactory::new();
        let mut map = GeoMap::new();
        map.set_attribute("center", "2.35,48.85").unwrap();
        map.connect(&factory).unwrap();
        map.connect(&factory).unwrap();
        assert_eq!(factory.created_count(), 1);
        let engine = factory.last().unwrap();
        assert_eq!(engine.borrow().options.center, LngLat::new(2.35, 48.85));
        assert!(engine.borrow().calls().is_empty());
    }

    #[test]
    fn camera_write_matching_live_value_is_suppressed() {
        let factory = MockFactory::new();
        let mut map = GeoMap::new();
        map.set_attribute("zoom", "4").unwrap();
        map.connect(&factory).unwrap();
        let engine = factory.last().unwrap();

        map.set_zoom(4.0).unwrap();
        map.set_attribute("center", "0,0").unwrap();
        assert_eq!(engine.borrow().count(EngineCall::is_camera_mutation), 0);

        map.set_zoom(5.0).unwrap();
        map.set_pitch(30.0).unwrap();
        map.set_center(LngLat::new(1.5, 2.0)).unwrap();
        assert_eq!(
            engine.borrow().calls(),
            [
                EngineCall::SetZoom(5.0),
                EngineCall::SetPitch(30.0),
                EngineCall::SetCenter(LngLat::new(1.5, 2.0)),
            ]
        );
    }

    #[test]
    fn camera_end_reflects_and_notifies() {
        let factory = MockFactory::new();
        let mut map = GeoMap::new();
        map.connect(&factory).unwrap();
        let engine = factory.last().unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        map.on_camera_change(move |change| sink.borrow_mut().push(*change));

        engine.borrow_mut().camera.center = LngLat::new(-73.5, 40.25);
        map.handle_engine_event(EngineEvent::MoveEnd).unwrap();
        assert_eq!(map.get_attribute("center"), Some("-73.5,40.25"));
        assert_eq!(engine.borrow().count(EngineCall::is_camera_mutation), 0);

        engine.borrow_mut().camera.zoom = 7.0;
        map.handle_engine_event(EngineEvent::ZoomEnd).unwrap();
        assert_eq!(map.zoom().unwrap(), 7.0);
        assert_eq!(engine.borrow().count(EngineCall::is_camera_mutation), 0);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].zoom, 7.0);
        assert_eq!(seen[1].center, LngLat::new(-73.5, 40.25));
    }

    #[test]
    fn map_listeners_queue_until_engine_exists() {
        let factory = MockFactory::new();
        let mut map = GeoMap::new();
        let listener: Listener = Rc::new(|_| {});
        map.add_event_listener("click", Rc::clone(&listener));
        map.connect(&factory).unwrap();
        let engine = factory.last().unwrap();
        assert_eq!(engine.borrow().subscription_count("click", None), 1);
        map.remove_event_listener("click", &listener);
        assert_eq!(engine.borrow().subscription_count("click", None), 0);
    }

    #[test]
    fn load_clears_placeholder_and_starts_observing() {
        let factory = MockFactory::new();
        let mut map = GeoMap::new();
        map.connect(&factory).unwrap();
        map.handle_engine_event(EngineEvent::Load).unwrap();
        assert!(!map.is_loading());
        assert!(!map.has_placeholder());
        assert!(map.is_observing());
        map.disconnect();
        assert!(map.engine().is_none());
        assert!(!map.is_observing());
    }

    #[test]
    fn round_camera_matches_half_up() {
        assert_eq!(round_camera(12.3456), 12.35);
        assert_eq!(round_camera(-0.125), -0.12);
        assert_eq!(round_camera(2.0), 2.0);
    }
}
