// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Engine events and listener types.

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::LngLat;

/// Event delivered by the engine to a subscribed [`Listener`].
#[derive(Clone, Debug, PartialEq)]
pub struct MapEvent {
    /// Event name (`click`, `mousemove`, `zoomend`, ...).
    pub name: String,
    /// Layer the event was scoped to, if any.
    pub layer_id: Option<String>,
    /// Pointer location for interaction events.
    pub lng_lat: Option<LngLat>,
    /// Rendered features under the pointer (GeoJSON values).
    pub features: Vec<Value>,
}

impl MapEvent {
    /// Unscoped event with no location and no features.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layer_id: None,
            lng_lat: None,
            features: Vec::new(),
        }
    }

    /// Scope the event to a layer.
    pub fn on_layer(mut self, layer_id: impl Into<String>) -> Self {
        self.layer_id = Some(layer_id.into());
        self
    }
}

/// Engine subscription callback.
///
/// Listener identity is pointer identity: `off` removes the registration made
/// with the same `Rc`.
pub type Listener = Rc<dyn Fn(&MapEvent)>;

/// Lifecycle and camera notifications the map root reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineEvent {
    /// The engine finished loading its style and can accept sources/layers.
    Load,
    /// A zoom gesture or animation ended.
    ZoomEnd,
    /// A pan gesture or animation ended.
    MoveEnd,
    /// A rotation gesture or animation ended.
    RotateEnd,
    /// A pitch gesture or animation ended.
    PitchEnd,
}

impl EngineEvent {
    /// Every event, in wiring order.
    pub const ALL: [Self; 5] = [
        Self::Load,
        Self::ZoomEnd,
        Self::MoveEnd,
        Self::RotateEnd,
        Self::PitchEnd,
    ];

    /// Wire name used by the engine's subscription API.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::ZoomEnd => "zoomend",
            Self::MoveEnd => "moveend",
            Self::RotateEnd => "rotateend",
            Self::PitchEnd => "pitchend",
        }
    }

    /// Parse a wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }
}

impl fmt::Display for EngineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
