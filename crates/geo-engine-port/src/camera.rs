// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Camera state types shared by the map root and the engine.

use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

impl LngLat {
    /// Create a coordinate from longitude and latitude.
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// `[lng, lat]`, the engine's array form.
    pub const fn to_array(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl From<[f64; 2]> for LngLat {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

/// Camera values mirrored between the map root attributes and the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// Map center.
    pub center: LngLat,
    /// Zoom level.
    pub zoom: f64,
    /// Bearing in degrees, clockwise from north.
    pub bearing: f64,
    /// Pitch in degrees, away from the vertical.
    pub pitch: f64,
}
