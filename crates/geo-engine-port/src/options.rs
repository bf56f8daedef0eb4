// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Engine construction options.

use serde::{Deserialize, Serialize};

use crate::LngLat;

/// Options handed to [`EngineFactory::create`](crate::EngineFactory::create).
///
/// The map root fills these from its attributes at attach time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    /// Style reference (URL or style id). Omitted when the element has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Initial center.
    pub center: LngLat,
    /// Initial zoom.
    pub zoom: f64,
    /// Initial bearing.
    pub bearing: f64,
    /// Initial pitch.
    pub pitch: f64,
    /// Whether user interaction handlers are enabled.
    pub interactive: bool,
    /// Engine access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Lower zoom bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_zoom: Option<f64>,
    /// Upper zoom bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<f64>,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            style: None,
            center: LngLat::default(),
            zoom: 0.0,
            bearing: 0.0,
            pitch: 0.0,
            interactive: true,
            access_token: None,
            min_zoom: None,
            max_zoom: None,
        }
    }
}
