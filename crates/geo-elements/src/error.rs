// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for element operations.

use geo_engine_codec::CodecError;
use geo_engine_port::EngineError;
use thiserror::Error;

/// Errors surfaced by element operations.
///
/// Codec and engine failures pass through unmodified; nothing here is
/// retried or defaulted.
#[derive(Debug, Error)]
pub enum ElementError {
    /// An attribute could not be decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),
    /// The engine rejected a call.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// Layers only forward interaction events to the engine.
    #[error("{0:?} is not a layer interaction event")]
    UnsupportedEvent(String),
    /// Property name not in the layer kind's tables.
    #[error("unknown property {0:?}")]
    UnknownProperty(String),
    /// Tag name not defined in the registry.
    #[error("unknown element {0:?}")]
    UnknownElement(String),
    /// Numeric attribute that does not parse.
    #[error("attribute {name} is not a number: {raw:?}")]
    InvalidNumber {
        /// Attribute name.
        name: String,
        /// Raw attribute text.
        raw: String,
    },
}
