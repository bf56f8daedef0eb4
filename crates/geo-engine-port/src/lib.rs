// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Map engine port contract for declarative geo elements.
//!
//! This crate defines the boundary between the element layer and an
//! interactive map rendering engine. It contains NO element logic and NO
//! attribute codec—those live in `geo-elements` and `geo-engine-codec`.
//!
//! # Design Principles
//!
//! - **Engines are black boxes** — They receive sources, layers and
//!   per-property updates. Rendering, tiling and projection stay behind the port.
//! - **One owner, many borrowers** — The map root owns the engine; sources and
//!   layers hold an [`EngineHandle`] and compare it by identity.
//! - **Single-threaded** — Every call happens synchronously inside a UI event
//!   callback, so the handle is `Rc<RefCell<_>>`, not `Arc<Mutex<_>>`.

use thiserror::Error;

/// Error type for engine-side mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A source with this id is already registered.
    #[error("source already exists: {0}")]
    DuplicateSource(String),
    /// No source registered under this id.
    #[error("unknown source: {0}")]
    UnknownSource(String),
    /// A layer with this id is already registered.
    #[error("layer already exists: {0}")]
    DuplicateLayer(String),
    /// No layer registered under this id.
    #[error("unknown layer: {0}")]
    UnknownLayer(String),
    /// A backend-specific error occurred.
    #[error("backend error: {0}")]
    Backend(String),
}

mod camera;
mod event;
mod handle;
mod options;
mod port;
mod spec;

pub use camera::{CameraState, LngLat};
pub use event::{EngineEvent, Listener, MapEvent};
pub use handle::EngineHandle;
pub use options::MapOptions;
pub use port::{EngineFactory, MapEngine, SourceHandle};
pub use spec::{LayerSpec, SourceData, SourceSpec, GEOJSON_SOURCE_TYPE};
