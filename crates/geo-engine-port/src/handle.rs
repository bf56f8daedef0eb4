// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared, identity-compared reference to one live engine.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::MapEngine;

/// Non-owning view of a live engine, cloned down to sources and layers.
///
/// Clones point at the same engine; [`EngineHandle::same`] compares by
/// identity, which is what the bind guards of elements rely on.
#[derive(Clone)]
pub struct EngineHandle(Rc<RefCell<dyn MapEngine>>);

impl EngineHandle {
    /// Wrap an engine that nobody else holds.
    pub fn new<E: MapEngine + 'static>(engine: E) -> Self {
        Self(Rc::new(RefCell::new(engine)))
    }

    /// Wrap an engine the caller keeps a typed reference to (tests, adapters).
    pub fn from_shared<E: MapEngine + 'static>(engine: Rc<RefCell<E>>) -> Self {
        Self(engine)
    }

    /// `true` when both handles refer to the same engine instance.
    pub fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Immutable access for camera getters.
    ///
    /// Panics if the engine is already mutably borrowed (a re-entrant call
    /// from inside an engine callback).
    pub fn borrow(&self) -> Ref<'_, dyn MapEngine> {
        self.0.borrow()
    }

    /// Mutable access for one engine call.
    pub fn borrow_mut(&self) -> RefMut<'_, dyn MapEngine> {
        self.0.borrow_mut()
    }
}

impl fmt::Debug for EngineHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EngineHandle")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}
