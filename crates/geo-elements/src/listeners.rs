// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Listener registrations made before an engine exists.

use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use geo_engine_port::{EngineHandle, Listener};

/// Interaction events a layer forwards to the engine.
pub const LAYER_EVENTS: [&str; 12] = [
    "mouseup",
    "click",
    "dblclick",
    "mousemove",
    "mouseenter",
    "mouseleave",
    "mouseover",
    "mouseout",
    "contextmenu",
    "touchstart",
    "touchend",
    "touchcancel",
];

/// `true` when `event` is a layer interaction event.
pub fn is_layer_event(event: &str) -> bool {
    LAYER_EVENTS.contains(&event)
}

/// FIFO of `(event, listener)` pairs awaiting an engine.
///
/// Registrations are buffered until [`ListenerQueue::drain_into`] runs; from
/// then on they go straight to the engine for as long as one is assigned.
#[derive(Default)]
pub struct ListenerQueue {
    pending: VecDeque<(String, Listener)>,
}

impl ListenerQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`, directly when `engine` is present, else buffered.
    pub fn register(
        &mut self,
        engine: Option<&EngineHandle>,
        scope: Option<&str>,
        event: &str,
        listener: Listener,
    ) {
        match engine {
            Some(engine) => engine.borrow_mut().on(event, scope, listener),
            None => self.pending.push_back((event.to_owned(), listener)),
        }
    }

    /// Drop a registration. A still-buffered entry is removed from the queue
    /// without touching the engine.
    pub fn unregister(
        &mut self,
        engine: Option<&EngineHandle>,
        scope: Option<&str>,
        event: &str,
        listener: &Listener,
    ) {
        let queued = self
            .pending
            .iter()
            .position(|(e, l)| e == event && Rc::ptr_eq(l, listener));
        match (queued, engine) {
            (Some(index), _) => {
                self.pending.remove(index);
            }
            (None, Some(engine)) => engine.borrow_mut().off(event, scope, listener),
            (None, None) => {}
        }
    }

    /// Subscribe every buffered listener in arrival order and return how many.
    pub fn drain_into(&mut self, engine: &EngineHandle, scope: Option<&str>) -> usize {
        let drained = self.pending.len();
        let mut engine = engine.borrow_mut();
        for (event, listener) in self.pending.drain(..) {
            engine.on(&event, scope, listener);
        }
        drained
    }

    /// Number of buffered registrations.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl fmt::Debug for ListenerQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.pending.iter().map(|(event, _)| event))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;
    use geo_engine_codec::{EngineCall, MockEngine};
    use std::cell::RefCell;

    fn noop() -> Listener {
        Rc::new(|_| {})
    }

    #[test]
    fn buffered_registrations_drain_in_order() {
        let mut queue = ListenerQueue::new();
        queue.register(None, Some("l1"), "click", noop());
        queue.register(None, Some("l1"), "mouseenter", noop());
        assert_eq!(queue.pending(), 2);

        let mock = Rc::new(RefCell::new(MockEngine::new()));
        let engine = EngineHandle::from_shared(Rc::clone(&mock));
        assert_eq!(queue.drain_into(&engine, Some("l1")), 2);
        assert_eq!(queue.pending(), 0);

        let events: Vec<_> = mock
            .borrow()
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                EngineCall::On { event, layer_id } => Some((event, layer_id)),
                _ => None,
            })
            .collect();
        assert_eq!(
            events,
            [
                ("click".to_owned(), Some("l1".to_owned())),
                ("mouseenter".to_owned(), Some("l1".to_owned())),
            ]
        );
    }

    #[test]
    fn unregister_removes_buffered_entry_without_engine_call() {
        let mut queue = ListenerQueue::new();
        let listener = noop();
        queue.register(None, None, "click", Rc::clone(&listener));
        let mock = Rc::new(RefCell::new(MockEngine::new()));
        let engine = EngineHandle::from_shared(Rc::clone(&mock));
        queue.unregister(Some(&engine), None, "click", &listener);
        assert_eq!(queue.pending(), 0);
        assert!(mock.borrow().calls().is_empty());
    }

    #[test]
    fn direct_registration_once_engine_is_present() {
        let mut queue = ListenerQueue::new();
        let mock = Rc::new(RefCell::new(MockEngine::new()));
        let engine = EngineHandle::from_shared(Rc::clone(&mock));
        let listener = noop();
        queue.register(Some(&engine), Some("l1"), "click", Rc::clone(&listener));
        assert_eq!(queue.pending(), 0);
        assert_eq!(mock.borrow().subscription_count("click", Some("l1")), 1);
        queue.unregister(Some(&engine), Some("l1"), "click", &listener);
        assert_eq!(mock.borrow().subscription_count("click", Some("l1")), 0);
    }

    #[test]
    fn only_interaction_events_are_layer_events() {
        assert!(is_layer_event("touchcancel"));
        assert!(!is_layer_event("load"));
        assert!(!is_layer_event("zoomend"));
    }
}
