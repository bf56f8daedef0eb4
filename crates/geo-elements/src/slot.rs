// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Named, ordered set of projected children.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Live child list of a container.
///
/// Children are compared by identity. Mutators report whether the set
/// changed; the owning container reruns its wiring step when it did.
pub struct Slot<T> {
    name: &'static str,
    children: Vec<Rc<RefCell<T>>>,
}

impl<T> Slot<T> {
    /// Empty slot called `name`.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            children: Vec::new(),
        }
    }

    /// Slot name, matched against a child's `slot` attribute.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Append `child` unless already assigned.
    pub fn assign(&mut self, child: Rc<RefCell<T>>) -> bool {
        if self.contains(&child) {
            return false;
        }
        self.children.push(child);
        true
    }

    /// Remove `child` if assigned.
    pub fn withdraw(&mut self, child: &Rc<RefCell<T>>) -> bool {
        let before = self.children.len();
        self.children.retain(|c| !Rc::ptr_eq(c, child));
        self.children.len() != before
    }

    /// `true` when `child` is assigned.
    pub fn contains(&self, child: &Rc<RefCell<T>>) -> bool {
        self.children.iter().any(|c| Rc::ptr_eq(c, child))
    }

    /// Assigned children in order.
    pub fn assigned(&self) -> &[Rc<RefCell<T>>] {
        &self.children
    }

    /// Number of assigned children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// `true` when nothing is assigned.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("name", &self.name)
            .field("len", &self.children.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn assignment_is_identity_based() {
        let mut slot = Slot::new("layers");
        let a = Rc::new(RefCell::new(1));
        let b = Rc::new(RefCell::new(1));
        assert!(slot.assign(Rc::clone(&a)));
        assert!(!slot.assign(Rc::clone(&a)));
        assert!(slot.assign(Rc::clone(&b)));
        assert_eq!(slot.len(), 2);
        assert!(slot.withdraw(&a));
        assert!(!slot.withdraw(&a));
        assert!(Rc::ptr_eq(&slot.assigned()[0], &b));
        assert_eq!(slot.name(), "layers");
    }
}
