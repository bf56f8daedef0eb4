// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Attribute store and the custom-element callback contract.

use crate::ElementError;

/// Ordered attribute set of one element.
///
/// This is the single source of truth for every reflected property; getters
/// derive their value from it on each read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute value, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// `true` when the attribute is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set an attribute and return the previous value.
    pub fn set(&mut self, name: &str, value: String) -> Option<String> {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name.to_owned(), value));
                None
            }
        }
    }

    /// Remove an attribute and return its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Element with observed attributes.
///
/// The provided mutators update the store first, then invoke
/// [`CustomElement::attribute_changed`] for observed names, mirroring the
/// platform's custom-element callback order. Writing an attribute to its
/// current value still counts as a mutation.
pub trait CustomElement {
    /// Attribute store.
    fn attributes(&self) -> &Attributes;

    /// Mutable attribute store. Writes through this bypass callbacks.
    fn attributes_mut(&mut self) -> &mut Attributes;

    /// `true` when mutations of `name` are reported to `attribute_changed`.
    fn is_observed(&self, name: &str) -> bool;

    /// Mutation callback for observed attributes.
    fn attribute_changed(
        &mut self,
        name: &str,
        old: Option<&str>,
        new: Option<&str>,
    ) -> Result<(), ElementError>;

    /// Attribute value, if present.
    fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes().get(name)
    }

    /// `true` when the attribute is present.
    fn has_attribute(&self, name: &str) -> bool {
        self.attributes().contains(name)
    }

    /// Set an attribute, then run the mutation callback.
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ElementError> {
        let old = self.attributes_mut().set(name, value.to_owned());
        if self.is_observed(name) {
            self.attribute_changed(name, old.as_deref(), Some(value))
        } else {
            Ok(())
        }
    }

    /// Remove an attribute, then run the mutation callback if it was present.
    fn remove_attribute(&mut self, name: &str) -> Result<(), ElementError> {
        let Some(old) = self.attributes_mut().remove(name) else {
            return Ok(());
        };
        if self.is_observed(name) {
            self.attribute_changed(name, Some(&old), None)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    #[derive(Default)]
    struct Probe {
        attributes: Attributes,
        seen: Vec<(String, Option<String>, Option<String>)>,
    }

    impl CustomElement for Probe {
        fn attributes(&self) -> &Attributes {
            &self.attributes
        }

        fn attributes_mut(&mut self) -> &mut Attributes {
            &mut self.attributes
        }

        fn is_observed(&self, name: &str) -> bool {
            name == "watched"
        }

        fn attribute_changed(
            &mut self,
            name: &str,
            old: Option<&str>,
            new: Option<&str>,
        ) -> Result<(), ElementError> {
            self.seen
                .push((name.into(), old.map(Into::into), new.map(Into::into)));
            Ok(())
        }
    }

    #[test]
    fn store_keeps_insertion_order() {
        let mut attrs = Attributes::new();
        assert_eq!(attrs.set("b", "1".into()), None);
        assert_eq!(attrs.set("a", "2".into()), None);
        assert_eq!(attrs.set("b", "3".into()), Some("1".into()));
        let names: Vec<_> = attrs.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(attrs.remove("b"), Some("3".into()));
        assert_eq!(attrs.remove("b"), None);
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn callbacks_fire_for_observed_names_only() {
        let mut probe = Probe::default();
        probe.set_attribute("other", "x").unwrap();
        probe.set_attribute("watched", "1").unwrap();
        probe.set_attribute("watched", "1").unwrap();
        probe.remove_attribute("watched").unwrap();
        probe.remove_attribute("watched").unwrap();
        assert_eq!(
            probe.seen,
            vec![
                ("watched".into(), None, Some("1".into())),
                ("watched".into(), Some("1".into()), Some("1".into())),
                ("watched".into(), Some("1".into()), None),
            ]
        );
        assert_eq!(probe.get_attribute("other"), Some("x"));
    }
}
