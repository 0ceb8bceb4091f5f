//! Per-row delete forms, collected once when the dashboard starts.

use nm_data::{EntityId, EntityKind};
use std::collections::HashMap;

/// Maps a keyword or platform row to its delete form.
#[derive(Debug)]
pub struct FormRegistry<F> {
    forms: HashMap<(EntityKind, EntityId), F>,
}

impl<F> Default for FormRegistry<F> {
    fn default() -> Self {
        Self {
            forms: HashMap::new(),
        }
    }
}

impl<F> FormRegistry<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a form. A second form for the same row replaces the first.
    pub fn insert(&mut self, kind: EntityKind, id: EntityId, form: F) -> Option<F> {
        let replaced = self.forms.insert((kind, id.clone()), form);
        if replaced.is_some() {
            log::warn!("duplicate delete form for {kind} {id}; keeping the last one");
        }
        replaced
    }

    /// Register a form by its element id, if the id follows the delete form
    /// naming of `kind`.
    pub fn insert_element(&mut self, kind: EntityKind, element_id: &str, form: F) -> bool {
        match kind.parse_delete_form_id(element_id) {
            Some(id) => {
                self.insert(kind, id, form);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, kind: EntityKind, id: &EntityId) -> Option<&F> {
        self.forms.get(&(kind, id.clone()))
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.forms.keys().filter(|(k, _)| *k == kind).count()
    }
}
