//! Registry behind the shared "add" button of the page toolbar.

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, warn};

use crate::services::{AddButtonAction, AddButtonService};

#[derive(Default)]
pub struct AddButtonRegistry {
    actions: Mutex<BTreeMap<String, AddButtonAction>>,
}

impl Debug for AddButtonRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let pages: Vec<String> = self.lock().keys().cloned().collect();
        f.debug_struct("AddButtonRegistry")
            .field("pages", &pages)
            .finish()
    }
}

impl AddButtonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, AddButtonAction>> {
        self.actions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_registered(&self, page_name: &str) -> bool {
        self.lock().contains_key(page_name)
    }

    /// Run the action registered for `page_name`. Returns `false` when none is.
    pub fn trigger(&self, page_name: &str) -> bool {
        // Released before running so the action may register again.
        let action = self.lock().get(page_name).cloned();
        match action {
            Some(action) => {
                debug!("Add button pressed on {page_name}");
                action();
                true
            }
            None => {
                warn!("No add button registered for {page_name}");
                false
            }
        }
    }
}

impl AddButtonService for AddButtonRegistry {
    fn register_add_button(&self, page_name: &str, action: AddButtonAction) {
        self.lock().insert(page_name.to_owned(), action);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_trigger_runs_registered_action() {
        let registry = AddButtonRegistry::new();
        let presses = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&presses);

        registry.register_add_button(
            "users",
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        assert!(registry.is_registered("users"));
        assert!(registry.trigger("users"));
        assert!(registry.trigger("users"));
        assert_eq!(presses.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_trigger_without_registration() {
        let registry = AddButtonRegistry::new();
        assert!(!registry.trigger("groups"));
    }

    #[test]
    fn test_registration_replaces_previous_action() {
        let registry = AddButtonRegistry::new();
        let last = Arc::new(AtomicUsize::new(0));

        for id in 1..=2 {
            let last = Arc::clone(&last);
            registry.register_add_button(
                "users",
                Arc::new(move || last.store(id, Ordering::SeqCst)),
            );
        }

        registry.trigger("users");
        assert_eq!(last.load(Ordering::SeqCst), 2);
    }
}
