use log::debug;

use crate::logic::compare::sort_flavors;
use crate::model::{FlavorKey, ProductFlavor, ProductInstance};

/// Borrowed view of where the selection machine currently is
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionState<'a> {
    NoInstanceSelected,
    InstanceSelected {
        instance: &'a ProductInstance,
        selected: &'a [ProductFlavor],
    },
}

/// Active instance plus the flavors picked so far.
///
/// `selected` never holds two flavors with the same [`FlavorKey`] and is kept
/// in `compare_flavors` order after every transition. Switching instances
/// leaves earlier picks in place.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    active: Option<ProductInstance>,
    selected: Vec<ProductFlavor>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState<'_> {
        match &self.active {
            None => SelectionState::NoInstanceSelected,
            Some(instance) => SelectionState::InstanceSelected {
                instance,
                selected: &self.selected,
            },
        }
    }

    pub fn active_instance(&self) -> Option<&ProductInstance> {
        self.active.as_ref()
    }

    pub fn selected(&self) -> &[ProductFlavor] {
        &self.selected
    }

    pub fn contains(&self, key: &FlavorKey) -> bool {
        self.selected.iter().any(|flavor| flavor.has_key(key))
    }

    /// Replace the active instance. Always succeeds.
    pub fn select_instance(&mut self, instance: ProductInstance) {
        debug!(
            "Selecting instance '{}' ({} flavors already selected)",
            instance.id,
            self.selected.len()
        );
        self.active = Some(instance);
    }

    /// Add a flavor and re-sort. Returns `false` when no instance is active
    /// or the flavor is already selected; the selection is unchanged then.
    ///
    /// Ownership by the active instance is not checked here.
    pub fn add_flavor(&mut self, flavor: ProductFlavor) -> bool {
        if self.active.is_none() {
            debug!("Ignoring flavor '{}': no active instance", flavor.key());
            return false;
        }
        if self.selected.iter().any(|f| f.same_flavor(&flavor)) {
            debug!("Ignoring flavor '{}': already selected", flavor.key());
            return false;
        }

        debug!("Adding flavor '{}'", flavor.key());
        self.selected.push(flavor);
        sort_flavors(&mut self.selected);
        true
    }

    /// Remove by identity. Returns `false` if the flavor was not selected.
    pub fn remove_flavor(&mut self, key: &FlavorKey) -> bool {
        let before = self.selected.len();
        self.selected.retain(|flavor| !flavor.has_key(key));
        let removed = self.selected.len() != before;
        if removed {
            debug!("Removed flavor '{}'", key);
        }
        removed
    }
}
