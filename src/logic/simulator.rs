use serde::Serialize;

use crate::logic::compare::{sort_flavors, sort_instances};
use crate::logic::selection::Selection;
use crate::model::{FlavorKey, ProductFlavor, ProductInstance};

/// The four derived views, bundled for a presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatorSnapshot {
    pub catalog: Vec<ProductInstance>,
    pub active_instance_id: Option<String>,
    pub selectable_flavors: Vec<ProductFlavor>,
    pub selected_flavors: Vec<ProductFlavor>,
    pub total_price: f64,
}

/// Composes a fetched catalog with the selection machine
#[derive(Debug, Clone)]
pub struct Simulator {
    catalog: Vec<ProductInstance>,
    selection: Selection,
}

impl Simulator {
    pub fn new(catalog: Vec<ProductInstance>) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Full catalog in `compare_instances` order
    pub fn catalog_view(&self) -> Vec<ProductInstance> {
        let mut catalog = self.catalog.clone();
        sort_instances(&mut catalog);
        catalog
    }

    /// Flavors of the active instance not yet selected, in `compare_flavors` order
    pub fn selectable_flavors(&self) -> Vec<ProductFlavor> {
        let Some(instance) = self.selection.active_instance() else {
            return Vec::new();
        };

        let mut flavors: Vec<ProductFlavor> = instance
            .flavors
            .iter()
            .filter(|flavor| !self.selection.contains(&flavor.key()))
            .cloned()
            .collect();
        sort_flavors(&mut flavors);
        flavors
    }

    pub fn selected_flavors(&self) -> &[ProductFlavor] {
        self.selection.selected()
    }

    pub fn total_price(&self) -> f64 {
        self.selection
            .selected()
            .iter()
            .fold(0.0, |total, flavor| total + flavor.price)
    }

    pub fn choose_instance(&mut self, instance: &ProductInstance) {
        self.selection.select_instance(instance.clone());
    }

    /// Rejects flavors the active instance does not own.
    pub fn choose_flavor(&mut self, flavor: &ProductFlavor) -> bool {
        match self.selection.active_instance() {
            Some(instance) if instance.owns(flavor) => self.selection.add_flavor(flavor.clone()),
            _ => false,
        }
    }

    pub fn unchoose_flavor(&mut self, flavor: &ProductFlavor) -> bool {
        self.selection.remove_flavor(&flavor.key())
    }

    pub fn choose_instance_by_id(&mut self, id: &str) -> bool {
        match self.catalog.iter().find(|instance| instance.id == id) {
            Some(instance) => {
                self.selection.select_instance(instance.clone());
                true
            }
            None => false,
        }
    }

    /// Picks from the selectable view only, so the flavor always belongs to
    /// the active instance.
    pub fn choose_flavor_by_name(&mut self, name: &str) -> bool {
        match self
            .selectable_flavors()
            .into_iter()
            .find(|flavor| flavor.name == name)
        {
            Some(flavor) => self.selection.add_flavor(flavor),
            None => false,
        }
    }

    pub fn unchoose_flavor_by_key(&mut self, key: &FlavorKey) -> bool {
        self.selection.remove_flavor(key)
    }

    pub fn snapshot(&self) -> SimulatorSnapshot {
        SimulatorSnapshot {
            catalog: self.catalog_view(),
            active_instance_id: self.selection.active_instance().map(|i| i.id.clone()),
            selectable_flavors: self.selectable_flavors(),
            selected_flavors: self.selected_flavors().to_vec(),
            total_price: self.total_price(),
        }
    }
}
