use crate::model::{FlavorKey, Id};
use serde::{Deserialize, Serialize};

/// One priced configuration of a product instance.
///
/// `instance_id` is the back-reference to the owning instance; it never owns
/// or outlives anything. Membership in selections is decided by [`FlavorKey`],
/// not by structural equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFlavor {
    pub instance_id: Id,
    pub name: String,
    /// Price in the target currency unit (already converted)
    pub price: f64,
    /// Memory amount as served, may be fractional
    pub mem: f64,
    pub memory_formatted: String,
    pub cpus: u32,
    pub gpus: u32,
    pub available: bool,
    pub microservice: bool,
    pub machine_learning: bool,
}

impl ProductFlavor {
    pub fn key(&self) -> FlavorKey {
        FlavorKey::new(self.instance_id.clone(), self.name.clone())
    }

    pub fn has_key(&self, key: &FlavorKey) -> bool {
        self.instance_id == key.instance_id && self.name == key.name
    }

    pub fn same_flavor(&self, other: &ProductFlavor) -> bool {
        self.instance_id == other.instance_id && self.name == other.name
    }

    /// Stable list key for renderers
    pub fn item_id(&self) -> String {
        format!("{}/{}", self.instance_id, self.name)
    }
}
