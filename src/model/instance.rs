use crate::model::{Id, ProductFlavor};
use serde::{Deserialize, Serialize};

/// A purchasable product line offered at several flavors.
/// Created once by catalog conversion and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInstance {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub enabled: bool,
    pub coming_soon: bool,
    pub flavors: Vec<ProductFlavor>,
}

impl ProductInstance {
    pub fn flavor(&self, name: &str) -> Option<&ProductFlavor> {
        self.flavors.iter().find(|flavor| flavor.name == name)
    }

    pub fn owns(&self, flavor: &ProductFlavor) -> bool {
        flavor.instance_id == self.id && self.flavor(&flavor.name).is_some()
    }

    /// Stable list key for renderers
    pub fn item_id(&self) -> String {
        self.id.clone()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_flavor_lookup_and_ownership() {
        let gpu = instance("gpu", "GPU", &[("small", 10.0), ("large", 40.0)]);
        let cpu = instance("cpu", "CPU", &[("small", 5.0)]);

        assert_eq!(gpu.flavor("large").map(|f| f.price), Some(40.0));
        assert!(gpu.flavor("medium").is_none());

        assert!(gpu.owns(&gpu.flavors[0]));
        // Same name, different owner
        assert!(!gpu.owns(&cpu.flavors[0]));
    }

    #[test]
    fn test_item_ids() {
        let gpu = instance("gpu", "GPU", &[("small", 10.0)]);
        assert_eq!(gpu.item_id(), "gpu");
        assert_eq!(gpu.flavors[0].item_id(), "gpu/small");
        assert_eq!(gpu.flavors[0].key().to_string(), "gpu/small");
    }
}
