use serde::{Deserialize, Serialize};

pub type Id = String;

/// Legacy conversion factor applied to every raw flavor price.
/// Stored prices are `raw_price * PRICE_CONVERSION_RATE`, nothing more.
pub const PRICE_CONVERSION_RATE: f64 = 41.904;

/// Identity of a flavor for set/list membership: owning instance plus flavor name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FlavorKey {
    pub instance_id: Id,
    pub name: String,
}

impl FlavorKey {
    pub fn new(instance_id: impl Into<Id>, name: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for FlavorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.instance_id, self.name)
    }
}

pub fn convert_price(raw_price: f64) -> f64 {
    raw_price * PRICE_CONVERSION_RATE
}
