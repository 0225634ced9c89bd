use serde::Deserialize;

/// Instance record as served by the remote catalog endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawInstance {
    pub variant: RawVariant,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(rename = "comingSoon", default)]
    pub coming_soon: bool,
    #[serde(default)]
    pub flavors: Vec<RawFlavor>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawVariant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawFlavor {
    pub name: String,
    /// Price in the legacy unit, before conversion
    pub price: f64,
    #[serde(default)]
    pub mem: f64,
    #[serde(default)]
    pub memory: Option<RawMemory>,
    #[serde(default)]
    pub cpus: u32,
    #[serde(default)]
    pub gpus: u32,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub microservice: bool,
    #[serde(default)]
    pub machine_learning: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMemory {
    #[serde(default)]
    pub formatted: String,
}
