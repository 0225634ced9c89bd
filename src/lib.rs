pub mod config;
pub mod logic;
pub mod model;
pub mod service;

pub use logic::{
    compare_flavors, compare_instances, Selection, SelectionState, Simulator, SimulatorSnapshot,
};
pub use model::*;
pub use service::{
    decode_catalog, CatalogError, CatalogService, FetchFailure, HttpImagePreloader,
    ImagePreloadFailure, ImagePreloader, NoopImagePreloader,
};

