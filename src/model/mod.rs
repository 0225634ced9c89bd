pub mod common;
pub mod flavor;
pub mod instance;
pub mod raw;

pub use common::*;
pub use flavor::*;
pub use instance::*;
pub use raw::*;
