pub mod catalog;
pub mod error;
pub mod preload;
pub mod traits;

pub use catalog::*;
pub use error::*;
pub use preload::*;
pub use traits::*;
