pub mod compare;
pub mod convert;
pub mod selection;
pub mod simulator;

pub use compare::*;
pub use convert::*;
pub use selection::*;
pub use simulator::*;
