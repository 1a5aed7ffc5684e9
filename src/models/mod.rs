pub mod alias_map;
pub mod attribution;
pub mod ignore_set;

pub use alias_map::*;
pub use attribution::*;
pub use ignore_set::*;
