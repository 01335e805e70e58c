pub mod field;
pub mod fix;

pub use field::*;
pub use fix::*;
