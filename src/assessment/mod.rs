pub mod fields;
pub mod input;

pub use fields::*;
pub use input::*;
