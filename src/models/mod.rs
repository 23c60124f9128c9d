pub mod root;
pub mod item;
pub mod error;

pub use root::*;
pub use item::*;
pub use error::*;
