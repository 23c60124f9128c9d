pub mod root;
pub mod item;
pub mod redoc;

pub use root::*;
pub use item::*;
pub use redoc::*;
