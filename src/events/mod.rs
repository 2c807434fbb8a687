pub mod pointer;
pub mod resize;

pub use pointer::{wire_pointer, PointerListener};
pub use resize::{wire_resize, ResizeWatch};
