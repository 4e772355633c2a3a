mod event;
mod grid;
mod manager;
mod source;

pub use event::*;
pub use grid::*;
pub use manager::*;
pub use source::*;
