pub mod canvas;
pub mod color;
pub mod state;

pub use canvas::*;
pub use color::*;
pub use state::*;
