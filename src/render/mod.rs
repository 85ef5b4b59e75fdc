pub mod frame;
pub mod macroquad_canvas;
pub mod recording;
pub mod scene;

pub use frame::*;
pub use macroquad_canvas::*;
pub use recording::*;
pub use scene::*;
