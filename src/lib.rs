pub mod control;
pub mod core;
pub mod render;
pub mod simulation;
pub mod ui;

// Re-export key items
pub use control::*;
pub use crate::core::*;
pub use render::*;
pub use simulation::*;
pub use ui::*;
