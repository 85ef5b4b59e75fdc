pub mod overlay;
pub mod terminal_ui;

pub use overlay::*;
pub use terminal_ui::*;
