pub mod config;
pub mod structures;
pub mod transit;
pub mod world;

pub use config::*;
pub use structures::{RuralHouse, UrbanBuilding};
pub use transit::*;
pub use world::*;
