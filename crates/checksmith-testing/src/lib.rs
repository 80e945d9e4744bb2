pub mod fixtures;
pub mod world;

pub use world::TestWorld;
