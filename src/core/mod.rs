pub mod compliance;
pub mod engine;
pub mod excreta;
pub mod monthly;
pub mod rainwater;
pub mod volume;

pub use engine::compute;
