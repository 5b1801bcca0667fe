pub mod analysis;
pub mod input;
pub mod limit;
