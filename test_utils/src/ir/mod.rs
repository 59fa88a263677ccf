pub mod census;
pub mod fixtures;
pub mod generator;
