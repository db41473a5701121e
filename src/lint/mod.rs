pub mod display;
pub mod engine;
pub mod results;
