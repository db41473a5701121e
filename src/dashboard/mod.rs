pub mod decode;
pub mod display;
pub mod types;
