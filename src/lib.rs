// Library exports for testing
pub mod config;
pub mod constants;
pub mod font;
pub mod renderer;
