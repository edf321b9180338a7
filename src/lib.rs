// Library exports for testing
pub mod builtin_font;
pub mod config;
pub mod constants;
pub mod fonts;
pub mod generator;
pub mod icon_plan;
pub mod render;
