pub mod controller;
pub mod display;
pub mod progress;
pub mod render;
