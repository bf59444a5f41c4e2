pub mod app;
pub mod canvas;
pub mod config;
pub mod controller;
pub mod coordinate;
pub mod grid;
pub mod labels;
pub mod line;
pub mod logging;
pub mod point;
pub mod raster;
pub mod renderer;
pub mod state;
