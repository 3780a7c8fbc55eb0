pub mod app;
pub mod background;
pub mod card;
pub mod config;
pub mod constants;
pub mod deck;
pub mod easing;
pub mod error;
pub mod forecast;
pub mod renderer;
pub mod state;
pub mod texture_loader;
