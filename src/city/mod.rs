pub mod animation;
pub mod app;
pub mod color;
pub mod constants;
pub mod geometry;
pub mod picking;
pub mod scene;
pub mod toggles;

pub use app::{AppEvent, CityApp, Viewport};

// Shaders bundled as string constants
pub static CITY_WGSL: &str = include_str!("../../shaders/city.wgsl");
