//! Core building blocks: resolved parameters (`params`) and symbol
//! rasterization (`render`).
pub mod params;
pub mod render;
