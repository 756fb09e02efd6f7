pub mod components;
pub mod config;
pub mod data;
pub mod events;
pub mod render;
pub mod timing;
