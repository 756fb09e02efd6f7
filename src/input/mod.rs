//! Hosts that feed platform messages into the window controller.

pub mod headless;
#[cfg(feature = "gui")]
pub mod gui;
