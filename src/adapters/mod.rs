#[cfg_attr(not(feature = "gui"), allow(dead_code))]
pub mod pixel_format;
