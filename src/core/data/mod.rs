pub mod client_size;
pub mod pixel;
pub mod position;
