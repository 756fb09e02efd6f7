pub mod host;

pub use host::HostPort;
