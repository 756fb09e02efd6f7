pub mod host;

pub use host::HeadlessHost;
