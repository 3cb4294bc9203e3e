pub mod runtime;
pub mod upstream;

pub use runtime::RuntimeEnv;
pub use upstream::UpstreamConfig;
