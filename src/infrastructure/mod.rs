pub mod config;

pub use config::{AppConfig, Config, CorsConfig, ServerConfig};
