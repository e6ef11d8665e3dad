pub mod config_error;
pub mod connection_config;
