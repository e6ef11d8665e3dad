pub mod auth;
pub mod cmis;
pub mod config;
pub mod document;
pub mod logging;
pub mod save_sink;
pub mod trigger;
