pub mod file_save_sink;
pub mod save_error;
