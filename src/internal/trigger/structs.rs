pub mod download_error;
pub mod download_outcome;
pub mod download_trigger;
