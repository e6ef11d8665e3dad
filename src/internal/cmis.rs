pub mod constants;
pub mod functions;
pub mod structs;
