pub mod save_sink;
