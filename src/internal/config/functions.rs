pub mod load_env;
