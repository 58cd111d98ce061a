pub mod env_file;
pub mod file_utils;
