pub mod fs;
pub mod tvdb;
