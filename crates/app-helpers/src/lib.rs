pub mod dirs;
pub mod json;
