pub mod help;
pub mod json;
pub mod reply;
