pub mod cache;
pub mod codes;
pub mod time;
