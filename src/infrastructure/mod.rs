pub mod codes;
pub mod edge;
pub mod store;
pub mod time;
