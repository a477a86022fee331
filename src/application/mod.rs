pub mod cache;
pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod redirects;
pub mod scheduler;
pub mod services;
pub mod shortlinks;

pub use error::{ApplicationError, ApplicationResult};
