//! Application services

pub mod fetch;

pub use fetch::FetchService;
