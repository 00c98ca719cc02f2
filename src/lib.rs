pub mod assistant;
pub mod catalog;
pub mod config;
pub mod documents;
pub mod models;
pub mod search;
pub mod utils;
