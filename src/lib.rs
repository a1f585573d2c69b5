pub mod config;
pub mod form;
pub mod models;
pub mod submission;
