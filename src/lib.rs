pub mod cli;
pub mod config;
pub mod form;
pub mod models;
pub mod remote;
pub mod store;
