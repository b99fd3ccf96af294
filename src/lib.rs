pub mod app;
pub mod args;
pub mod cli;
pub mod component;
pub mod config;
pub mod logging;
