//! Terminal front-end: stdin commands in, rendered text out.
mod app;
mod commands;
mod config;
mod effects;
mod persistence;
mod render;

pub use app::run_app;
