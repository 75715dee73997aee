pub mod app;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod handlers;
pub mod models;
pub mod opengraph;
pub mod state;
pub mod validation;
