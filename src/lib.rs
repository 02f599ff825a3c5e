pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod game;
pub mod input;
pub mod logging;
pub mod scores;
pub mod ui;
