//! Library entry for Scholarsite exposing the rendering pipeline for the binary and integration tests.

pub mod app;
pub mod args;
pub mod logic;
pub mod sources;
pub mod state;
pub mod theme;
pub mod util;
pub mod view;
