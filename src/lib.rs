//! Profile form with client-side field validation
//!
//! The form model and its validation rules live in [`state::forms`] and do
//! not depend on the terminal. [`app`] and [`ui`] host the model in a
//! Ratatui front end.

pub mod app;
pub mod config;
pub mod platform;
pub mod state;
pub mod ui;
