//! Form rendering module
//!
//! - `field_renderer`: per-field input and error lines
//! - `profile_form`: the profile form and its action panel

mod field_renderer;
mod profile_form;

pub use profile_form::draw as draw_profile_form;
