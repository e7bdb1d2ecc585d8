//! Built-in figures.

mod decoupled;

pub use decoupled::decoupled_control;
