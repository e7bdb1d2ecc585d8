//! Blockwire Core Types and Definitions
//!
//! This crate provides the foundational types for Blockwire block diagrams.
//! It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes, bounds and the data-to-pixel [`geometry::Viewport`]
//! - **Draw**: Drawable primitives for blocks, sum nodes, connectors and labels
//!   ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
