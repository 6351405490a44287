//! Reusable UI components.

pub mod mindmap;
