mod canvas;
mod component;
mod render;
pub mod scale;
mod state;
mod types;
mod vue;

pub use component::MindMapCanvas;
pub use types::{LinkRecord, NodeRecord, VueDocument};
pub use vue::parse_document;
