pub mod format;
pub mod render;

pub use render::{render, Body, Metrics, Row, View};
