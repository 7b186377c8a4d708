#[cfg(feature = "cli")]
pub mod progress;
pub mod render;

pub use render::{render_card, render_json, render_state};
