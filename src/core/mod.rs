pub mod content;
pub mod interact;
pub mod panel;
pub mod scene;

pub use interact::{ClickAction, GestureTracker};
pub use scene::{Marker, SceneState};

// Shaders bundled as string constants
pub static SPRITES_WGSL: &str = include_str!("../../shaders/sprites.wgsl");
pub static LINES_WGSL: &str = include_str!("../../shaders/lines.wgsl");
