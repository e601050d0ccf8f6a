pub mod commands;
pub mod shared_str;
pub mod transform;
pub mod types;

pub use commands::RenderCommand;
pub use shared_str::SharedStr;
pub use transform::LayerTransform;
pub use types::{Color, PackedColor, Point, Rect};
