//! Engine-facing render seam.
//!
//! The rendering engine itself lives outside this crate; it only has to
//! accept an option snapshot.

mod null_renderer;

pub use null_renderer::NullRenderer;

use crate::core::ConfigNode;
use crate::error::BridgeResult;

pub trait Renderer {
    fn render(&mut self, options: &ConfigNode) -> BridgeResult<()>;
}
