use crate::core::ConfigNode;
use crate::error::BridgeResult;
use crate::render::Renderer;

/// No-op renderer used by tests and headless usage.
///
/// It keeps the last snapshot so tests can inspect exactly what an engine
/// would have received.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_options: Option<ConfigNode>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, options: &ConfigNode) -> BridgeResult<()> {
        self.render_count += 1;
        self.last_options = Some(options.clone());
        Ok(())
    }
}
