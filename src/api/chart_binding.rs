use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use tracing::debug;

use crate::error::BridgeResult;
use crate::interaction::{ContextEntity, EventBridge, EventKind};
use crate::render::Renderer;

use super::chart_options::ChartOptions;
use super::option_builder::OptionBuilder;

/// Connects one [`ChartOptions`] tree and its handlers to an engine.
///
/// Options and bridge are shared handles so handlers can capture them and
/// change options or registrations while a firing is being dispatched.
pub struct ChartBinding<R: Renderer> {
    renderer: R,
    options: Rc<RefCell<ChartOptions>>,
    bridge: Rc<EventBridge>,
}

impl<R: Renderer> ChartBinding<R> {
    #[must_use]
    pub fn new(renderer: R, options: ChartOptions) -> Self {
        Self {
            renderer,
            options: Rc::new(RefCell::new(options)),
            bridge: Rc::new(EventBridge::new()),
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn options(&self) -> Ref<'_, ChartOptions> {
        self.options.borrow()
    }

    pub fn options_mut(&self) -> RefMut<'_, ChartOptions> {
        self.options.borrow_mut()
    }

    /// Shared handle for handlers that edit options from inside a firing.
    #[must_use]
    pub fn options_handle(&self) -> Rc<RefCell<ChartOptions>> {
        Rc::clone(&self.options)
    }

    #[must_use]
    pub fn bridge(&self) -> Rc<EventBridge> {
        Rc::clone(&self.bridge)
    }

    /// Installs current handlers and hands a fresh snapshot to the renderer.
    pub fn render(&mut self) -> BridgeResult<()> {
        let snapshot = {
            let options = self.options.borrow();
            options.bind_events(&self.bridge);
            options.get_options()
        };
        debug!(top_level_keys = snapshot.len(), "render chart options");
        self.renderer.render(&snapshot)
    }

    /// Engine callback entry point. Returns the native "run default action" flag.
    pub fn handle_native_event(
        &self,
        owner: &str,
        kind: &str,
        payload: &serde_json::Value,
        context: &[ContextEntity],
    ) -> BridgeResult<bool> {
        let kind: EventKind = kind.parse()?;
        let signal = self.bridge.dispatch_json(owner, kind, payload, context)?;
        Ok(signal.permits_default())
    }
}
