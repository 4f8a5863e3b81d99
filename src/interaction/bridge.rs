use std::cell::{Cell, RefCell};
use std::rc::Rc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::BridgeResult;

use super::event_kind::EventKind;
use super::payload::NativePayload;
use super::view::{ContextEntity, EventView};

/// Application callback for one event kind.
///
/// Returning `Ok(true)` lets the engine run its default action, `Ok(false)`
/// cancels it. Errors are handed back to the engine callback unchanged.
pub type EventHandler = Rc<dyn Fn(&EventView<'_>) -> BridgeResult<bool>>;

/// Wraps a closure as an [`EventHandler`].
pub fn event_handler<F>(handler: F) -> EventHandler
where
    F: Fn(&EventView<'_>) -> BridgeResult<bool> + 'static,
{
    Rc::new(handler)
}

/// Control signal returned to the engine after a firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventSignal {
    /// Engine proceeds with its default action.
    Proceed,
    /// Engine cancels its default action.
    Cancel,
}

impl EventSignal {
    /// Native boolean form expected by the engine callback.
    #[must_use]
    pub fn permits_default(self) -> bool {
        matches!(self, Self::Proceed)
    }
}

impl From<bool> for EventSignal {
    fn from(proceed: bool) -> Self {
        if proceed { Self::Proceed } else { Self::Cancel }
    }
}

impl From<EventSignal> for bool {
    fn from(signal: EventSignal) -> Self {
        signal.permits_default()
    }
}

/// Handler slots of one owner: at most one handler per event kind.
#[derive(Clone, Default)]
pub struct EventRegistrations {
    slots: IndexMap<EventKind, EventHandler>,
}

impl std::fmt::Debug for EventRegistrations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.slots.keys()).finish()
    }
}

impl EventRegistrations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the slot for `kind`; `None` clears it.
    pub fn set(&mut self, kind: EventKind, handler: Option<EventHandler>) {
        match handler {
            Some(handler) => {
                self.slots.insert(kind, handler);
            }
            None => {
                self.slots.shift_remove(&kind);
            }
        }
    }

    #[must_use]
    pub fn get(&self, kind: EventKind) -> Option<EventHandler> {
        self.slots.get(&kind).cloned()
    }

    #[must_use]
    pub fn is_registered(&self, kind: EventKind) -> bool {
        self.slots.contains_key(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.slots.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Counters describing dispatch activity since the bridge was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchDiagnostics {
    pub dispatched: u64,
    pub views_built: u64,
    pub handled: u64,
    pub cancelled: u64,
    pub failures: u64,
}

/// Routes native firings to the handler registered for `(owner, kind)`.
///
/// Registration uses interior mutability so handlers can register or clear
/// handlers on the same bridge while a dispatch is in flight. The handler is
/// looked up and cloned out of the table before it runs, so such changes only
/// affect later firings.
#[derive(Debug, Default)]
pub struct EventBridge {
    owners: RefCell<IndexMap<String, EventRegistrations>>,
    diagnostics: Cell<DispatchDiagnostics>,
}

impl EventBridge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `handler` for `(owner, kind)`, replacing any previous one.
    /// Passing `None` clears the slot.
    pub fn register(&self, owner: &str, kind: EventKind, handler: Option<EventHandler>) {
        trace!(owner, kind = %kind, present = handler.is_some(), "register event handler");
        let mut owners = self.owners.borrow_mut();
        match handler {
            Some(handler) => owners
                .entry(owner.to_owned())
                .or_default()
                .set(kind, Some(handler)),
            None => {
                if let Some(slots) = owners.get_mut(owner) {
                    slots.set(kind, None);
                    if slots.is_empty() {
                        owners.shift_remove(owner);
                    }
                }
            }
        }
    }

    /// Installs an owner's full handler table, replacing what the bridge held.
    pub fn adopt(&self, owner: &str, registrations: &EventRegistrations) {
        debug!(owner, handlers = registrations.len(), "adopt event registrations");
        let mut owners = self.owners.borrow_mut();
        if registrations.is_empty() {
            owners.shift_remove(owner);
        } else {
            owners.insert(owner.to_owned(), registrations.clone());
        }
    }

    /// Drops every registration of `owner`. Returns `true` when any existed.
    pub fn release_owner(&self, owner: &str) -> bool {
        self.owners.borrow_mut().shift_remove(owner).is_some()
    }

    #[must_use]
    pub fn is_registered(&self, owner: &str, kind: EventKind) -> bool {
        self.owners
            .borrow()
            .get(owner)
            .is_some_and(|slots| slots.is_registered(kind))
    }

    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.owners.borrow().values().map(EventRegistrations::len).sum()
    }

    #[must_use]
    pub fn diagnostics(&self) -> DispatchDiagnostics {
        self.diagnostics.get()
    }

    fn lookup(&self, owner: &str, kind: EventKind) -> Option<EventHandler> {
        self.owners.borrow().get(owner)?.get(kind)
    }

    fn record(&self, update: impl FnOnce(&mut DispatchDiagnostics)) {
        let mut diagnostics = self.diagnostics.get();
        update(&mut diagnostics);
        self.diagnostics.set(diagnostics);
    }

    /// Delivers one native firing.
    ///
    /// Without a handler the default action proceeds and no view is built.
    pub fn dispatch(
        &self,
        owner: &str,
        kind: EventKind,
        payload: &NativePayload,
        context: &[ContextEntity],
    ) -> BridgeResult<EventSignal> {
        self.record(|d| d.dispatched += 1);
        let Some(handler) = self.lookup(owner, kind) else {
            trace!(owner, kind = %kind, "no handler registered");
            return Ok(EventSignal::Proceed);
        };

        let view = EventView::new(kind, payload, context);
        self.record(|d| d.views_built += 1);

        match handler(&view) {
            Ok(proceed) => {
                let signal = EventSignal::from(proceed);
                self.record(|d| {
                    d.handled += 1;
                    if signal == EventSignal::Cancel {
                        d.cancelled += 1;
                    }
                });
                debug!(owner, kind = %kind, ?signal, "event dispatched");
                Ok(signal)
            }
            Err(err) => {
                self.record(|d| d.failures += 1);
                warn!(owner, kind = %kind, error = %err, "event handler failed");
                Err(err)
            }
        }
    }

    /// Converts an engine JSON payload at the boundary, then dispatches it.
    pub fn dispatch_json(
        &self,
        owner: &str,
        kind: EventKind,
        payload: &serde_json::Value,
        context: &[ContextEntity],
    ) -> BridgeResult<EventSignal> {
        let payload = NativePayload::from_json(payload)?;
        self.dispatch(owner, kind, &payload, context)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::{EventBridge, EventRegistrations, EventSignal, event_handler};
    use crate::interaction::event_kind::EventKind;
    use crate::interaction::payload::NativePayload;

    #[test]
    fn bool_and_signal_convert_both_ways() {
        assert_eq!(EventSignal::from(true), EventSignal::Proceed);
        assert_eq!(EventSignal::from(false), EventSignal::Cancel);
        assert!(bool::from(EventSignal::Proceed));
        assert!(!EventSignal::Cancel.permits_default());
    }

    #[test]
    fn clearing_last_slot_forgets_owner() {
        let bridge = EventBridge::new();
        bridge.register("s", EventKind::Click, Some(event_handler(|_| Ok(true))));
        assert_eq!(bridge.handler_count(), 1);
        bridge.register("s", EventKind::Click, None);
        assert_eq!(bridge.handler_count(), 0);
        assert!(!bridge.release_owner("s"));
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let bridge = EventBridge::new();
        let first = Rc::new(Cell::new(0));
        let counter = first.clone();
        bridge.register(
            "s",
            EventKind::Click,
            Some(event_handler(move |_| {
                counter.set(counter.get() + 1);
                Ok(true)
            })),
        );
        bridge.register("s", EventKind::Click, Some(event_handler(|_| Ok(false))));

        let signal = bridge
            .dispatch("s", EventKind::Click, &NativePayload::new(), &[])
            .expect("dispatch");
        assert_eq!(signal, EventSignal::Cancel);
        assert_eq!(first.get(), 0);
    }

    #[test]
    fn adopt_replaces_owner_table() {
        let bridge = EventBridge::new();
        bridge.register("axis", EventKind::SetExtremes, Some(event_handler(|_| Ok(true))));

        let mut slots = EventRegistrations::new();
        slots.set(EventKind::AfterSetExtremes, Some(event_handler(|_| Ok(true))));
        bridge.adopt("axis", &slots);

        assert!(!bridge.is_registered("axis", EventKind::SetExtremes));
        assert!(bridge.is_registered("axis", EventKind::AfterSetExtremes));
    }

    #[test]
    fn owners_are_isolated() {
        let bridge = EventBridge::new();
        bridge.register("a", EventKind::Click, Some(event_handler(|_| Ok(false))));
        let signal = bridge
            .dispatch("b", EventKind::Click, &NativePayload::new(), &[])
            .expect("dispatch");
        assert_eq!(signal, EventSignal::Proceed);
    }
}
