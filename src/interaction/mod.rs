//! Event bridge between native engine firings and typed application handlers.

pub mod bridge;
pub mod event_kind;
pub mod payload;
pub mod view;

pub use bridge::{
    DispatchDiagnostics, EventBridge, EventHandler, EventRegistrations, EventSignal,
    event_handler,
};
pub use event_kind::EventKind;
pub use payload::{NativeFields, NativePayload};
pub use view::{ContextEntity, ContextKind, EventView};
