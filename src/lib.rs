//! chart-bridge: option-tree builders and a typed event bridge for embedding
//! a chart-rendering engine.
//!
//! Builders accumulate options into slash-addressed trees that serialize to
//! the engine's JSON configuration. Native event firings come back through
//! [`interaction::EventBridge`], which hands handlers a typed read-only view
//! and turns their answer into a proceed/cancel signal.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartBinding, ChartOptions, OptionBuilder};
pub use error::{BridgeError, BridgeResult};
pub use interaction::{EventBridge, EventSignal};
