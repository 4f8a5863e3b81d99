use indexmap::IndexMap;
use tracing::debug;

use crate::core::{ConfigNode, ConfigValue, OptionTree, TreeConfig};
use crate::error::{BridgeError, BridgeResult};
use crate::interaction::{ContextKind, EventBridge, EventKind, EventRegistrations};

use super::axis_options::AxisOptions;
use super::option_builder::{OptionBuilder, event_handler_setters, option_setters};
use super::plot_options::PlotOptions;
use super::series_options::SeriesOptions;
use super::style::{Color, SeriesType, ZoomType};

pub const CHART_OWNER_ID: &str = "chart";

const SERIES_SLOT: &str = "series";
const X_AXIS_SLOT: &str = "xAxis";
const Y_AXIS_SLOT: &str = "yAxis";

/// Handler table captured from a child, with where that child lives.
#[derive(Debug, Clone)]
struct ChildEvents {
    kind: ContextKind,
    slot: &'static str,
    events: EventRegistrations,
}

/// Root options handed to the engine.
///
/// Series and axes are copied in when added; their handler tables are
/// captured at the same moment and installed on an [`EventBridge`] by
/// [`ChartOptions::bind_events`]. Adding a child again under the same id
/// replaces both its options and its handlers.
#[derive(Debug, Clone, Default)]
pub struct ChartOptions {
    tree: OptionTree,
    events: EventRegistrations,
    child_events: IndexMap<String, ChildEvents>,
}

impl ChartOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            tree: OptionTree::with_config(config),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn events(&self) -> &EventRegistrations {
        &self.events
    }

    option_setters! {
        set_type("chart/type", SeriesType);
        set_background_color("chart/backgroundColor", Color);
        set_zoom_type("chart/zoomType", ZoomType);
        set_animation("chart/animation", bool);
        set_height("chart/height", f64);
        set_title_text("title/text", &str);
        set_subtitle_text("subtitle/text", &str);
        set_legend_enabled("legend/enabled", bool);
        set_credits_enabled("credits/enabled", bool);
        set_tooltip_shared("tooltip/shared", bool);
        set_tooltip_value_suffix("tooltip/valueSuffix", &str);
    }

    pub fn set_plot_options(&mut self, plot_options: &PlotOptions) -> BridgeResult<&mut Self> {
        let path = plot_options.chart_path();
        self.set_nested(&path, plot_options)
    }

    /// Adds `series`, or replaces the entry already carrying its id.
    pub fn add_series(&mut self, series: &SeriesOptions) -> BridgeResult<&mut Self> {
        let owner = series.owner_id();
        let point_owner = series.point_owner_id();
        self.claim_owner(owner, ContextKind::Series, SERIES_SLOT)?;
        self.claim_owner(&point_owner, ContextKind::Point, SERIES_SLOT)?;

        self.upsert_child(SERIES_SLOT, owner, series.get_options())?;
        self.capture_events(owner, ContextKind::Series, SERIES_SLOT, series.events());
        self.capture_events(&point_owner, ContextKind::Point, SERIES_SLOT, series.point_events());
        Ok(self)
    }

    pub fn add_x_axis(&mut self, axis: &AxisOptions) -> BridgeResult<&mut Self> {
        self.add_axis(X_AXIS_SLOT, axis)
    }

    pub fn add_y_axis(&mut self, axis: &AxisOptions) -> BridgeResult<&mut Self> {
        self.add_axis(Y_AXIS_SLOT, axis)
    }

    fn add_axis(&mut self, slot: &'static str, axis: &AxisOptions) -> BridgeResult<&mut Self> {
        let owner = axis.owner_id();
        self.claim_owner(owner, ContextKind::Axis, slot)?;
        self.upsert_child(slot, owner, axis.get_options())?;
        self.capture_events(owner, ContextKind::Axis, slot, axis.events());
        Ok(self)
    }

    // Handler owners share one namespace on the bridge, so an id may only be
    // reused by the same kind of child in the same sequence.
    fn claim_owner(&self, owner: &str, kind: ContextKind, slot: &'static str) -> BridgeResult<()> {
        if owner == CHART_OWNER_ID {
            return Err(BridgeError::InvalidData(format!(
                "owner id {owner:?} is reserved for chart-level handlers"
            )));
        }
        match self.child_events.get(owner) {
            Some(existing) if existing.kind != kind || existing.slot != slot => {
                Err(BridgeError::InvalidData(format!(
                    "owner id {owner:?} is already used by a {:?} in {}",
                    existing.kind, existing.slot
                )))
            }
            _ => Ok(()),
        }
    }

    fn upsert_child(&mut self, slot: &'static str, id: &str, options: ConfigNode) -> BridgeResult<()> {
        let same_id = |item: &ConfigValue| {
            item.as_container()
                .and_then(|node| node.get("id"))
                .and_then(ConfigValue::as_str)
                == Some(id)
        };
        if let Some(ConfigValue::Sequence(items)) = self.tree.get_mut(slot) {
            if let Some(existing) = items.iter_mut().find(|item| same_id(&**item)) {
                *existing = ConfigValue::Container(options);
                debug!(slot, id, "replaced child options");
                return Ok(());
            }
        }
        self.tree.push_option(slot, ConfigValue::Container(options))
    }

    // Empty tables are kept so binding clears what the bridge still holds.
    fn capture_events(
        &mut self,
        owner: &str,
        kind: ContextKind,
        slot: &'static str,
        events: &EventRegistrations,
    ) {
        self.child_events.insert(
            owner.to_owned(),
            ChildEvents {
                kind,
                slot,
                events: events.clone(),
            },
        );
    }

    event_handler_setters!(events {
        set_click_event_handler => Click;
        set_load_event_handler => Load;
        set_redraw_event_handler => Redraw;
        /// Returning `false` keeps the current zoom after a drag selection.
        set_selection_event_handler => Selection;
        set_add_series_event_handler => AddSeries;
        set_drilldown_event_handler => Drilldown;
        set_drillup_event_handler => Drillup;
    });

    pub fn clear_event_handler(&mut self, kind: EventKind) -> &mut Self {
        self.events.set(kind, None);
        self
    }

    /// Installs the chart's and every added child's handlers on `bridge`.
    pub fn bind_events(&self, bridge: &EventBridge) {
        bridge.adopt(CHART_OWNER_ID, &self.events);
        for (owner, child) in &self.child_events {
            bridge.adopt(owner, &child.events);
        }
        debug!(owners = self.child_events.len() + 1, "bound chart events");
    }
}

impl OptionBuilder for ChartOptions {
    fn tree(&self) -> &OptionTree {
        &self.tree
    }

    fn tree_mut(&mut self) -> &mut OptionTree {
        &mut self.tree
    }
}
