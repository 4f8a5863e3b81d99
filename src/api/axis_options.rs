use crate::core::{ConfigNode, ConfigValue, OptionTree};
use crate::error::BridgeResult;
use crate::interaction::{EventKind, EventRegistrations};

use super::option_builder::{OptionBuilder, event_handler_setters, option_setters};
use super::style::{AxisType, Color};

/// Colored range drawn across the plot area behind the series.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotBand {
    pub from: f64,
    pub to: f64,
    pub color: Option<Color>,
    pub label: Option<String>,
}

impl PlotBand {
    #[must_use]
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            color: None,
            label: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl From<&PlotBand> for ConfigValue {
    fn from(band: &PlotBand) -> Self {
        let mut node = ConfigNode::new();
        node.insert("from", band.from);
        node.insert("to", band.to);
        if let Some(color) = &band.color {
            node.insert("color", color);
        }
        if let Some(label) = &band.label {
            let mut text = ConfigNode::new();
            text.insert("text", label.as_str());
            node.insert("label", text);
        }
        ConfigValue::Container(node)
    }
}

/// One x or y axis with its extremes handlers.
#[derive(Debug, Clone)]
pub struct AxisOptions {
    id: String,
    tree: OptionTree,
    events: EventRegistrations,
}

impl AxisOptions {
    pub fn new(id: impl Into<String>) -> BridgeResult<Self> {
        let mut axis = Self {
            id: id.into(),
            tree: OptionTree::new(),
            events: EventRegistrations::new(),
        };
        let id = axis.id.clone();
        axis.set_fixed_option("id", id)?;
        Ok(axis)
    }

    #[must_use]
    pub fn owner_id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn events(&self) -> &EventRegistrations {
        &self.events
    }

    option_setters! {
        set_type("type", AxisType);
        set_title_text("title/text", &str);
        set_min("min", f64);
        set_max("max", f64);
        set_reversed("reversed", bool);
        set_opposite("opposite", bool);
        set_tick_interval("tickInterval", f64);
        set_grid_line_width("gridLineWidth", f64);
        set_labels_format("labels/format", &str);
    }

    pub fn set_categories(&mut self, categories: &[&str]) -> BridgeResult<&mut Self> {
        self.set_fixed_option("categories", categories)
    }

    pub fn add_plot_band(&mut self, band: &PlotBand) -> BridgeResult<&mut Self> {
        self.tree.push_option("plotBands", band)?;
        Ok(self)
    }

    event_handler_setters!(events {
        /// Fires before new extremes apply; returning `false` keeps the old ones.
        set_set_extremes_event_handler => SetExtremes;
        set_after_set_extremes_event_handler => AfterSetExtremes;
    });

    pub fn clear_event_handler(&mut self, kind: EventKind) -> &mut Self {
        self.events.set(kind, None);
        self
    }
}

impl OptionBuilder for AxisOptions {
    fn tree(&self) -> &OptionTree {
        &self.tree
    }

    fn tree_mut(&mut self) -> &mut OptionTree {
        &mut self.tree
    }
}
