use crate::core::{ConfigValue, OptionTree};
use crate::error::BridgeResult;
use crate::interaction::{EventKind, EventRegistrations};

use super::data_labels::DataLabels;
use super::marker::Marker;
use super::option_builder::{OptionBuilder, event_handler_setters, option_setters};
use super::style::{Color, DashStyle, SeriesType};

/// One series: its options plus series-level and point-level handlers.
///
/// Series handlers are dispatched under [`SeriesOptions::owner_id`], point
/// handlers under [`SeriesOptions::point_owner_id`].
#[derive(Debug, Clone)]
pub struct SeriesOptions {
    id: String,
    tree: OptionTree,
    events: EventRegistrations,
    point_events: EventRegistrations,
}

impl SeriesOptions {
    pub fn new(id: impl Into<String>, series_type: SeriesType) -> BridgeResult<Self> {
        let mut series = Self {
            id: id.into(),
            tree: OptionTree::new(),
            events: EventRegistrations::new(),
            point_events: EventRegistrations::new(),
        };
        let id = series.id.clone();
        series
            .set_fixed_option("id", id)?
            .set_fixed_option("type", series_type)?;
        Ok(series)
    }

    #[must_use]
    pub fn owner_id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn point_owner_id(&self) -> String {
        format!("{}/point", self.id)
    }

    #[must_use]
    pub fn events(&self) -> &EventRegistrations {
        &self.events
    }

    #[must_use]
    pub fn point_events(&self) -> &EventRegistrations {
        &self.point_events
    }

    option_setters! {
        set_name("name", &str);
        set_color("color", Color);
        set_dash_style("dashStyle", DashStyle);
        set_visible("visible", bool);
        set_x_axis("xAxis", usize);
        set_y_axis("yAxis", usize);
        set_z_index("zIndex", i32);
        set_line_width("lineWidth", f64);
        set_tooltip_value_suffix("tooltip/valueSuffix", &str);
    }

    /// Replaces the data with y values at implicit x positions.
    pub fn set_data(&mut self, values: &[f64]) -> BridgeResult<&mut Self> {
        self.set_fixed_option("data", values)
    }

    /// Replaces the data with explicit `(x, y)` pairs.
    pub fn set_xy_data(&mut self, points: &[(f64, f64)]) -> BridgeResult<&mut Self> {
        let data: Vec<ConfigValue> = points
            .iter()
            .map(|&(x, y)| ConfigValue::Sequence(vec![x.into(), y.into()]))
            .collect();
        self.set_fixed_option("data", data)
    }

    pub fn add_point(&mut self, value: impl Into<ConfigValue>) -> BridgeResult<&mut Self> {
        self.tree.push_option("data", value)?;
        Ok(self)
    }

    pub fn set_marker(&mut self, marker: &Marker) -> BridgeResult<&mut Self> {
        self.set_nested("marker", marker)
    }

    pub fn set_data_labels(&mut self, labels: &DataLabels) -> BridgeResult<&mut Self> {
        self.set_nested("dataLabels", labels)
    }

    event_handler_setters!(events {
        set_click_event_handler => Click;
        set_show_event_handler => Show;
        set_hide_event_handler => Hide;
        /// Returning `false` keeps the series visibility unchanged.
        set_legend_item_click_event_handler => LegendItemClick;
        set_checkbox_click_event_handler => CheckboxClick;
        set_mouse_over_event_handler => MouseOver;
        set_mouse_out_event_handler => MouseOut;
        set_after_animate_event_handler => AfterAnimate;
    });

    event_handler_setters!(point_events {
        set_point_click_event_handler => Click;
        set_point_select_event_handler => Select;
        set_point_unselect_event_handler => Unselect;
        set_point_mouse_over_event_handler => MouseOver;
        set_point_mouse_out_event_handler => MouseOut;
        set_point_remove_event_handler => Remove;
        set_point_update_event_handler => Update;
    });

    pub fn clear_event_handler(&mut self, kind: EventKind) -> &mut Self {
        self.events.set(kind, None);
        self
    }

    pub fn clear_point_event_handler(&mut self, kind: EventKind) -> &mut Self {
        self.point_events.set(kind, None);
        self
    }
}

impl OptionBuilder for SeriesOptions {
    fn tree(&self) -> &OptionTree {
        &self.tree
    }

    fn tree_mut(&mut self) -> &mut OptionTree {
        &mut self.tree
    }
}
