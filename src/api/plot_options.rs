use crate::core::OptionTree;
use crate::error::BridgeResult;

use super::data_labels::DataLabels;
use super::marker::Marker;
use super::option_builder::{OptionBuilder, option_setters};
use super::style::{Color, DashStyle, SeriesType, Stacking, WireName};

/// Defaults shared by every series of one type, stored under
/// `plotOptions/<type>` once attached to a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    series_type: SeriesType,
    tree: OptionTree,
}

impl PlotOptions {
    #[must_use]
    pub fn new(series_type: SeriesType) -> Self {
        Self {
            series_type,
            tree: OptionTree::new(),
        }
    }

    #[must_use]
    pub fn series_type(&self) -> SeriesType {
        self.series_type
    }

    /// Path of this block inside the chart options.
    #[must_use]
    pub fn chart_path(&self) -> String {
        format!("plotOptions/{}", self.series_type.wire_name())
    }

    option_setters! {
        set_animation("animation", bool);
        set_color("color", Color);
        set_cursor("cursor", &str);
        set_dash_style("dashStyle", DashStyle);
        set_enable_mouse_tracking("enableMouseTracking", bool);
        set_line_width("lineWidth", f64);
        set_point_start("pointStart", f64);
        set_point_interval("pointInterval", f64);
        set_show_in_legend("showInLegend", bool);
        set_stacking("stacking", Stacking);
        set_threshold("threshold", f64);
    }

    pub fn set_marker(&mut self, marker: &Marker) -> BridgeResult<&mut Self> {
        self.set_nested("marker", marker)
    }

    pub fn set_data_labels(&mut self, labels: &DataLabels) -> BridgeResult<&mut Self> {
        self.set_nested("dataLabels", labels)
    }
}

impl OptionBuilder for PlotOptions {
    fn tree(&self) -> &OptionTree {
        &self.tree
    }

    fn tree_mut(&mut self) -> &mut OptionTree {
        &mut self.tree
    }
}
