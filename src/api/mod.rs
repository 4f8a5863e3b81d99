//! Option builders, value objects and the engine binding.

mod axis_options;
mod chart_binding;
mod chart_options;
mod data_labels;
mod json_contract;
mod marker;
mod option_builder;
mod plot_options;
mod series_options;
mod style;

pub use axis_options::{AxisOptions, PlotBand};
pub use chart_binding::ChartBinding;
pub use chart_options::{CHART_OWNER_ID, ChartOptions};
pub use data_labels::DataLabels;
pub use json_contract::{
    OPTIONS_SNAPSHOT_JSON_SCHEMA_V1, OptionsSnapshotJsonContractV1,
    snapshot_json_contract_v1_pretty,
};
pub use marker::Marker;
pub use option_builder::OptionBuilder;
pub use plot_options::PlotOptions;
pub use series_options::SeriesOptions;
pub use style::{
    Align, AxisType, Color, DashStyle, FontWeight, GradientStop, LinearGradient, MarkerSymbol,
    SeriesType, Stacking, VerticalAlign, WireName, ZoomType,
};
