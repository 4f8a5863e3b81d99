use crate::core::OptionTree;

use super::option_builder::{OptionBuilder, option_setters};
use super::style::{Color, MarkerSymbol};

/// Point marker options, nested into series or plot options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Marker {
    tree: OptionTree,
}

impl Marker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    option_setters! {
        set_enabled("enabled", bool);
        set_radius("radius", f64);
        set_symbol("symbol", MarkerSymbol);
        set_fill_color("fillColor", Color);
        set_line_color("lineColor", Color);
        set_line_width("lineWidth", f64);
        /// Marker state while the point is hovered.
        set_hover_enabled("states/hover/enabled", bool);
        set_hover_radius("states/hover/radius", f64);
        set_select_fill_color("states/select/fillColor", Color);
    }
}

impl OptionBuilder for Marker {
    fn tree(&self) -> &OptionTree {
        &self.tree
    }

    fn tree_mut(&mut self) -> &mut OptionTree {
        &mut self.tree
    }
}
