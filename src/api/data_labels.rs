use crate::core::OptionTree;

use super::option_builder::{OptionBuilder, option_setters};
use super::style::{Align, Color, FontWeight, VerticalAlign};

/// Labels drawn next to each point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataLabels {
    tree: OptionTree,
}

impl DataLabels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    option_setters! {
        set_enabled("enabled", bool);
        set_color("color", Color);
        set_align("align", Align);
        set_vertical_align("verticalAlign", VerticalAlign);
        /// Engine format string such as `{point.y:.1f}`.
        set_format("format", &str);
        set_rotation("rotation", f64);
        set_x("x", f64);
        set_y("y", f64);
        set_inside("inside", bool);
        set_font_weight("style/fontWeight", FontWeight);
        set_font_size("style/fontSize", &str);
        set_text_outline("style/textOutline", &str);
    }
}

impl OptionBuilder for DataLabels {
    fn tree(&self) -> &OptionTree {
        &self.tree
    }

    fn tree_mut(&mut self) -> &mut OptionTree {
        &mut self.tree
    }
}
