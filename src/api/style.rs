use serde::{Deserialize, Serialize};

use crate::core::{ConfigNode, ConfigValue};
use crate::error::{BridgeError, BridgeResult};

/// Enums whose engine representation is a fixed string.
pub trait WireName: Copy {
    fn wire_name(self) -> &'static str;
}

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal,)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )*
        }

        impl WireName for $name {
            fn wire_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)*
                }
            }
        }

        impl From<$name> for ConfigValue {
            fn from(value: $name) -> Self {
                ConfigValue::from(value.wire_name())
            }
        }
    };
}

wire_enum!(
    /// Series renderer type, also the key under `plotOptions`.
    SeriesType {
        Line => "line",
        Spline => "spline",
        Area => "area",
        AreaSpline => "areaspline",
        Column => "column",
        Bar => "bar",
        Pie => "pie",
        Scatter => "scatter",
        Gauge => "gauge",
        Funnel => "funnel",
    }
);

wire_enum!(
    DashStyle {
        Solid => "Solid",
        ShortDash => "ShortDash",
        ShortDot => "ShortDot",
        Dash => "Dash",
        Dot => "Dot",
        LongDash => "LongDash",
        DashDot => "DashDot",
    }
);

wire_enum!(
    Align {
        Left => "left",
        Center => "center",
        Right => "right",
    }
);

wire_enum!(
    VerticalAlign {
        Top => "top",
        Middle => "middle",
        Bottom => "bottom",
    }
);

wire_enum!(
    AxisType {
        Linear => "linear",
        Logarithmic => "logarithmic",
        Datetime => "datetime",
        Category => "category",
    }
);

wire_enum!(
    MarkerSymbol {
        Circle => "circle",
        Square => "square",
        Diamond => "diamond",
        Triangle => "triangle",
        TriangleDown => "triangle-down",
    }
);

wire_enum!(
    Stacking {
        Normal => "normal",
        Percent => "percent",
    }
);

wire_enum!(
    ZoomType {
        X => "x",
        Y => "y",
        Xy => "xy",
    }
);

wire_enum!(
    FontWeight {
        Normal => "normal",
        Bold => "bold",
    }
);

/// One gradient stop: offset in `0..=1` and its color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: String,
}

/// Linear gradient in bounding-box relative coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stops: Vec::new(),
        }
    }

    pub fn with_stop(mut self, offset: f64, color: &Color) -> BridgeResult<Self> {
        if !(0.0..=1.0).contains(&offset) {
            return Err(BridgeError::InvalidData(format!(
                "gradient stop offset must be within [0, 1], got {offset}"
            )));
        }
        let Some(color) = color.flat_css() else {
            return Err(BridgeError::InvalidData(
                "gradient stops cannot nest gradients".to_owned(),
            ));
        };
        self.stops.push(GradientStop { offset, color });
        Ok(self)
    }
}

impl From<&LinearGradient> for ConfigValue {
    fn from(gradient: &LinearGradient) -> Self {
        let mut direction = ConfigNode::new();
        direction.insert("x1", gradient.x1);
        direction.insert("y1", gradient.y1);
        direction.insert("x2", gradient.x2);
        direction.insert("y2", gradient.y2);

        let stops: Vec<ConfigValue> = gradient
            .stops
            .iter()
            .map(|stop| {
                ConfigValue::Sequence(vec![
                    ConfigValue::from(stop.offset),
                    ConfigValue::from(stop.color.as_str()),
                ])
            })
            .collect();

        let mut node = ConfigNode::new();
        node.insert("linearGradient", direction);
        node.insert("stops", stops);
        ConfigValue::Container(node)
    }
}

/// Color value object, resolved to a hex/rgba string or a gradient container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Color {
    Hex(String),
    Rgba { r: u8, g: u8, b: u8, a: f64 },
    Gradient(LinearGradient),
}

impl Color {
    /// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa`.
    pub fn hex(value: &str) -> BridgeResult<Self> {
        let digits = value.strip_prefix('#').unwrap_or_default();
        let valid = matches!(digits.len(), 3 | 6 | 8)
            && digits.chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            return Err(BridgeError::InvalidData(format!(
                "invalid hex color `{value}`"
            )));
        }
        Ok(Self::Hex(value.to_owned()))
    }

    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgba { r, g, b, a: 1.0 }
    }

    #[must_use]
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self::Rgba {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }

    #[must_use]
    pub fn gradient(gradient: LinearGradient) -> Self {
        Self::Gradient(gradient)
    }

    /// CSS string form; `None` for gradients.
    #[must_use]
    pub fn flat_css(&self) -> Option<String> {
        match self {
            Self::Hex(hex) => Some(hex.clone()),
            Self::Rgba { r, g, b, a } => Some(format!("rgba({r}, {g}, {b}, {a})")),
            Self::Gradient(_) => None,
        }
    }
}

impl From<&Color> for ConfigValue {
    fn from(color: &Color) -> Self {
        match color {
            Color::Gradient(gradient) => ConfigValue::from(gradient),
            flat => ConfigValue::from(flat.flat_css()),
        }
    }
}

impl From<Color> for ConfigValue {
    fn from(color: Color) -> Self {
        ConfigValue::from(&color)
    }
}
