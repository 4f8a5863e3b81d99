use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// Native event identifiers, serialized with the engine's wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Click,
    Select,
    Unselect,
    MouseOver,
    MouseOut,
    Show,
    Hide,
    LegendItemClick,
    CheckboxClick,
    AfterAnimate,
    Load,
    Redraw,
    Selection,
    AddSeries,
    Drilldown,
    Drillup,
    SetExtremes,
    AfterSetExtremes,
    Remove,
    Update,
}

impl EventKind {
    pub const ALL: [EventKind; 20] = [
        Self::Click,
        Self::Select,
        Self::Unselect,
        Self::MouseOver,
        Self::MouseOut,
        Self::Show,
        Self::Hide,
        Self::LegendItemClick,
        Self::CheckboxClick,
        Self::AfterAnimate,
        Self::Load,
        Self::Redraw,
        Self::Selection,
        Self::AddSeries,
        Self::Drilldown,
        Self::Drillup,
        Self::SetExtremes,
        Self::AfterSetExtremes,
        Self::Remove,
        Self::Update,
    ];

    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Select => "select",
            Self::Unselect => "unselect",
            Self::MouseOver => "mouseOver",
            Self::MouseOut => "mouseOut",
            Self::Show => "show",
            Self::Hide => "hide",
            Self::LegendItemClick => "legendItemClick",
            Self::CheckboxClick => "checkboxClick",
            Self::AfterAnimate => "afterAnimate",
            Self::Load => "load",
            Self::Redraw => "redraw",
            Self::Selection => "selection",
            Self::AddSeries => "addSeries",
            Self::Drilldown => "drilldown",
            Self::Drillup => "drillup",
            Self::SetExtremes => "setExtremes",
            Self::AfterSetExtremes => "afterSetExtremes",
            Self::Remove => "remove",
            Self::Update => "update",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for EventKind {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.wire_name() == s)
            .ok_or_else(|| BridgeError::InvalidPayload(format!("unknown event kind `{s}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::EventKind;

    #[test]
    fn wire_names_match_serde_names() {
        for kind in EventKind::ALL {
            let json = serde_json::to_string(&kind).expect("json");
            assert_eq!(json, format!("\"{}\"", kind.wire_name()));
            assert_eq!(kind.wire_name().parse::<EventKind>().expect("parse"), kind);
        }
    }

    #[test]
    fn unknown_wire_name_is_rejected() {
        assert!("doubleClick".parse::<EventKind>().is_err());
    }
}
