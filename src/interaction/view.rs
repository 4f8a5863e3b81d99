use serde::{Deserialize, Serialize};

use crate::core::native::NativeValue;
use crate::error::BridgeResult;

use super::event_kind::EventKind;
use super::payload::{NativeFields, NativePayload};

/// Which chart entity a context reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContextKind {
    Chart,
    Axis,
    Series,
    Point,
}

/// Engine-side entity handle supplied alongside an event firing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextEntity {
    pub kind: ContextKind,
    pub id: String,
    #[serde(default)]
    pub fields: NativePayload,
}

impl ContextEntity {
    #[must_use]
    pub fn new(kind: ContextKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            fields: NativePayload::new(),
        }
    }

    #[must_use]
    pub fn axis(id: impl Into<String>) -> Self {
        Self::new(ContextKind::Axis, id)
    }

    #[must_use]
    pub fn series(id: impl Into<String>) -> Self {
        Self::new(ContextKind::Series, id)
    }

    #[must_use]
    pub fn point(id: impl Into<String>) -> Self {
        Self::new(ContextKind::Point, id)
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<NativeValue>) -> Self {
        self.fields.insert(name, value);
        self
    }
}

impl NativeFields for ContextEntity {
    fn field(&self, name: &str) -> Option<&NativeValue> {
        self.fields.field(name)
    }
}

macro_rules! typed_field_accessors {
    ($($field:literal => $double:ident, $long:ident, $string:ident, $has:ident;)*) => {
        $(
            pub fn $double(&self) -> BridgeResult<f64> {
                self.double($field)
            }

            pub fn $long(&self) -> BridgeResult<i64> {
                self.long($field)
            }

            pub fn $string(&self) -> BridgeResult<&str> {
                self.string($field)
            }

            #[must_use]
            pub fn $has(&self) -> bool {
                self.has($field)
            }
        )*
    };
}

/// Read-only view of one event firing, valid for the handler call only.
#[derive(Debug, Clone, Copy)]
pub struct EventView<'a> {
    kind: EventKind,
    payload: &'a NativePayload,
    context: &'a [ContextEntity],
}

impl<'a> EventView<'a> {
    pub(crate) fn new(
        kind: EventKind,
        payload: &'a NativePayload,
        context: &'a [ContextEntity],
    ) -> Self {
        Self {
            kind,
            payload,
            context,
        }
    }

    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    #[must_use]
    pub fn payload(&self) -> &'a NativePayload {
        self.payload
    }

    #[must_use]
    pub fn context(&self) -> &'a [ContextEntity] {
        self.context
    }

    /// First context entity of `kind`, if the engine supplied one.
    #[must_use]
    pub fn context_of(&self, kind: ContextKind) -> Option<&'a ContextEntity> {
        self.context.iter().find(|entity| entity.kind == kind)
    }

    #[must_use]
    pub fn axis(&self) -> Option<&'a ContextEntity> {
        self.context_of(ContextKind::Axis)
    }

    #[must_use]
    pub fn series(&self) -> Option<&'a ContextEntity> {
        self.context_of(ContextKind::Series)
    }

    #[must_use]
    pub fn point(&self) -> Option<&'a ContextEntity> {
        self.context_of(ContextKind::Point)
    }

    typed_field_accessors! {
        "x" => x_as_double, x_as_long, x_as_string, has_x_value;
        "y" => y_as_double, y_as_long, y_as_string, has_y_value;
        "min" => min_as_double, min_as_long, min_as_string, has_min_value;
        "max" => max_as_double, max_as_long, max_as_string, has_max_value;
        "category" => category_as_double, category_as_long, category_as_string, has_category_value;
    }

    pub fn chart_x(&self) -> BridgeResult<f64> {
        self.double("chartX")
    }

    pub fn chart_y(&self) -> BridgeResult<f64> {
        self.double("chartY")
    }

    pub fn is_checked(&self) -> BridgeResult<bool> {
        self.boolean("checked")
    }

    /// Name of the series the event belongs to, from context or payload.
    pub fn series_name(&self) -> BridgeResult<&'a str> {
        match self.series() {
            Some(series) if series.has("name") => series.string("name"),
            _ => self.payload.string("seriesName"),
        }
    }
}

impl NativeFields for EventView<'_> {
    fn field(&self, name: &str) -> Option<&NativeValue> {
        self.payload.field(name)
    }
}

#[cfg(test)]
mod tests {
    use super::{ContextEntity, ContextKind, EventView};
    use crate::interaction::event_kind::EventKind;
    use crate::interaction::payload::{NativeFields, NativePayload};

    #[test]
    fn typed_accessors_read_payload_fields() {
        let payload = NativePayload::new().with("x", 7.9).with("y", "Q3");
        let view = EventView::new(EventKind::Click, &payload, &[]);

        assert_eq!(view.x_as_double().expect("x"), 7.9);
        assert_eq!(view.x_as_long().expect("x"), 7);
        assert!(view.x_as_string().is_err());
        assert_eq!(view.y_as_string().expect("y"), "Q3");
        assert!(view.has_y_value());
        assert!(!view.has_min_value());
    }

    #[test]
    fn context_entities_are_found_by_kind() {
        let payload = NativePayload::new();
        let context = [
            ContextEntity::series("s-1").with_field("name", "Revenue"),
            ContextEntity::point("p-3").with_field("x", 3.0).with_field("y", 41.5),
        ];
        let view = EventView::new(EventKind::Select, &payload, &context);

        assert!(view.axis().is_none());
        let point = view.point().expect("point");
        assert_eq!(point.id, "p-3");
        assert_eq!(point.double("y").expect("y"), 41.5);
        assert_eq!(view.series_name().expect("series name"), "Revenue");
        assert_eq!(
            view.context_of(ContextKind::Series).map(|entity| entity.id.as_str()),
            Some("s-1")
        );
    }

    #[test]
    fn series_name_falls_back_to_payload() {
        let payload = NativePayload::new().with("seriesName", "Costs");
        let view = EventView::new(EventKind::LegendItemClick, &payload, &[]);
        assert_eq!(view.series_name().expect("series name"), "Costs");
    }
}
