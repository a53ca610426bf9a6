//! Customer information card.
//!
//! Presentation only: it receives the record's fields as individual named
//! inputs and lays them out. The backend's customer columns get fixed
//! labels and come first; any other field follows under its own name.
//! An empty input set renders the labelled rows with blank values.

use custview_common::types::{CustomerRecord, display_value};
use dioxus::prelude::*;
use serde_json::{Map, Value};

/// Component name used for the client-only placeholder.
pub const COMPONENT_NAME: &str = "one-customer-info-card";

/// Known customer columns and their display labels, in display order.
pub const KNOWN_FIELDS: [(&str, &str); 4] = [
    ("customer_id", "顧客ID"),
    ("customer_name", "氏名"),
    ("age", "年齢"),
    ("gender", "性別"),
];

/// Named inputs of the card: the record's fields, spread one by one.
#[derive(Props, Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoCardProps {
    /// Field name to value.
    pub fields: Map<String, Value>,
}

impl InfoCardProps {
    /// Spreads a record into card inputs. No record means no inputs.
    #[must_use]
    pub fn spread(record: Option<&CustomerRecord>) -> Self {
        Self {
            fields: record.map(|r| r.as_map().clone()).unwrap_or_default(),
        }
    }

    /// Returns `true` when the card received no inputs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One rendered row of the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    /// Field name as received.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Display value; empty when the input is missing.
    pub value: String,
}

/// Lays out the card's rows: known columns first, then the rest.
#[must_use]
pub fn field_rows(props: &InfoCardProps) -> Vec<FieldRow> {
    let mut rows: Vec<FieldRow> = KNOWN_FIELDS
        .iter()
        .map(|(key, label)| FieldRow {
            key: (*key).to_string(),
            label: (*label).to_string(),
            value: props.fields.get(*key).map(display_value).unwrap_or_default(),
        })
        .collect();

    rows.extend(
        props
            .fields
            .iter()
            .filter(|(key, _)| !KNOWN_FIELDS.iter().any(|(known, _)| *known == key.as_str()))
            .map(|(key, value)| FieldRow {
                key: key.clone(),
                label: key.clone(),
                value: display_value(value),
            }),
    );
    rows
}

/// The card body.
#[allow(non_snake_case)]
pub fn InfoCard(props: InfoCardProps) -> Element {
    let rows = field_rows(&props);
    rsx! {
        div { class: "card-body", "data-component": "{COMPONENT_NAME}",
            dl {
                for row in rows {
                    div { key: "{row.key}", class: "field", "data-field": "{row.key}",
                        dt { "{row.label}" }
                        dd { "{row.value}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_to_string;
    use serde_json::json;

    fn record(value: Value) -> CustomerRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn spread_without_record_has_no_inputs() {
        assert!(InfoCardProps::spread(None).is_empty());
    }

    #[test]
    fn spread_passes_every_field() {
        let r = record(json!({"name": "Alice", "email": "a@x.com"}));
        let props = InfoCardProps::spread(Some(&r));
        assert_eq!(props.fields, r.into_map());
    }

    #[test]
    fn empty_props_render_blank_known_rows() {
        let html = render_to_string(InfoCard, InfoCardProps::default());
        assert!(html.contains("<dt>氏名</dt><dd></dd>"));
        assert_eq!(field_rows(&InfoCardProps::default()).len(), KNOWN_FIELDS.len());
    }

    #[test]
    fn known_fields_come_first_in_fixed_order() {
        let r = record(json!({"zip": "100", "gender": "女", "customer_id": "C110"}));
        let keys: Vec<String> = field_rows(&InfoCardProps::spread(Some(&r)))
            .into_iter()
            .map(|row| row.key)
            .collect();
        assert_eq!(keys, vec!["customer_id", "customer_name", "age", "gender", "zip"]);
    }

    #[test]
    fn values_are_escaped() {
        let r = record(json!({"customer_name": "<script>x</script>"}));
        let html = render_to_string(InfoCard, InfoCardProps::spread(Some(&r)));
        assert!(html.contains("&lt;script&gt;x"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn numeric_values_render_plainly() {
        let r = record(json!({"age": 30}));
        assert!(render_to_string(InfoCard, InfoCardProps::spread(Some(&r))).contains("<dd>30</dd>"));
    }
}
