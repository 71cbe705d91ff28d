//! Canonical field lookup over free-form rows.
//!
//! Spreadsheet exports name their columns however they like. A canonical
//! field is found by its own key, then by an explicit request mapping, then
//! by a known alias compared after slugifying the row's keys.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::domain::slugify;

use super::EnrichError;

/// Fields the enricher reads from a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    OriginName,
    DestinationName,
    Mode,
    RiskScore,
    RiskLevel,
    LeadTimeDays,
    PlannedDeparture,
    PlannedArrival,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 8] = [
        CanonicalField::OriginName,
        CanonicalField::DestinationName,
        CanonicalField::Mode,
        CanonicalField::RiskScore,
        CanonicalField::RiskLevel,
        CanonicalField::LeadTimeDays,
        CanonicalField::PlannedDeparture,
        CanonicalField::PlannedArrival,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CanonicalField::OriginName => "origin_name",
            CanonicalField::DestinationName => "destination_name",
            CanonicalField::Mode => "mode",
            CanonicalField::RiskScore => "risk_score",
            CanonicalField::RiskLevel => "risk_level",
            CanonicalField::LeadTimeDays => "lead_time_days",
            CanonicalField::PlannedDeparture => "planned_departure_ts",
            CanonicalField::PlannedArrival => "planned_arrival_ts",
        }
    }

    /// Known alternative column names, most specific first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            CanonicalField::OriginName => &[
                "origin",
                "origin_location",
                "from_location",
                "source",
                "origin_city",
                "from",
            ],
            CanonicalField::DestinationName => &[
                "destination",
                "destination_location",
                "to_location",
                "end_location",
                "destination_city",
                "to",
            ],
            CanonicalField::Mode => &[
                "mode_of_transport",
                "transport_mode",
                "shipping_method",
                "carrier_type",
            ],
            CanonicalField::RiskScore => &["route_risk_score", "risk"],
            CanonicalField::RiskLevel => &["route_risk_level", "risk_rating"],
            CanonicalField::LeadTimeDays => &["lead_time", "transit_days", "lead_days"],
            CanonicalField::PlannedDeparture => &["planned_departure", "departure_date", "ship_date"],
            CanonicalField::PlannedArrival => &["planned_arrival", "arrival_date", "delivery_date"],
        }
    }

    /// Look up a field by its canonical key, in any casing or punctuation.
    pub fn parse(name: &str) -> Option<Self> {
        let slug = slugify(name);
        Self::ALL.into_iter().find(|f| f.key() == slug)
    }
}

/// Request-level `sourceField -> canonicalField` overrides, validated.
#[derive(Debug, Clone, Default)]
pub struct FieldMappings {
    by_field: Vec<(CanonicalField, String)>,
}

impl FieldMappings {
    /// Validate raw mappings. Unknown canonical targets are rejected.
    pub fn parse(raw: &BTreeMap<String, String>) -> Result<Self, EnrichError> {
        let mut by_field = Vec::with_capacity(raw.len());
        for (source, target) in raw {
            let field = CanonicalField::parse(target).ok_or_else(|| EnrichError::InvalidRequest {
                message: format!("fieldMappings: unknown field '{target}' for '{source}'"),
            })?;
            by_field.push((field, source.clone()));
        }
        Ok(Self { by_field })
    }

    fn sources(&self, field: CanonicalField) -> impl Iterator<Item = &str> {
        self.by_field
            .iter()
            .filter(move |(f, _)| *f == field)
            .map(|(_, source)| source.as_str())
    }
}

/// Canonical view over one raw row.
pub struct RowFields<'a> {
    row: &'a Map<String, Value>,
    mappings: &'a FieldMappings,
}

impl<'a> RowFields<'a> {
    pub fn new(row: &'a Map<String, Value>, mappings: &'a FieldMappings) -> Self {
        Self { row, mappings }
    }

    /// The first non-blank value for `field`.
    pub fn get(&self, field: CanonicalField) -> Option<&'a Value> {
        let row = self.row;
        if let Some(v) = row.get(field.key()).filter(|v| !is_blank(v)) {
            return Some(v);
        }
        for source in self.mappings.sources(field) {
            if let Some(v) = row.get(source).filter(|v| !is_blank(v)) {
                return Some(v);
            }
        }

        let slugged: Vec<(String, &'a Value)> = row
            .iter()
            .filter(|(_, v)| !is_blank(v))
            .map(|(k, v)| (slugify(k), v))
            .collect();
        std::iter::once(field.key())
            .chain(field.aliases().iter().copied())
            .find_map(|name| slugged.iter().find(|(slug, _)| slug == name).map(|(_, v)| *v))
    }

    /// The field as trimmed text. Numbers and booleans are rendered.
    pub fn text(&self, field: CanonicalField) -> Option<String> {
        match self.get(field)? {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Null and whitespace-only strings never satisfy a field.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn direct_key_wins() {
        let r = row(json!({"origin_name": "Shanghai", "origin": "Ningbo"}));
        let m = FieldMappings::default();
        let f = RowFields::new(&r, &m);
        assert_eq!(f.text(CanonicalField::OriginName).as_deref(), Some("Shanghai"));
    }

    #[test]
    fn mapping_beats_alias() {
        let r = row(json!({"Pickup": "Ningbo", "origin": "Shanghai"}));
        let raw = BTreeMap::from([("Pickup".to_string(), "origin_name".to_string())]);
        let m = FieldMappings::parse(&raw).unwrap();
        let f = RowFields::new(&r, &m);
        assert_eq!(f.text(CanonicalField::OriginName).as_deref(), Some("Ningbo"));
    }

    #[test]
    fn aliases_match_after_slugify() {
        let r = row(json!({"Origin City": "Hamburg", "Destination Location": "Rotterdam", "Shipping Method": "Road"}));
        let m = FieldMappings::default();
        let f = RowFields::new(&r, &m);
        assert_eq!(f.text(CanonicalField::OriginName).as_deref(), Some("Hamburg"));
        assert_eq!(f.text(CanonicalField::DestinationName).as_deref(), Some("Rotterdam"));
        assert_eq!(f.text(CanonicalField::Mode).as_deref(), Some("Road"));
    }

    #[test]
    fn alias_order_decides_between_columns() {
        let r = row(json!({"from": "Lyon", "origin": "Paris"}));
        let m = FieldMappings::default();
        let f = RowFields::new(&r, &m);
        assert_eq!(f.text(CanonicalField::OriginName).as_deref(), Some("Paris"));
    }

    #[test]
    fn blank_values_never_match() {
        let r = row(json!({"origin_name": "  ", "origin": null, "from": "Lyon"}));
        let m = FieldMappings::default();
        let f = RowFields::new(&r, &m);
        assert_eq!(f.text(CanonicalField::OriginName).as_deref(), Some("Lyon"));
        assert!(f.get(CanonicalField::DestinationName).is_none());
    }

    #[test]
    fn numbers_render_as_text() {
        let r = row(json!({"risk": 0.4}));
        let m = FieldMappings::default();
        let f = RowFields::new(&r, &m);
        assert_eq!(f.get(CanonicalField::RiskScore), Some(&json!(0.4)));
        assert_eq!(f.text(CanonicalField::RiskScore).as_deref(), Some("0.4"));
    }

    #[test]
    fn unknown_mapping_target_is_rejected() {
        let raw = BTreeMap::from([("col".to_string(), "favourite_colour".to_string())]);
        let err = FieldMappings::parse(&raw).unwrap_err();
        assert!(matches!(err, EnrichError::InvalidRequest { .. }));
    }

    #[test]
    fn canonical_names_parse_loosely() {
        assert_eq!(CanonicalField::parse("Origin Name"), Some(CanonicalField::OriginName));
        assert_eq!(CanonicalField::parse("planned-arrival-ts"), Some(CanonicalField::PlannedArrival));
        assert_eq!(CanonicalField::parse("origin"), None);
    }
}
