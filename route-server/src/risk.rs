//! Route risk scoring.
//!
//! A row can carry its own risk as a number or a label; either wins over
//! the heuristic. The heuristic adds distance, lead time and a penalty for
//! fallback geometry to a per-mode base.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;

use crate::domain::TransportMode;

/// Distance at which the distance term saturates.
const DISTANCE_SATURATION_KM: f64 = 12_000.0;
const DISTANCE_WEIGHT: f64 = 0.33;
/// Lead time at which the lead-time term saturates.
const LEAD_SATURATION_DAYS: f64 = 45.0;
const LEAD_WEIGHT: f64 = 0.18;
const FALLBACK_PENALTY: f64 = 0.1;

/// Coarse risk bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bucket a score in `[0, 1]`.
    pub fn from_score(score: f64) -> Self {
        if score <= 0.35 {
            RiskLevel::Low
        } else if score <= 0.7 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    /// Parse a label, case-insensitively. Accepts "med" for medium.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "medium" | "med" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            _ => None,
        }
    }

    /// Representative score for an explicit label.
    pub fn score(&self) -> f64 {
        match self {
            RiskLevel::Low => 0.2,
            RiskLevel::Medium => 0.55,
            RiskLevel::High => 0.85,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Risk-related raw values taken from a row.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskInputs<'a> {
    pub risk_score: Option<&'a Value>,
    pub risk_level: Option<&'a Value>,
    pub lead_time_days: Option<&'a Value>,
    pub planned_departure: Option<&'a Value>,
    pub planned_arrival: Option<&'a Value>,
}

/// Route facts the heuristic depends on.
#[derive(Debug, Clone, Copy)]
pub struct RouteFacts {
    pub mode: TransportMode,
    pub distance_km: f64,
    pub is_fallback: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAssessment {
    pub score: f64,
    pub level: RiskLevel,
}

/// Score a route, preferring values stated on the row.
pub fn assess(inputs: &RiskInputs<'_>, facts: &RouteFacts) -> RiskAssessment {
    if let Some(score) = inputs.risk_score.and_then(number) {
        let score = score.clamp(0.0, 1.0);
        return RiskAssessment {
            score,
            level: RiskLevel::from_score(score),
        };
    }

    if let Some(level) = inputs
        .risk_level
        .and_then(Value::as_str)
        .and_then(RiskLevel::parse)
    {
        return RiskAssessment {
            score: level.score(),
            level,
        };
    }

    let score = heuristic(facts, lead_time_days(inputs).unwrap_or(0.0));
    RiskAssessment {
        score,
        level: RiskLevel::from_score(score),
    }
}

fn heuristic(facts: &RouteFacts, lead_days: f64) -> f64 {
    let distance = if facts.distance_km.is_finite() {
        facts.distance_km.max(0.0)
    } else {
        0.0
    };
    let raw = base_score(facts.mode)
        + (distance / DISTANCE_SATURATION_KM).min(1.0) * DISTANCE_WEIGHT
        + (lead_days.max(0.0) / LEAD_SATURATION_DAYS).min(1.0) * LEAD_WEIGHT
        + if facts.is_fallback { FALLBACK_PENALTY } else { 0.0 };
    raw.clamp(0.0, 1.0)
}

fn base_score(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Sea => 0.32,
        TransportMode::Air => 0.18,
        TransportMode::Rail => 0.22,
        TransportMode::Road => 0.26,
        TransportMode::Multimodal => 0.30,
    }
}

/// Stated lead time, or the gap between planned departure and arrival.
fn lead_time_days(inputs: &RiskInputs<'_>) -> Option<f64> {
    if let Some(days) = inputs.lead_time_days.and_then(number) {
        return Some(days);
    }
    let departure = inputs.planned_departure.and_then(Value::as_str).and_then(parse_timestamp)?;
    let arrival = inputs.planned_arrival.and_then(Value::as_str).and_then(parse_timestamp)?;
    let secs = (arrival - departure).num_seconds();
    (secs >= 0).then(|| secs as f64 / 86_400.0)
}

/// A finite number, or a string holding one.
fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse RFC 3339 or one of the common spreadsheet date formats.
/// Offsets are normalized to UTC; naive values are taken as UTC.
pub(crate) fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn facts(mode: TransportMode, distance_km: f64, is_fallback: bool) -> RouteFacts {
        RouteFacts {
            mode,
            distance_km,
            is_fallback,
        }
    }

    #[test]
    fn explicit_score_wins_and_is_clamped() {
        let score = json!(1.7);
        let level = json!("low");
        let inputs = RiskInputs {
            risk_score: Some(&score),
            risk_level: Some(&level),
            ..Default::default()
        };
        let r = assess(&inputs, &facts(TransportMode::Air, 100.0, false));
        assert_eq!(r.score, 1.0);
        assert_eq!(r.level, RiskLevel::High);
    }

    #[test]
    fn numeric_string_score() {
        let score = json!(" 0.4 ");
        let inputs = RiskInputs {
            risk_score: Some(&score),
            ..Default::default()
        };
        let r = assess(&inputs, &facts(TransportMode::Sea, 0.0, false));
        assert_eq!(r.score, 0.4);
        assert_eq!(r.level, RiskLevel::Medium);
    }

    #[test]
    fn non_numeric_score_falls_through_to_level() {
        let score = json!("n/a");
        let level = json!("MED");
        let inputs = RiskInputs {
            risk_score: Some(&score),
            risk_level: Some(&level),
            ..Default::default()
        };
        let r = assess(&inputs, &facts(TransportMode::Sea, 0.0, false));
        assert_eq!(r.score, 0.55);
        assert_eq!(r.level, RiskLevel::Medium);
    }

    #[test]
    fn heuristic_terms() {
        let none = RiskInputs::default();
        let r = assess(&none, &facts(TransportMode::Air, 0.0, false));
        assert!((r.score - 0.18).abs() < 1e-12);
        assert_eq!(r.level, RiskLevel::Low);

        // Full distance term, no lead time, fallback penalty.
        let r = assess(&none, &facts(TransportMode::Sea, 24_000.0, true));
        assert!((r.score - (0.32 + 0.33 + 0.1)).abs() < 1e-12);
        assert_eq!(r.level, RiskLevel::High);
    }

    #[test]
    fn lead_time_from_field() {
        let lead = json!("45");
        let inputs = RiskInputs {
            lead_time_days: Some(&lead),
            ..Default::default()
        };
        let r = assess(&inputs, &facts(TransportMode::Road, 0.0, false));
        assert!((r.score - (0.26 + 0.18)).abs() < 1e-12);
    }

    #[test]
    fn lead_time_from_planned_dates() {
        let dep = json!("2024-03-01");
        let arr = json!("2024-03-23T12:00:00Z");
        let inputs = RiskInputs {
            planned_departure: Some(&dep),
            planned_arrival: Some(&arr),
            ..Default::default()
        };
        assert_eq!(lead_time_days(&inputs), Some(22.5));
    }

    #[test]
    fn reversed_dates_are_ignored() {
        let dep = json!("03/10/2024");
        let arr = json!("2024/03/01");
        let inputs = RiskInputs {
            planned_departure: Some(&dep),
            planned_arrival: Some(&arr),
            ..Default::default()
        };
        assert_eq!(lead_time_days(&inputs), None);
    }

    #[test]
    fn timestamp_formats() {
        assert!(parse_timestamp("2024-03-01T08:00:00+02:00").is_some());
        assert!(parse_timestamp("2024-03-01 08:00:00").is_some());
        assert!(parse_timestamp("2024/03/01").is_some());
        assert!(parse_timestamp("03/01/2024").is_some());
        assert!(parse_timestamp("next tuesday").is_none());
    }

    #[test]
    fn labels() {
        assert_eq!(RiskLevel::from_score(0.35), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0.36), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(0.7), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(0.71), RiskLevel::High);
        assert_eq!(RiskLevel::parse(" High "), Some(RiskLevel::High));
        assert_eq!(RiskLevel::parse("severe"), None);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_mode() -> impl Strategy<Value = TransportMode> {
            prop::sample::select(TransportMode::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn score_in_unit_interval(
                mode in any_mode(),
                km in prop::num::f64::ANY,
                lead in prop::num::f64::ANY,
                fallback in any::<bool>(),
            ) {
                let lead = json!(lead.to_string());
                let inputs = RiskInputs { lead_time_days: Some(&lead), ..Default::default() };
                let r = assess(&inputs, &facts(mode, km, fallback));
                prop_assert!((0.0..=1.0).contains(&r.score));
                prop_assert_eq!(r.level, RiskLevel::from_score(r.score));
            }

            #[test]
            fn explicit_score_always_clamped(explicit in -1e6f64..1e6, mode in any_mode()) {
                let v = json!(explicit);
                let inputs = RiskInputs { risk_score: Some(&v), ..Default::default() };
                let r = assess(&inputs, &facts(mode, 1000.0, false));
                prop_assert_eq!(r.score, explicit.clamp(0.0, 1.0));
            }
        }
    }
}
