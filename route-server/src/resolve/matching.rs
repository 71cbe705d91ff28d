//! Scoring rules used by the hub resolver.

use xxhash_rust::xxh3::xxh3_64;

use crate::domain::{Coord, ResolveMode, normalize_text};
use crate::gazetteer::{self, StaticHub};
use crate::geocode::GeocodeCandidate;

/// Minimum static match score accepted.
const MIN_STATIC_SCORE: usize = 4;

/// Score for an exact name or alias match.
const EXACT_SCORE: usize = 100;

/// Score how well `text` (already normalized) names `label`.
///
/// Exact equality scores 100. Otherwise, if one contains the other, the
/// score is the length of the shorter (contained) string.
pub(crate) fn label_score(text: &str, label: &str) -> usize {
    let label = normalize_text(label);
    if label.is_empty() {
        return 0;
    }
    if text == label {
        EXACT_SCORE
    } else if text.contains(label.as_str()) {
        label.len()
    } else if label.contains(text) {
        text.len()
    } else {
        0
    }
}

/// Best gazetteer hub for normalized `text`, first hub winning ties.
pub(crate) fn static_match(text: &str, mode: ResolveMode) -> Option<(&'static StaticHub, Coord)> {
    let mut best: Option<(&'static StaticHub, Coord, usize)> = None;
    for hub in gazetteer::hubs(mode) {
        let Some(coord) = hub.coord() else {
            continue;
        };
        let score = hub.labels().map(|l| label_score(text, l)).max().unwrap_or(0);
        if score >= MIN_STATIC_SCORE && best.is_none_or(|(_, _, s)| score > s) {
            best = Some((hub, coord, score));
        }
    }
    best.map(|(hub, coord, _)| (hub, coord))
}

/// Geocoder queries to try, in order.
pub(crate) fn query_variants(text: &str, mode: ResolveMode) -> Vec<String> {
    match mode {
        ResolveMode::Air => vec![format!("{text} airport"), text.to_string()],
        ResolveMode::Sea => vec![
            format!("{text} port"),
            format!("{text} harbor"),
            text.to_string(),
        ],
        ResolveMode::Land => vec![text.to_string()],
    }
}

const SETTLEMENT_WORDS: &[&str] = &["city", "town", "village", "administrative"];
const AIR_WORDS: &[&str] = &["airport", "aerodrome", "aeroway"];
const SEA_WORDS: &[&str] = &["port", "harbour", "harbor", "terminal", "dock"];
const PLACE_WORDS: &[&str] = &["city", "town", "village", "administrative", "place"];

/// Whole-word view of a candidate's display name and OSM tags.
struct Keywords(String);

impl Keywords {
    fn of(candidate: &GeocodeCandidate) -> Self {
        let text = [
            Some(candidate.display_name.as_str()),
            candidate.class.as_deref(),
            candidate.kind.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
        Keywords(normalize_text(&text))
    }

    fn mentions(&self, words: &[&str]) -> bool {
        self.0.split(' ').any(|token| words.contains(&token))
    }
}

/// Score a geocoder candidate at position `rank` for the given class.
pub(crate) fn candidate_score(candidate: &GeocodeCandidate, rank: usize, mode: ResolveMode) -> f64 {
    let keywords = Keywords::of(candidate);

    let keyword = match mode {
        ResolveMode::Air => {
            let mut s = 0.0;
            if keywords.mentions(AIR_WORDS) {
                s += 3.0;
            }
            if keywords.mentions(SETTLEMENT_WORDS) {
                s -= 2.0;
            }
            s
        }
        ResolveMode::Sea => {
            let mut s = 0.0;
            if keywords.mentions(SEA_WORDS) {
                s += 3.0;
            }
            if keywords.mentions(SETTLEMENT_WORDS) {
                s -= 2.0;
            }
            if keywords.mentions(AIR_WORDS) {
                s -= 3.0;
            }
            s
        }
        ResolveMode::Land => {
            if keywords.mentions(PLACE_WORDS) {
                2.0
            } else {
                0.0
            }
        }
    };
    keyword + 0.5 / (rank as f64 + 1.0)
}

/// Whether a candidate is some other kind of facility than `mode` wants.
///
/// An airfield never stands in for a seaport, however the query was phrased.
pub(crate) fn is_other_facility(candidate: &GeocodeCandidate, mode: ResolveMode) -> bool {
    match mode {
        ResolveMode::Sea => {
            let keywords = Keywords::of(candidate);
            keywords.mentions(AIR_WORDS) && !keywords.mentions(SEA_WORDS)
        }
        ResolveMode::Air | ResolveMode::Land => false,
    }
}

/// Keyword score at which a candidate is good enough to stop querying.
pub(crate) fn strong_score(mode: ResolveMode) -> f64 {
    match mode {
        ResolveMode::Air | ResolveMode::Sea => 3.0,
        ResolveMode::Land => 2.0,
    }
}

/// Short display name: the part before the first comma.
pub(crate) fn short_name(display_name: &str) -> Option<&str> {
    display_name
        .split(',')
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Deterministic pseudo-location for text nothing else could place.
///
/// Longitude spans the full range; latitude stays within ±60° so synthetic
/// points land somewhere plausible on a map.
pub(crate) fn synthetic_coord(normalized: &str) -> Coord {
    let seed = if normalized.is_empty() {
        "unknown"
    } else {
        normalized
    };
    let h = xxh3_64(seed.as_bytes());
    let lon = (h % 36_001) as f64 / 100.0 - 180.0;
    let lat = ((h >> 32) % 12_001) as f64 / 100.0 - 60.0;
    // Both values are in range by construction.
    Coord::new(lon, lat).unwrap_or(Coord::ORIGIN)
}
