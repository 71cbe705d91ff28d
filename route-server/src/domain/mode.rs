//! Transport modes and their classification from free text.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::text::normalize_text;

/// A shipment transport mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Sea,
    Air,
    Rail,
    Road,
    Multimodal,
}

impl TransportMode {
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Sea,
        TransportMode::Air,
        TransportMode::Rail,
        TransportMode::Road,
        TransportMode::Multimodal,
    ];

    /// Classify a free-text mode label ("Sea Freight", "FTL trucking", ...).
    ///
    /// Anything unrecognised is treated as sea freight.
    ///
    /// ```
    /// use route_server::domain::TransportMode;
    ///
    /// assert_eq!(TransportMode::classify("Air Cargo"), TransportMode::Air);
    /// assert_eq!(TransportMode::classify("FTL trucking"), TransportMode::Road);
    /// assert_eq!(TransportMode::classify("Ocean FCL"), TransportMode::Sea);
    /// assert_eq!(TransportMode::classify(""), TransportMode::Sea);
    /// ```
    pub fn classify(label: &str) -> Self {
        let normalized = normalize_text(label);
        let tokens: Vec<&str> = normalized.split(' ').filter(|t| !t.is_empty()).collect();

        if has_token(&tokens, |t| matches!(t, "multimodal" | "intermodal" | "combined")) {
            return TransportMode::Multimodal;
        }
        if has_token(&tokens, |t| {
            t.starts_with("air") || matches!(t, "flight" | "plane" | "aviation")
        }) {
            return TransportMode::Air;
        }
        if has_token(&tokens, |t| t.starts_with("rail") || matches!(t, "train" | "railroad")) {
            return TransportMode::Rail;
        }
        if has_token(&tokens, |t| {
            t.starts_with("truck")
                || matches!(t, "road" | "lorry" | "ground" | "ftl" | "ltl" | "van" | "drayage")
        }) {
            return TransportMode::Road;
        }
        TransportMode::Sea
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Sea => "sea",
            TransportMode::Air => "air",
            TransportMode::Rail => "rail",
            TransportMode::Road => "road",
            TransportMode::Multimodal => "multimodal",
        }
    }

    /// Whether routes in this mode run through a sea/air hub on each side.
    pub fn uses_hubs(&self) -> bool {
        matches!(self, TransportMode::Sea | TransportMode::Air)
    }

    /// Whether this mode travels overland.
    pub fn is_land(&self) -> bool {
        matches!(self, TransportMode::Road | TransportMode::Rail)
    }

    /// The gazetteer/cache class used to resolve locations for this mode.
    pub fn resolve_mode(&self) -> ResolveMode {
        match self {
            TransportMode::Air => ResolveMode::Air,
            TransportMode::Sea => ResolveMode::Sea,
            _ => ResolveMode::Land,
        }
    }
}

fn has_token(tokens: &[&str], pred: impl Fn(&str) -> bool) -> bool {
    tokens.iter().any(|t| pred(t))
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolution class for hub lookup: which gazetteer and query variants apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveMode {
    Air,
    Sea,
    Land,
}

impl ResolveMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolveMode::Air => "air",
            ResolveMode::Sea => "sea",
            ResolveMode::Land => "land",
        }
    }
}

impl fmt::Display for ResolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
