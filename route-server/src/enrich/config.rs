//! Enrichment configuration.

use crate::cache::CacheConfig;
use crate::plan::PlannerConfig;

/// Top-level knobs for [`RouteEnricher`](super::RouteEnricher).
#[derive(Debug, Clone)]
pub struct EnrichConfig {
    /// Rows enriched concurrently within one request.
    pub concurrency: usize,

    /// Largest accepted request.
    pub max_rows: usize,

    pub planner: PlannerConfig,
    pub response_cache: CacheConfig,
    pub hub_cache: CacheConfig,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            concurrency: 8,
            max_rows: 5000,
            planner: PlannerConfig::default(),
            response_cache: CacheConfig::responses(),
            hub_cache: CacheConfig::hubs(),
        }
    }
}

impl EnrichConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_concurrency(mut self, n: usize) -> Self {
        self.concurrency = n.max(1);
        self
    }

    pub fn with_max_rows(mut self, n: usize) -> Self {
        self.max_rows = n;
        self
    }

    pub fn with_planner(mut self, planner: PlannerConfig) -> Self {
        self.planner = planner;
        self
    }

    pub fn with_response_cache(mut self, cache: CacheConfig) -> Self {
        self.response_cache = cache;
        self
    }

    pub fn with_hub_cache(mut self, cache: CacheConfig) -> Self {
        self.hub_cache = cache;
        self
    }
}

/// Point budgets for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointBudget {
    pub route: usize,
    pub segment: usize,
}

impl PointBudget {
    /// Bigger requests get coarser geometry.
    pub fn for_rows(rows: usize) -> Self {
        let route = match rows {
            0..=25 => 800,
            26..=100 => 400,
            101..=500 => 160,
            _ => 80,
        };
        Self {
            route,
            segment: (route / 2).max(24),
        }
    }
}
