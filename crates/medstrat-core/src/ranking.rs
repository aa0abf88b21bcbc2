use crate::knowledge::{BrandStrategy, Resource, BRAND_STRATEGIES};
use crate::rules::default_rules;
use crate::session::Session;
use crate::types::StrategyFocus;
use serde::Serialize;

/// Score awarded when a rule matches.
pub const MATCH_SCORE: u32 = 3;

/// Maximum number of ranked strategies returned.
pub const MAX_RESULTS: usize = 6;

// ---------------------------------------------------------------------------
// RecommendationResult (output)
// ---------------------------------------------------------------------------

/// A brand strategy scored against a marketing focus. Derived, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResult {
    pub key: &'static str,
    pub name: &'static str,
    pub score: u32,
    pub reasoning: &'static str,
    pub focus: StrategyFocus,
    pub time: &'static str,
    pub budget: &'static str,
    pub resources: &'static [Resource],
}

// ---------------------------------------------------------------------------
// BrandRule
// ---------------------------------------------------------------------------

/// A fn-pointer rule: applies to one marketing focus and matches strategies.
pub struct BrandRule {
    pub id: &'static str,
    pub focus: &'static str,
    pub condition: fn(&BrandStrategy) -> bool,
    pub reasoning: &'static str,
}

// ---------------------------------------------------------------------------
// Ranker
// ---------------------------------------------------------------------------

pub struct Ranker {
    rules: Vec<BrandRule>,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl Ranker {
    pub fn new(rules: Vec<BrandRule>) -> Self {
        Self { rules }
    }

    /// Score one strategy for `focus`. The first matching rule wins.
    pub fn score(&self, strategy: &'static BrandStrategy, focus: &str) -> RecommendationResult {
        let hit = self
            .rules
            .iter()
            .filter(|r| r.focus == focus)
            .find(|r| (r.condition)(strategy));

        RecommendationResult {
            key: strategy.key,
            name: strategy.name,
            score: if hit.is_some() { MATCH_SCORE } else { 0 },
            reasoning: hit.map(|r| r.reasoning).unwrap_or(""),
            focus: strategy.focus,
            time: strategy.time,
            budget: strategy.budget,
            resources: strategy.resources,
        }
    }

    /// Rank every strategy for `focus`: drop zero scores, sort by score
    /// descending (stable, so ties keep table order), keep the top six.
    pub fn rank(&self, focus: Option<&str>) -> Vec<RecommendationResult> {
        let Some(focus) = focus else {
            return Vec::new();
        };
        let mut ranked: Vec<RecommendationResult> = BRAND_STRATEGIES
            .iter()
            .map(|s| self.score(s, focus))
            .filter(|r| r.score > 0)
            .collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(MAX_RESULTS);
        ranked
    }
}

/// Ranked brand strategies for the session's marketing focus.
pub fn rank_brand_strategies(session: &Session) -> Vec<RecommendationResult> {
    Ranker::default().rank(session.marketing_focus.as_deref())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
