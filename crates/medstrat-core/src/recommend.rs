//! Pure recommendation functions over a [`Session`].
//!
//! Nothing here fails: unset selections and unmapped keys produce empty or
//! default results.

use crate::knowledge::{self, CompetitiveFactor, ExperienceStrategy};
use crate::session::Session;
use crate::types::Rating;
use serde::Serialize;

pub const BUDGET_UNAVAILABLE: &str = "Not available - select practice type";

pub const ACQUISITION_ESSENTIALS: [&str; 4] = [
    "Online appointment booking optimization",
    "Referral incentive program implementation",
    "Health camp participation strategy",
    "Corporate health program development",
];

pub const RETENTION_ESSENTIALS: [&str; 4] = [
    "Systematic follow-up protocol",
    "Patient education program development",
    "Loyalty benefits for returning patients",
    "Annual health review system",
];

pub const REPUTATION_ESSENTIALS: [&str; 4] = [
    "Quarterly patient feedback collection",
    "Online review management system",
    "Transparent outcome reporting mechanism",
    "Quality accreditation pursuit",
];

pub const FINANCIAL_ESSENTIALS: [&str; 4] = [
    "Marketing budget allocation planning",
    "Revenue diversification strategy",
    "Cost optimization analysis",
    "ROI tracking system",
];

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpecialtyRecommendations {
    pub referral_sources: Vec<&'static str>,
    pub brand_differentiators: Vec<&'static str>,
    pub content_topics: Vec<&'static str>,
    pub community_programs: Vec<&'static str>,
}

impl SpecialtyRecommendations {
    pub fn is_empty(&self) -> bool {
        self.referral_sources.is_empty()
            && self.brand_differentiators.is_empty()
            && self.content_topics.is_empty()
            && self.community_programs.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PracticeRecommendations {
    pub marketing_channels: Vec<&'static str>,
    pub team_structure: Vec<&'static str>,
    pub technology_needs: Vec<&'static str>,
    pub partnership_opportunities: Vec<&'static str>,
}

impl PracticeRecommendations {
    pub fn is_empty(&self) -> bool {
        self.marketing_channels.is_empty()
            && self.team_structure.is_empty()
            && self.technology_needs.is_empty()
            && self.partnership_opportunities.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComprehensiveStrategy {
    pub personal_branding: Vec<&'static str>,
    pub patient_acquisition: Vec<&'static str>,
    pub patient_retention: Vec<&'static str>,
    pub professional_development: Vec<&'static str>,
    pub reputation_management: Vec<&'static str>,
    pub financial_planning: Vec<&'static str>,
}

/// A rated competitive factor with the strategies that apply to it.
#[derive(Debug, Clone, Serialize)]
pub struct PositionEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub strategies: &'static [&'static str],
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CompetitiveSummary {
    pub strengths: Vec<PositionEntry>,
    pub improvement_areas: Vec<PositionEntry>,
}

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

pub fn experience_strategy(session: &Session) -> Option<&'static ExperienceStrategy> {
    session
        .years_experience
        .and_then(knowledge::experience_strategy_for)
}

pub fn specialty_recommendations(session: &Session) -> SpecialtyRecommendations {
    session
        .specialty
        .as_deref()
        .and_then(knowledge::specialty_playbook)
        .map(|p| SpecialtyRecommendations {
            referral_sources: p.referral_sources.to_vec(),
            brand_differentiators: p.brand_differentiators.to_vec(),
            content_topics: p.content_topics.to_vec(),
            community_programs: p.community_programs.to_vec(),
        })
        .unwrap_or_default()
}

pub fn practice_recommendations(session: &Session) -> PracticeRecommendations {
    session
        .practice_type
        .as_deref()
        .and_then(knowledge::practice_type)
        .and_then(|p| knowledge::practice_playbook(p.scale))
        .map(|p| PracticeRecommendations {
            marketing_channels: p.marketing_channels.to_vec(),
            team_structure: p.team_structure.to_vec(),
            technology_needs: p.technology_needs.to_vec(),
            partnership_opportunities: p.partnership_opportunities.to_vec(),
        })
        .unwrap_or_default()
}

/// Six strategy buckets; derived items come before the fixed essentials.
pub fn comprehensive_strategy(session: &Session) -> ComprehensiveStrategy {
    let experience = experience_strategy(session);
    let specialty = specialty_recommendations(session);
    let practice = practice_recommendations(session);

    let mut out = ComprehensiveStrategy::default();

    if let Some(e) = experience {
        out.personal_branding.extend_from_slice(e.branding_priorities);
    }

    out.patient_acquisition.extend(specialty.referral_sources);
    out.patient_acquisition.extend(ACQUISITION_ESSENTIALS);

    out.patient_retention.extend(RETENTION_ESSENTIALS);

    out.professional_development.extend(practice.technology_needs);

    out.reputation_management.extend(specialty.brand_differentiators);
    out.reputation_management.extend(REPUTATION_ESSENTIALS);

    out.financial_planning.extend(FINANCIAL_ESSENTIALS);

    out
}

pub fn marketing_budget(session: &Session) -> String {
    let Some(practice) = session
        .practice_type
        .as_deref()
        .and_then(knowledge::practice_type)
    else {
        return BUDGET_UNAVAILABLE.to_string();
    };

    match experience_strategy(session) {
        Some(e) => format!(
            "{} - Allocation: {}",
            practice.marketing_budget, e.budget_allocation
        ),
        None => practice.marketing_budget.to_string(),
    }
}

/// Strengths (rated 3) and improvement areas (rated 1), in factor order.
pub fn competitive_summary(session: &Session) -> CompetitiveSummary {
    let entry = |f: &'static CompetitiveFactor| PositionEntry {
        key: f.key,
        name: f.name,
        strategies: f.improvement_strategies,
    };
    let rated = |rating: Rating| {
        knowledge::COMPETITIVE_FACTORS
            .iter()
            .filter(move |f| {
                session
                    .competitive_positioning
                    .get(f.key)
                    .is_some_and(|r| r.rating == rating)
            })
            .map(entry)
            .collect::<Vec<_>>()
    };

    CompetitiveSummary {
        strengths: rated(Rating::StrongAdvantage),
        improvement_areas: rated(Rating::NeedsImprovement),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::completed_session;
    use crate::types::ExperienceBand;

    #[test]
    fn experience_strategy_for_new_doctor() {
        let mut s = Session::new();
        s.select_specialty("cardiology").unwrap();
        s.select_experience(ExperienceBand::UpToFive);
        let e = experience_strategy(&s).unwrap();
        assert_eq!(
            e.focus,
            "Establishing credibility and building initial patient base"
        );
        assert!(e.key_actions.len() <= 4);
    }

    #[test]
    fn experience_strategy_empty_when_unset() {
        assert!(experience_strategy(&Session::new()).is_none());
    }

    #[test]
    fn specialty_recommendations_empty_when_unset() {
        assert!(specialty_recommendations(&Session::new()).is_empty());
    }

    #[test]
    fn specialty_recommendations_cover_non_core_specialties() {
        let mut s = Session::new();
        s.select_specialty("ophthalmology").unwrap();
        let r = specialty_recommendations(&s);
        assert!(!r.referral_sources.is_empty());
        assert!(!r.brand_differentiators.is_empty());
    }

    #[test]
    fn practice_recommendations_follow_scale() {
        let mut s = Session::new();
        assert!(practice_recommendations(&s).is_empty());
        s.select_practice_type("individual_clinic").unwrap();
        let small = practice_recommendations(&s);
        s.select_practice_type("visiting_consultant").unwrap();
        assert_eq!(practice_recommendations(&s), small);
        s.select_practice_type("hospital").unwrap();
        assert_ne!(practice_recommendations(&s), small);
    }

    #[test]
    fn budget_unavailable_without_practice() {
        let mut s = Session::new();
        s.select_experience(ExperienceBand::SixToTen);
        assert_eq!(
            marketing_budget(&s),
            "Not available - select practice type"
        );
    }

    #[test]
    fn budget_without_experience_is_plain() {
        let mut s = Session::new();
        s.select_practice_type("individual_clinic").unwrap();
        assert_eq!(marketing_budget(&s), "5-10% of revenue");
    }

    #[test]
    fn budget_with_experience_includes_allocation() {
        let mut s = Session::new();
        s.select_practice_type("individual_clinic").unwrap();
        s.select_experience(ExperienceBand::UpToFive);
        assert_eq!(
            marketing_budget(&s),
            "5-10% of revenue - Allocation: 60% digital, 30% community outreach, 10% networking"
        );
    }

    #[test]
    fn comprehensive_strategy_orders_derived_before_fixed() {
        let s = completed_session();
        let c = comprehensive_strategy(&s);
        let specialty = specialty_recommendations(&s);

        let n = specialty.referral_sources.len();
        assert_eq!(&c.patient_acquisition[..n], specialty.referral_sources.as_slice());
        assert_eq!(&c.patient_acquisition[n..], &ACQUISITION_ESSENTIALS[..]);

        let n = specialty.brand_differentiators.len();
        assert_eq!(&c.reputation_management[..n], specialty.brand_differentiators.as_slice());
        assert_eq!(&c.reputation_management[n..], &REPUTATION_ESSENTIALS[..]);

        assert_eq!(c.patient_retention, RETENTION_ESSENTIALS.to_vec());
        assert_eq!(c.financial_planning, FINANCIAL_ESSENTIALS.to_vec());
        assert_eq!(
            c.personal_branding,
            experience_strategy(&s).unwrap().branding_priorities.to_vec()
        );
        assert_eq!(
            c.professional_development,
            practice_recommendations(&s).technology_needs
        );
    }

    #[test]
    fn comprehensive_strategy_on_empty_session_has_only_essentials() {
        let c = comprehensive_strategy(&Session::new());
        assert!(c.personal_branding.is_empty());
        assert!(c.professional_development.is_empty());
        assert_eq!(c.patient_acquisition, ACQUISITION_ESSENTIALS.to_vec());
        assert_eq!(c.reputation_management, REPUTATION_ESSENTIALS.to_vec());
    }

    #[test]
    fn competitive_summary_splits_by_rating() {
        let mut s = Session::new();
        s.rate_factor("pricing", Rating::StrongAdvantage).unwrap();
        s.rate_factor("clinical_expertise", Rating::StrongAdvantage).unwrap();
        s.rate_factor("technology", Rating::NeedsImprovement).unwrap();
        s.rate_factor("accessibility", Rating::Average).unwrap();

        let summary = competitive_summary(&s);
        let strengths: Vec<_> = summary.strengths.iter().map(|e| e.key).collect();
        assert_eq!(strengths, vec!["clinical_expertise", "pricing"]);
        assert_eq!(summary.improvement_areas.len(), 1);
        assert_eq!(summary.improvement_areas[0].key, "technology");
        assert!(!summary.improvement_areas[0].strategies.is_empty());
    }
}
