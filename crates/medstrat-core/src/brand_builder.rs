//! Brand Builder mode: a short form (specialty, experience, focus) that feeds
//! the brand-strategy ranking, plus a three-phase bucketing of the strategies
//! the user picks.

use crate::error::{MedstratError, Result};
use crate::knowledge;
use crate::session::{BrandBuilderForm, Session};
use crate::types::ExperienceBand;
use crate::wizard::Outcome;
use serde::Serialize;

/// Name substrings that place a strategy into each phase, in phase order.
pub const PHASES: [(&str, &[&str]); 3] = [
    (
        "Phase 1 (Months 1-3)",
        &["Digital Presence", "Content Marketing", "Patient Relationship"],
    ),
    (
        "Phase 2 (Months 4-6)",
        &["Community Outreach", "Premium Services", "Referral Network"],
    ),
    (
        "Phase 3 (Months 7-12)",
        &["Academic Presence", "Specialized Certifications"],
    ),
];

/// Apply a brand-builder submission given as display names.
///
/// Any blank field makes this a no-op. All three names are resolved before
/// anything is written, so a bad name leaves the session untouched.
pub fn submit(
    session: &mut Session,
    specialty: &str,
    experience: &str,
    focus: &str,
) -> Result<Outcome> {
    let (specialty, experience, focus) = (specialty.trim(), experience.trim(), focus.trim());
    if specialty.is_empty() || experience.is_empty() || focus.is_empty() {
        return Ok(Outcome::Ignored);
    }

    let specialty = knowledge::specialty_by_name(specialty)
        .ok_or_else(|| MedstratError::UnknownSpecialty(specialty.to_string()))?;
    let experience: ExperienceBand = experience.parse()?;
    let focus = knowledge::focus_area_by_name(focus)
        .ok_or_else(|| MedstratError::UnknownFocus(focus.to_string()))?;

    session.brand_builder = BrandBuilderForm {
        specialty: Some(specialty.key.to_string()),
        experience: Some(experience),
        focus: Some(focus.key.to_string()),
    };
    session.marketing_focus = Some(focus.key.to_string());
    session.selected_strategies.clear();
    Ok(Outcome::Applied)
}

// ---------------------------------------------------------------------------
// Phase buckets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhaseBuckets {
    pub phase1: Vec<String>,
    pub phase2: Vec<String>,
    pub phase3: Vec<String>,
    /// Selected strategies no phase claims.
    pub unphased: Vec<String>,
}

impl PhaseBuckets {
    pub fn is_empty(&self) -> bool {
        self.phase1.is_empty()
            && self.phase2.is_empty()
            && self.phase3.is_empty()
            && self.unphased.is_empty()
    }

    /// (label, items) pairs in display order, phases first.
    pub fn labelled(&self) -> [(&'static str, &[String]); 4] {
        [
            (PHASES[0].0, self.phase1.as_slice()),
            (PHASES[1].0, self.phase2.as_slice()),
            (PHASES[2].0, self.phase3.as_slice()),
            ("Unphased", self.unphased.as_slice()),
        ]
    }
}

fn phase_of(name: &str) -> Option<usize> {
    PHASES
        .iter()
        .position(|(_, needles)| needles.iter().any(|n| name.contains(n)))
}

/// Bucket strategy names by phase. The first matching phase wins and input
/// order is kept inside each bucket.
pub fn phase_buckets(selected: &[String]) -> PhaseBuckets {
    let mut buckets = PhaseBuckets::default();
    for name in selected {
        let bucket = match phase_of(name) {
            Some(0) => &mut buckets.phase1,
            Some(1) => &mut buckets.phase2,
            Some(2) => &mut buckets.phase3,
            _ => &mut buckets.unphased,
        };
        bucket.push(name.clone());
    }
    buckets
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn digital_presence_lands_in_phase_one_only() {
        let b = phase_buckets(&names(&["Digital Presence & Online Reputation"]));
        assert_eq!(b.phase1, names(&["Digital Presence & Online Reputation"]));
        assert!(b.phase2.is_empty());
        assert!(b.phase3.is_empty());
        assert!(b.unphased.is_empty());
    }

    #[test]
    fn buckets_keep_selection_order() {
        let b = phase_buckets(&names(&[
            "Referral Network Building",
            "Patient Relationship Management",
            "Community Outreach & Health Camps",
            "Content Marketing & Patient Education",
            "Specialized Certifications & Training",
        ]));
        assert_eq!(
            b.phase1,
            names(&[
                "Patient Relationship Management",
                "Content Marketing & Patient Education"
            ])
        );
        assert_eq!(
            b.phase2,
            names(&[
                "Referral Network Building",
                "Community Outreach & Health Camps"
            ])
        );
        assert_eq!(b.phase3, names(&["Specialized Certifications & Training"]));
    }

    #[test]
    fn catalog_names_missing_phase_substrings_are_unphased() {
        let b = phase_buckets(&names(&[
            "Premium & Concierge Services",
            "Academic & Research Presence",
        ]));
        assert!(b.phase2.is_empty());
        assert!(b.phase3.is_empty());
        assert_eq!(b.unphased.len(), 2);
    }

    #[test]
    fn every_catalog_strategy_lands_in_exactly_one_bucket() {
        let all: Vec<String> = knowledge::BRAND_STRATEGIES
            .iter()
            .map(|s| s.name.to_string())
            .collect();
        let b = phase_buckets(&all);
        let total = b.phase1.len() + b.phase2.len() + b.phase3.len() + b.unphased.len();
        assert_eq!(total, all.len());
    }

    #[test]
    fn empty_selection_gives_empty_buckets() {
        assert!(phase_buckets(&[]).is_empty());
    }

    #[test]
    fn submit_resolves_names_to_keys() {
        let mut s = Session::new();
        s.selected_strategies.push("Referral Network Building".into());
        let out = submit(&mut s, "Cardiology", "6-10 years", "Increase Referral Volume").unwrap();
        assert_eq!(out, Outcome::Applied);
        assert_eq!(s.brand_builder.specialty.as_deref(), Some("cardiology"));
        assert_eq!(s.brand_builder.experience, Some(ExperienceBand::SixToTen));
        assert_eq!(s.brand_builder.focus.as_deref(), Some("referral_volume"));
        assert_eq!(s.marketing_focus.as_deref(), Some("referral_volume"));
        assert!(s.selected_strategies.is_empty());
        assert!(s.brand_builder.is_submitted());
    }

    #[test]
    fn submit_with_blank_field_is_ignored() {
        let mut s = Session::new();
        let out = submit(&mut s, "Cardiology", "  ", "Increase Referral Volume").unwrap();
        assert_eq!(out, Outcome::Ignored);
        assert_eq!(s, Session::new());
    }

    #[test]
    fn submit_with_unknown_name_leaves_session_unchanged() {
        let mut s = Session::new();
        let err = submit(&mut s, "Cardiology", "0-5 years", "Go Viral").unwrap_err();
        assert!(matches!(err, MedstratError::UnknownFocus(_)));
        assert_eq!(s, Session::new());

        let err = submit(&mut s, "cardiology", "0-5 years", "Go Viral").unwrap_err();
        assert!(matches!(err, MedstratError::UnknownSpecialty(_)));

        let err = submit(&mut s, "Cardiology", "forever", "Attract New Patients").unwrap_err();
        assert!(matches!(err, MedstratError::UnknownExperience(_)));
        assert_eq!(s, Session::new());
    }
}
