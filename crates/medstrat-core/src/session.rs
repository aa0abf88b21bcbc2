use crate::error::{MedstratError, Result};
use crate::knowledge;
use crate::types::{ExperienceBand, Mode, Rating};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 6;

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitiveRating {
    pub rating: Rating,
    pub text: String,
}

impl From<Rating> for CompetitiveRating {
    fn from(rating: Rating) -> Self {
        Self {
            rating,
            text: rating.text().to_string(),
        }
    }
}

/// Inputs of the brand-builder form, stored as resolved canonical keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandBuilderForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<ExperienceBand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
}

impl BrandBuilderForm {
    pub fn is_submitted(&self) -> bool {
        self.specialty.is_some() && self.experience.is_some() && self.focus.is_some()
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// All of one user's in-progress selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub step: u8,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub years_experience: Option<ExperienceBand>,
    #[serde(default)]
    pub practice_type: Option<String>,
    #[serde(default)]
    pub patient_types: Vec<String>,
    #[serde(default)]
    pub services_offered: Vec<String>,
    #[serde(default)]
    pub additional_services: Vec<String>,
    #[serde(default)]
    pub competitive_positioning: BTreeMap<String, CompetitiveRating>,
    #[serde(default)]
    pub marketing_focus: Option<String>,
    #[serde(default)]
    pub selected_strategies: Vec<String>,
    #[serde(default)]
    pub brand_builder: BrandBuilderForm,
    #[serde(default)]
    pub mode: Mode,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            step: FIRST_STEP,
            specialty: None,
            years_experience: None,
            practice_type: None,
            patient_types: Vec::new(),
            services_offered: Vec::new(),
            additional_services: Vec::new(),
            competitive_positioning: BTreeMap::new(),
            marketing_focus: None,
            selected_strategies: Vec::new(),
            brand_builder: BrandBuilderForm::default(),
            mode: Mode::Wizard,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------------
    // Step 1
    // ---------------------------------------------------------------------------

    pub fn select_specialty(&mut self, key: &str) -> Result<()> {
        let s = knowledge::specialty(key)
            .ok_or_else(|| MedstratError::UnknownSpecialty(key.to_string()))?;
        self.specialty = Some(s.key.to_string());
        Ok(())
    }

    pub fn select_experience(&mut self, band: ExperienceBand) {
        self.years_experience = Some(band);
    }

    // ---------------------------------------------------------------------------
    // Step 2
    // ---------------------------------------------------------------------------

    pub fn select_practice_type(&mut self, key: &str) -> Result<()> {
        let p = knowledge::practice_type(key)
            .ok_or_else(|| MedstratError::UnknownPracticeType(key.to_string()))?;
        self.practice_type = Some(p.key.to_string());
        Ok(())
    }

    /// Check or uncheck a diagnostic facility; membership is tracked by display name.
    pub fn set_facility(&mut self, key: &str, checked: bool) -> Result<()> {
        let f = knowledge::facility(key)
            .ok_or_else(|| MedstratError::UnknownFacility(key.to_string()))?;
        set_membership(&mut self.services_offered, f.name, checked);
        Ok(())
    }

    pub fn toggle_facility(&mut self, key: &str) -> Result<()> {
        let f = knowledge::facility(key)
            .ok_or_else(|| MedstratError::UnknownFacility(key.to_string()))?;
        let present = self.services_offered.iter().any(|s| s == f.name);
        self.set_facility(key, !present)
    }

    // ---------------------------------------------------------------------------
    // Step 3
    // ---------------------------------------------------------------------------

    pub fn set_patient_type(&mut self, key: &str, checked: bool) -> Result<()> {
        let p = knowledge::patient_type(key)
            .ok_or_else(|| MedstratError::UnknownPatientType(key.to_string()))?;
        set_membership(&mut self.patient_types, p.key, checked);
        Ok(())
    }

    pub fn toggle_patient_type(&mut self, key: &str) -> Result<()> {
        let present = self.patient_types.iter().any(|k| k == key);
        self.set_patient_type(key, !present)
    }

    /// Replace the value-added services selection. Every entry must come from
    /// the fixed catalog; duplicates collapse.
    pub fn set_additional_services(&mut self, services: &[String]) -> Result<()> {
        if let Some(bad) = services.iter().find(|s| !knowledge::is_additional_service(s)) {
            return Err(MedstratError::UnknownService(bad.clone()));
        }
        let mut next: Vec<String> = Vec::with_capacity(services.len());
        for s in services {
            set_membership(&mut next, s, true);
        }
        self.additional_services = next;
        Ok(())
    }

    // ---------------------------------------------------------------------------
    // Step 4
    // ---------------------------------------------------------------------------

    pub fn rate_factor(&mut self, key: &str, rating: Rating) -> Result<()> {
        let f = knowledge::competitive_factor(key)
            .ok_or_else(|| MedstratError::UnknownFactor(key.to_string()))?;
        self.competitive_positioning
            .insert(f.key.to_string(), CompetitiveRating::from(rating));
        Ok(())
    }

    /// True when every competitive factor has exactly one rating.
    pub fn is_positioning_complete(&self) -> bool {
        self.competitive_positioning.len() == knowledge::COMPETITIVE_FACTORS.len()
            && knowledge::COMPETITIVE_FACTORS
                .iter()
                .all(|f| self.competitive_positioning.contains_key(f.key))
    }

    // ---------------------------------------------------------------------------
    // Step 5
    // ---------------------------------------------------------------------------

    pub fn select_focus(&mut self, key: &str) -> Result<()> {
        let f = knowledge::focus_area(key)
            .ok_or_else(|| MedstratError::UnknownFocus(key.to_string()))?;
        self.marketing_focus = Some(f.key.to_string());
        Ok(())
    }

    // ---------------------------------------------------------------------------
    // Brand builder selection
    // ---------------------------------------------------------------------------

    pub fn set_strategy(&mut self, name: &str, selected: bool) -> Result<()> {
        let s = knowledge::brand_strategy_by_name(name)
            .ok_or_else(|| MedstratError::UnknownStrategy(name.to_string()))?;
        set_membership(&mut self.selected_strategies, s.name, selected);
        Ok(())
    }

    pub fn toggle_strategy(&mut self, name: &str) -> Result<()> {
        let present = self.selected_strategies.iter().any(|s| s == name);
        self.set_strategy(name, !present)
    }

    // ---------------------------------------------------------------------------
    // Step predicates
    // ---------------------------------------------------------------------------

    /// Completion predicate for `step`. Step 6 is terminal and never proceeds.
    pub fn can_proceed_at(&self, step: u8) -> bool {
        match step {
            1 => self.specialty.is_some() && self.years_experience.is_some(),
            2 => self.practice_type.is_some(),
            3 => !self.patient_types.is_empty(),
            4 => self.is_positioning_complete(),
            5 => self.marketing_focus.is_some(),
            _ => false,
        }
    }

    pub fn can_proceed(&self) -> bool {
        self.can_proceed_at(self.step)
    }

    pub fn can_go_back(&self) -> bool {
        self.step > FIRST_STEP
    }

    pub fn is_final_step(&self) -> bool {
        self.step == LAST_STEP
    }
}

/// Add `item` when `present` and absent, remove it when not `present`.
/// Insertion order of the remaining items is preserved.
fn set_membership(list: &mut Vec<String>, item: &str, present: bool) {
    let pos = list.iter().position(|x| x == item);
    match (present, pos) {
        (true, None) => list.push(item.to_string()),
        (false, Some(i)) => {
            list.remove(i);
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn rate_all(session: &mut Session, rating: Rating) {
        for f in knowledge::COMPETITIVE_FACTORS {
            session.rate_factor(f.key, rating).unwrap();
        }
    }

    #[test]
    fn default_is_initial_state() {
        let s = Session::new();
        assert_eq!(s.step, 1);
        assert!(s.specialty.is_none());
        assert!(s.years_experience.is_none());
        assert!(s.practice_type.is_none());
        assert!(s.patient_types.is_empty());
        assert!(s.services_offered.is_empty());
        assert!(s.competitive_positioning.is_empty());
        assert!(s.marketing_focus.is_none());
        assert!(s.selected_strategies.is_empty());
        assert_eq!(s.mode, Mode::Wizard);
    }

    #[test]
    fn specialty_selection_overwrites() {
        let mut s = Session::new();
        s.select_specialty("cardiology").unwrap();
        s.select_specialty("neurology").unwrap();
        assert_eq!(s.specialty.as_deref(), Some("neurology"));
    }

    #[test]
    fn unknown_specialty_leaves_session_unchanged() {
        let mut s = Session::new();
        s.select_specialty("cardiology").unwrap();
        let err = s.select_specialty("astrology").unwrap_err();
        assert!(matches!(err, MedstratError::UnknownSpecialty(_)));
        assert_eq!(s.specialty.as_deref(), Some("cardiology"));
    }

    #[test]
    fn facility_toggle_twice_is_identity() {
        let mut s = Session::new();
        s.toggle_facility("ecg").unwrap();
        assert_eq!(s.services_offered, vec!["ECG".to_string()]);
        s.toggle_facility("ecg").unwrap();
        assert!(s.services_offered.is_empty());
    }

    #[test]
    fn facility_set_is_idempotent() {
        let mut s = Session::new();
        s.set_facility("xray", true).unwrap();
        s.set_facility("xray", true).unwrap();
        assert_eq!(s.services_offered.len(), 1);
        s.set_facility("xray", false).unwrap();
        s.set_facility("xray", false).unwrap();
        assert!(s.services_offered.is_empty());
    }

    #[test]
    fn patient_type_toggle_twice_is_identity() {
        let mut s = Session::new();
        s.set_patient_type("elderly", true).unwrap();
        let before = s.patient_types.clone();
        s.toggle_patient_type("corporate").unwrap();
        s.toggle_patient_type("corporate").unwrap();
        assert_eq!(s.patient_types, before);
    }

    #[test]
    fn patient_types_keep_insertion_order() {
        let mut s = Session::new();
        s.set_patient_type("corporate", true).unwrap();
        s.set_patient_type("elderly", true).unwrap();
        s.set_patient_type("general_opd", true).unwrap();
        s.set_patient_type("elderly", false).unwrap();
        assert_eq!(s.patient_types, vec!["corporate", "general_opd"]);
    }

    #[test]
    fn additional_services_reject_unknown_and_dedupe() {
        let mut s = Session::new();
        let err = s
            .set_additional_services(&["Space Medicine".to_string()])
            .unwrap_err();
        assert!(matches!(err, MedstratError::UnknownService(_)));

        s.set_additional_services(&[
            "Home Visits".to_string(),
            "Home Visits".to_string(),
            "Second Opinion Services".to_string(),
        ])
        .unwrap();
        assert_eq!(
            s.additional_services,
            vec!["Home Visits", "Second Opinion Services"]
        );
    }

    #[test]
    fn rating_overwrites_previous() {
        let mut s = Session::new();
        s.rate_factor("pricing", Rating::NeedsImprovement).unwrap();
        s.rate_factor("pricing", Rating::StrongAdvantage).unwrap();
        let r = &s.competitive_positioning["pricing"];
        assert_eq!(r.rating, Rating::StrongAdvantage);
        assert_eq!(r.text, "Strong Advantage");
        assert_eq!(s.competitive_positioning.len(), 1);
    }

    #[test]
    fn positioning_incomplete_blocks_step_four() {
        let mut s = Session::new();
        for f in knowledge::COMPETITIVE_FACTORS.iter().take(5) {
            s.rate_factor(f.key, Rating::Average).unwrap();
        }
        assert!(!s.can_proceed_at(4));
        rate_all(&mut s, Rating::Average);
        assert!(s.can_proceed_at(4));
    }

    #[test]
    fn step_predicates() {
        let mut s = Session::new();
        assert!(!s.can_proceed_at(1));
        s.select_specialty("cardiology").unwrap();
        assert!(!s.can_proceed_at(1));
        s.select_experience(ExperienceBand::UpToFive);
        assert!(s.can_proceed_at(1));

        assert!(!s.can_proceed_at(2));
        s.select_practice_type("individual_clinic").unwrap();
        assert!(s.can_proceed_at(2));

        assert!(!s.can_proceed_at(3));
        s.set_patient_type("general_opd", true).unwrap();
        assert!(s.can_proceed_at(3));

        assert!(!s.can_proceed_at(5));
        s.select_focus("new_patients").unwrap();
        assert!(s.can_proceed_at(5));

        assert!(!s.can_proceed_at(6));
    }

    #[test]
    fn strategy_toggle_twice_is_identity() {
        let mut s = Session::new();
        s.toggle_strategy("Referral Network Building").unwrap();
        s.toggle_strategy("Referral Network Building").unwrap();
        assert!(s.selected_strategies.is_empty());
        assert!(s.toggle_strategy("Billboards").is_err());
    }

    #[test]
    fn session_json_roundtrip() {
        let mut s = Session::new();
        s.select_specialty("dermatology").unwrap();
        s.select_experience(ExperienceBand::OverTwenty);
        s.rate_factor("technology", Rating::Average).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, s);
    }
}
