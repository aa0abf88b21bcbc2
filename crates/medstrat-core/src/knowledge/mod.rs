//! Static, hand-authored reference tables.
//!
//! Every table is a `&'static` slice; iteration order is declaration order and
//! is observable (ranking ties, display order).

mod brand;
mod facilities;
mod patients;
mod playbooks;
mod positioning;
mod practice;
mod specialties;

pub use brand::BRAND_STRATEGIES;
pub use facilities::{ADDITIONAL_SERVICES, DIAGNOSTIC_FACILITIES};
pub use patients::PATIENT_TYPES;
pub use playbooks::{
    ACTION_ITEMS, EXPERIENCE_STRATEGIES, IMPLEMENTATION_TIMELINE, METRICS_TO_TRACK,
    PRACTICE_PLAYBOOKS, SPECIALTY_PLAYBOOKS,
};
pub use positioning::{COMPETITIVE_FACTORS, MARKETING_FOCUS_AREAS};
pub use practice::PRACTICE_TYPES;
pub use specialties::SPECIALTIES;

use crate::types::{ExperienceBand, PracticeScale, StrategyFocus};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct Specialty {
    pub key: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    pub color: &'static str,
    pub procedures: &'static [&'static str],
    pub marketing_focus: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct PracticeType {
    pub key: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    pub scale: PracticeScale,
    pub marketing_needs: &'static str,
    pub marketing_budget: &'static str,
    pub team_needs: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PatientType {
    pub key: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    pub services: &'static [&'static str],
    pub marketing_channels: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct DiagnosticFacility {
    pub key: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CompetitiveFactor {
    pub key: &'static str,
    pub name: &'static str,
    pub aspects: &'static [&'static str],
    pub improvement_strategies: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct MarketingFocusArea {
    pub key: &'static str,
    pub name: &'static str,
    pub key_metrics: &'static [&'static str],
    pub strategies: &'static [&'static str],
    pub expected_outcomes: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Resource {
    pub name: &'static str,
    pub tools: &'static [&'static str],
    pub description: &'static str,
    pub cost: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BrandStrategy {
    pub key: &'static str,
    pub name: &'static str,
    pub focus: StrategyFocus,
    pub time: &'static str,
    pub budget: &'static str,
    pub resources: &'static [Resource],
}

// ---------------------------------------------------------------------------
// Playbook entities (inputs to the recommendation engine)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ExperienceStrategy {
    pub band: ExperienceBand,
    pub focus: &'static str,
    pub key_actions: &'static [&'static str],
    pub branding_priorities: &'static [&'static str],
    pub budget_allocation: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SpecialtyPlaybook {
    pub specialty: &'static str,
    pub referral_sources: &'static [&'static str],
    pub brand_differentiators: &'static [&'static str],
    pub content_topics: &'static [&'static str],
    pub community_programs: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct PracticePlaybook {
    pub scale: PracticeScale,
    pub marketing_channels: &'static [&'static str],
    pub team_structure: &'static [&'static str],
    pub technology_needs: &'static [&'static str],
    pub partnership_opportunities: &'static [&'static str],
}

/// One column of the 12-month implementation plan.
#[derive(Debug, Serialize)]
pub struct TimelinePeriod {
    pub label: &'static str,
    pub milestones: &'static [&'static str],
}

/// One column of the 30-day action list.
#[derive(Debug, Serialize)]
pub struct ActionWindow {
    pub label: &'static str,
    pub items: &'static [&'static str],
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

pub fn specialty(key: &str) -> Option<&'static Specialty> {
    SPECIALTIES.iter().find(|s| s.key == key)
}

pub fn practice_type(key: &str) -> Option<&'static PracticeType> {
    PRACTICE_TYPES.iter().find(|p| p.key == key)
}

pub fn patient_type(key: &str) -> Option<&'static PatientType> {
    PATIENT_TYPES.iter().find(|p| p.key == key)
}

pub fn facility(key: &str) -> Option<&'static DiagnosticFacility> {
    DIAGNOSTIC_FACILITIES.iter().find(|f| f.key == key)
}

pub fn competitive_factor(key: &str) -> Option<&'static CompetitiveFactor> {
    COMPETITIVE_FACTORS.iter().find(|f| f.key == key)
}

pub fn focus_area(key: &str) -> Option<&'static MarketingFocusArea> {
    MARKETING_FOCUS_AREAS.iter().find(|f| f.key == key)
}

pub fn brand_strategy_by_name(name: &str) -> Option<&'static BrandStrategy> {
    BRAND_STRATEGIES.iter().find(|s| s.name == name)
}

pub fn is_additional_service(name: &str) -> bool {
    ADDITIONAL_SERVICES.contains(&name)
}

pub fn experience_strategy_for(band: ExperienceBand) -> Option<&'static ExperienceStrategy> {
    EXPERIENCE_STRATEGIES.iter().find(|e| e.band == band)
}

pub fn specialty_playbook(key: &str) -> Option<&'static SpecialtyPlaybook> {
    SPECIALTY_PLAYBOOKS.iter().find(|p| p.specialty == key)
}

pub fn practice_playbook(scale: PracticeScale) -> Option<&'static PracticePlaybook> {
    PRACTICE_PLAYBOOKS.iter().find(|p| p.scale == scale)
}

// Display-name reverse lookups used by the brand builder form.

pub fn specialty_by_name(name: &str) -> Option<&'static Specialty> {
    SPECIALTIES.iter().find(|s| s.name == name)
}

pub fn focus_area_by_name(name: &str) -> Option<&'static MarketingFocusArea> {
    MARKETING_FOCUS_AREAS.iter().find(|f| f.name == name)
}

// ---------------------------------------------------------------------------
// Catalog (serializable snapshot of every table)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct Catalog {
    pub specialties: &'static [Specialty],
    pub experience_bands: &'static [ExperienceBand],
    pub practice_types: &'static [PracticeType],
    pub diagnostic_facilities: &'static [DiagnosticFacility],
    pub patient_types: &'static [PatientType],
    pub additional_services: &'static [&'static str],
    pub competitive_factors: &'static [CompetitiveFactor],
    pub marketing_focus_areas: &'static [MarketingFocusArea],
    pub brand_strategies: &'static [BrandStrategy],
}

pub fn catalog() -> Catalog {
    Catalog {
        specialties: SPECIALTIES,
        experience_bands: ExperienceBand::all(),
        practice_types: PRACTICE_TYPES,
        diagnostic_facilities: DIAGNOSTIC_FACILITIES,
        patient_types: PATIENT_TYPES,
        additional_services: ADDITIONAL_SERVICES,
        competitive_factors: COMPETITIVE_FACTORS,
        marketing_focus_areas: MARKETING_FOCUS_AREAS,
        brand_strategies: BRAND_STRATEGIES,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
