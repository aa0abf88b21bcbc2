//! Serializable screen model. `render` is a pure function of the session;
//! every front end (HTTP, CLI, browser) draws from it.

use crate::brand_builder::{self, PhaseBuckets};
use crate::knowledge::{
    self, ActionWindow, MarketingFocusArea, PracticeType, Specialty, TimelinePeriod,
};
use crate::ranking::{self, RecommendationResult};
use crate::recommend::{self, CompetitiveSummary, ComprehensiveStrategy};
use crate::session::{BrandBuilderForm, Session};
use crate::types::{ExperienceBand, Mode, Rating};
use crate::wizard::{self, StepIndicator, STEP_LABELS};
use serde::Serialize;

pub const NOT_SELECTED: &str = "Not Selected";

const PATIENT_SERVICES_SHOWN: usize = 4;
const KEY_ACTIONS_SHOWN: usize = 3;
const PLAN_ITEMS_SHOWN: usize = 4;

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct View {
    pub mode: Mode,
    pub step: u8,
    pub step_label: &'static str,
    pub progress: f64,
    pub steps: Vec<StepIndicator>,
    pub nav: Navigation,
    pub content: Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub can_go_back: bool,
    pub can_proceed: bool,
    pub can_reset: bool,
    pub can_enter_brand_builder: bool,
    pub can_return_to_wizard: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Content {
    Profile(ProfileStep),
    Practice(PracticeStep),
    Services(ServicesStep),
    Positioning(PositioningStep),
    Focus(FocusStep),
    Strategy(Box<StrategyReport>),
    BrandBuilder(BrandBuilderView),
}

impl Content {
    pub fn kind(&self) -> &'static str {
        match self {
            Content::Profile(_) => "profile",
            Content::Practice(_) => "practice",
            Content::Services(_) => "services",
            Content::Positioning(_) => "positioning",
            Content::Focus(_) => "focus",
            Content::Strategy(_) => "strategy",
            Content::BrandBuilder(_) => "brand_builder",
        }
    }
}

/// A selectable catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct Choice {
    pub key: &'static str,
    pub name: &'static str,
    pub selected: bool,
}

// ---------------------------------------------------------------------------
// Per-step content
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ProfileStep {
    pub specialties: Vec<Choice>,
    pub selected_specialty: Option<&'static Specialty>,
    pub experience_bands: Vec<BandChoice>,
    pub experience_focus: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct BandChoice {
    pub band: ExperienceBand,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct PracticeStep {
    pub practice_types: Vec<Choice>,
    pub selected_practice: Option<&'static PracticeType>,
    pub facilities: Vec<Choice>,
}

#[derive(Debug, Serialize)]
pub struct ServicesStep {
    pub patient_types: Vec<Choice>,
    pub patient_services: Vec<PatientServices>,
    pub additional_services: Vec<ServiceChoice>,
}

#[derive(Debug, Serialize)]
pub struct PatientServices {
    pub key: &'static str,
    pub name: &'static str,
    pub services: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct ServiceChoice {
    pub name: &'static str,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct PositioningStep {
    pub factors: Vec<FactorRow>,
    pub rated: usize,
    pub total: usize,
    pub summary: CompetitiveSummary,
}

#[derive(Debug, Serialize)]
pub struct FactorRow {
    pub key: &'static str,
    pub name: &'static str,
    pub aspects: &'static [&'static str],
    pub rating: Option<Rating>,
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FocusStep {
    pub focus_areas: Vec<Choice>,
    pub selected_focus: Option<&'static MarketingFocusArea>,
}

// ---------------------------------------------------------------------------
// Strategy report (step 6)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct StrategyReport {
    pub profile: ProfileSummary,
    pub experience: Option<ExperienceSummary>,
    pub practice_plan: PracticePlan,
    pub strategy: ComprehensiveStrategy,
    pub timeline: &'static [TimelinePeriod],
    pub action_items: &'static [ActionWindow],
    pub metrics: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct ProfileSummary {
    pub specialty: &'static str,
    pub experience: &'static str,
    pub practice_type: &'static str,
    pub marketing_focus: &'static str,
    pub budget: String,
}

#[derive(Debug, Serialize)]
pub struct ExperienceSummary {
    pub focus: &'static str,
    pub key_actions: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct PracticePlan {
    pub marketing_channels: Vec<&'static str>,
    pub technology_needs: Vec<&'static str>,
}

// ---------------------------------------------------------------------------
// Brand builder
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct BrandBuilderView {
    pub form: BrandBuilderForm,
    pub options: FormOptions,
    pub submitted: bool,
    pub strategies: Vec<RankedStrategy>,
    pub phases: PhaseBuckets,
}

/// Display names the form's dropdowns offer.
#[derive(Debug, Serialize)]
pub struct FormOptions {
    pub specialties: Vec<&'static str>,
    pub experience_bands: Vec<&'static str>,
    pub focus_areas: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct RankedStrategy {
    #[serde(flatten)]
    pub result: RecommendationResult,
    pub selected: bool,
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn render(session: &Session) -> View {
    let step = session.step;
    let in_wizard = session.mode == Mode::Wizard;

    let nav = Navigation {
        can_go_back: in_wizard && session.can_go_back(),
        can_proceed: in_wizard && session.can_proceed(),
        can_reset: in_wizard && session.is_final_step(),
        can_enter_brand_builder: in_wizard && session.is_final_step(),
        can_return_to_wizard: !in_wizard,
    };

    let content = if in_wizard {
        match step {
            1 => Content::Profile(profile_step(session)),
            2 => Content::Practice(practice_step(session)),
            3 => Content::Services(services_step(session)),
            4 => Content::Positioning(positioning_step(session)),
            5 => Content::Focus(focus_step(session)),
            _ => Content::Strategy(Box::new(strategy_report(session))),
        }
    } else {
        Content::BrandBuilder(brand_builder_view(session))
    };

    let label_index = usize::from(step.saturating_sub(1)).min(STEP_LABELS.len() - 1);

    View {
        mode: session.mode,
        step,
        step_label: STEP_LABELS[label_index],
        progress: wizard::progress(step),
        steps: wizard::step_indicator(step),
        nav,
        content,
    }
}

fn profile_step(session: &Session) -> ProfileStep {
    let selected = session.specialty.as_deref();
    ProfileStep {
        specialties: knowledge::SPECIALTIES
            .iter()
            .map(|s| Choice {
                key: s.key,
                name: s.name,
                selected: selected == Some(s.key),
            })
            .collect(),
        selected_specialty: selected.and_then(knowledge::specialty),
        experience_bands: ExperienceBand::all()
            .iter()
            .map(|&band| BandChoice {
                band,
                selected: session.years_experience == Some(band),
            })
            .collect(),
        experience_focus: recommend::experience_strategy(session).map(|e| e.focus),
    }
}

fn practice_step(session: &Session) -> PracticeStep {
    let selected = session.practice_type.as_deref();
    PracticeStep {
        practice_types: knowledge::PRACTICE_TYPES
            .iter()
            .map(|p| Choice {
                key: p.key,
                name: p.name,
                selected: selected == Some(p.key),
            })
            .collect(),
        selected_practice: selected.and_then(knowledge::practice_type),
        facilities: knowledge::DIAGNOSTIC_FACILITIES
            .iter()
            .map(|f| Choice {
                key: f.key,
                name: f.name,
                selected: session.services_offered.iter().any(|s| s == f.name),
            })
            .collect(),
    }
}

fn services_step(session: &Session) -> ServicesStep {
    ServicesStep {
        patient_types: knowledge::PATIENT_TYPES
            .iter()
            .map(|p| Choice {
                key: p.key,
                name: p.name,
                selected: session.patient_types.iter().any(|k| k == p.key),
            })
            .collect(),
        patient_services: session
            .patient_types
            .iter()
            .filter_map(|k| knowledge::patient_type(k))
            .map(|p| PatientServices {
                key: p.key,
                name: p.name,
                services: &p.services[..p.services.len().min(PATIENT_SERVICES_SHOWN)],
            })
            .collect(),
        additional_services: knowledge::ADDITIONAL_SERVICES
            .iter()
            .map(|&name| ServiceChoice {
                name,
                selected: session.additional_services.iter().any(|s| s == name),
            })
            .collect(),
    }
}

fn positioning_step(session: &Session) -> PositioningStep {
    let factors: Vec<FactorRow> = knowledge::COMPETITIVE_FACTORS
        .iter()
        .map(|f| {
            let current = session.competitive_positioning.get(f.key);
            FactorRow {
                key: f.key,
                name: f.name,
                aspects: f.aspects,
                rating: current.map(|r| r.rating),
                text: current.map(|r| r.text.clone()),
            }
        })
        .collect();
    PositioningStep {
        rated: factors.iter().filter(|f| f.rating.is_some()).count(),
        total: factors.len(),
        factors,
        summary: recommend::competitive_summary(session),
    }
}

fn focus_step(session: &Session) -> FocusStep {
    let selected = session.marketing_focus.as_deref();
    FocusStep {
        focus_areas: knowledge::MARKETING_FOCUS_AREAS
            .iter()
            .map(|f| Choice {
                key: f.key,
                name: f.name,
                selected: selected == Some(f.key),
            })
            .collect(),
        selected_focus: selected.and_then(knowledge::focus_area),
    }
}

/// The full personalized strategy shown on the last wizard step.
pub fn strategy_report(session: &Session) -> StrategyReport {
    let practice = recommend::practice_recommendations(session);
    StrategyReport {
        profile: profile_summary(session),
        experience: recommend::experience_strategy(session).map(|e| ExperienceSummary {
            focus: e.focus,
            key_actions: &e.key_actions[..e.key_actions.len().min(KEY_ACTIONS_SHOWN)],
        }),
        practice_plan: PracticePlan {
            marketing_channels: first(practice.marketing_channels, PLAN_ITEMS_SHOWN),
            technology_needs: first(practice.technology_needs, PLAN_ITEMS_SHOWN),
        },
        strategy: recommend::comprehensive_strategy(session),
        timeline: knowledge::IMPLEMENTATION_TIMELINE,
        action_items: knowledge::ACTION_ITEMS,
        metrics: knowledge::METRICS_TO_TRACK,
    }
}

fn profile_summary(session: &Session) -> ProfileSummary {
    ProfileSummary {
        specialty: session
            .specialty
            .as_deref()
            .and_then(knowledge::specialty)
            .map_or(NOT_SELECTED, |s| s.name),
        experience: session.years_experience.map_or(NOT_SELECTED, |b| b.as_str()),
        practice_type: session
            .practice_type
            .as_deref()
            .and_then(knowledge::practice_type)
            .map_or(NOT_SELECTED, |p| p.name),
        marketing_focus: session
            .marketing_focus
            .as_deref()
            .and_then(knowledge::focus_area)
            .map_or(NOT_SELECTED, |f| f.name),
        budget: recommend::marketing_budget(session),
    }
}

fn first(mut items: Vec<&'static str>, n: usize) -> Vec<&'static str> {
    items.truncate(n);
    items
}

fn brand_builder_view(session: &Session) -> BrandBuilderView {
    let form = session.brand_builder.clone();
    let submitted = form.is_submitted();
    let strategies = if submitted {
        ranking::rank_brand_strategies(session)
            .into_iter()
            .map(|result| RankedStrategy {
                selected: session.selected_strategies.iter().any(|s| s == result.name),
                result,
            })
            .collect()
    } else {
        Vec::new()
    };

    BrandBuilderView {
        form,
        options: FormOptions {
            specialties: knowledge::SPECIALTIES.iter().map(|s| s.name).collect(),
            experience_bands: ExperienceBand::all().iter().map(|b| b.as_str()).collect(),
            focus_areas: knowledge::MARKETING_FOCUS_AREAS.iter().map(|f| f.name).collect(),
        },
        submitted,
        strategies,
        phases: brand_builder::phase_buckets(&session.selected_strategies),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::completed_session;
    use crate::wizard::Action;

    #[test]
    fn initial_view_is_profile_step() {
        let view = render(&Session::new());
        assert_eq!(view.step, 1);
        assert_eq!(view.step_label, "Profile");
        assert_eq!(view.progress, 0.0);
        assert_eq!(view.content.kind(), "profile");
        assert!(!view.nav.can_go_back);
        assert!(!view.nav.can_proceed);
        assert!(!view.nav.can_reset);
        let Content::Profile(p) = view.content else {
            panic!("expected profile content");
        };
        assert_eq!(p.specialties.len(), 12);
        assert!(p.specialties.iter().all(|c| !c.selected));
        assert!(p.experience_focus.is_none());
    }

    #[test]
    fn profile_step_reflects_selection() {
        let mut s = Session::new();
        s.select_specialty("cardiology").unwrap();
        s.select_experience(ExperienceBand::UpToFive);
        let view = render(&s);
        assert!(view.nav.can_proceed);
        let Content::Profile(p) = view.content else {
            panic!("expected profile content");
        };
        assert_eq!(p.selected_specialty.unwrap().name, "Cardiology");
        assert_eq!(
            p.experience_focus,
            Some("Establishing credibility and building initial patient base")
        );
        assert_eq!(p.specialties.iter().filter(|c| c.selected).count(), 1);
    }

    #[test]
    fn practice_step_marks_checked_facilities() {
        let mut s = Session::new();
        s.step = 2;
        s.set_facility("ecg", true).unwrap();
        let Content::Practice(p) = render(&s).content else {
            panic!("expected practice content");
        };
        let checked: Vec<_> = p.facilities.iter().filter(|f| f.selected).map(|f| f.key).collect();
        assert_eq!(checked, vec!["ecg"]);
    }

    #[test]
    fn services_step_lists_services_of_selected_types() {
        let mut s = Session::new();
        s.step = 3;
        s.set_patient_type("elderly", true).unwrap();
        s.set_additional_services(&["Home Visits".to_string()]).unwrap();
        let Content::Services(v) = render(&s).content else {
            panic!("expected services content");
        };
        assert_eq!(v.patient_services.len(), 1);
        assert_eq!(v.patient_services[0].key, "elderly");
        assert!(v.patient_services[0].services.len() <= 4);
        assert_eq!(v.additional_services.iter().filter(|a| a.selected).count(), 1);
    }

    #[test]
    fn positioning_step_counts_ratings() {
        let mut s = Session::new();
        s.step = 4;
        s.rate_factor("pricing", Rating::StrongAdvantage).unwrap();
        let view = render(&s);
        assert!(!view.nav.can_proceed);
        let Content::Positioning(p) = view.content else {
            panic!("expected positioning content");
        };
        assert_eq!(p.rated, 1);
        assert_eq!(p.total, 6);
        assert_eq!(p.summary.strengths.len(), 1);
        let row = p.factors.iter().find(|f| f.key == "pricing").unwrap();
        assert_eq!(row.text.as_deref(), Some("Strong Advantage"));
    }

    #[test]
    fn strategy_step_summarizes_profile() {
        let view = render(&completed_session());
        assert_eq!(view.progress, 1.0);
        assert!(view.nav.can_reset);
        assert!(view.nav.can_enter_brand_builder);
        assert!(!view.nav.can_proceed);
        let Content::Strategy(r) = view.content else {
            panic!("expected strategy content");
        };
        assert_eq!(r.profile.specialty, "Cardiology");
        assert_eq!(r.profile.experience, "0-5 years");
        assert_eq!(r.profile.marketing_focus, "Improve Patient Retention");
        assert!(r.profile.budget.starts_with("5-10% of revenue - Allocation: "));
        assert!(r.experience.unwrap().key_actions.len() <= 3);
        assert!(r.practice_plan.marketing_channels.len() <= 4);
        assert_eq!(r.timeline.len(), 4);
        assert_eq!(r.metrics.len(), 4);
    }

    #[test]
    fn report_uses_placeholder_for_unset_fields() {
        let r = strategy_report(&Session::new());
        assert_eq!(r.profile.specialty, NOT_SELECTED);
        assert_eq!(r.profile.practice_type, NOT_SELECTED);
        assert_eq!(r.profile.budget, "Not available - select practice type");
        assert!(r.experience.is_none());
    }

    #[test]
    fn brand_builder_view_ranks_after_submit() {
        let mut s = completed_session();
        s.apply(Action::EnterBrandBuilder).unwrap();
        let view = render(&s);
        assert_eq!(view.content.kind(), "brand_builder");
        assert!(view.nav.can_return_to_wizard);
        assert!(!view.nav.can_go_back);
        let Content::BrandBuilder(b) = view.content else {
            panic!("expected brand builder content");
        };
        assert!(!b.submitted);
        assert!(b.strategies.is_empty());

        s.apply(Action::SubmitBrandBuilder {
            specialty: "Cardiology".into(),
            experience: "0-5 years".into(),
            focus: "Establish Expert Positioning".into(),
        })
        .unwrap();
        s.apply(Action::ToggleStrategy {
            name: "Academic & Research Presence".into(),
        })
        .unwrap();
        let Content::BrandBuilder(b) = render(&s).content else {
            panic!("expected brand builder content");
        };
        assert_eq!(b.strategies.len(), 2);
        assert!(b.strategies[0].selected);
        assert!(!b.strategies[1].selected);
        assert_eq!(b.phases.unphased, vec!["Academic & Research Presence".to_string()]);
    }

    #[test]
    fn brand_builder_view_follows_session_focus() {
        let mut s = completed_session();
        s.apply(Action::EnterBrandBuilder).unwrap();
        s.apply(Action::SubmitBrandBuilder {
            specialty: "Cardiology".into(),
            experience: "0-5 years".into(),
            focus: "Establish Expert Positioning".into(),
        })
        .unwrap();
        s.apply(Action::SelectFocus {
            key: "patient_retention".into(),
        })
        .unwrap();

        let Content::BrandBuilder(b) = render(&s).content else {
            panic!("expected brand builder content");
        };
        let shown: Vec<&str> = b.strategies.iter().map(|r| r.result.name).collect();
        let ranked: Vec<&str> = ranking::rank_brand_strategies(&s)
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(shown, ranked);
        assert_eq!(shown, vec!["Patient Relationship Management"]);
    }

    #[test]
    fn view_serializes_with_kind_tag() {
        let json = serde_json::to_value(render(&completed_session())).unwrap();
        assert_eq!(json["content"]["kind"], "strategy");
        assert_eq!(json["mode"], "wizard");
        assert_eq!(json["steps"][5]["marker"], "current");
    }
}
