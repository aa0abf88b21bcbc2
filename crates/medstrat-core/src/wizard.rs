use crate::brand_builder;
use crate::error::Result;
use crate::session::{BrandBuilderForm, Session, FIRST_STEP, LAST_STEP};
use crate::types::{ExperienceBand, Mode, Rating};
use serde::{Deserialize, Serialize};

pub const STEP_LABELS: [&str; 6] = [
    "Profile",
    "Practice",
    "Services",
    "Positioning",
    "Focus",
    "Strategy",
];

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// Every user interaction the wizard and the brand builder understand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Next,
    Previous,
    Reset,
    SelectSpecialty { key: String },
    SelectExperience { band: ExperienceBand },
    SelectPracticeType { key: String },
    SetFacility { key: String, checked: bool },
    ToggleFacility { key: String },
    SetPatientType { key: String, checked: bool },
    TogglePatientType { key: String },
    SetAdditionalServices { services: Vec<String> },
    RateFactor { key: String, rating: Rating },
    SelectFocus { key: String },
    EnterBrandBuilder,
    ReturnToWizard,
    SubmitBrandBuilder {
        #[serde(default)]
        specialty: String,
        #[serde(default)]
        experience: String,
        #[serde(default)]
        focus: String,
    },
    SetStrategy { name: String, selected: bool },
    ToggleStrategy { name: String },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Next => "next",
            Action::Previous => "previous",
            Action::Reset => "reset",
            Action::SelectSpecialty { .. } => "select_specialty",
            Action::SelectExperience { .. } => "select_experience",
            Action::SelectPracticeType { .. } => "select_practice_type",
            Action::SetFacility { .. } => "set_facility",
            Action::ToggleFacility { .. } => "toggle_facility",
            Action::SetPatientType { .. } => "set_patient_type",
            Action::TogglePatientType { .. } => "toggle_patient_type",
            Action::SetAdditionalServices { .. } => "set_additional_services",
            Action::RateFactor { .. } => "rate_factor",
            Action::SelectFocus { .. } => "select_focus",
            Action::EnterBrandBuilder => "enter_brand_builder",
            Action::ReturnToWizard => "return_to_wizard",
            Action::SubmitBrandBuilder { .. } => "submit_brand_builder",
            Action::SetStrategy { .. } => "set_strategy",
            Action::ToggleStrategy { .. } => "toggle_strategy",
        }
    }
}

/// Whether an accepted action changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Applied,
    /// The action was valid but not allowed in the current state
    /// (e.g. `Next` with an incomplete step).
    Ignored,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Applied => "applied",
            Outcome::Ignored => "ignored",
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

impl Session {
    fn in_wizard(&self) -> bool {
        self.mode == Mode::Wizard
    }

    /// Apply one action in place. On error the session is left untouched.
    pub fn apply(&mut self, action: Action) -> Result<Outcome> {
        let outcome = match action {
            Action::Next => {
                if self.in_wizard() && self.step < LAST_STEP && self.can_proceed() {
                    self.step += 1;
                    Outcome::Applied
                } else {
                    Outcome::Ignored
                }
            }
            Action::Previous => {
                if self.in_wizard() && self.can_go_back() {
                    self.step -= 1;
                    Outcome::Applied
                } else {
                    Outcome::Ignored
                }
            }
            Action::Reset => {
                if self.in_wizard() && self.is_final_step() {
                    *self = Session::default();
                    Outcome::Applied
                } else {
                    Outcome::Ignored
                }
            }
            Action::SelectSpecialty { key } => {
                self.select_specialty(&key)?;
                Outcome::Applied
            }
            Action::SelectExperience { band } => {
                self.select_experience(band);
                Outcome::Applied
            }
            Action::SelectPracticeType { key } => {
                self.select_practice_type(&key)?;
                Outcome::Applied
            }
            Action::SetFacility { key, checked } => {
                self.set_facility(&key, checked)?;
                Outcome::Applied
            }
            Action::ToggleFacility { key } => {
                self.toggle_facility(&key)?;
                Outcome::Applied
            }
            Action::SetPatientType { key, checked } => {
                self.set_patient_type(&key, checked)?;
                Outcome::Applied
            }
            Action::TogglePatientType { key } => {
                self.toggle_patient_type(&key)?;
                Outcome::Applied
            }
            Action::SetAdditionalServices { services } => {
                self.set_additional_services(&services)?;
                Outcome::Applied
            }
            Action::RateFactor { key, rating } => {
                self.rate_factor(&key, rating)?;
                Outcome::Applied
            }
            Action::SelectFocus { key } => {
                self.select_focus(&key)?;
                Outcome::Applied
            }
            Action::EnterBrandBuilder => {
                if self.in_wizard() && self.is_final_step() {
                    self.mode = Mode::BrandBuilder;
                    self.brand_builder = BrandBuilderForm::default();
                    Outcome::Applied
                } else {
                    Outcome::Ignored
                }
            }
            Action::ReturnToWizard => {
                if self.mode == Mode::BrandBuilder {
                    self.mode = Mode::Wizard;
                    Outcome::Applied
                } else {
                    Outcome::Ignored
                }
            }
            Action::SubmitBrandBuilder {
                specialty,
                experience,
                focus,
            } => brand_builder::submit(self, &specialty, &experience, &focus)?,
            Action::SetStrategy { name, selected } => {
                self.set_strategy(&name, selected)?;
                Outcome::Applied
            }
            Action::ToggleStrategy { name } => {
                self.toggle_strategy(&name)?;
                Outcome::Applied
            }
        };
        Ok(outcome)
    }
}

/// Functional form of [`Session::apply`]: returns the next session, or the
/// error that rejected the action.
pub fn apply(session: Session, action: Action) -> Result<Session> {
    let mut next = session;
    next.apply(action)?;
    Ok(next)
}

// ---------------------------------------------------------------------------
// Step indicator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMarker {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepIndicator {
    pub number: u8,
    pub label: &'static str,
    pub marker: StepMarker,
}

pub fn step_indicator(step: u8) -> Vec<StepIndicator> {
    STEP_LABELS
        .iter()
        .enumerate()
        .map(|(i, &label)| {
            let number = i as u8 + FIRST_STEP;
            let marker = if number < step {
                StepMarker::Completed
            } else if number == step {
                StepMarker::Current
            } else {
                StepMarker::Upcoming
            };
            StepIndicator {
                number,
                label,
                marker,
            }
        })
        .collect()
}

/// Fraction of the wizard completed, `(step - 1) / 5`.
pub fn progress(step: u8) -> f64 {
    let clamped = step.clamp(FIRST_STEP, LAST_STEP);
    f64::from(clamped - FIRST_STEP) / f64::from(LAST_STEP - FIRST_STEP)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::completed_session;

    fn select(key: &str) -> Action {
        Action::SelectSpecialty {
            key: key.to_string(),
        }
    }

    #[test]
    fn next_is_noop_until_step_complete() {
        let mut s = Session::new();
        assert_eq!(s.apply(Action::Next).unwrap(), Outcome::Ignored);
        assert_eq!(s.step, 1);
        s.apply(select("cardiology")).unwrap();
        assert_eq!(s.apply(Action::Next).unwrap(), Outcome::Ignored);
        s.apply(Action::SelectExperience {
            band: ExperienceBand::SixToTen,
        })
        .unwrap();
        assert_eq!(s.apply(Action::Next).unwrap(), Outcome::Applied);
        assert_eq!(s.step, 2);
    }

    #[test]
    fn previous_is_noop_at_first_step() {
        let mut s = Session::new();
        assert_eq!(s.apply(Action::Previous).unwrap(), Outcome::Ignored);
        assert_eq!(s.step, 1);
    }

    #[test]
    fn previous_needs_no_validation() {
        let mut s = completed_session();
        assert_eq!(s.step, 6);
        for expected in (1..6).rev() {
            s.apply(Action::Previous).unwrap();
            assert_eq!(s.step, expected);
        }
    }

    #[test]
    fn walk_reaches_final_step_and_stays() {
        let mut s = completed_session();
        assert_eq!(s.step, 6);
        assert_eq!(s.apply(Action::Next).unwrap(), Outcome::Ignored);
        assert_eq!(s.step, 6);
    }

    #[test]
    fn navigation_is_ignored_in_brand_builder() {
        let mut s = completed_session();
        s.apply(Action::EnterBrandBuilder).unwrap();
        let before = s.clone();

        assert_eq!(s.apply(Action::Previous).unwrap(), Outcome::Ignored);
        assert_eq!(s.apply(Action::Next).unwrap(), Outcome::Ignored);
        assert_eq!(s.apply(Action::Reset).unwrap(), Outcome::Ignored);
        assert_eq!(s, before);
        assert_eq!(s.step, 6);
        assert_eq!(s.mode, Mode::BrandBuilder);

        s.apply(Action::ReturnToWizard).unwrap();
        assert_eq!(s.apply(Action::Previous).unwrap(), Outcome::Applied);
        assert_eq!(s.step, 5);
    }

    #[test]
    fn reset_only_from_final_step() {
        let mut s = Session::new();
        s.apply(select("cardiology")).unwrap();
        assert_eq!(s.apply(Action::Reset).unwrap(), Outcome::Ignored);
        assert_eq!(s.specialty.as_deref(), Some("cardiology"));

        let mut s = completed_session();
        s.apply(Action::SetStrategy {
            name: "Referral Network Building".into(),
            selected: true,
        })
        .unwrap();
        assert_eq!(s.apply(Action::Reset).unwrap(), Outcome::Applied);
        assert_eq!(s, Session::default());
    }

    #[test]
    fn step_stays_in_range_under_any_sequence() {
        let mut s = completed_session();
        let script = [
            Action::Next,
            Action::Previous,
            Action::Previous,
            Action::Next,
            Action::Next,
            Action::Next,
            Action::Reset,
            Action::Previous,
            Action::Next,
        ];
        for a in script {
            s.apply(a).unwrap();
            assert!((1..=6).contains(&s.step));
        }
    }

    #[test]
    fn rejected_action_leaves_session_unchanged() {
        let s = completed_session();
        let before = s.clone();
        let err = apply(
            s,
            Action::SelectPracticeType {
                key: "spaceship".into(),
            },
        );
        assert!(err.is_err());
        let mut s = before.clone();
        assert!(s
            .apply(Action::RateFactor {
                key: "charisma".into(),
                rating: Rating::StrongAdvantage
            })
            .is_err());
        assert_eq!(s, before);
    }

    #[test]
    fn enter_brand_builder_only_on_final_step() {
        let mut s = Session::new();
        assert_eq!(s.apply(Action::EnterBrandBuilder).unwrap(), Outcome::Ignored);
        assert_eq!(s.mode, Mode::Wizard);

        let mut s = completed_session();
        assert_eq!(s.apply(Action::EnterBrandBuilder).unwrap(), Outcome::Applied);
        assert_eq!(s.mode, Mode::BrandBuilder);
        assert_eq!(s.brand_builder, BrandBuilderForm::default());

        s.apply(Action::ReturnToWizard).unwrap();
        assert_eq!(s.mode, Mode::Wizard);
        assert_eq!(s.step, 6);
    }

    #[test]
    fn action_json_shape() {
        let a: Action = serde_json::from_str(
            r#"{"type":"rate_factor","key":"pricing","rating":3}"#,
        )
        .unwrap();
        assert_eq!(
            a,
            Action::RateFactor {
                key: "pricing".into(),
                rating: Rating::StrongAdvantage
            }
        );
        let a: Action =
            serde_json::from_str(r#"{"type":"select_experience","band":"0-5 years"}"#).unwrap();
        assert_eq!(a.name(), "select_experience");
        assert!(serde_json::from_str::<Action>(r#"{"type":"rate_factor","key":"x","rating":9}"#)
            .is_err());
    }

    #[test]
    fn indicator_markers() {
        let ind = step_indicator(3);
        assert_eq!(ind.len(), 6);
        assert_eq!(ind[0].marker, StepMarker::Completed);
        assert_eq!(ind[1].marker, StepMarker::Completed);
        assert_eq!(ind[2].marker, StepMarker::Current);
        assert_eq!(ind[2].label, "Services");
        assert_eq!(ind[5].marker, StepMarker::Upcoming);
    }

    #[test]
    fn progress_range() {
        assert_eq!(progress(1), 0.0);
        assert_eq!(progress(6), 1.0);
        assert!((progress(3) - 0.4).abs() < f64::EPSILON);
    }
}
