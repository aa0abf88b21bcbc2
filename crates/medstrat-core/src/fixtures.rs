//! Shared session builders for unit tests.

use crate::knowledge;
use crate::session::Session;
use crate::types::{ExperienceBand, Rating};
use crate::wizard::Action;

/// A session walked through every step to the strategy page:
/// cardiology, 0-5 years, individual clinic, general OPD, all factors
/// rated average, patient retention focus.
pub(crate) fn completed_session() -> Session {
    let mut s = Session::new();
    let script = [
        Action::SelectSpecialty {
            key: "cardiology".into(),
        },
        Action::SelectExperience {
            band: ExperienceBand::UpToFive,
        },
        Action::Next,
        Action::SelectPracticeType {
            key: "individual_clinic".into(),
        },
        Action::Next,
        Action::SetPatientType {
            key: "general_opd".into(),
            checked: true,
        },
        Action::Next,
    ];
    for a in script {
        s.apply(a).unwrap();
    }
    for f in knowledge::COMPETITIVE_FACTORS {
        s.apply(Action::RateFactor {
            key: f.key.into(),
            rating: Rating::Average,
        })
        .unwrap();
    }
    s.apply(Action::Next).unwrap();
    s.apply(Action::SelectFocus {
        key: "patient_retention".into(),
    })
    .unwrap();
    s.apply(Action::Next).unwrap();
    assert_eq!(s.step, 6, "fixture should reach the strategy step");
    s
}
