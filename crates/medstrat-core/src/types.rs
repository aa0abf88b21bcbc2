use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ExperienceBand
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExperienceBand {
    #[serde(rename = "0-5 years")]
    UpToFive,
    #[serde(rename = "6-10 years")]
    SixToTen,
    #[serde(rename = "11-15 years")]
    ElevenToFifteen,
    #[serde(rename = "16-20 years")]
    SixteenToTwenty,
    #[serde(rename = "20+ years")]
    OverTwenty,
}

impl ExperienceBand {
    pub fn all() -> &'static [ExperienceBand] {
        &[
            ExperienceBand::UpToFive,
            ExperienceBand::SixToTen,
            ExperienceBand::ElevenToFifteen,
            ExperienceBand::SixteenToTwenty,
            ExperienceBand::OverTwenty,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceBand::UpToFive => "0-5 years",
            ExperienceBand::SixToTen => "6-10 years",
            ExperienceBand::ElevenToFifteen => "11-15 years",
            ExperienceBand::SixteenToTwenty => "16-20 years",
            ExperienceBand::OverTwenty => "20+ years",
        }
    }
}

impl fmt::Display for ExperienceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExperienceBand {
    type Err = crate::error::MedstratError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0-5 years" | "0-5" => Ok(ExperienceBand::UpToFive),
            "6-10 years" | "6-10" => Ok(ExperienceBand::SixToTen),
            "11-15 years" | "11-15" => Ok(ExperienceBand::ElevenToFifteen),
            "16-20 years" | "16-20" => Ok(ExperienceBand::SixteenToTwenty),
            "20+ years" | "20+" | ">20 years" => Ok(ExperienceBand::OverTwenty),
            _ => Err(crate::error::MedstratError::UnknownExperience(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// PracticeScale
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PracticeScale {
    Small,
    Medium,
    Large,
    #[serde(rename = "Very Large")]
    VeryLarge,
}

impl PracticeScale {
    pub fn as_str(self) -> &'static str {
        match self {
            PracticeScale::Small => "Small",
            PracticeScale::Medium => "Medium",
            PracticeScale::Large => "Large",
            PracticeScale::VeryLarge => "Very Large",
        }
    }
}

impl fmt::Display for PracticeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

/// Self-assessed standing on a competitive factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rating {
    NeedsImprovement = 1,
    Average = 2,
    StrongAdvantage = 3,
}

impl Rating {
    pub fn all() -> &'static [Rating] {
        &[
            Rating::NeedsImprovement,
            Rating::Average,
            Rating::StrongAdvantage,
        ]
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn text(self) -> &'static str {
        match self {
            Rating::NeedsImprovement => "Needs Improvement",
            Rating::Average => "Average/Competitive",
            Rating::StrongAdvantage => "Strong Advantage",
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = crate::error::MedstratError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Rating::NeedsImprovement),
            2 => Ok(Rating::Average),
            3 => Ok(Rating::StrongAdvantage),
            other => Err(crate::error::MedstratError::InvalidRating(other)),
        }
    }
}

impl From<Rating> for u8 {
    fn from(r: Rating) -> u8 {
        r.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.value(), self.text())
    }
}

// ---------------------------------------------------------------------------
// StrategyFocus
// ---------------------------------------------------------------------------

/// Audience a brand-building strategy is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyFocus {
    Both,
    #[serde(rename = "Patient Education")]
    PatientEducation,
    #[serde(rename = "Patient Retention")]
    PatientRetention,
    Professional,
    Community,
    Premium,
}

impl StrategyFocus {
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyFocus::Both => "Both",
            StrategyFocus::PatientEducation => "Patient Education",
            StrategyFocus::PatientRetention => "Patient Retention",
            StrategyFocus::Professional => "Professional",
            StrategyFocus::Community => "Community",
            StrategyFocus::Premium => "Premium",
        }
    }
}

impl fmt::Display for StrategyFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Wizard,
    BrandBuilder,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Wizard => "wizard",
            Mode::BrandBuilder => "brand_builder",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn experience_roundtrip() {
        for band in ExperienceBand::all() {
            let parsed = ExperienceBand::from_str(band.as_str()).unwrap();
            assert_eq!(*band, parsed);
        }
    }

    #[test]
    fn experience_accepts_short_labels() {
        assert_eq!(
            ExperienceBand::from_str("0-5").unwrap(),
            ExperienceBand::UpToFive
        );
        assert_eq!(
            ExperienceBand::from_str(">20 years").unwrap(),
            ExperienceBand::OverTwenty
        );
        assert!(ExperienceBand::from_str("forever").is_err());
    }

    #[test]
    fn experience_serializes_as_label() {
        let json = serde_json::to_string(&ExperienceBand::SixToTen).unwrap();
        assert_eq!(json, "\"6-10 years\"");
    }

    #[test]
    fn rating_from_u8() {
        assert_eq!(Rating::try_from(1).unwrap(), Rating::NeedsImprovement);
        assert_eq!(Rating::try_from(3).unwrap(), Rating::StrongAdvantage);
        assert!(matches!(
            Rating::try_from(4),
            Err(crate::error::MedstratError::InvalidRating(4))
        ));
        assert!(Rating::try_from(0).is_err());
    }

    #[test]
    fn rating_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Rating::Average).unwrap(), "2");
        let parsed: Rating = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, Rating::StrongAdvantage);
        assert!(serde_json::from_str::<Rating>("7").is_err());
    }

    #[test]
    fn rating_texts() {
        assert_eq!(Rating::NeedsImprovement.text(), "Needs Improvement");
        assert_eq!(Rating::Average.text(), "Average/Competitive");
        assert_eq!(Rating::StrongAdvantage.text(), "Strong Advantage");
    }

    #[test]
    fn scale_serializes_with_space() {
        let json = serde_json::to_string(&PracticeScale::VeryLarge).unwrap();
        assert_eq!(json, "\"Very Large\"");
    }

    #[test]
    fn mode_defaults_to_wizard() {
        assert_eq!(Mode::default(), Mode::Wizard);
    }
}
