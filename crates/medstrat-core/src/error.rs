use thiserror::Error;

#[derive(Debug, Error)]
pub enum MedstratError {
    #[error("unknown specialty: {0}")]
    UnknownSpecialty(String),

    #[error("unknown experience band: {0}")]
    UnknownExperience(String),

    #[error("unknown practice type: {0}")]
    UnknownPracticeType(String),

    #[error("unknown patient type: {0}")]
    UnknownPatientType(String),

    #[error("unknown diagnostic facility: {0}")]
    UnknownFacility(String),

    #[error("unknown additional service: {0}")]
    UnknownService(String),

    #[error("unknown competitive factor: {0}")]
    UnknownFactor(String),

    #[error("invalid rating {0}: must be 1, 2 or 3")]
    InvalidRating(u8),

    #[error("unknown marketing focus: {0}")]
    UnknownFocus(String),

    #[error("unknown brand strategy: {0}")]
    UnknownStrategy(String),

    #[error("session not found: {0}")]
    SessionNotFound(String),

    #[error("config not found: {0}")]
    ConfigNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl MedstratError {
    /// True for errors caused by a value outside one of the closed catalogs.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            MedstratError::UnknownSpecialty(_)
                | MedstratError::UnknownExperience(_)
                | MedstratError::UnknownPracticeType(_)
                | MedstratError::UnknownPatientType(_)
                | MedstratError::UnknownFacility(_)
                | MedstratError::UnknownService(_)
                | MedstratError::UnknownFactor(_)
                | MedstratError::InvalidRating(_)
                | MedstratError::UnknownFocus(_)
                | MedstratError::UnknownStrategy(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MedstratError>;
