use thiserror::Error;

use crate::time::DEFAULT_QUIZ_DURATION_SECS;

/// Longest countdown a quiz may be configured with (one day).
pub const MAX_QUIZ_DURATION_SECS: u32 = 86_400;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("quiz duration must be between 1 and {MAX_QUIZ_DURATION_SECS} seconds, got {0}")]
    InvalidDuration(u32),
}

/// Validated quiz configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    duration_secs: u32,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QuizSettingsDraft {
    pub duration_secs: Option<u32>,
}

impl QuizSettingsDraft {
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidDuration` if the duration is zero or above one day.
    pub fn validate(self) -> Result<QuizSettings, SettingsError> {
        let duration_secs = self.duration_secs.unwrap_or(DEFAULT_QUIZ_DURATION_SECS);
        if duration_secs == 0 || duration_secs > MAX_QUIZ_DURATION_SECS {
            return Err(SettingsError::InvalidDuration(duration_secs));
        }
        Ok(QuizSettings { duration_secs })
    }
}

impl QuizSettings {
    /// # Errors
    ///
    /// See [`QuizSettingsDraft::validate`].
    pub fn with_duration(duration_secs: u32) -> Result<Self, SettingsError> {
        QuizSettingsDraft {
            duration_secs: Some(duration_secs),
        }
        .validate()
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_QUIZ_DURATION_SECS,
        }
    }
}
