//! Administrator's instruction form for technicians.

use thiserror::Error;

use crate::i18n::TrKey;
use crate::monitoring::Priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReportFormError {
    #[error("technician is empty")]
    MissingTechnician,
    #[error("message is empty")]
    MissingMessage,
}

impl ReportFormError {
    pub fn message_key(self) -> TrKey {
        match self {
            ReportFormError::MissingTechnician => TrKey::AdminMissingTechnician,
            ReportFormError::MissingMessage => TrKey::AdminMissingMessage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnicianReport {
    pub technician: String,
    pub message: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportForm {
    pub technician: String,
    pub message: String,
    pub priority: Priority,
}

impl Default for ReportForm {
    fn default() -> Self {
        Self {
            technician: String::new(),
            message: String::new(),
            priority: Priority::Medium,
        }
    }
}

impl ReportForm {
    pub fn validate(&self) -> Result<TechnicianReport, ReportFormError> {
        let technician = self.technician.trim();
        if technician.is_empty() {
            return Err(ReportFormError::MissingTechnician);
        }
        let message = self.message.trim();
        if message.is_empty() {
            return Err(ReportFormError::MissingMessage);
        }
        Ok(TechnicianReport {
            technician: technician.to_string(),
            message: message.to_string(),
            priority: self.priority,
        })
    }

    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    /// Hands off a valid report and clears the form. An invalid form is left
    /// as typed.
    pub fn send(&mut self) -> Result<TechnicianReport, ReportFormError> {
        let report = self.validate()?;
        tracing::info!(
            technician = %report.technician,
            priority = ?report.priority,
            "report sent to technician"
        );
        *self = Self::default();
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ReportForm {
        ReportForm {
            technician: " Ramesh ".to_string(),
            message: "Check the Danapur pump".to_string(),
            priority: Priority::High,
        }
    }

    #[test]
    fn new_form_defaults_to_medium_and_cannot_submit() {
        let form = ReportForm::default();
        assert_eq!(form.priority, Priority::Medium);
        assert!(!form.can_submit());
    }

    #[test]
    fn send_needs_technician_and_message() {
        let mut form = filled();
        form.message = "  ".to_string();
        assert_eq!(form.validate(), Err(ReportFormError::MissingMessage));
        form.technician.clear();
        assert_eq!(form.validate(), Err(ReportFormError::MissingTechnician));
        assert!(!form.can_submit());
        assert!(filled().can_submit());
    }

    #[test]
    fn send_yields_trimmed_report_and_resets() {
        let mut form = filled();
        let report = form.send().unwrap();
        assert_eq!(report.technician, "Ramesh");
        assert_eq!(report.priority, Priority::High);
        assert_eq!(form, ReportForm::default());
    }

    #[test]
    fn failed_send_keeps_input() {
        let mut form = filled();
        form.technician.clear();
        assert_eq!(form.send(), Err(ReportFormError::MissingTechnician));
        assert_eq!(form.message, "Check the Danapur pump");
        assert_eq!(form.priority, Priority::High);
    }
}
