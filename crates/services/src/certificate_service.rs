use uuid::Uuid;

use aware_core::model::{Certificate, CertificateError, RecipientName};

use crate::Clock;

pub const PROGRAM_TITLE: &str = "Cyber Security Awareness Training";

pub const CERTIFIED_SKILLS: [&str; 4] = [
    "Password Security",
    "Phishing Prevention",
    "Online Privacy",
    "Safe Browsing",
];

/// Issues cosmetic completion certificates dated by the service clock.
#[derive(Debug, Clone, Copy)]
pub struct CertificateService {
    clock: Clock,
}

impl CertificateService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// # Errors
    ///
    /// Returns `CertificateError` if the name is blank or too long.
    pub fn issue(&self, name: &str) -> Result<Certificate, CertificateError> {
        let recipient = RecipientName::new(name)?;
        let certificate = Certificate {
            credential_id: Uuid::new_v4(),
            recipient,
            program: PROGRAM_TITLE.to_string(),
            skills: CERTIFIED_SKILLS.iter().map(|s| (*s).to_string()).collect(),
            issued_on: self.clock.today(),
        };
        tracing::info!(credential = %certificate.credential_id, "certificate issued");
        Ok(certificate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aware_core::time::fixed_clock;
    use chrono::NaiveDate;

    #[test]
    fn issue_stamps_clock_date_and_trims_name() {
        let certificate = CertificateService::new(fixed_clock()).issue("  Grace Hopper ").unwrap();
        assert_eq!(certificate.recipient.as_str(), "Grace Hopper");
        assert_eq!(certificate.issued_on, NaiveDate::from_ymd_opt(2023, 11, 14).unwrap());
        assert_eq!(certificate.program, PROGRAM_TITLE);
        assert_eq!(certificate.skills.len(), 4);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = CertificateService::new(fixed_clock()).issue(" \t").unwrap_err();
        assert_eq!(err, CertificateError::EmptyName);
    }

    #[test]
    fn every_certificate_gets_its_own_credential() {
        let service = CertificateService::new(fixed_clock());
        let a = service.issue("Ada").unwrap();
        let b = service.issue("Ada").unwrap();
        assert_ne!(a.credential_id, b.credential_id);
    }
}
