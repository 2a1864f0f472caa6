use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CertificateError {
    #[error("recipient name cannot be empty")]
    EmptyName,

    #[error("recipient name is too long ({len} > {max} characters)")]
    NameTooLong { len: usize, max: usize },
}

/// Validated recipient name (trimmed, non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipientName(String);

impl RecipientName {
    pub const MAX_CHARS: usize = 80;

    /// # Errors
    ///
    /// Returns `CertificateError::EmptyName` if the name is blank after
    /// trimming, or `NameTooLong` past `MAX_CHARS`.
    pub fn new(value: impl Into<String>) -> Result<Self, CertificateError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CertificateError::EmptyName);
        }
        let len = trimmed.chars().count();
        if len > Self::MAX_CHARS {
            return Err(CertificateError::NameTooLong {
                len,
                max: Self::MAX_CHARS,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecipientName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cosmetic completion certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Certificate {
    pub credential_id: Uuid,
    pub recipient: RecipientName,
    pub program: String,
    pub skills: Vec<String>,
    pub issued_on: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipient_name_is_trimmed() {
        let name = RecipientName::new("  Ada Lovelace \n").unwrap();
        assert_eq!(name.as_str(), "Ada Lovelace");
    }

    #[test]
    fn blank_recipient_name_is_rejected() {
        assert_eq!(RecipientName::new("   "), Err(CertificateError::EmptyName));
    }

    #[test]
    fn overlong_recipient_name_is_rejected() {
        let err = RecipientName::new("x".repeat(81)).unwrap_err();
        assert_eq!(err, CertificateError::NameTooLong { len: 81, max: 80 });
    }
}
