use serde::Serialize;

use aware_core::model::Certificate;

use crate::vm::time_fmt::format_long_date;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CertificateVm {
    pub recipient: String,
    pub program: String,
    pub skills: Vec<String>,
    pub issued_on: String,
    pub credential_id: String,
}

impl From<&Certificate> for CertificateVm {
    fn from(certificate: &Certificate) -> Self {
        Self {
            recipient: certificate.recipient.to_string(),
            program: certificate.program.clone(),
            skills: certificate.skills.clone(),
            issued_on: format_long_date(certificate.issued_on),
            credential_id: certificate.credential_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aware_core::time::fixed_clock;
    use services::CertificateService;

    #[test]
    fn certificate_view_uses_long_date() {
        let certificate = CertificateService::new(fixed_clock()).issue("Ada").unwrap();
        let vm = CertificateVm::from(&certificate);
        assert_eq!(vm.recipient, "Ada");
        assert_eq!(vm.issued_on, "November 14, 2023");
        assert_eq!(vm.credential_id.len(), 36);
    }
}
