//! Consent extensions.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/consent";
pub const USER_INFO_FILE: &str = "https://fhir.centraxx.de/extension/consent/userInfoFile";
pub const NOTES: &str = "https://fhir.centraxx.de/extension/consent/notes";
pub const FILE: &str = "https://fhir.centraxx.de/extension/consent/file";
pub const REVOCATION: &str = "https://fhir.centraxx.de/extension/consent/revocation";

pub fn all_domains() -> Vec<&'static str> {
    vec![USER_INFO_FILE, NOTES, FILE, REVOCATION]
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[revocation::NAMESPACE],
    ..Namespace::leaf("consent", Some(BASE_URL), all_domains)
};

/// Partial or full revocation of a consent.
pub mod revocation {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = super::REVOCATION;
    pub const REVOCATION_PARTLY: &str =
        "https://fhir.centraxx.de/extension/consent/revocation/partlyRevoked";
    pub const REVOCATION_FILE: &str = "https://fhir.centraxx.de/extension/consent/revocation/file";
    pub const REVOCATION_DATE: &str = "https://fhir.centraxx.de/extension/consent/revocation/date";
    pub const REVOCATION_NOTES: &str =
        "https://fhir.centraxx.de/extension/consent/revocation/notes";

    pub fn all_domains() -> Vec<&'static str> {
        vec![REVOCATION_PARTLY, REVOCATION_FILE, REVOCATION_DATE, REVOCATION_NOTES]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("revocation", Some(BASE_URL), all_domains);
}
