//! Extensions on `Medication`, `MedicationRequest` and `MedicationAdministration`.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/medication";
pub const DOSE_VALUE: &str = "https://fhir.centraxx.de/extension/medication/doseValue";
pub const PRESCRIBER: &str = "https://fhir.centraxx.de/extension/medication/prescribedBy";
pub const TRANSCRIPTIONIST: &str = "https://fhir.centraxx.de/extension/medication/transcriptionist";
pub const TYPE: &str = "https://fhir.centraxx.de/extension/medication/type";
pub const ORDINANCE_RELEASE_METHOD: &str =
    "https://fhir.centraxx.de/extension/medication/ordinanceReleaseMethod";
pub const IS_PRESCRIPTION: &str = "https://fhir.centraxx.de/extension/medication/isPrescription";
pub const FON: &str = "https://fhir.centraxx.de/extension/medication/fillerOrderNumber";
pub const PON: &str = "https://fhir.centraxx.de/extension/medication/placerOrderNumber";
pub const RESULTDATE: &str = "https://fhir.centraxx.de/extension/medication/resultDate";

pub fn all_domains() -> Vec<&'static str> {
    vec![
        DOSE_VALUE,
        PRESCRIBER,
        TRANSCRIPTIONIST,
        TYPE,
        ORDINANCE_RELEASE_METHOD,
        IS_PRESCRIPTION,
        FON,
        PON,
        RESULTDATE,
        identifier::FON,
        identifier::MEDICATION_CODE,
    ]
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[identifier::NAMESPACE],
    ..Namespace::leaf("medication", Some(BASE_URL), all_domains)
};

/// Identifier extensions for medication records.
pub mod identifier {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/medication/identifier";
    pub const FON: &str =
        "https://fhir.centraxx.de/extension/medication/identifier/fillerOrderNumber";
    pub const MEDICATION_CODE: &str =
        "https://fhir.centraxx.de/extension/medication/identifier/code";

    pub fn all_domains() -> Vec<&'static str> {
        vec![FON, MEDICATION_CODE]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("identifier", Some(BASE_URL), all_domains);
}
