use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/document";
pub const DESCRIPTION: &str = "https://fhir.centraxx.de/extension/document/description";
pub const KEYWORDS: &str = "https://fhir.centraxx.de/extension/document/keywords";
pub const PRODUCER_ORDER_NUMBER: &str =
    "https://fhir.centraxx.de/extension/document/producerOrderNumber";
pub const STATUS: &str = "https://fhir.centraxx.de/extension/document/status";
pub const PATIENT_VISIBILITY: &str =
    "https://fhir.centraxx.de/extension/document/patientVisibility";

pub fn all_domains() -> Vec<&'static str> {
    vec![DESCRIPTION, KEYWORDS, PRODUCER_ORDER_NUMBER, STATUS, PATIENT_VISIBILITY]
}

pub(crate) const NAMESPACE: Namespace = Namespace::leaf("document", Some(BASE_URL), all_domains);
