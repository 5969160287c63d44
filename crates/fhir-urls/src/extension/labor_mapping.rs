use crate::namespace::Namespace;

pub const BASE_URL: &str = super::LABOR_MAPPING;
pub const LABOR_MAPPING_TYPE: &str = "https://fhir.centraxx.de/extension/laborMapping/type";
pub const RELATED_REFERENCE: &str =
    "https://fhir.centraxx.de/extension/laborMapping/relatedReference";
pub const PATIENT: &str = "https://fhir.centraxx.de/extension/laborMapping/patient";
pub const ENCOUNTER: &str = "https://fhir.centraxx.de/extension/laborMapping/encounter";
pub const CREATE_PROFILE: &str = "https://fhir.centraxx.de/extension/laborMapping/createProfile";
pub const INCREMENT_LABORMETHOD_VERSION: &str =
    "https://fhir.centraxx.de/extension/laborMapping/incrementProfileVersion";

pub fn all_domains() -> Vec<&'static str> {
    vec![
        LABOR_MAPPING_TYPE,
        RELATED_REFERENCE,
        PATIENT,
        ENCOUNTER,
        CREATE_PROFILE,
        INCREMENT_LABORMETHOD_VERSION,
    ]
}

pub(crate) const NAMESPACE: Namespace =
    Namespace::leaf("labor_mapping", Some(BASE_URL), all_domains);
