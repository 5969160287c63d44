use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/tumor";
pub const SOURCEDICT: &str = "https://fhir.centraxx.de/extension/tumor/sourceDict";
pub const CAPTURECAUSEDICT: &str = "https://fhir.centraxx.de/extension/tumor/captureCauseDict";
pub const PATIENTENLIGHTENSTATUS_DICT: &str =
    "https://fhir.centraxx.de/extension/tumor/patientEnlightenStatusDict";
pub const ENLIGHTEN_DATETIME: &str = "https://fhir.centraxx.de/extension/tumor/enlightenDateTime";
pub const THERAPYCAUSE_DICT: &str = "https://fhir.centraxx.de/extension/tumor/therapyCauseDict";
pub const POSTCARE_AGREEMENT: &str = "https://fhir.centraxx.de/extension/tumor/postCareAgreement";
pub const POSTCARE_AGREEMENT_DATETIME: &str =
    "https://fhir.centraxx.de/extension/tumor/postCareAgreementDateTime";
pub const POSTCARE_STARTDATETIME: &str =
    "https://fhir.centraxx.de/extension/tumor/postCareStartDateTime";
pub const POSTCARE_SCHEMA: &str = "https://fhir.centraxx.de/extension/tumor/postCareSchema";
pub const VISITCAUSE_DICT: &str = "https://fhir.centraxx.de/extension/tumor/visitCauseDict";

pub fn all_domains() -> Vec<&'static str> {
    vec![
        SOURCEDICT,
        CAPTURECAUSEDICT,
        PATIENTENLIGHTENSTATUS_DICT,
        ENLIGHTEN_DATETIME,
        THERAPYCAUSE_DICT,
        POSTCARE_AGREEMENT,
        POSTCARE_AGREEMENT_DATETIME,
        POSTCARE_STARTDATETIME,
        POSTCARE_SCHEMA,
        VISITCAUSE_DICT,
    ]
}

pub(crate) const NAMESPACE: Namespace = Namespace::leaf("tumor", Some(BASE_URL), all_domains);
