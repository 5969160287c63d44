use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/patientInsurance";
pub const POLICE_NUMBER: &str = "https://fhir.centraxx.de/extension/patientInsurance/policeNumber";
pub const GROUP_NUMBER: &str = "https://fhir.centraxx.de/extension/patientInsurance/groupNumber";
pub const INSURED: &str = "https://fhir.centraxx.de/extension/patientInsurance/insured";
pub const RANK: &str = "https://fhir.centraxx.de/extension/patientInsurance/rank";

pub fn all_domains() -> Vec<&'static str> {
    vec![POLICE_NUMBER, GROUP_NUMBER, INSURED, RANK]
}

pub(crate) const NAMESPACE: Namespace =
    Namespace::leaf("patient_insurance", Some(BASE_URL), all_domains);
