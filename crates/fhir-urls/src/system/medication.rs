use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/medication";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/medication";
pub const AGENT: &str = "https://fhir.centraxx.de/system/medication/agent";
pub const AGENT_GROUP: &str = "https://fhir.centraxx.de/system/medication/agentGroup";
pub const DOSE_TYPE: &str = "https://fhir.centraxx.de/system/medication/doseType";
pub const APPLICATION_METHOD: &str = "https://fhir.centraxx.de/system/medication/applicationMethod";
pub const APPLICATION_MEDIUM: &str = "https://fhir.centraxx.de/system/medication/applicationMedium";
pub const APPLICATION_FORM: &str = "https://fhir.centraxx.de/system/medication/applicationForm";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![
        BASE_URL,
        BASE_URL_VALUESET,
        AGENT,
        AGENT_GROUP,
        DOSE_TYPE,
        APPLICATION_METHOD,
        APPLICATION_MEDIUM,
        APPLICATION_FORM,
    ];
    domains.extend(service_type::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[service_type::NAMESPACE],
    ..Namespace::leaf("medication", Some(BASE_URL), all_domains)
};

code_system!(service_type => "medication/serviceType");
