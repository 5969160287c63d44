use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/serviceRequest";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/serviceRequest";
pub const REQUEST_ID: &str = "https://fhir.centraxx.de/system/serviceRequest/requestId";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![REQUEST_ID];
    domains.extend(r#type::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[r#type::NAMESPACE],
    ..Namespace::leaf("service_request", Some(BASE_URL), all_domains)
};

pub mod r#type {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/serviceRequest/type";
    pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/serviceRequest/type";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, BASE_URL_VALUESET]
    }

    pub(crate) const NAMESPACE: Namespace = Namespace::leaf("type", Some(BASE_URL), all_domains);
}
