use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/address";
pub const TITLE: &str = "https://fhir.centraxx.de/extension/address/title";
pub const INSTITUTE: &str = "https://fhir.centraxx.de/extension/address/institute";
pub const DEPARTMENT: &str = "https://fhir.centraxx.de/extension/address/department";
pub const POSITION: &str = "https://fhir.centraxx.de/extension/address/position";
pub const CXX_CONTACT_ID: &str = "https://fhir.centraxx.de/extension/address/cxxContactId";

pub fn all_domains() -> Vec<&'static str> {
    vec![TITLE, INSTITUTE, DEPARTMENT, POSITION, CXX_CONTACT_ID]
}

pub(crate) const NAMESPACE: Namespace =
    Namespace::leaf("contact_address", Some(BASE_URL), all_domains);
