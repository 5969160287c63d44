use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/contactAddress";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/contactAddress";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![BASE_URL, BASE_URL_VALUESET];
    domains.extend(cxx_contact_id::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[cxx_contact_id::NAMESPACE],
    ..Namespace::leaf("contact_address", Some(BASE_URL), all_domains)
};

code_system!(cxx_contact_id => "contactAddress/cxxContactId");
