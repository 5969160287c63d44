use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/hotline";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/hotline";
pub const APPOINTMENT_LOCATION: &str =
    "https://fhir.centraxx.de/system/hotline/appointmentLocation";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![APPOINTMENT_LOCATION];
    domains.extend(contact_event::all_domains());
    domains.extend(reason::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[contact_event::NAMESPACE, reason::NAMESPACE],
    ..Namespace::leaf("hotline", Some(BASE_URL), all_domains)
};

code_system!(contact_event => "hotline/contactEvent");
code_system!(reason => "hotline/reason");
