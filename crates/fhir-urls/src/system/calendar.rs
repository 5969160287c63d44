use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/calendar";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/calendar";
pub const PARTICIPANT_TYPE: &str = "https://fhir.centraxx.de/system/calendar/participantType";
pub const EVENT_ID: &str = "https://fhir.centraxx.de/system/calendar/eventId";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![BASE_URL, BASE_URL_VALUESET, PARTICIPANT_TYPE, EVENT_ID];
    domains.extend(resource::all_domains());
    domains.extend(r#type::all_domains());
    domains.extend(stay_type::all_domains());
    domains.extend(appointment_location::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[
        resource::NAMESPACE,
        r#type::NAMESPACE,
        stay_type::NAMESPACE,
        appointment_location::NAMESPACE,
    ],
    ..Namespace::leaf("calendar", Some(BASE_URL), all_domains)
};

code_system!(resource => "calendar/resource");

pub mod r#type {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/calendar/type";
    pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/calendar/type";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, BASE_URL_VALUESET]
    }

    pub(crate) const NAMESPACE: Namespace = Namespace::leaf("type", Some(BASE_URL), all_domains);
}

code_system!(stay_type => "calendar/stayType");
code_system!(appointment_location => "calendar/appointmentLocation");
