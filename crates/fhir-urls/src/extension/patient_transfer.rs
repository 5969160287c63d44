//! Patient transfer extensions.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/patientTransfer";
pub const EPISODE: &str = "https://fhir.centraxx.de/extension/patientTransfer/episode";
pub const TRANSFER_DATE: &str = "https://fhir.centraxx.de/extension/patientTransfer/transferDate";
pub const ATTENDING_DOCTOR: &str =
    "https://fhir.centraxx.de/extension/patientTransfer/attendingDoctor";
pub const CURRENT_LOCATION: &str =
    "https://fhir.centraxx.de/extension/patientTransfer/currentLocation";
pub const PRIOR_LOCATION: &str = "https://fhir.centraxx.de/extension/patientTransfer/priorLocation";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![
        CURRENT_LOCATION,
        PRIOR_LOCATION,
        EPISODE,
        TRANSFER_DATE,
        ATTENDING_DOCTOR,
    ];
    domains.extend(location::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[location::NAMESPACE],
    ..Namespace::leaf("patient_transfer", Some(BASE_URL), all_domains)
};

pub mod location {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/patientTransfer/location";
    pub const HABITATION: &str =
        "https://fhir.centraxx.de/extension/patientTransfer/location/habitation";
    pub const MED_DEPARTMENT: &str =
        "https://fhir.centraxx.de/extension/patientTransfer/location/medDepartment";
    pub const ROOM: &str = "https://fhir.centraxx.de/extension/patientTransfer/location/room";
    pub const BED: &str = "https://fhir.centraxx.de/extension/patientTransfer/location/bed";
    pub const FLOOR: &str = "https://fhir.centraxx.de/extension/patientTransfer/location/floor";

    pub fn all_domains() -> Vec<&'static str> {
        vec![HABITATION, MED_DEPARTMENT, ROOM, BED, FLOOR]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("location", Some(BASE_URL), all_domains);
}
