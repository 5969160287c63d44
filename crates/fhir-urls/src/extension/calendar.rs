//! Calendar (appointment) extensions.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/calendar";
pub const ATTACHMENT: &str = "https://fhir.centraxx.de/extension/calendar/attachment";
pub const ALL_DAY: &str = "https://fhir.centraxx.de/extension/calendar/allDay";
pub const DEPARTMENT: &str = "https://fhir.centraxx.de/extension/calendar/department";
pub const STAY_TYPE: &str = "https://fhir.centraxx.de/extension/calendar/stayType";
pub const DRG: &str = "https://fhir.centraxx.de/extension/calendar/drg";
pub const LOCATION: &str = "https://fhir.centraxx.de/extension/calendar/location";
pub const RESOURCE: &str = "https://fhir.centraxx.de/extension/calendar/resource";
pub const VISIBLE: &str = "https://fhir.centraxx.de/extension/calendar/visible";
pub const STUDY_CENTER: &str = "https://fhir.centraxx.de/extension/calendar/studyCenter";
pub const STUDY_VISIT_TEMPLATE: &str =
    "https://fhir.centraxx.de/extension/calendar/studyVisitTemplate";
pub const INVITATION_STATUS: &str = "https://fhir.centraxx.de/extension/calendar/invitationStatus";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![
        ATTACHMENT,
        ALL_DAY,
        DEPARTMENT,
        DRG,
        STAY_TYPE,
        LOCATION,
        RESOURCE,
        VISIBLE,
        STUDY_CENTER,
        STUDY_VISIT_TEMPLATE,
        INVITATION_STATUS,
    ];
    domains.extend(attachment::all_domains());
    domains.extend(recurrence::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[attachment::NAMESPACE, recurrence::NAMESPACE],
    ..Namespace::leaf("calendar", Some(BASE_URL), all_domains)
};

pub mod attachment {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = super::ATTACHMENT;
    pub const ATTACHMENT_PATIENT: &str =
        "https://fhir.centraxx.de/extension/calendar/attachment/patient";
    pub const ATTACHMENT_CRF: &str = "https://fhir.centraxx.de/extension/calendar/attachment/crf";
    pub const ATTACHMENT_SAMPLE: &str =
        "https://fhir.centraxx.de/extension/calendar/attachment/sample";
    pub const ATTACHMENT_STUDY: &str =
        "https://fhir.centraxx.de/extension/calendar/attachment/study";
    pub const ATTACHMENT_STUDYMEMBER: &str =
        "https://fhir.centraxx.de/extension/calendar/attachment/studyMember";

    pub fn all_domains() -> Vec<&'static str> {
        vec![
            ATTACHMENT_PATIENT,
            ATTACHMENT_CRF,
            ATTACHMENT_SAMPLE,
            ATTACHMENT_STUDY,
            ATTACHMENT_STUDYMEMBER,
        ]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("attachment", Some(BASE_URL), all_domains);
}

/// Recurrence rules of repeating appointments.
pub mod recurrence {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/calendar/recurrence";
    pub const RECURRENCE_EXPRESSION: &str =
        "https://fhir.centraxx.de/extension/calendar/recurrence/expression";
    pub const RECURRENCE_ENDDATE: &str =
        "https://fhir.centraxx.de/extension/calendar/recurrence/endDate";
    pub const RECURRENCE_COUNT: &str =
        "https://fhir.centraxx.de/extension/calendar/recurrence/count";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, RECURRENCE_EXPRESSION, RECURRENCE_ENDDATE, RECURRENCE_COUNT]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("recurrence", Some(BASE_URL), all_domains);
}
