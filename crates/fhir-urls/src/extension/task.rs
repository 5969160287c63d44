use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/task";
pub const DESCRIPTION: &str = "https://fhir.centraxx.de/extension/task/description";
pub const CAL_EVENT: &str = "https://fhir.centraxx.de/extension/task/calendarEvent";
pub const NOTIFY_ON_RESOLVE: &str = "https://fhir.centraxx.de/extension/task/notifyOnResolve";
pub const ASSIGNEE_GROUP: &str = "https://fhir.centraxx.de/extension/task/assigneeGroup";

pub fn all_domains() -> Vec<&'static str> {
    vec![DESCRIPTION, CAL_EVENT, NOTIFY_ON_RESOLVE, ASSIGNEE_GROUP]
}

pub(crate) const NAMESPACE: Namespace = Namespace::leaf("task", Some(BASE_URL), all_domains);
