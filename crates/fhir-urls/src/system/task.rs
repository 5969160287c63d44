use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/task";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/task";
pub const OTHER_DECLINE_REASON: &str = "https://fhir.centraxx.de/system/task/otherDeclineReason";
pub const ATTACHMENT_TYPE: &str = "https://fhir.centraxx.de/system/task/attachmentType";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![OTHER_DECLINE_REASON, ATTACHMENT_TYPE];
    domains.extend(task_type::all_domains());
    domains.extend(decline_reason::all_domains());
    domains.extend(assignee_group::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[task_type::NAMESPACE, decline_reason::NAMESPACE, assignee_group::NAMESPACE],
    ..Namespace::leaf("task", Some(BASE_URL), all_domains)
};

code_system!(task_type => "task/taskType");
code_system!(decline_reason => "task/declineReason");
code_system!(assignee_group => "task/assigneeGroup");
