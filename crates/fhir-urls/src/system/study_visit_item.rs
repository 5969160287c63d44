use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/studyVisitItem";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/studyVisitItem";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![BASE_URL, BASE_URL_VALUESET];
    domains.extend(approval_state::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[approval_state::NAMESPACE],
    ..Namespace::leaf("study_visit_item", Some(BASE_URL), all_domains)
};

code_system!(approval_state => "studyVisitItem/approvalState");
