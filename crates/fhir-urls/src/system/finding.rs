//! Finding (laboratory result) identifier systems.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/finding";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/finding";
pub const LABOR_FINDING_ID: &str = "https://fhir.centraxx.de/system/finding/laborFindingId";
pub const LABOR_FINDING_SHORTNAME: &str = "https://fhir.centraxx.de/system/finding/shortname";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![BASE_URL, BASE_URL_VALUESET, LABOR_FINDING_ID, LABOR_FINDING_SHORTNAME];
    domains.extend(abnormal_flag::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[abnormal_flag::NAMESPACE],
    ..Namespace::leaf("finding", Some(BASE_URL), all_domains)
};

code_system!(abnormal_flag => "finding/abnormalFlag");
