use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/study";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/study";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![BASE_URL, BASE_URL_VALUESET];
    domains.extend(NAMESPACE.children().iter().flat_map(Namespace::all_domains));
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[
        study_status::NAMESPACE,
        study_register_status::NAMESPACE,
        study_visit_template::NAMESPACE,
        study_center::NAMESPACE,
        study_arm_type::NAMESPACE,
        schedule::NAMESPACE,
    ],
    ..Namespace::leaf("study", Some(BASE_URL), all_domains)
};

code_system!(study_status => "study/status");
code_system!(study_register_status => "study/studyRegisterStatus");
code_system!(study_visit_template => "study/studyVisitTemplate");
code_system!(study_center => "study/studyCenter");
code_system!(study_arm_type => "study/studyArmType");

pub mod schedule {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/study/schedule";
    pub const MINUNIT: &str = "https://fhir.centraxx.de/system/study/schedule/minUnit";
    pub const MAXUNIT: &str = "https://fhir.centraxx.de/system/study/schedule/maxUnit";
    pub const REFPOINT: &str = "https://fhir.centraxx.de/system/study/schedule/refPoint";

    pub fn all_domains() -> Vec<&'static str> {
        vec![MINUNIT, MAXUNIT, REFPOINT]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("schedule", Some(BASE_URL), all_domains);
}
