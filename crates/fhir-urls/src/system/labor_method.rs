use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/laborMethod";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/laborMethod";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![BASE_URL, BASE_URL_VALUESET];
    domains.extend(category::all_domains());
    domains.extend(labor_method_type::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[category::NAMESPACE, labor_method_type::NAMESPACE],
    ..Namespace::leaf("labor_method", Some(BASE_URL), all_domains)
};

code_system!(category => "laborMethod/category");
code_system!(labor_method_type => "laborMethod/laborMethodType");
