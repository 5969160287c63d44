use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/laborValue";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/laborValue";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![BASE_URL, BASE_URL_VALUESET];
    domains.extend(NAMESPACE.children().iter().flat_map(Namespace::all_domains));
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[
        unit::NAMESPACE,
        labor_value_type::NAMESPACE,
        choice_type::NAMESPACE,
        date_precision::NAMESPACE,
        border_precision::NAMESPACE,
    ],
    ..Namespace::leaf("labor_value", Some(BASE_URL), all_domains)
};

code_system!(unit => "laborValue/unit");
code_system!(labor_value_type => "laborValue/laborValueType");
code_system!(choice_type => "laborValue/choiceType");
code_system!(date_precision => "laborValue/datePrecision");
code_system!(border_precision => "laborValue/borderPrecision");
