use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/flexiFlagItem";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/flexiFlagItem";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = flexi_flag_def_entry::all_domains();
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[flexi_flag_def_entry::NAMESPACE],
    ..Namespace::leaf("flexi_flag_item", Some(BASE_URL), all_domains)
};

code_system!(flexi_flag_def_entry => "flexiFlagItem/flexiFlagDefEntry");
