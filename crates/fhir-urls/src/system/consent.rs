use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/consent";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/consent";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![BASE_URL, BASE_URL_VALUESET];
    domains.extend(r#type::all_domains());
    domains.extend(action::all_domains());
    domains.extend(consent_object::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[r#type::NAMESPACE, action::NAMESPACE, consent_object::NAMESPACE],
    ..Namespace::leaf("consent", Some(BASE_URL), all_domains)
};

pub mod r#type {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/consent/type";
    pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/consent/type";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, BASE_URL_VALUESET]
    }

    pub(crate) const NAMESPACE: Namespace = Namespace::leaf("type", Some(BASE_URL), all_domains);
}

code_system!(action => "consent/action");
code_system!(consent_object => "consent/object");
