use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/crfTemplate";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/crfTemplate";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![BASE_URL, BASE_URL_VALUESET];
    domains.extend(section::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[section::NAMESPACE],
    ..Namespace::leaf("crf_template", Some(BASE_URL), all_domains)
};

pub mod section {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/crfTemplate/section";
    pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/crfTemplate/section";

    pub fn all_domains() -> Vec<&'static str> {
        let mut domains = vec![BASE_URL, BASE_URL_VALUESET];
        domains.extend(field::all_domains());
        domains.extend(r#type::all_domains());
        domains.extend(alignment::all_domains());
        domains
    }

    pub(crate) const NAMESPACE: Namespace = Namespace {
        children: &[field::NAMESPACE, r#type::NAMESPACE, alignment::NAMESPACE],
        ..Namespace::leaf("section", Some(BASE_URL), all_domains)
    };

    pub mod field {
        use crate::namespace::Namespace;

        pub const BASE_URL: &str = "https://fhir.centraxx.de/system/crfTemplate/section/field";
        pub const BASE_URL_VALUESET: &str =
            "https://fhir.centraxx.de/valueSet/crfTemplate/section/field";

        pub fn all_domains() -> Vec<&'static str> {
            let mut domains = vec![BASE_URL, BASE_URL_VALUESET];
            domains.extend(crf_field_type::all_domains());
            domains
        }

        pub(crate) const NAMESPACE: Namespace = Namespace {
            children: &[crf_field_type::NAMESPACE],
            ..Namespace::leaf("field", Some(BASE_URL), all_domains)
        };

        code_system!(crf_field_type => "crfTemplate/section/field/crfFieldType");
    }

    pub mod r#type {
        use crate::namespace::Namespace;

        pub const BASE_URL: &str = "https://fhir.centraxx.de/system/crfTemplate/section/type";
        pub const BASE_URL_VALUESET: &str =
            "https://fhir.centraxx.de/valueSet/crfTemplate/section/type";

        pub fn all_domains() -> Vec<&'static str> {
            vec![BASE_URL, BASE_URL_VALUESET]
        }

        pub(crate) const NAMESPACE: Namespace =
            Namespace::leaf("type", Some(BASE_URL), all_domains);
    }

    code_system!(alignment => "crfTemplate/section/alignment");
}
