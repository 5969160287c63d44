//! CRF template extensions.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/crfTemplate";
pub const MULTIPLE_USE_URL: &str = "https://fhir.centraxx.de/extension/crfTemplate/multipleUse";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![MULTIPLE_USE_URL];
    domains.extend(section::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[section::NAMESPACE],
    ..Namespace::leaf("crf_template", Some(BASE_URL), all_domains)
};

pub mod section {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/crfTemplate/section";
    pub const INDEX: &str = "https://fhir.centraxx.de/extension/crfTemplate/section/index";
    pub const TYPE: &str = "https://fhir.centraxx.de/extension/crfTemplate/section/type";
    pub const ALIGNMENT: &str =
        "https://fhir.centraxx.de/extension/crfTemplate/section/orientation";
    pub const ROW: &str = "https://fhir.centraxx.de/extension/crfTemplate/section/row";
    pub const LOWER_COLUMN: &str =
        "https://fhir.centraxx.de/extension/crfTemplate/section/lowerColumn";
    pub const UPPER_COLUMN: &str =
        "https://fhir.centraxx.de/extension/crfTemplate/section/upperColumn";

    pub fn all_domains() -> Vec<&'static str> {
        let mut domains = vec![INDEX, TYPE, ALIGNMENT, ROW, LOWER_COLUMN, UPPER_COLUMN];
        domains.extend(field::all_domains());
        domains
    }

    pub(crate) const NAMESPACE: Namespace = Namespace {
        children: &[field::NAMESPACE],
        ..Namespace::leaf("section", Some(BASE_URL), all_domains)
    };

    pub mod field {
        use crate::namespace::Namespace;

        pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/crfTemplate/section/field";
        pub const CRFFIELDTYPE: &str =
            "https://fhir.centraxx.de/extension/crfTemplate/section/field/crfFieldType";
        pub const TOOLTIP: &str =
            "https://fhir.centraxx.de/extension/crfTemplate/section/field/toolTip";
        pub const ROW: &str = "https://fhir.centraxx.de/extension/crfTemplate/section/field/row";
        pub const LOWER_COLUMN: &str =
            "https://fhir.centraxx.de/extension/crfTemplate/section/field/lowerColumn";
        pub const UPPER_COLUMN: &str =
            "https://fhir.centraxx.de/extension/crfTemplate/section/field/upperColumn";
        pub const DIRECTION: &str =
            "https://fhir.centraxx.de/extension/crfTemplate/section/field/direction";
        pub const LENGTH: &str =
            "https://fhir.centraxx.de/extension/crfTemplate/section/field/length";
        pub const GRADUATIONS: &str =
            "https://fhir.centraxx.de/extension/crfTemplate/section/field/graduations";
        pub const MIN_VALUE_DESC: &str =
            "https://fhir.centraxx.de/extension/crfTemplate/section/field/minValueDescription";
        pub const MAX_VALUE_DESC: &str =
            "https://fhir.centraxx.de/extension/crfTemplate/section/field/maxValueDescription";

        pub fn all_domains() -> Vec<&'static str> {
            vec![
                CRFFIELDTYPE,
                TOOLTIP,
                ROW,
                LOWER_COLUMN,
                UPPER_COLUMN,
                DIRECTION,
                LENGTH,
                GRADUATIONS,
                MIN_VALUE_DESC,
                MAX_VALUE_DESC,
            ]
        }

        pub(crate) const NAMESPACE: Namespace =
            Namespace::leaf("field", Some(BASE_URL), all_domains);
    }
}
