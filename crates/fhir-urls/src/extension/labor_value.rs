use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/laborValue";
pub const LABORVALUETYPE: &str = "https://fhir.centraxx.de/extension/laborValue/laborValueType";
pub const MIN: &str = "https://fhir.centraxx.de/extension/laborValue/min";
pub const MAX: &str = "https://fhir.centraxx.de/extension/laborValue/max";
pub const DATE_PRECISION: &str = "https://fhir.centraxx.de/extension/laborValue/datePrecision";
pub const OBSERVATION_METHODS: &str =
    "https://fhir.centraxx.de/extension/laborValue/observationMethods";
pub const OBSERVATION_METHOD: &str =
    "https://fhir.centraxx.de/extension/laborValue/observationMethods/observationMethod";
pub const IS_DEVIANT_VALUE: &str = "https://fhir.centraxx.de/extension/laborValue/deviantValue";
pub const CHOICE_TYPE: &str = "https://fhir.centraxx.de/extension/laborValue/choiceType";
pub const UPPER_VALUE: &str = "https://fhir.centraxx.de/extension/laborValue/upperValue";
pub const LOWER_VALUE: &str = "https://fhir.centraxx.de/extension/laborValue/lowerValue";
pub const UPPER_PRECISION: &str = "https://fhir.centraxx.de/extension/laborValue/upperPrecision";
pub const LOWER_PRECISION: &str = "https://fhir.centraxx.de/extension/laborValue/lowerPrecision";
pub const UNIT: &str = "https://fhir.centraxx.de/extension/laborValue/unit";
pub const FILE_VALUE: &str = "https://fhir.centraxx.de/extension/laborValue/fileValue";
pub const VALUE_INDEX: &str = "https://fhir.centraxx.de/extension/laborValue/valueIndex";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![
        LABORVALUETYPE,
        MIN,
        MAX,
        DATE_PRECISION,
        OBSERVATION_METHOD,
        OBSERVATION_METHODS,
        IS_DEVIANT_VALUE,
        CHOICE_TYPE,
        UPPER_VALUE,
        LOWER_VALUE,
        UPPER_PRECISION,
        LOWER_PRECISION,
        UNIT,
        FILE_VALUE,
        VALUE_INDEX,
    ];
    domains.extend(slider::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[slider::NAMESPACE],
    ..Namespace::leaf("labor_value", Some(BASE_URL), all_domains)
};

/// Slider widget bounds for numeric lab values.
pub mod slider {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/laborValue/slider";
    pub const ALIGNMENT: &str = "https://fhir.centraxx.de/extension/laborValue/slider/alignment";

    pub fn all_domains() -> Vec<&'static str> {
        vec![ALIGNMENT]
    }

    pub(crate) const NAMESPACE: Namespace = Namespace::leaf("slider", Some(BASE_URL), all_domains);
}
