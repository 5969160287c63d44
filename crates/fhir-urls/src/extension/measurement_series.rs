//! Measurement series extensions.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/measurementSeries";
pub const DEFINITION: &str = "https://fhir.centraxx.de/extension/measurementSeries/definition";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = measurement_series_definition::all_domains();
    domains.push(DEFINITION);
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[measurement_series_definition::NAMESPACE],
    ..Namespace::leaf("measurement_series", Some(BASE_URL), all_domains)
};

pub mod measurement_series_definition {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = super::DEFINITION;
    pub const LABOR_VALUE: &str =
        "https://fhir.centraxx.de/extension/measurementSeries/definition/laborValue";

    pub fn all_domains() -> Vec<&'static str> {
        vec![LABOR_VALUE]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("measurement_series_definition", Some(BASE_URL), all_domains);
}
