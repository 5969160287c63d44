use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/measurementSeries";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/measurementSeries";
pub const SERIES_ID: &str = "https://fhir.centraxx.de/system/measurementSeries/seriesId";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![SERIES_ID];
    domains.extend(measurement_series_definition::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[measurement_series_definition::NAMESPACE],
    ..Namespace::leaf("measurement_series", Some(BASE_URL), all_domains)
};

code_system!(measurement_series_definition => "measurementSeries/measureSeriesDefinition");
