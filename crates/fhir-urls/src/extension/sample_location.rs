//! Sample location extensions.
//!
//! [`schema`] carries the storage schema coordinates and has a sub-extension map.

use crate::namespace::Namespace;

pub const BASE_URL: &str = super::SAMPLE_LOCATION;
pub const PATH: &str = "https://fhir.centraxx.de/extension/sampleLocation/path";
pub const SCHEMA: &str = "https://fhir.centraxx.de/extension/sampleLocation/schema";
pub const FILL_COUNT: &str = "https://fhir.centraxx.de/extension/sampleLocation/fillCount";
pub const TEMPERATURE: &str = "https://fhir.centraxx.de/extension/sampleLocation/temperature";
pub const RELOCATIONDATE: &str = "https://fhir.centraxx.de/extension/sampleLocation/relocationDate";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![PATH, SCHEMA, FILL_COUNT];
    domains.extend(schema::all_domains());
    domains.push(TEMPERATURE);
    domains.extend(temperature::all_domains());
    domains.push(RELOCATIONDATE);
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[schema::NAMESPACE, temperature::NAMESPACE],
    ..Namespace::leaf("sample_location", Some(BASE_URL), all_domains)
};

/// Position of a sample inside a storage schema.
pub mod schema {
    use std::collections::HashMap;

    use crate::{lookup, namespace::Namespace};

    pub const BASE_URL: &str = super::SCHEMA;
    pub const MAX_SIZE: &str = "https://fhir.centraxx.de/extension/sampleLocation/schema/maxSize";
    pub const HEIGHT: &str = "https://fhir.centraxx.de/extension/sampleLocation/schema/height";
    pub const WIDTH: &str = "https://fhir.centraxx.de/extension/sampleLocation/schema/width";
    pub const UNLIMITED: &str =
        "https://fhir.centraxx.de/extension/sampleLocation/schema/unlimited";
    pub const STORABLE: &str = "https://fhir.centraxx.de/extension/sampleLocation/schema/storable";

    pub fn all_domains() -> Vec<&'static str> {
        vec![MAX_SIZE, HEIGHT, WIDTH, UNLIMITED, STORABLE]
    }

    /// URLs the short name map is built from.
    pub fn sub_extension_urls() -> Vec<&'static str> {
        all_domains()
    }

    pub fn sub_extensions() -> HashMap<&'static str, &'static str> {
        lookup::sub_extensions(sub_extension_urls())
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("schema", Some(BASE_URL), all_domains)
            .with_sub_extensions(sub_extension_urls);
}

pub mod temperature {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = super::TEMPERATURE;
    pub const VALUE: &str = "https://fhir.centraxx.de/extension/sampleLocation/temperature/value";
    pub const INHERIT_TEMPERATURE: &str =
        "https://fhir.centraxx.de/extension/sampleLocation/temperature/inheritToChildren";

    pub fn all_domains() -> Vec<&'static str> {
        vec![VALUE, INHERIT_TEMPERATURE]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("temperature", Some(BASE_URL), all_domains);
}
