//! Patient extensions, including ethnicity and name parts.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/patient";
pub const ETHNICITIES: &str = "https://fhir.centraxx.de/extension/patient/ethnicities";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![ETHNICITIES];
    domains.extend(ethnicities::all_domains());
    domains.extend(name::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[ethnicities::NAMESPACE, name::NAMESPACE],
    ..Namespace::leaf("patient", Some(BASE_URL), all_domains)
};

/// Ethnicity list attached to a patient.
pub mod ethnicities {
    use std::collections::HashMap;

    use crate::{lookup, namespace::Namespace};

    pub const BASE_URL: &str = super::ETHNICITIES;
    pub const ETHNICITY: &str = "https://fhir.centraxx.de/extension/patient/ethnicities/ethnicity";
    pub const ETHNICITY_OVERRIDE: &str =
        "https://fhir.centraxx.de/extension/patient/ethnicities/override";

    pub fn all_domains() -> Vec<&'static str> {
        vec![ETHNICITY, ETHNICITY_OVERRIDE]
    }

    /// URLs the short name map is built from.
    pub fn sub_extension_urls() -> Vec<&'static str> {
        all_domains()
    }

    pub fn sub_extensions() -> HashMap<&'static str, &'static str> {
        lookup::sub_extensions(sub_extension_urls())
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("ethnicities", Some(BASE_URL), all_domains)
            .with_sub_extensions(sub_extension_urls);
}

/// Name parts beyond the FHIR `HumanName` fields.
pub mod name {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/patient/name";
    pub const TITLE: &str = "https://fhir.centraxx.de/extension/patient/name/title";
    pub const AFFIX: &str = "https://fhir.centraxx.de/extension/patient/name/affix";

    pub fn all_domains() -> Vec<&'static str> {
        vec![AFFIX, TITLE]
    }

    pub(crate) const NAMESPACE: Namespace = Namespace::leaf("name", Some(BASE_URL), all_domains);
}
