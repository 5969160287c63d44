//! Service request extensions.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/serviceRequest";
pub const LABOR_MAPPINGS: &str = "https://fhir.centraxx.de/extension/serviceRequest/laborMappings";
pub const STATUS: &str = "https://fhir.centraxx.de/extension/serviceRequest/status";
pub const REQUESTER: &str = "https://fhir.centraxx.de/extension/serviceRequest/requester";

pub fn all_domains() -> Vec<&'static str> {
    vec![
        LABOR_MAPPINGS,
        labor_mappings::LABOR_MAPPING,
        STATUS,
        status::CURRENT_STATUS,
        status::LAST_STATUS_TRANSITION,
        REQUESTER,
    ]
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[labor_mappings::NAMESPACE, status::NAMESPACE],
    ..Namespace::leaf("service_request", Some(BASE_URL), all_domains)
};

pub mod labor_mappings {
    use std::collections::HashMap;

    use crate::{lookup, namespace::Namespace};

    pub const BASE_URL: &str = super::LABOR_MAPPINGS;
    pub const LABOR_MAPPING: &str =
        "https://fhir.centraxx.de/extension/serviceRequest/laborMappings/laborMapping";

    pub fn all_domains() -> Vec<&'static str> {
        vec![LABOR_MAPPING]
    }

    /// URLs the short name map is built from.
    pub fn sub_extension_urls() -> Vec<&'static str> {
        vec![LABOR_MAPPING]
    }

    pub fn sub_extensions() -> HashMap<&'static str, &'static str> {
        lookup::sub_extensions(sub_extension_urls())
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("labor_mappings", Some(BASE_URL), all_domains)
            .with_sub_extensions(sub_extension_urls);
}

/// Workflow status of a service request.
pub mod status {
    use std::collections::HashMap;

    use crate::{lookup, namespace::Namespace};

    pub const BASE_URL: &str = super::STATUS;
    pub const CURRENT_STATUS: &str =
        "https://fhir.centraxx.de/extension/serviceRequest/status/currentStatus";
    pub const LAST_STATUS_TRANSITION: &str =
        "https://fhir.centraxx.de/extension/serviceRequest/status/lastStatusTransition";

    pub fn all_domains() -> Vec<&'static str> {
        vec![CURRENT_STATUS, LAST_STATUS_TRANSITION]
    }

    /// URLs the short name map is built from.
    pub fn sub_extension_urls() -> Vec<&'static str> {
        vec![CURRENT_STATUS, LAST_STATUS_TRANSITION]
    }

    pub fn sub_extensions() -> HashMap<&'static str, &'static str> {
        lookup::sub_extensions(sub_extension_urls())
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("status", Some(BASE_URL), all_domains)
            .with_sub_extensions(sub_extension_urls);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_maps_only_cover_their_children() {
        let mappings = labor_mappings::sub_extensions();
        assert_eq!(mappings.len(), 1);
        assert_eq!(mappings["laborMapping"], labor_mappings::LABOR_MAPPING);

        let status = status::sub_extensions();
        assert_eq!(status["lastStatusTransition"], status::LAST_STATUS_TRANSITION);
        assert!(!status.contains_key("requester"));
    }
}
