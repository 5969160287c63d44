//! SPREC sample processing extensions.
//!
//! The Standard PREanalytical Code describes how a specimen was collected and
//! processed. These constants are the extension URLs used for each SPREC field
//! on a CentraXX sample, keyed by their last path segment in [`sub_extensions`].

use std::collections::HashMap;

use crate::{lookup, namespace::Namespace};

pub const BASE_URL: &str = super::SPREC;
pub const USE_SPREC: &str = "https://fhir.centraxx.de/extension/sprec/useSprec";
pub const SPREC_CODE: &str = "https://fhir.centraxx.de/extension/sprec/sprecCode";
pub const SPREC_TISSUE_COLLECTION_TYPE: &str =
    "https://fhir.centraxx.de/extension/sprec/tissueCollectionType";
pub const WARM_ISCH_TIME: &str = "https://fhir.centraxx.de/extension/sprec/warmIschTime";
pub const WARM_ISCH_TIME_DATE: &str = "https://fhir.centraxx.de/extension/sprec/warmIschTimeDate";
pub const COLD_ISCH_TIME: &str = "https://fhir.centraxx.de/extension/sprec/coldIschTime";
pub const COLD_ISCH_TIME_DATE: &str = "https://fhir.centraxx.de/extension/sprec/coldIschTimeDate";
pub const STOCK_TYPE: &str = "https://fhir.centraxx.de/extension/sprec/stockType";
pub const SPREC_FIXATION_TIME: &str = "https://fhir.centraxx.de/extension/sprec/fixationTime";
pub const SPREC_FIXATION_TIME_DATE: &str =
    "https://fhir.centraxx.de/extension/sprec/fixationTimeDate";
pub const SPREC_PRIMARY_SAMPLE_CONTAINER: &str =
    "https://fhir.centraxx.de/extension/sprec/primarySampleContainer";
pub const SPREC_PRE_CENTRIFUGATION_DELAY: &str =
    "https://fhir.centraxx.de/extension/sprec/preCentrifugationDelay";
pub const SPREC_PRE_CENTRIFUGATION_DELAY_DATE: &str =
    "https://fhir.centraxx.de/extension/sprec/preCentrifugationDelayDate";
pub const SPREC_POST_CENTRIFUGATION_DELAY: &str =
    "https://fhir.centraxx.de/extension/sprec/postCentrifugationDelay";
pub const SPREC_POST_CENTRIFUGATION_DELAY_DATE: &str =
    "https://fhir.centraxx.de/extension/sprec/postCentrifugationDelayDate";
pub const STOCK_PROCESSING: &str = "https://fhir.centraxx.de/extension/sprec/stockProcessing";
pub const STOCK_PROCESSING_DATE: &str =
    "https://fhir.centraxx.de/extension/sprec/stockProcessingDate";
pub const SECOND_PROCESSING: &str = "https://fhir.centraxx.de/extension/sprec/secondProcessing";
pub const SECOND_PROCESSING_DATE: &str =
    "https://fhir.centraxx.de/extension/sprec/secondProcessingDate";

pub fn all_domains() -> Vec<&'static str> {
    vec![
        USE_SPREC,
        SPREC_CODE,
        SPREC_TISSUE_COLLECTION_TYPE,
        WARM_ISCH_TIME,
        WARM_ISCH_TIME_DATE,
        COLD_ISCH_TIME,
        COLD_ISCH_TIME_DATE,
        STOCK_TYPE,
        SPREC_FIXATION_TIME,
        SPREC_FIXATION_TIME_DATE,
        SPREC_PRIMARY_SAMPLE_CONTAINER,
        SPREC_PRE_CENTRIFUGATION_DELAY,
        SPREC_PRE_CENTRIFUGATION_DELAY_DATE,
        SPREC_POST_CENTRIFUGATION_DELAY,
        SPREC_POST_CENTRIFUGATION_DELAY_DATE,
        STOCK_PROCESSING,
        STOCK_PROCESSING_DATE,
        SECOND_PROCESSING,
        SECOND_PROCESSING_DATE,
    ]
}

/// URLs the short name map is built from.
pub fn sub_extension_urls() -> Vec<&'static str> {
    all_domains()
}

pub fn sub_extensions() -> HashMap<&'static str, &'static str> {
    lookup::sub_extensions(sub_extension_urls())
}

pub(crate) const NAMESPACE: Namespace =
    Namespace::leaf("sprec", Some(BASE_URL), all_domains)
        .with_sub_extensions(sub_extension_urls);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_domains_lists_every_sprec_field() {
        let domains = all_domains();
        assert_eq!(domains.len(), 19);
        assert!(domains.contains(&"https://fhir.centraxx.de/extension/sprec/warmIschTime"));
        assert!(domains.contains(&"https://fhir.centraxx.de/extension/sprec/coldIschTimeDate"));
    }

    #[test]
    fn test_constants_extend_base_url() {
        assert_eq!(BASE_URL, "https://fhir.centraxx.de/extension/sprec");
        assert_eq!(WARM_ISCH_TIME, format!("{BASE_URL}/warmIschTime"));
        assert_eq!(SPREC_FIXATION_TIME, format!("{BASE_URL}/fixationTime"));
        for url in all_domains() {
            let segment = url.strip_prefix(BASE_URL).expect("sprec prefix");
            assert!(segment.starts_with('/') && segment.len() > 1, "{url}");
            assert!(!segment[1..].contains('/'), "{url}");
        }
    }

    #[test]
    fn test_sub_extensions_resolve_short_names() {
        let map = sub_extensions();
        assert_eq!(map.len(), 19);
        assert_eq!(map["tissueCollectionType"], SPREC_TISSUE_COLLECTION_TYPE);
        assert_eq!(map["secondProcessingDate"], SECOND_PROCESSING_DATE);
    }
}
