//! SPREC code systems.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/sprec";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/sprec";

pub fn all_domains() -> Vec<&'static str> {
    NAMESPACE
        .children()
        .iter()
        .flat_map(Namespace::all_domains)
        .collect()
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[
        fixation_time::NAMESPACE,
        stock_type::NAMESPACE,
        cold_isch_time::NAMESPACE,
        warm_isch_time::NAMESPACE,
        tissue_collection_type::NAMESPACE,
        second_processing::NAMESPACE,
        stock_processing::NAMESPACE,
        post_centrifugation_delay::NAMESPACE,
        pre_centrifugation_delay::NAMESPACE,
        primary_sample_container::NAMESPACE,
    ],
    ..Namespace::leaf("sprec", Some(BASE_URL), all_domains)
};

code_system!(fixation_time => "sprec/fixationTime");
code_system!(stock_type => "sprec/stockType");
code_system!(cold_isch_time => "sprec/coldIschTime");
code_system!(warm_isch_time => "sprec/warmIschTime");
code_system!(tissue_collection_type => "sprec/tissueCollectionType");
code_system!(second_processing => "sprec/secondProcessing");
code_system!(stock_processing => "sprec/stockProcessing");
code_system!(post_centrifugation_delay => "sprec/postCentrifugationDelay");
code_system!(pre_centrifugation_delay => "sprec/preCentrifugationDelay");
code_system!(primary_sample_container => "sprec/primarySampleContainer");
