//! Episode identifier systems.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/episode";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/episode";
pub const CXX_EPISODE_ID: &str = "https://fhir.centraxx.de/system/episode/centraxxEpisodeId";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![CXX_EPISODE_ID];
    domains.extend(stay_type::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[stay_type::NAMESPACE],
    ..Namespace::leaf("episode", Some(BASE_URL), all_domains)
};

code_system!(stay_type => "episode/stayType");
