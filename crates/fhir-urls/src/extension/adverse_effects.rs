use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/adverseEffects";
pub const RELATED: &str = "https://fhir.centraxx.de/extension/adverseEffects/related";
pub const KIND: &str = "https://fhir.centraxx.de/extension/adverseEffects/kind";
pub const COMMENTS: &str = "https://fhir.centraxx.de/extension/adverseEffects/comments";
pub const GRADE: &str = "https://fhir.centraxx.de/extension/adverseEffects/grade";
pub const VERSION: &str = "https://fhir.centraxx.de/extension/adverseEffects/version";

pub fn all_domains() -> Vec<&'static str> {
    vec![RELATED, KIND, COMMENTS, GRADE, VERSION]
}

pub(crate) const NAMESPACE: Namespace =
    Namespace::leaf("adverse_effects", Some(BASE_URL), all_domains);
