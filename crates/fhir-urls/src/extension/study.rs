//! Study, visit, phase and schedule extensions.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/study";
pub const PHASES: &str = "https://fhir.centraxx.de/extension/study/phases";
pub const VISITS: &str = "https://fhir.centraxx.de/extension/study/visits";
pub const STATUS: &str = "https://fhir.centraxx.de/extension/study/status";
pub const STUDY_REGISTER_STATUS: &str =
    "https://fhir.centraxx.de/extension/study/studyRegisterStatus";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![PHASES, VISITS, STATUS, STUDY_REGISTER_STATUS];
    domains.extend(visits::all_domains());
    domains.extend(phases::all_domains());
    domains.extend(schedule::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[visits::NAMESPACE, phases::NAMESPACE, phase::NAMESPACE, schedule::NAMESPACE],
    ..Namespace::leaf("study", Some(BASE_URL), all_domains)
};

pub mod visits {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = super::VISITS;
    pub const VISIT: &str = "https://fhir.centraxx.de/extension/study/visits/visit";

    pub fn all_domains() -> Vec<&'static str> {
        vec![VISIT, visit::VISIT_NAME, visit::VISIT_COPYVISITS]
    }

    pub(crate) const NAMESPACE: Namespace = Namespace {
        children: &[visit::NAMESPACE],
        ..Namespace::leaf("visits", Some(BASE_URL), all_domains)
    };

    pub mod visit {
        use crate::namespace::Namespace;

        pub const BASE_URL: &str = super::VISIT;
        pub const VISIT_NAME: &str = "https://fhir.centraxx.de/extension/study/visits/visit/name";
        pub const VISIT_COPYVISITS: &str =
            "https://fhir.centraxx.de/extension/study/visits/visit/copyVisits";

        pub fn all_domains() -> Vec<&'static str> {
            vec![VISIT_NAME, VISIT_COPYVISITS]
        }

        pub(crate) const NAMESPACE: Namespace =
            Namespace::leaf("visit", Some(BASE_URL), all_domains);
    }
}

pub mod phases {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = super::PHASES;
    pub const PHASE: &str = "https://fhir.centraxx.de/extension/study/phases/phase";

    pub fn all_domains() -> Vec<&'static str> {
        vec![PHASE, super::phase::PHASE_NAME, super::phase::PHASE_DESCRIPTION]
    }

    pub(crate) const NAMESPACE: Namespace = Namespace::leaf("phases", Some(BASE_URL), all_domains);
}

pub mod phase {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = super::phases::PHASE;
    pub const PHASE_NAME: &str = "https://fhir.centraxx.de/extension/study/phases/phase/name";
    pub const PHASE_DESCRIPTION: &str =
        "https://fhir.centraxx.de/extension/study/phases/phase/description";

    pub fn all_domains() -> Vec<&'static str> {
        vec![PHASE_NAME, PHASE_DESCRIPTION]
    }

    pub(crate) const NAMESPACE: Namespace = Namespace::leaf("phase", Some(BASE_URL), all_domains);
}

/// Study schedule items, keyed by their last path segment.
pub mod schedule {
    use std::collections::HashMap;

    use crate::{lookup, namespace::Namespace};

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/study/schedule";
    pub const MIN: &str = "https://fhir.centraxx.de/extension/study/schedule/min";
    pub const MAX: &str = "https://fhir.centraxx.de/extension/study/schedule/max";
    pub const UNDEFINED: &str = "https://fhir.centraxx.de/extension/study/schedule/undefined";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, MIN, MAX, UNDEFINED]
    }

    /// URLs the short name map is built from.
    pub fn sub_extension_urls() -> Vec<&'static str> {
        all_domains()
    }

    pub fn sub_extensions() -> HashMap<&'static str, &'static str> {
        lookup::sub_extensions(sub_extension_urls())
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("schedule", Some(BASE_URL), all_domains)
            .with_sub_extensions(sub_extension_urls);
}
