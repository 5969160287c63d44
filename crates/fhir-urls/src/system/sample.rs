//! Sample identifier systems and sample code systems.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/sample";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/sample";

pub fn all_domains() -> Vec<&'static str> {
    NAMESPACE
        .children()
        .iter()
        .flat_map(Namespace::all_domains)
        .collect()
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[
        sample_type::NAMESPACE,
        receptacle::NAMESPACE,
        sample_donator::NAMESPACE,
        sample_partner::NAMESPACE,
        sampling_moment::NAMESPACE,
        project::NAMESPACE,
        sample_kind::NAMESPACE,
        sample_localisation::NAMESPACE,
    ],
    ..Namespace::leaf("sample", Some(BASE_URL), all_domains)
};

code_system!(sample_type => "sample/sampleType");
code_system!(receptacle => "sample/sampleReceptacle");

pub mod sample_donator {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/sample/sampleDonator";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("sample_donator", Some(BASE_URL), all_domains);
}

pub mod sample_partner {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/sample/samplePartner";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("sample_partner", Some(BASE_URL), all_domains);
}

pub mod sampling_moment {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/sample/samplingMoment";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("sampling_moment", Some(BASE_URL), all_domains);
}

pub mod project {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/sample/project";
    pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/sample/project";

    pub fn all_domains() -> Vec<&'static str> {
        let mut domains = vec![BASE_URL, BASE_URL_VALUESET];
        domains.extend(project_state::all_domains());
        domains
    }

    pub(crate) const NAMESPACE: Namespace = Namespace {
        children: &[project_state::NAMESPACE],
        ..Namespace::leaf("project", Some(BASE_URL), all_domains)
    };

    code_system!(project_state => "sample/project/projectState");
}

/// Sample kinds (derivative, aliquot group, master sample).
pub mod sample_kind {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/sample/sampleKind";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("sample_kind", Some(BASE_URL), all_domains);
}

pub mod sample_localisation {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/sample/sampleLocalisation";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("sample_localisation", Some(BASE_URL), all_domains);
}
