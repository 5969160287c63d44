//! Sample extensions.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/sample";
pub const DERIVAL_DATE: &str = "https://fhir.centraxx.de/extension/sample/derivalDate";
pub const REPOSITION_DATE: &str = "https://fhir.centraxx.de/extension/sample/repositionDate";
pub const SAMPLE_LOCATION: &str = "https://fhir.centraxx.de/extension/sample/sampleLocation";
pub const SAMPLE_LOCATION_PATH: &str =
    "https://fhir.centraxx.de/extension/sample/sampleLocationPath";
pub const X_POSITION: &str = "https://fhir.centraxx.de/extension/sample/xPosition";
pub const Y_POSITION: &str = "https://fhir.centraxx.de/extension/sample/yPosition";
pub const ORGANIZATION_UNIT: &str = "https://fhir.centraxx.de/extension/sample/organizationUnit";
pub const CONCENTRATION: &str = "https://fhir.centraxx.de/extension/sample/concentration";
pub const EPISODE: &str = "https://fhir.centraxx.de/extension/sample/episode";
pub const PROJECT: &str = "https://fhir.centraxx.de/extension/sample/project";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![
        DERIVAL_DATE,
        REPOSITION_DATE,
        SAMPLE_LOCATION,
        SAMPLE_LOCATION_PATH,
        X_POSITION,
        Y_POSITION,
        ORGANIZATION_UNIT,
        CONCENTRATION,
        EPISODE,
        PROJECT,
    ];
    domains.extend(project::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[project::NAMESPACE],
    ..Namespace::leaf("sample", Some(BASE_URL), all_domains)
};

pub mod project {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = super::PROJECT;
    pub const NAME: &str = "https://fhir.centraxx.de/extension/sample/project/name";
    pub const ACCREDITATION_DATE: &str =
        "https://fhir.centraxx.de/extension/sample/project/accreditationDate";
    pub const PROJECT_MANAGER: &str =
        "https://fhir.centraxx.de/extension/sample/project/projectManager";
    pub const SYNOPSIS: &str = "https://fhir.centraxx.de/extension/sample/project/synopsis";
    pub const START_DATE: &str = "https://fhir.centraxx.de/extension/sample/project/startDate";
    pub const END_DATE: &str = "https://fhir.centraxx.de/extension/sample/project/endDate";
    pub const STATE: &str = "https://fhir.centraxx.de/extension/sample/project/state";
    pub const CODE: &str = "https://fhir.centraxx.de/extension/sample/project/code";
    pub const IS_SPECIAL_SAMPLEHANDLING: &str =
        "https://fhir.centraxx.de/extension/sample/project/isSpecialSampleHandling";

    pub fn all_domains() -> Vec<&'static str> {
        vec![
            NAME,
            ACCREDITATION_DATE,
            PROJECT_MANAGER,
            SYNOPSIS,
            START_DATE,
            END_DATE,
            STATE,
            CODE,
            IS_SPECIAL_SAMPLEHANDLING,
        ]
    }

    pub(crate) const NAMESPACE: Namespace = Namespace::leaf("project", Some(BASE_URL), all_domains);
}
