//! StructureDefinition URLs for CentraXX FHIR extensions.
//!
//! Every constant here is the `url` of an `Extension` element as it appears on the
//! wire. Submodules follow the CentraXX entity they decorate.

pub mod adverse_effects;
pub mod calendar;
pub mod consent;
pub mod contact_address;
pub mod crf;
pub mod crf_template;
pub mod document;
pub mod gtds_therapy;
pub mod labor_mapping;
pub mod labor_value;
pub mod measurement_series;
pub mod medication;
pub mod patient;
pub mod patient_insurance;
pub mod patient_transfer;
pub mod radiation_component;
pub mod sample;
pub mod sample_location;
pub mod service_request;
pub mod sprec;
pub mod study;
pub mod survey;
pub mod task;
pub mod tumor;

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension";
pub const SAMPLE_LOCATION: &str = "https://fhir.centraxx.de/extension/sampleLocation";
pub const SPREC: &str = "https://fhir.centraxx.de/extension/sprec";
pub const SAMPLE_CATEGORY: &str = "https://fhir.centraxx.de/extension/sampleCategory";
pub const LABOR_MAPPING: &str = "https://fhir.centraxx.de/extension/laborMapping";
pub const CREATE_MASTER_DATA: &str = "https://fhir.centraxx.de/extension/createMasterData";
/// Marks an update that replaces existing values instead of merging them.
pub const UPDATE_WITH_OVERWRITE: &str = "https://fhir.centraxx.de/extension/updateWithOverwrite";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![
        SAMPLE_LOCATION,
        SPREC,
        SAMPLE_CATEGORY,
        LABOR_MAPPING,
        UPDATE_WITH_OVERWRITE,
        CREATE_MASTER_DATA,
    ];
    domains.extend(patient::all_domains());
    domains.extend(sprec::all_domains());
    domains.extend(study::all_domains());
    domains.extend(survey::all_domains());
    domains.extend(crf_template::all_domains());
    domains.extend(labor_value::all_domains());
    domains.extend(hotline::all_domains());
    domains.extend(sample::all_domains());
    domains.extend(medication::all_domains());
    domains.extend(consent::all_domains());
    domains.extend(consent::revocation::all_domains());
    domains.extend(calendar::all_domains());
    domains.extend(task::all_domains());
    domains.extend(crf::all_domains());
    domains.extend(study_visit_item::all_domains());
    domains.extend(document::all_domains());
    domains.extend(service_request::all_domains());
    domains.extend(labor_mapping::all_domains());
    domains.extend(sample_location::all_domains());
    domains.extend(translation::all_domains());
    domains.extend(flexi_flag_item::all_domains());
    domains.extend(tumor::all_domains());
    domains.extend(histology::all_domains());
    domains.extend(catalogs::all_domains());
    domains.extend(contact_address::all_domains());
    domains.extend(radiation_target::all_domains());
    domains.extend(patient_transfer::all_domains());
    domains.extend(follow_disease::all_domains());
    domains.extend(gtds_therapy::all_domains());
    domains.extend(gtds_therapy::surgery::all_domains());
    domains.extend(gtds_therapy::radiation_therapy::all_domains());
    domains.extend(gtds_therapy::system_therapy::all_domains());
    domains.extend(radiation_component::all_domains());
    domains.extend(surgery_component::all_domains());
    domains.extend(preexisting_illness::all_domains());
    domains.extend(death_cause::all_domains());
    domains.extend(adverse_effects::all_domains());
    domains.extend(study_member::all_domains());
    domains.extend(fhir_defaults::all_domains());
    domains.extend(patient_insurance::all_domains());
    domains.extend(med_procedure::all_domains());
    domains.extend(diagnosis::all_domains());
    domains.extend(labor_method::all_domains());
    domains.extend(measurement_series::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[
        measurement_series::NAMESPACE,
        sample::NAMESPACE,
        labor_method::NAMESPACE,
        med_procedure::NAMESPACE,
        diagnosis::NAMESPACE,
        contact_address::NAMESPACE,
        patient_insurance::NAMESPACE,
        flexi_flag_item::NAMESPACE,
        radiation_target::NAMESPACE,
        adverse_effects::NAMESPACE,
        histology::NAMESPACE,
        tumor::NAMESPACE,
        follow_disease::NAMESPACE,
        gtds_therapy::NAMESPACE,
        radiation_component::NAMESPACE,
        surgery_component::NAMESPACE,
        preexisting_illness::NAMESPACE,
        death_cause::NAMESPACE,
        patient::NAMESPACE,
        patient_transfer::NAMESPACE,
        medication::NAMESPACE,
        study::NAMESPACE,
        survey::NAMESPACE,
        study_visit_item::NAMESPACE,
        sprec::NAMESPACE,
        crf_template::NAMESPACE,
        crf::NAMESPACE,
        labor_value::NAMESPACE,
        hotline::NAMESPACE,
        consent::NAMESPACE,
        document::NAMESPACE,
        calendar::NAMESPACE,
        task::NAMESPACE,
        service_request::NAMESPACE,
        labor_mapping::NAMESPACE,
        sample_location::NAMESPACE,
        translation::NAMESPACE,
        catalogs::NAMESPACE,
        study_member::NAMESPACE,
        fhir_defaults::NAMESPACE,
    ],
    ..Namespace::leaf("extension", Some(BASE_URL), all_domains)
};

pub mod labor_method {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/laborMethod";
    pub const PARENT: &str = "https://fhir.centraxx.de/extension/laborMethod/parent";

    pub fn all_domains() -> Vec<&'static str> {
        vec![PARENT]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("labor_method", Some(BASE_URL), all_domains);
}

pub mod med_procedure {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/medProcedure";
    pub const PROCEDURE_STATUS_PLANNED: &str =
        "https://fhir.centraxx.de/extension/medProcedure/status/planned";

    pub fn all_domains() -> Vec<&'static str> {
        vec![PROCEDURE_STATUS_PLANNED]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("med_procedure", Some(BASE_URL), all_domains);
}

/// Diagnosis extensions.
///
/// [`ATTESTATION_DATE`](diagnosis::ATTESTATION_DATE) is rooted directly under `/extension`.
pub mod diagnosis {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/diagnosis";
    pub const ATTESTATION_DATE: &str = "https://fhir.centraxx.de/extension/attestationDate";

    pub fn all_domains() -> Vec<&'static str> {
        vec![ATTESTATION_DATE]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("diagnosis", Some(BASE_URL), all_domains);
}

pub mod flexi_flag_item {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/flexiFlagItem";
    pub const COMMENTS: &str = "https://fhir.centraxx.de/extension/flexiFlagItem/comments";
    pub const FLAG_PRIVATE: &str = "https://fhir.centraxx.de/extension/flexiFlagItem/flagPrivate";

    pub fn all_domains() -> Vec<&'static str> {
        vec![COMMENTS, FLAG_PRIVATE]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("flexi_flag_item", Some(BASE_URL), all_domains);
}

pub mod radiation_target {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/radiationTarget";
    pub const RADIATION_COMPONENT: &str =
        "https://fhir.centraxx.de/extension/radiationTarget/radiationComponent";

    pub fn all_domains() -> Vec<&'static str> {
        vec![RADIATION_COMPONENT]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("radiation_target", Some(BASE_URL), all_domains);
}

pub mod histology {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/histology";
    pub const SOURCEDICT: &str = "https://fhir.centraxx.de/extension/histology/sourceDict";

    pub fn all_domains() -> Vec<&'static str> {
        vec![SOURCEDICT]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("histology", Some(BASE_URL), all_domains);
}

pub mod follow_disease {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/followDisease";
    pub const VERSION: &str = "https://fhir.centraxx.de/extension/followDisease/version";
    pub const GRADE: &str = "https://fhir.centraxx.de/extension/followDisease/grade";
    pub const FOLLOWDISEASEKINDDICT: &str =
        "https://fhir.centraxx.de/extension/followDisease/followDiseaseKindDict";

    pub fn all_domains() -> Vec<&'static str> {
        vec![VERSION, GRADE, FOLLOWDISEASEKINDDICT]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("follow_disease", Some(BASE_URL), all_domains);
}

pub mod surgery_component {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/surgeryComponent";
    pub const COMPLICATIONS: &str =
        "https://fhir.centraxx.de/extension/surgeryComponent/complications";

    pub fn all_domains() -> Vec<&'static str> {
        vec![COMPLICATIONS]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("surgery_component", Some(BASE_URL), all_domains);
}

pub mod preexisting_illness {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/preexistingIllness";
    pub const VERSION: &str = "https://fhir.centraxx.de/extension/preexistingIllness/version";

    pub fn all_domains() -> Vec<&'static str> {
        vec![VERSION]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("preexisting_illness", Some(BASE_URL), all_domains);
}

pub mod death_cause {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/deathCause";
    pub const QUALIFICATOR: &str = "https://fhir.centraxx.de/extension/deathCause/qualificator";

    pub fn all_domains() -> Vec<&'static str> {
        vec![QUALIFICATOR]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("death_cause", Some(BASE_URL), all_domains);
}

pub mod study_visit_item {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/studyVisitItem";
    pub const APPROVAL_STATE: &str =
        "https://fhir.centraxx.de/extension/studyVisitItem/approvalState";

    pub fn all_domains() -> Vec<&'static str> {
        vec![APPROVAL_STATE]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("study_visit_item", Some(BASE_URL), all_domains);
}

/// Hotline call extensions.
pub mod hotline {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/hotline";
    pub const IS_APP: &str = "https://fhir.centraxx.de/extension/hotline/app";

    pub fn all_domains() -> Vec<&'static str> {
        vec![IS_APP]
    }

    pub(crate) const NAMESPACE: Namespace = Namespace::leaf("hotline", Some(BASE_URL), all_domains);
}

/// The HL7 `translation` extension.
///
/// [`LANG`](translation::LANG) and [`CONTENT`](translation::CONTENT) are the relative
/// sub-extension names, not absolute URLs.
pub mod translation {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "http://hl7.org/fhir/StructureDefinition/translation";
    pub const LANG: &str = "lang";
    pub const CONTENT: &str = "content";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, LANG, CONTENT]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("translation", Some(BASE_URL), all_domains);
}

pub mod catalogs {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/catalogs";
    pub const CATALOG_USAGE: &str = "https://fhir.centraxx.de/extension/catalogs/usage";
    pub const MASTER_DATA_CATALOG_TYPE: &str =
        "https://fhir.centraxx.de/extension/catalogs/masterDataCatalogType";

    pub fn all_domains() -> Vec<&'static str> {
        vec![CATALOG_USAGE, MASTER_DATA_CATALOG_TYPE]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("catalogs", Some(BASE_URL), all_domains);
}

pub mod study_member {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/studyMember";
    pub const STUDY_CENTER: &str = "https://fhir.centraxx.de/extension/studyMember/studyCenter";

    pub fn all_domains() -> Vec<&'static str> {
        vec![STUDY_CENTER]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("study_member", Some(BASE_URL), all_domains);
}

/// Extensions defined by HL7 rather than CentraXX.
pub mod fhir_defaults {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "http://hl7.org/fhir/StructureDefinition";
    /// Why a value is missing, for elements that would otherwise be required.
    pub const DATA_ABSENT_REASON: &str =
        "http://hl7.org/fhir/StructureDefinition/data-absent-reason";

    pub fn all_domains() -> Vec<&'static str> {
        vec![DATA_ABSENT_REASON]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("fhir_defaults", Some(BASE_URL), all_domains);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_domains_starts_with_own_constants() {
        let domains = all_domains();
        assert_eq!(
            domains[..6],
            [
                SAMPLE_LOCATION,
                SPREC,
                SAMPLE_CATEGORY,
                LABOR_MAPPING,
                UPDATE_WITH_OVERWRITE,
                CREATE_MASTER_DATA,
            ]
        );
        assert!(domains.contains(&sprec::WARM_ISCH_TIME));
        assert!(domains.contains(&study::visits::visit::VISIT_NAME));
    }

    #[test]
    fn test_attestation_date_is_not_under_diagnosis() {
        assert_eq!(diagnosis::ATTESTATION_DATE, format!("{BASE_URL}/attestationDate"));
        assert!(!diagnosis::ATTESTATION_DATE.starts_with(diagnosis::BASE_URL));
    }

    #[test]
    fn test_translation_names_are_relative() {
        assert_eq!(translation::BASE_URL, "http://hl7.org/fhir/StructureDefinition/translation");
        assert_eq!(translation::LANG, "lang");
        assert_eq!(translation::CONTENT, "content");
    }

    #[test]
    fn test_nested_base_urls_chain() {
        assert_eq!(study::visits::BASE_URL, study::VISITS);
        assert_eq!(study::visits::visit::BASE_URL, study::visits::VISIT);
        assert_eq!(study::visits::VISIT, format!("{}/visit", study::VISITS));
        assert_eq!(patient::name::TITLE, format!("{}/title", patient::name::BASE_URL));
        assert_eq!(sprec::BASE_URL, SPREC);
    }

    #[test]
    fn test_child_domains_are_all_listed() {
        let declared = all_domains();
        for child in NAMESPACE.children() {
            for url in child.all_domains() {
                assert!(declared.contains(&url), "{}: {url}", child.name());
            }
        }
    }
}
