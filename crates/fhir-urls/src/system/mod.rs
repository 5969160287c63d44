//! CodeSystem and identifier system URLs.
//!
//! Most CentraXX code systems come in pairs: the system URL under `/system/...`
//! and the matching value set under `/valueSet/...`. Modules that only carry that
//! pair are generated with `code_system!`.

/// Declares a code system module holding the `/system/` URL and its `/valueSet/` twin.
macro_rules! code_system {
    ($module:ident => $path:literal) => {
        pub mod $module {
            use $crate::namespace::Namespace;

            pub const BASE_URL: &str = concat!("https://fhir.centraxx.de/system/", $path);
            pub const BASE_URL_VALUESET: &str =
                concat!("https://fhir.centraxx.de/valueSet/", $path);

            pub fn all_domains() -> Vec<&'static str> {
                vec![BASE_URL, BASE_URL_VALUESET]
            }

            pub(crate) const NAMESPACE: Namespace =
                Namespace::leaf(stringify!($module), Some(BASE_URL), all_domains);
        }
    };
}

pub mod calendar;
pub mod catalogs;
pub mod consent;
pub mod contact_address;
pub mod crf_template;
pub mod document;
pub mod episode;
pub mod finding;
pub mod flexi_flag_item;
pub mod gtds;
pub mod hotline;
pub mod labor_method;
pub mod labor_value;
pub mod measurement_series;
pub mod medication;
pub mod patient;
pub mod sample;
pub mod service_request;
pub mod sprec;
pub mod study;
pub mod study_visit_item;
pub mod task;

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet";
pub const CXX_ENTITY: &str = "https://fhir.centraxx.de/system/cxxEntity";
pub const STAY_TYPE: &str = "https://fhir.centraxx.de/system/stayType";
pub const LABOR_MAPPING: &str = "https://fhir.centraxx.de/system/laborMapping";
pub const LOCATION_TYPE: &str = "https://fhir.centraxx.de/system/locationType";
pub const ORGANIZATION_UNIT: &str = "https://fhir.centraxx.de/system/organizationUnit";
pub const INSURANCE_COMPANY: &str = "https://fhir.centraxx.de/system/insuranceCompany";
pub const STRING: &str = "https://fhir.centraxx.de/string";
pub const INTEGER: &str = "https://fhir.centraxx.de/integer";
pub const DECIMAL: &str = "https://fhir.centraxx.de/decimal";
pub const DATE: &str = "https://fhir.centraxx.de/date";
pub const BOOLEAN: &str = "https://fhir.centraxx.de/boolean";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![
        CXX_ENTITY,
        STAY_TYPE,
        LABOR_MAPPING,
        LOCATION_TYPE,
        ORGANIZATION_UNIT,
        INSURANCE_COMPANY,
        STRING,
        INTEGER,
        DECIMAL,
        DATE,
        BOOLEAN,
    ];
    domains.extend(NAMESPACE.children().iter().flat_map(Namespace::all_domains));
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[
        fhir_defaults::NAMESPACE,
        amount_unit::NAMESPACE,
        insurance_relationship::NAMESPACE,
        measurement_series::NAMESPACE,
        med_procedure::NAMESPACE,
        country_state::NAMESPACE,
        med_department::NAMESPACE,
        tumor::NAMESPACE,
        histology::NAMESPACE,
        tnm::NAMESPACE,
        ann_arbor::NAMESPACE,
        other_classification::NAMESPACE,
        progress::NAMESPACE,
        metastasis::NAMESPACE,
        tumor_mamma_diagnosis::NAMESPACE,
        tumor_localization::NAMESPACE,
        council_patient::NAMESPACE,
        follow_disease::NAMESPACE,
        surgery::NAMESPACE,
        radiation_therapy::NAMESPACE,
        system_therapy::NAMESPACE,
        radiation_component::NAMESPACE,
        surgery_component::NAMESPACE,
        complications::NAMESPACE,
        gtds::NAMESPACE,
        episode::NAMESPACE,
        crf::NAMESPACE,
        sample_category::NAMESPACE,
        abstraction_reason::NAMESPACE,
        contact_address::NAMESPACE,
        labor_method::NAMESPACE,
        id_container_type::NAMESPACE,
        flexi_flag_item::NAMESPACE,
        radiation_target::NAMESPACE,
        adverse_effects::NAMESPACE,
        patient::NAMESPACE,
        study::NAMESPACE,
        sprec::NAMESPACE,
        crf_template::NAMESPACE,
        study_profile::NAMESPACE,
        consent::NAMESPACE,
        finding::NAMESPACE,
        medication::NAMESPACE,
        calendar::NAMESPACE,
        hotline::NAMESPACE,
        task::NAMESPACE,
        labor_value::NAMESPACE,
        document::NAMESPACE,
        service_request::NAMESPACE,
        list::NAMESPACE,
        sample_location_schema::NAMESPACE,
        sample::NAMESPACE,
        study_visit_item::NAMESPACE,
        country::NAMESPACE,
        catalogs::NAMESPACE,
        attending_doctor::NAMESPACE,
        study_member::NAMESPACE,
        organ::NAMESPACE,
    ],
    ..Namespace::leaf("system", Some(BASE_URL), all_domains)
};

/// HL7 code systems used by CentraXX resources.
pub mod fhir_defaults {
    use crate::namespace::Namespace;

    pub const ICD10: &str = "http://hl7.org/fhir/sid/icd-10";
    pub const DATA_ABSENT_REASON: &str = "http://terminology.hl7.org/CodeSystem/data-absent-reason";

    pub fn all_domains() -> Vec<&'static str> {
        vec![ICD10, DATA_ABSENT_REASON]
    }

    pub(crate) const NAMESPACE: Namespace = Namespace::leaf("fhir_defaults", None, all_domains);
}

code_system!(amount_unit => "amountUnit");
code_system!(insurance_relationship => "insuranceRelationship");

pub mod med_procedure {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/medProcedure";
    pub const PROCEDURE_ID: &str = "https://fhir.centraxx.de/system/medProcedure/procedureId";

    pub fn all_domains() -> Vec<&'static str> {
        vec![PROCEDURE_ID]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("med_procedure", Some(BASE_URL), all_domains);
}

/// ISO 3166-2 subdivisions. Only the value set is CentraXX specific.
pub mod country_state {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = super::BASE_URL_VALUESET;
    pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/iso3166-2";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL_VALUESET]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("country_state", Some(BASE_URL), all_domains);
}

pub mod med_department {
    use crate::namespace::Namespace;

    pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/medDepartment";
    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/medDepartment";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL_VALUESET, BASE_URL]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("med_department", Some(BASE_URL), all_domains);
}

/// Tumor identifiers.
pub mod tumor {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/tumor";
    pub const TUMOR_ID: &str = "https://fhir.centraxx.de/system/tumor/tumorId";
    pub const XML_ID: &str = "https://fhir.centraxx.de/system/tumor/xmlId";
    pub const CXX_TUMOR_ID: &str = "https://fhir.centraxx.de/system/tumor/cxxTumorId";

    pub fn all_domains() -> Vec<&'static str> {
        vec![TUMOR_ID, XML_ID, CXX_TUMOR_ID]
    }

    pub(crate) const NAMESPACE: Namespace = Namespace::leaf("tumor", Some(BASE_URL), all_domains);
}

pub mod histology {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/histology";
    pub const HISTOLOGY_ID: &str = "https://fhir.centraxx.de/system/histology/histologyId";
    pub const XML_ID: &str = "https://fhir.centraxx.de/system/histology/xmlId";
    pub const CXX_HISTOLOGY_ID: &str = "https://fhir.centraxx.de/system/histology/cxxHistologyId";

    pub fn all_domains() -> Vec<&'static str> {
        vec![HISTOLOGY_ID, XML_ID, CXX_HISTOLOGY_ID]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("histology", Some(BASE_URL), all_domains);
}

/// TNM classification.
pub mod tnm {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/tnm";
    pub const TNM_ID: &str = "https://fhir.centraxx.de/system/tnm/tnmId";
    pub const XML_ID: &str = "https://fhir.centraxx.de/system/tnm/xmlId";
    pub const CXX_TNM_ID: &str = "https://fhir.centraxx.de/system/tnm/cxxTnmId";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, TNM_ID, XML_ID, CXX_TNM_ID]
    }

    pub(crate) const NAMESPACE: Namespace = Namespace::leaf("tnm", Some(BASE_URL), all_domains);
}

/// Ann Arbor staging.
pub mod ann_arbor {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/annArbor";
    pub const ANNARBOR_ID: &str = "https://fhir.centraxx.de/system/annArbor/annArborId";
    pub const XML_ID: &str = "https://fhir.centraxx.de/system/annArbor/xmlId";
    pub const CXX_ANNARBOR_ID: &str = "https://fhir.centraxx.de/system/annArbor/cxxAnnArborId";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, ANNARBOR_ID, XML_ID, CXX_ANNARBOR_ID]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("ann_arbor", Some(BASE_URL), all_domains);
}

pub mod other_classification {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/otherClassification";
    pub const CLASSIFICATION_ID: &str =
        "https://fhir.centraxx.de/system/otherClassification/classificationId";
    pub const XML_ID: &str = "https://fhir.centraxx.de/system/otherClassification/xmlId";
    pub const CXX_CLASSIFICATION_ID: &str =
        "https://fhir.centraxx.de/system/otherClassification/cxxClassificationId";
    pub const OTHERCLASSIFICATION_ID: &str =
        "https://fhir.centraxx.de/system/otherClassification/otherClassificationId";
    pub const CLASSIFICATION_NAME: &str =
        "https://fhir.centraxx.de/system/otherClassification/classificationName";

    pub fn all_domains() -> Vec<&'static str> {
        vec![
            BASE_URL,
            CLASSIFICATION_ID,
            XML_ID,
            CXX_CLASSIFICATION_ID,
            OTHERCLASSIFICATION_ID,
            CLASSIFICATION_NAME,
        ]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("other_classification", Some(BASE_URL), all_domains);
}

pub mod progress {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/progress";
    pub const PROGRESS_ID: &str = "https://fhir.centraxx.de/system/progress/progressId";
    pub const XML_ID: &str = "https://fhir.centraxx.de/system/progress/xmlId";
    pub const CXX_PROGRESS_ID: &str = "https://fhir.centraxx.de/system/progress/cxxProgressId";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, PROGRESS_ID, XML_ID, CXX_PROGRESS_ID]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("progress", Some(BASE_URL), all_domains);
}

pub mod metastasis {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/metastasis";
    pub const METASTASIS_ID: &str = "https://fhir.centraxx.de/system/metastasis/metastasisId";
    pub const XML_ID: &str = "https://fhir.centraxx.de/system/metastasis/xmlId";
    pub const CXX_METASTASIS_ID: &str = "https://fhir.centraxx.de/system/metastasis/cxxMetastisId";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, METASTASIS_ID, XML_ID, CXX_METASTASIS_ID]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("metastasis", Some(BASE_URL), all_domains);
}

pub mod tumor_mamma_diagnosis {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/tumorMammaDiagnosis";
    pub const TUMORMAMMADIAGNOSIS_ID: &str =
        "https://fhir.centraxx.de/system/tumorMammaDiagnosis/tumorMammaDiagnosisId";
    pub const XML_ID: &str = "https://fhir.centraxx.de/system/tumorMammaDiagnosis/xmlId";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, TUMORMAMMADIAGNOSIS_ID, XML_ID]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("tumor_mamma_diagnosis", Some(BASE_URL), all_domains);
}

pub mod tumor_localization {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/tumorLocalization";
    pub const XML_ID: &str = "https://fhir.centraxx.de/system/tumorLocalization/xmlId";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, XML_ID]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("tumor_localization", Some(BASE_URL), all_domains);
}

pub mod council_patient {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/councilPatient";
    pub const COUNCIL_PATIENT_ID: &str =
        "https://fhir.centraxx.de/system/councilPatient/councilPatientId";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, COUNCIL_PATIENT_ID]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("council_patient", Some(BASE_URL), all_domains);
}

pub mod follow_disease {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/followDisease";
    pub const FOLLOWDISEASE_ID: &str =
        "https://fhir.centraxx.de/system/followDisease/followDiseaseId";
    pub const CXX_ID: &str = "https://fhir.centraxx.de/system/followDisease/cxxId";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, FOLLOWDISEASE_ID, CXX_ID]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("follow_disease", Some(BASE_URL), all_domains);
}

pub mod surgery {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/surgery";
    pub const SURGERY_ID: &str = "https://fhir.centraxx.de/system/surgery/surgeryId";
    pub const XML_ID: &str = "https://fhir.centraxx.de/system/surgery/xmlId";
    pub const CXX_SURGERY_ID: &str = "https://fhir.centraxx.de/system/surgery/cxxSurgeryId";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, SURGERY_ID, XML_ID, CXX_SURGERY_ID]
    }

    pub(crate) const NAMESPACE: Namespace = Namespace::leaf("surgery", Some(BASE_URL), all_domains);
}

pub mod radiation_therapy {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/radiationTherapy";
    pub const RADIATIONTHERAPY_ID: &str =
        "https://fhir.centraxx.de/system/radiationTherapy/radiationTherapyId";
    pub const XML_ID: &str = "https://fhir.centraxx.de/system/radiationTherapy/xmlId";
    pub const CXX_RADIATIONTHERAPY_ID: &str =
        "https://fhir.centraxx.de/system/radiationTherapy/cxxRadiationTherapyId";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, RADIATIONTHERAPY_ID, XML_ID, CXX_RADIATIONTHERAPY_ID]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("radiation_therapy", Some(BASE_URL), all_domains);
}

pub mod system_therapy {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/systemTherapy";
    pub const SYSTEMTHERAPY_ID: &str =
        "https://fhir.centraxx.de/system/systemTherapy/systemTherapyId";
    pub const XML_ID: &str = "https://fhir.centraxx.de/system/systemTherapy/xmlId";
    pub const CXX_SYSTEMTHERAPY_ID: &str =
        "https://fhir.centraxx.de/system/systemTherapy/cxxSystemTherapyId";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, SYSTEMTHERAPY_ID, XML_ID, CXX_SYSTEMTHERAPY_ID]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("system_therapy", Some(BASE_URL), all_domains);
}

pub mod radiation_component {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/radiationComponent";
    pub const RADIATIONCOMPONENT_ID: &str =
        "https://fhir.centraxx.de/system/radiationComponent/radiationComponentId";
    pub const CXX_RADIATIONCOMPONENT_ID: &str =
        "https://fhir.centraxx.de/system/radiationComponent/cxxRadiationComponentId";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, RADIATIONCOMPONENT_ID, CXX_RADIATIONCOMPONENT_ID]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("radiation_component", Some(BASE_URL), all_domains);
}

pub mod surgery_component {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/surgeryComponent";
    pub const SURGERYCOMPONENT_ID: &str =
        "https://fhir.centraxx.de/system/surgeryComponent/surgeryComponentId";
    pub const XML_ID: &str = "https://fhir.centraxx.de/system/surgeryComponent/xmlId";
    pub const CXX_SURGERYCOMPONENT_ID: &str =
        "https://fhir.centraxx.de/system/surgeryComponent/cxxSurgeryComponentId";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, SURGERYCOMPONENT_ID, XML_ID, CXX_SURGERYCOMPONENT_ID]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("surgery_component", Some(BASE_URL), all_domains);
}

pub mod complications {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/complications";
    pub const XML_ID: &str = "https://fhir.centraxx.de/system/complications/xmlId";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL, XML_ID]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("complications", Some(BASE_URL), all_domains);
}

code_system!(crf => "crf");
code_system!(sample_category => "sampleCategory");
code_system!(abstraction_reason => "abstractionReason");
code_system!(id_container_type => "idContainerType");

/// Radiation target identifiers. These live directly under `/system`.
pub mod radiation_target {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = super::BASE_URL;
    pub const RADIATION_TARGET_ID: &str = "https://fhir.centraxx.de/system/radiationTargetId";
    pub const CXX_RADIATION_TARGET_ID: &str =
        "https://fhir.centraxx.de/system/cXXRadiationTargetId";
    pub const CODE: &str = "https://fhir.centraxx.de/system/code";

    pub fn all_domains() -> Vec<&'static str> {
        vec![RADIATION_TARGET_ID, CXX_RADIATION_TARGET_ID, CODE]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("radiation_target", Some(BASE_URL), all_domains);
}

/// Adverse effect identifiers. These live directly under `/system`.
pub mod adverse_effects {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = super::BASE_URL;
    pub const ADVERSE_EFFECT_ID: &str = "https://fhir.centraxx.de/system/adverseEffectId";

    pub fn all_domains() -> Vec<&'static str> {
        vec![ADVERSE_EFFECT_ID]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("adverse_effects", Some(BASE_URL), all_domains);
}

code_system!(study_profile => "studyProfile");

pub mod list {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/list";
    pub const TYPE: &str = "https://fhir.centraxx.de/system/list/type";

    pub fn all_domains() -> Vec<&'static str> {
        vec![TYPE]
    }

    pub(crate) const NAMESPACE: Namespace = Namespace::leaf("list", Some(BASE_URL), all_domains);
}

code_system!(sample_location_schema => "sampleLocationSchema");

pub mod country {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/country";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL]
    }

    pub(crate) const NAMESPACE: Namespace = Namespace::leaf("country", Some(BASE_URL), all_domains);
}

pub mod attending_doctor {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/attendingDoctor";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("attending_doctor", Some(BASE_URL), all_domains);
}

pub mod study_member {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/studyMember";
    pub const INTERNAL_STUDYMEMBERID: &str =
        "https://fhir.centraxx.de/system/studyMember/internalStudyMemberId";

    pub fn all_domains() -> Vec<&'static str> {
        vec![INTERNAL_STUDYMEMBERID]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("study_member", Some(BASE_URL), all_domains);
}

code_system!(organ => "organ");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_system_pairs_mirror_paths() {
        assert_eq!(amount_unit::BASE_URL, format!("{BASE_URL}/amountUnit"));
        assert_eq!(amount_unit::BASE_URL_VALUESET, format!("{BASE_URL_VALUESET}/amountUnit"));
        assert_eq!(
            amount_unit::all_domains(),
            [amount_unit::BASE_URL, amount_unit::BASE_URL_VALUESET]
        );
        assert_eq!(amount_unit::NAMESPACE.name(), "amount_unit");
    }

    #[test]
    fn test_mapping_type_sits_under_system_root() {
        assert_eq!(document::mapping_type::BASE_URL, format!("{BASE_URL}/mappingType"));
        assert_eq!(document::kind::BASE_URL, format!("{}/kind", document::BASE_URL));
    }

    #[test]
    fn test_radiation_target_ids_sit_under_system_root() {
        assert_eq!(radiation_target::BASE_URL, BASE_URL);
        assert_eq!(
            radiation_target::RADIATION_TARGET_ID,
            format!("{BASE_URL}/radiationTargetId")
        );
        assert_eq!(
            radiation_target::CXX_RADIATION_TARGET_ID,
            format!("{BASE_URL}/cXXRadiationTargetId")
        );
    }

    #[test]
    fn test_hl7_systems_have_no_base() {
        assert_eq!(fhir_defaults::NAMESPACE.base_url(), None);
        assert_eq!(fhir_defaults::ICD10, "http://hl7.org/fhir/sid/icd-10");
    }

    #[test]
    fn test_every_value_set_has_a_matching_system() {
        for (path, node) in NAMESPACE.walk() {
            let domains = node.all_domains();
            for url in domains.iter().filter(|url| url.starts_with(BASE_URL_VALUESET)) {
                let system = url.replacen(BASE_URL_VALUESET, BASE_URL, 1);
                let known = crate::all_domains().contains(&system.as_str())
                    || node.base_url() == Some(system.as_str());
                assert!(known || path == "country_state", "{path}: {url}");
            }
        }
    }
}
