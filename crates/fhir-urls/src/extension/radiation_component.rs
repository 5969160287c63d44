use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/radiationComponent";
pub const DATEACCURACYDICT: &str =
    "https://fhir.centraxx.de/extension/radiationComponent/dateAccuracyDict";
pub const COMMENTS: &str = "https://fhir.centraxx.de/extension/radiationComponent/comments";
pub const ASSESSMENT: &str = "https://fhir.centraxx.de/extension/radiationComponent/assessment";
pub const IRRADIATIONDAYS: &str =
    "https://fhir.centraxx.de/extension/radiationComponent/irradiationDays";
pub const FRACTIONS: &str = "https://fhir.centraxx.de/extension/radiationComponent/fractions";
pub const APPLICATIONKINDDICT: &str =
    "https://fhir.centraxx.de/extension/radiationComponent/applicationKindDict";
pub const APPLICATIONTECH: &str =
    "https://fhir.centraxx.de/extension/radiationComponent/applicationTech";
pub const APPLICATIONTECHTEXT: &str =
    "https://fhir.centraxx.de/extension/radiationComponent/applicationTechText";
pub const SINGLEDOSE: &str = "https://fhir.centraxx.de/extension/radiationComponent/singleDose";
pub const COMPLETEDOSE: &str = "https://fhir.centraxx.de/extension/radiationComponent/completeDose";
pub const UNITDICT: &str = "https://fhir.centraxx.de/extension/radiationComponent/unitDict";
pub const ICRUREFDICT: &str = "https://fhir.centraxx.de/extension/radiationComponent/icruRefDict";
pub const VOLTAGE: &str = "https://fhir.centraxx.de/extension/radiationComponent/voltage";
pub const VOLTAGEDIMENSION: &str =
    "https://fhir.centraxx.de/extension/radiationComponent/voltageDimension";
pub const VOLTAGETEXT: &str = "https://fhir.centraxx.de/extension/radiationComponent/voltageText";
pub const REFERENCE: &str = "https://fhir.centraxx.de/extension/radiationComponent/reference";
pub const REFERENCEDIMENSION: &str =
    "https://fhir.centraxx.de/extension/radiationComponent/referenceDimension";
pub const REFERENCETEXT: &str =
    "https://fhir.centraxx.de/extension/radiationComponent/referenceText";
pub const MODIFICATIONDATE: &str =
    "https://fhir.centraxx.de/extension/radiationComponent/modificationDate";
pub const MODIFICATIONREASON: &str =
    "https://fhir.centraxx.de/extension/radiationComponent/modificationReason";
pub const INTERRUPTDICT: &str =
    "https://fhir.centraxx.de/extension/radiationComponent/interruptDict";
pub const INTERRUPTREASONDICT: &str =
    "https://fhir.centraxx.de/extension/radiationComponent/interruptReasonDict";
pub const INTERRUPTDURATION: &str =
    "https://fhir.centraxx.de/extension/radiationComponent/interruptDuration";
pub const FINALSTATEDICT: &str =
    "https://fhir.centraxx.de/extension/radiationComponent/finalStateDict";
pub const RADIATIONKINDDICT: &str =
    "https://fhir.centraxx.de/extension/radiationComponent/radiationKindDict";

pub fn all_domains() -> Vec<&'static str> {
    vec![
        DATEACCURACYDICT,
        COMMENTS,
        ASSESSMENT,
        IRRADIATIONDAYS,
        FRACTIONS,
        APPLICATIONKINDDICT,
        APPLICATIONTECH,
        APPLICATIONTECHTEXT,
        SINGLEDOSE,
        COMPLETEDOSE,
        UNITDICT,
        ICRUREFDICT,
        VOLTAGE,
        VOLTAGEDIMENSION,
        VOLTAGETEXT,
        REFERENCE,
        REFERENCEDIMENSION,
        REFERENCETEXT,
        MODIFICATIONDATE,
        MODIFICATIONREASON,
        INTERRUPTDICT,
        INTERRUPTREASONDICT,
        INTERRUPTDURATION,
        FINALSTATEDICT,
        RADIATIONKINDDICT,
    ]
}

pub(crate) const NAMESPACE: Namespace =
    Namespace::leaf("radiation_component", Some(BASE_URL), all_domains);
