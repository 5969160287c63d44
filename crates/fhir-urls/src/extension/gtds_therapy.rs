//! Tumor documentation therapy extensions (GTDS).
//!
//! Surgery, radiation and systemic therapy each carry their own extension family.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/gtdsTherapy";
pub const TUMOR: &str = "https://fhir.centraxx.de/extension/gtdsTherapy/tumor";

pub fn all_domains() -> Vec<&'static str> {
    vec![TUMOR]
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[surgery::NAMESPACE, radiation_therapy::NAMESPACE, system_therapy::NAMESPACE],
    ..Namespace::leaf("gtds_therapy", Some(BASE_URL), all_domains)
};

/// Surgical therapy.
pub mod surgery {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/gtdsTherapy/surgery";
    pub const INTENTIONDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/intentionDict";
    pub const CONCEPTID: &str = "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/conceptId";
    pub const THERAPYSTEP: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/therapyStep";
    pub const DATEACCURACYDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/dateAccuracyDict";
    pub const ACCOMPLISHEDBYTEXT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/accomplishedByText";
    pub const CAPTUREFINISHSTATEDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/captureFinishStateDict";
    pub const OPDESCRIPTION: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/opDescription";
    pub const OPTEXT: &str = "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/opText";
    pub const RCLASSIFICATIONDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/rClassificationDict";
    pub const LYMPHNODESEXAMINATED: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/lymphNodesExaminated";
    pub const LYMPHNODESINFESTED: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/lymphNodesInfested";
    pub const LYMPHNODE_1_EXAMINATED: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/lymphNode_1_Examinated";
    pub const LYMPHNODE_1_INFESTED: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/lymphNode_1_Infested";
    pub const LYMPHNODE_2_EXAMINATED: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/lymphNode_2_Examinated";
    pub const LYMPHNODE_2_INFESTED: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/lymphNode_2_Infested";
    pub const LYMPHNODE_3_EXAMINATED: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/lymphNode_3_Examinated";
    pub const LYMPHNODE_3_INFESTED: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/lymphNode_3_Infested";
    pub const LYMPHNODE_4_EXAMINATED: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/lymphNode_4_Examinated";
    pub const LYMPHNODE_4_INFESTED: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/lymphNode_4_Infested";
    pub const SENTINELSEXAMINATED: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/sentinelsExaminated";
    pub const SENTINELSINFESTED: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/sentinelsInfested";
    pub const BUILDINGDATE: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/buildingDate";
    pub const COMPLICATIONSDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/complicationsDict";
    pub const TARGETPRIMARYTUMOURDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/targetPrimaryTumourDict";
    pub const TARGETLYMPHNODEDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/targetLymphnodeDict";
    pub const TARGETMETASTASISDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/targetMetastasisDict";
    pub const RESECTIONDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/resectionDict";
    pub const TARGETCOMPLICATIONDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/targetComplicationDict";
    pub const TARGETOTHERDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/targetOtherDict";
    pub const RESIDUALLOCALISATIONDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/residualLocalisationDict";
    pub const RCLASSIFICATIONSUFFIX: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/rClassificationSuffix";
    pub const RCLASSIFICATIONLOCALDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/rClassificationLocalDict";
    pub const URGENCYDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/urgencyDict";
    pub const SUCCESSDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/successDict";
    pub const LARGESTDIAMETER: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/largestDiameter";
    pub const DISTANCERESECTION: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/distanceResection";
    pub const OPERATEUR1TEXT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/operateur1Text";
    pub const OPERATEUR2TEXT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/operateur2Text";
    pub const ASASCORE: &str = "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/asaScore";
    pub const SURGICALACCESS: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/surgery/surgicalAccess";

    pub fn all_domains() -> Vec<&'static str> {
        vec![
            INTENTIONDICT,
            CONCEPTID,
            THERAPYSTEP,
            DATEACCURACYDICT,
            ACCOMPLISHEDBYTEXT,
            CAPTUREFINISHSTATEDICT,
            OPDESCRIPTION,
            OPTEXT,
            RCLASSIFICATIONDICT,
            LYMPHNODESEXAMINATED,
            LYMPHNODESINFESTED,
            LYMPHNODE_1_EXAMINATED,
            LYMPHNODE_1_INFESTED,
            LYMPHNODE_2_EXAMINATED,
            LYMPHNODE_2_INFESTED,
            LYMPHNODE_3_EXAMINATED,
            LYMPHNODE_3_INFESTED,
            LYMPHNODE_4_EXAMINATED,
            LYMPHNODE_4_INFESTED,
            SENTINELSEXAMINATED,
            SENTINELSINFESTED,
            BUILDINGDATE,
            COMPLICATIONSDICT,
            TARGETPRIMARYTUMOURDICT,
            TARGETLYMPHNODEDICT,
            TARGETMETASTASISDICT,
            RESECTIONDICT,
            TARGETCOMPLICATIONDICT,
            TARGETOTHERDICT,
            RESIDUALLOCALISATIONDICT,
            RCLASSIFICATIONSUFFIX,
            RCLASSIFICATIONLOCALDICT,
            URGENCYDICT,
            SUCCESSDICT,
            LARGESTDIAMETER,
            DISTANCERESECTION,
            OPERATEUR1TEXT,
            OPERATEUR2TEXT,
            ASASCORE,
            SURGICALACCESS,
        ]
    }

    pub(crate) const NAMESPACE: Namespace = Namespace::leaf("surgery", Some(BASE_URL), all_domains);
}

/// Radiation therapy.
pub mod radiation_therapy {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/gtdsTherapy/radiationTherapy";
    pub const INTENTIONDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/radiationTherapy/intentionDict";
    pub const CONCEPTID: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/radiationTherapy/conceptId";
    pub const THERAPYSTEP: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/radiationTherapy/therapyStep";
    pub const DATEACCURACYDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/radiationTherapy/dateAccuracyDict";
    pub const ACCOMPLISHEDBYTEXT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/radiationTherapy/accomplishedByText";
    pub const CAPTUREFINISHSTATEDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/radiationTherapy/captureFinishStateDict";
    pub const COMMENTS: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/radiationTherapy/comments";
    pub const FINALSTATEDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/radiationTherapy/finalStateDict";
    pub const ASSESSMENT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/radiationTherapy/assessment";
    pub const ADVERSEEFFECTSDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/radiationTherapy/adverseEffectsDict";
    pub const RADIATIONPATTERNID: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/radiationTherapy/radiationPatternId";
    pub const THERAPYKINDDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/radiationTherapy/therapyKindDict";
    pub const RADIOCHEMODICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/radiationTherapy/radioChemoDict";
    pub const TARGETPRIMARYTUMOURDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/radiationTherapy/targetPrimaryTumourDict";
    pub const TARGETLYMPHNODEDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/radiationTherapy/targetLymphnodeDict";
    pub const TARGETMETASTASISDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/radiationTherapy/targetMetastasisDict";
    pub const TARGETOTHERDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/radiationTherapy/targetOtherDict";

    pub fn all_domains() -> Vec<&'static str> {
        vec![
            INTENTIONDICT,
            CONCEPTID,
            THERAPYSTEP,
            DATEACCURACYDICT,
            ACCOMPLISHEDBYTEXT,
            CAPTUREFINISHSTATEDICT,
            COMMENTS,
            FINALSTATEDICT,
            ASSESSMENT,
            ADVERSEEFFECTSDICT,
            RADIATIONPATTERNID,
            THERAPYKINDDICT,
            RADIOCHEMODICT,
            TARGETPRIMARYTUMOURDICT,
            TARGETLYMPHNODEDICT,
            TARGETMETASTASISDICT,
            TARGETOTHERDICT,
        ]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("radiation_therapy", Some(BASE_URL), all_domains);
}

/// Systemic therapy (chemotherapy and similar).
pub mod system_therapy {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/gtdsTherapy/systemTherapy";
    pub const INTENTIONDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/systemTherapy/intentionDict";
    pub const CONCEPTID: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/systemTherapy/conceptId";
    pub const THERAPYSTEP: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/systemTherapy/therapyStep";
    pub const DATEACCURACYDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/systemTherapy/dateAccuracyDict";
    pub const ACCOMPLISHEDBYTEXT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/systemTherapy/accomplishedByText";
    pub const CAPTUREFINISHSTATEDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/systemTherapy/captureFinishStateDict";
    pub const ASSESSMENT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/systemTherapy/assessment";
    pub const PROTOCOLTYPEDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/systemTherapy/protocolTypeDict";
    pub const PROTOCOLID: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/systemTherapy/protocolId";
    pub const FINALSTATEDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/systemTherapy/finalStateDict";
    pub const PLANNEDDURATION: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/systemTherapy/plannedDuration";
    pub const THERAPYKINDDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/systemTherapy/therapyKindDict";
    pub const THERAPYTYPEDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/systemTherapy/therapyTypeDict";
    pub const ADVERSEEFFECTSDICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/systemTherapy/adverseEffectsDict";
    pub const RADIOCHEMODICT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/systemTherapy/radioChemoDict";
    pub const CYCLECOUNT: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/systemTherapy/cycleCount";
    pub const COMMENTS: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/systemTherapy/comments";
    pub const DESCRIPTION: &str =
        "https://fhir.centraxx.de/extension/gtdsTherapy/systemTherapy/description";

    pub fn all_domains() -> Vec<&'static str> {
        vec![
            INTENTIONDICT,
            CONCEPTID,
            THERAPYSTEP,
            DATEACCURACYDICT,
            ACCOMPLISHEDBYTEXT,
            CAPTUREFINISHSTATEDICT,
            ASSESSMENT,
            PROTOCOLTYPEDICT,
            PROTOCOLID,
            FINALSTATEDICT,
            PLANNEDDURATION,
            THERAPYKINDDICT,
            THERAPYTYPEDICT,
            ADVERSEEFFECTSDICT,
            RADIOCHEMODICT,
            CYCLECOUNT,
            COMMENTS,
            DESCRIPTION,
        ]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("system_therapy", Some(BASE_URL), all_domains);
}
