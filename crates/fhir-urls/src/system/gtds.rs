//! GTDS dictionary code systems.
//!
//! The tumor documentation dictionaries are keyed by their German GTDS names.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/gtds";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/gtds";

pub fn all_domains() -> Vec<&'static str> {
    NAMESPACE
        .children()
        .iter()
        .flat_map(Namespace::all_domains)
        .collect()
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[
        anastomotic_leakage_dictionary::NAMESPACE,
        ann_arbor_extra_dictionary::NAMESPACE,
        ann_arbor_general_dictionary::NAMESPACE,
        ann_arbor_infestation_dictionary::NAMESPACE,
        capture_finish_state_dictionary::NAMESPACE,
        closure_reason_dictionary::NAMESPACE,
        code_type_dictionary::NAMESPACE,
        complication_intra_post_dictionary::NAMESPACE,
        complication_kind_dictionary::NAMESPACE,
        council_status_dictionary::NAMESPACE,
        council_type_dictionary::NAMESPACE,
        date_accuracy_dictionary::NAMESPACE,
        diagnosis_done_dictionary::NAMESPACE,
        ecog_dictionary::NAMESPACE,
        expansion_general_dictionary::NAMESPACE,
        final_state_dictionary::NAMESPACE,
        fish_dictionary::NAMESPACE,
        follow_disease_kind_dictionary::NAMESPACE,
        full_assessment_dictionary::NAMESPACE,
        gleason_score_cause_dictionary::NAMESPACE,
        grading_dictionary::NAMESPACE,
        her2_neu_score_dictionary::NAMESPACE,
        highest_insurance_dictionary::NAMESPACE,
        indication_dictionary::NAMESPACE,
        insurance_dictionary::NAMESPACE,
        intervention_kind_dictionary::NAMESPACE,
        marker_method_dictionary::NAMESPACE,
        meno_pause_state_dictionary::NAMESPACE,
        metastasis_certainty_dictionary::NAMESPACE,
        metastasis_localisation_dictionary::NAMESPACE,
        new_histology_dictionary::NAMESPACE,
        patient_enlighten_status_dictionary::NAMESPACE,
        post_op_control_dictionary::NAMESPACE,
        prae_op_marker_dictionary::NAMESPACE,
        pre_op_asa_dictionary::NAMESPACE,
        processing_state_dictionary::NAMESPACE,
        progress_capture_cause_dictionary::NAMESPACE,
        progress_therapy_intention_dictionary::NAMESPACE,
        ras_mutation_dictionary::NAMESPACE,
        r_classification_dictionary::NAMESPACE,
        radiation_application_kind_dictionary::NAMESPACE,
        radiation_interrupt_reason_dictionary::NAMESPACE,
        radiation_kind_dictionary::NAMESPACE,
        radiation_therapy_kind_dictionary::NAMESPACE,
        radiation_unit_dictionary::NAMESPACE,
        receptor_state_dictionary::NAMESPACE,
        related_dictionary::NAMESPACE,
        residual_localisation_dictionary::NAMESPACE,
        selection_list_dictionary::NAMESPACE,
        side_dictionary::NAMESPACE,
        source_dictionary::NAMESPACE,
        source_type_dictionary::NAMESPACE,
        state_lymph_node_dictionary::NAMESPACE,
        state_metastasis_dictionary::NAMESPACE,
        state_primary_dictionary::NAMESPACE,
        stomaposition_dictionary::NAMESPACE,
        surgery_success_dictionary::NAMESPACE,
        surgery_urgency_dictionary::NAMESPACE,
        surgical_access_dictionary::NAMESPACE,
        system_therapy_kind_dictionary::NAMESPACE,
        system_therapy_protocol_type_dictionary::NAMESPACE,
        system_therapy_type_dictionary::NAMESPACE,
        tme_dictionary::NAMESPACE,
        target_dictionary::NAMESPACE,
        therapy_cause_dictionary::NAMESPACE,
        therapy_done_dictionary::NAMESPACE,
        therapy_intention_dictionary::NAMESPACE,
        therapy_status_dictionary::NAMESPACE,
        therapy_target_lymph_dictionary::NAMESPACE,
        therapy_target_meta_dictionary::NAMESPACE,
        therapy_target_primary_dictionary::NAMESPACE,
        tnm_p_dictionary::NAMESPACE,
        tumor_capture_cause_dictionary::NAMESPACE,
        tumor_conference_dictionary::NAMESPACE,
        tumor_death_dictionary::NAMESPACE,
        visit_cause_dictionary::NAMESPACE,
        yes_no_x_dictionary::NAMESPACE,
    ],
    ..Namespace::leaf("gtds", Some(BASE_URL), all_domains)
};

code_system!(anastomotic_leakage_dictionary => "gtds/anastomoticLeakageDictionary");
code_system!(ann_arbor_extra_dictionary => "gtds/annArborExtraDictionary");
code_system!(ann_arbor_general_dictionary => "gtds/annArborGeneralDictionary");
code_system!(ann_arbor_infestation_dictionary => "gtds/annArborInfestationDictionary");
code_system!(capture_finish_state_dictionary => "gtds/captureFinishStateDictionary");
code_system!(closure_reason_dictionary => "gtds/closureReasonDictionary");
code_system!(code_type_dictionary => "gtds/codeTypeDictionary");
code_system!(complication_intra_post_dictionary => "gtds/complicationIntraPostDictionary");
code_system!(complication_kind_dictionary => "gtds/complicationKindDictionary");
code_system!(council_status_dictionary => "gtds/councilStatusDictionary");
code_system!(council_type_dictionary => "gtds/councilTypeDictionary");
code_system!(date_accuracy_dictionary => "gtds/dateAccuracyDictionary");
code_system!(diagnosis_done_dictionary => "gtds/diagnosisDoneDictionary");
code_system!(ecog_dictionary => "gtds/ecogDictionary");
code_system!(expansion_general_dictionary => "gtds/expansionGeneralDictionary");
code_system!(final_state_dictionary => "gtds/finalStateDictionary");
code_system!(fish_dictionary => "gtds/fishDictionary");
code_system!(follow_disease_kind_dictionary => "gtds/followDiseaseKindDictionary");
code_system!(full_assessment_dictionary => "gtds/fullAssessmentDictionary");
code_system!(gleason_score_cause_dictionary => "gtds/gleasonScoreCauseDictionary");
code_system!(grading_dictionary => "gtds/gradingDictionary");
code_system!(her2_neu_score_dictionary => "gtds/her2NeuScoreDictionary");
code_system!(highest_insurance_dictionary => "gtds/highestInsuranceDictionary");
code_system!(indication_dictionary => "gtds/indicationDictionary");
code_system!(insurance_dictionary => "gtds/insuranceDictionary");
code_system!(intervention_kind_dictionary => "gtds/interventionKindDictionary");
code_system!(marker_method_dictionary => "gtds/markerMethodDictionary");
code_system!(meno_pause_state_dictionary => "gtds/menoPauseStateDictionary");
code_system!(metastasis_certainty_dictionary => "gtds/metastasisCertaintyDictionary");
code_system!(metastasis_localisation_dictionary => "gtds/metastasisLocalisationDictionary");
code_system!(new_histology_dictionary => "gtds/newHistologyDictionary");
code_system!(patient_enlighten_status_dictionary => "gtds/patientEnlightenStatusDictionary");
code_system!(post_op_control_dictionary => "gtds/postOpControlDictionary");
code_system!(prae_op_marker_dictionary => "gtds/praeOpMarkerDictionary");
code_system!(pre_op_asa_dictionary => "gtds/preOpASADictionary");
code_system!(processing_state_dictionary => "gtds/processingStateDictionary");
code_system!(progress_capture_cause_dictionary => "gtds/progressCaptureCauseDictionary");
code_system!(progress_therapy_intention_dictionary => "gtds/progressTherapyIntentionDictionary");
code_system!(ras_mutation_dictionary => "gtds/rASMutationDictionary");
code_system!(r_classification_dictionary => "gtds/rClassificationDictionary");
code_system!(radiation_application_kind_dictionary => "gtds/radiationApplicationKindDictionary");
code_system!(radiation_interrupt_reason_dictionary => "gtds/radiationInterruptReasonDictionary");
code_system!(radiation_kind_dictionary => "gtds/radiationKindDictionary");
code_system!(radiation_therapy_kind_dictionary => "gtds/radiationTherapyKindDictionary");
code_system!(radiation_unit_dictionary => "gtds/radiationUnitDictionary");
code_system!(receptor_state_dictionary => "gtds/receptorStateDictionary");
code_system!(related_dictionary => "gtds/relatedDictionary");
code_system!(residual_localisation_dictionary => "gtds/residualLocalisationDictionary");
code_system!(selection_list_dictionary => "gtds/selectionListDictionary");
code_system!(side_dictionary => "gtds/sideDictionary");
code_system!(source_dictionary => "gtds/sourceDictionary");
code_system!(source_type_dictionary => "gtds/sourceTypeDictionary");
code_system!(state_lymph_node_dictionary => "gtds/stateLymphNodeDictionary");
code_system!(state_metastasis_dictionary => "gtds/stateMetastasisDictionary");
code_system!(state_primary_dictionary => "gtds/statePrimaryDictionary");
code_system!(stomaposition_dictionary => "gtds/stomapositionDictionary");
code_system!(surgery_success_dictionary => "gtds/surgerySuccessDictionary");
code_system!(surgery_urgency_dictionary => "gtds/surgeryUrgencyDictionary");
code_system!(surgical_access_dictionary => "gtds/surgicalAccessDictionary");
code_system!(system_therapy_kind_dictionary => "gtds/systemTherapyKindDictionary");
code_system!(system_therapy_protocol_type_dictionary => "gtds/systemTherapyProtocolTypeDictionary");
code_system!(system_therapy_type_dictionary => "gtds/systemTherapyTypeDictionary");
code_system!(tme_dictionary => "gtds/tMEDictionary");
code_system!(target_dictionary => "gtds/targetDictionary");
code_system!(therapy_cause_dictionary => "gtds/therapyCauseDictionary");
code_system!(therapy_done_dictionary => "gtds/therapyDoneDictionary");
code_system!(therapy_intention_dictionary => "gtds/therapyIntentionDictionary");
code_system!(therapy_status_dictionary => "gtds/therapyStatusDictionary");
code_system!(therapy_target_lymph_dictionary => "gtds/therapyTargetLymphDictionary");
code_system!(therapy_target_meta_dictionary => "gtds/therapyTargetMetaDictionary");
code_system!(therapy_target_primary_dictionary => "gtds/therapyTargetPrimaryDictionary");
code_system!(tnm_p_dictionary => "gtds/tnmPDictionary");
code_system!(tumor_capture_cause_dictionary => "gtds/tumorCaptureCauseDictionary");
code_system!(tumor_conference_dictionary => "gtds/tumorConferenceDictionary");
code_system!(tumor_death_dictionary => "gtds/tumorDeathDictionary");
code_system!(visit_cause_dictionary => "gtds/visitCauseDictionary");
code_system!(yes_no_x_dictionary => "gtds/yesNoXDictionary");
