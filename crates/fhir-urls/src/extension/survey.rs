use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/extension/survey";
pub const CYCLES: &str = "https://fhir.centraxx.de/extension/survey/cycles";
pub const CYCLE: &str = "https://fhir.centraxx.de/extension/survey/cycles/cycle";
pub const CYCLE_NAME: &str = "https://fhir.centraxx.de/extension/survey/cycles/cycle/name";
pub const CYCLE_DESCRIPTION: &str =
    "https://fhir.centraxx.de/extension/survey/cycles/cycle/description";
pub const FORMS: &str = "https://fhir.centraxx.de/extension/survey/forms";
pub const FORM: &str = "https://fhir.centraxx.de/extension/survey/forms/form";
pub const FORM_NAME: &str = "https://fhir.centraxx.de/extension/survey/forms/form/name";
pub const DUE_DATE: &str = "https://fhir.centraxx.de/extension/survey/dueDate";

pub fn all_domains() -> Vec<&'static str> {
    vec![CYCLES, CYCLE, CYCLE_NAME, CYCLE_DESCRIPTION, FORMS, FORM, FORM_NAME, DUE_DATE]
}

pub(crate) const NAMESPACE: Namespace = Namespace::leaf("survey", Some(BASE_URL), all_domains);
