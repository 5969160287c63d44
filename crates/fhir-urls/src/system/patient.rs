//! Patient identifier systems and demographic code systems.

use crate::{namespace::Namespace, GenderType};

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/patient";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/patient";

pub fn all_domains() -> Vec<&'static str> {
    NAMESPACE
        .children()
        .iter()
        .flat_map(Namespace::all_domains)
        .collect()
}

/// The `(system, code)` pair for a patient gender coding.
pub fn gender_coding(gender: GenderType) -> (&'static str, &'static str) {
    (gender::BASE_URL, gender.code())
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[
        ethnicity::NAMESPACE,
        blood_group::NAMESPACE,
        citizenship::NAMESPACE,
        denomination::NAMESPACE,
        marital_status::NAMESPACE,
        species::NAMESPACE,
        title::NAMESPACE,
        gender::NAMESPACE,
        patient_insurance::NAMESPACE,
    ],
    ..Namespace::leaf("patient", Some(BASE_URL), all_domains)
};

code_system!(ethnicity => "patient/ethnicity");

pub mod blood_group {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/patient/bloodgroup";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("blood_group", Some(BASE_URL), all_domains);
}

pub mod citizenship {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/patient/citizenship";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("citizenship", Some(BASE_URL), all_domains);
}

pub mod denomination {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/patient/denomination";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("denomination", Some(BASE_URL), all_domains);
}

pub mod marital_status {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/patient/maritalStatus";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("marital_status", Some(BASE_URL), all_domains);
}

pub mod species {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/patient/species";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL]
    }

    pub(crate) const NAMESPACE: Namespace = Namespace::leaf("species", Some(BASE_URL), all_domains);
}

code_system!(title => "patient/title");

/// Administrative gender. See [`gender_coding`](crate::system::patient::gender_coding).
pub mod gender {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/patient/gender";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL]
    }

    pub(crate) const NAMESPACE: Namespace = Namespace::leaf("gender", Some(BASE_URL), all_domains);
}

pub mod patient_insurance {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/patient/patientInsurance";
    pub const BASE_URL_VALUESET: &str =
        "https://fhir.centraxx.de/valueSet/patient/patientInsurance";

    pub fn all_domains() -> Vec<&'static str> {
        let mut domains = insured_relationship::all_domains();
        domains.extend(coverage_type::all_domains());
        domains
    }

    pub(crate) const NAMESPACE: Namespace = Namespace {
        children: &[insured_relationship::NAMESPACE, coverage_type::NAMESPACE],
        ..Namespace::leaf("patient_insurance", Some(BASE_URL), all_domains)
    };

    code_system!(insured_relationship => "patient/patientInsurance/relationship");
    code_system!(coverage_type => "patient/patientInsurance/coverageType");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_coding() {
        assert_eq!(
            gender_coding(GenderType::Female),
            ("https://fhir.centraxx.de/system/patient/gender", "FEMALE")
        );
        assert_eq!(gender_coding(GenderType::X).1, "X");
    }

    #[test]
    fn test_all_domains_is_children_in_order() {
        let domains = all_domains();
        assert_eq!(domains[0], ethnicity::BASE_URL);
        assert_eq!(domains[1], ethnicity::BASE_URL_VALUESET);
        assert_eq!(domains.last(), Some(&patient_insurance::coverage_type::BASE_URL_VALUESET));
    }
}
