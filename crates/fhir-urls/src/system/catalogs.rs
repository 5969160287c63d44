//! Catalog code systems.

use crate::namespace::Namespace;

pub const BASE_URL: &str = "https://fhir.centraxx.de/system/catalogs";
pub const BASE_URL_VALUESET: &str = "https://fhir.centraxx.de/valueSet/catalogs";
pub const VALUE_LIST: &str = "https://fhir.centraxx.de/system/catalogs/valueList";
pub const CUSTOM_CATALOG: &str = "https://fhir.centraxx.de/system/catalogs/customCatalog";
pub const MASTER_DATA_CATALOG: &str = "https://fhir.centraxx.de/system/catalogs/masterDataCatalog";
pub const USAGE_ENTRY: &str = "https://fhir.centraxx.de/system/catalogs/usageEntry";

pub fn all_domains() -> Vec<&'static str> {
    let mut domains = vec![VALUE_LIST, CUSTOM_CATALOG, MASTER_DATA_CATALOG, USAGE_ENTRY];
    domains.extend(catalog_usage::all_domains());
    domains.extend(master_data_catalog_type::all_domains());
    domains.extend(search_catalog_item::all_domains());
    domains
}

pub(crate) const NAMESPACE: Namespace = Namespace {
    children: &[
        catalog_usage::NAMESPACE,
        master_data_catalog_type::NAMESPACE,
        search_catalog_item::NAMESPACE,
    ],
    ..Namespace::leaf("catalogs", Some(BASE_URL), all_domains)
};

code_system!(catalog_usage => "catalogs/usage");
code_system!(master_data_catalog_type => "catalogs/masterDataCatalogType");

pub mod search_catalog_item {
    use crate::namespace::Namespace;

    pub const BASE_URL: &str = "https://fhir.centraxx.de/system/catalogs/searchCatalogItem";

    pub fn all_domains() -> Vec<&'static str> {
        vec![BASE_URL]
    }

    pub(crate) const NAMESPACE: Namespace =
        Namespace::leaf("search_catalog_item", Some(BASE_URL), all_domains);
}
