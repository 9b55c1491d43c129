#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogRow {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

include!(concat!(env!("OUT_DIR"), "/site_catalog.rs"));
