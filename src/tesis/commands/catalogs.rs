use crate::catalog::{year_options, Area, Career, Modality};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::query::SortKey;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub code: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaEntry {
    pub code: &'static str,
    pub label: &'static str,
    pub subareas: Vec<CatalogEntry>,
}

/// Everything a filter form needs to offer choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogListing {
    pub careers: Vec<CatalogEntry>,
    pub modalities: Vec<CatalogEntry>,
    pub areas: Vec<AreaEntry>,
    pub sorts: Vec<CatalogEntry>,
    pub years: Vec<i32>,
}

impl CatalogListing {
    pub fn new(current_year: i32) -> Self {
        Self {
            careers: Career::ALL
                .iter()
                .map(|c| CatalogEntry {
                    code: c.code(),
                    label: c.label(),
                })
                .collect(),
            modalities: Modality::ALL
                .iter()
                .map(|m| CatalogEntry {
                    code: m.code(),
                    label: m.label(),
                })
                .collect(),
            areas: Area::ALL
                .iter()
                .map(|a| AreaEntry {
                    code: a.code(),
                    label: a.label(),
                    subareas: a
                        .subareas()
                        .iter()
                        .map(|s| CatalogEntry {
                            code: s.code(),
                            label: s.label(),
                        })
                        .collect(),
                })
                .collect(),
            sorts: SortKey::ALL
                .iter()
                .map(|s| CatalogEntry {
                    code: s.code(),
                    label: s.label(),
                })
                .collect(),
            years: year_options(current_year),
        }
    }
}

pub fn run(current_year: i32) -> Result<CmdResult> {
    Ok(CmdResult::default().with_catalog(CatalogListing::new(current_year)))
}
