//! # Filter State
//!
//! [`FilterState`] is the complete description of what the user is searching for.
//! It is a plain value: sessions keep a committed copy plus a draft that is being
//! edited, and replace one with the other wholesale on commit.
//!
//! The area/subarea pair is kept private so that a subarea can never exist
//! without its parent area.

use crate::catalog::{Area, Career, Modality, Subarea};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("select an area before choosing subarea '{0}'")]
    NoAreaSelected(Subarea),

    #[error("subarea '{subarea}' does not belong to area '{area}'")]
    SubareaOutsideArea { area: Area, subarea: Subarea },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub selected_careers: BTreeSet<Career>,
    pub year_from: Option<u32>,
    pub year_to: Option<u32>,
    selected_area: Option<Area>,
    selected_subarea: Option<Subarea>,
    pub selected_modalities: BTreeSet<Modality>,
    pub tutor_name: String,
}

impl Default for FilterState {
    /// The initial state: nothing constrained and every modality selected.
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_careers: BTreeSet::new(),
            year_from: None,
            year_to: None,
            selected_area: None,
            selected_subarea: None,
            selected_modalities: Modality::ALL.into_iter().collect(),
            tutor_name: String::new(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_area(&self) -> Option<Area> {
        self.selected_area
    }

    pub fn selected_subarea(&self) -> Option<Subarea> {
        self.selected_subarea
    }

    /// Selects (or clears) the area. Any previously chosen subarea is dropped.
    pub fn set_area(&mut self, area: Option<Area>) {
        self.selected_area = area;
        self.selected_subarea = None;
    }

    /// Selects a subarea under the current area, or clears it with `None`.
    pub fn set_subarea(&mut self, subarea: Option<Subarea>) -> Result<(), SelectionError> {
        let Some(subarea) = subarea else {
            self.selected_subarea = None;
            return Ok(());
        };
        match self.selected_area {
            None => Err(SelectionError::NoAreaSelected(subarea)),
            Some(area) if !area.subareas().contains(&subarea) => {
                Err(SelectionError::SubareaOutsideArea { area, subarea })
            }
            Some(_) => {
                self.selected_subarea = Some(subarea);
                Ok(())
            }
        }
    }

    /// True when the modality selection narrows results. Selecting every
    /// modality (or none) means "no modality filter".
    pub fn modality_filter_active(&self) -> bool {
        !self.selected_modalities.is_empty()
            && self.selected_modalities.len() < Modality::ALL.len()
    }

    /// Every constraint currently narrowing results, in display order.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut active = Vec::new();
        if !self.search_term.is_empty() {
            active.push(ActiveFilter::SearchTerm(self.search_term.clone()));
        }
        active.extend(self.selected_careers.iter().copied().map(ActiveFilter::Career));
        if self.year_from.is_some() || self.year_to.is_some() {
            active.push(ActiveFilter::YearRange {
                from: self.year_from,
                to: self.year_to,
            });
        }
        if self.modality_filter_active() {
            active.extend(
                self.selected_modalities
                    .iter()
                    .copied()
                    .map(ActiveFilter::Modality),
            );
        }
        if let Some(area) = self.selected_area {
            active.push(ActiveFilter::Area {
                area,
                subarea: self.selected_subarea,
            });
        }
        if !self.tutor_name.is_empty() {
            active.push(ActiveFilter::Tutor(self.tutor_name.clone()));
        }
        active
    }

    pub fn is_filtering(&self) -> bool {
        !self.active_filters().is_empty()
    }

    /// A copy of this state with one constraint removed.
    pub fn without(&self, filter: &ActiveFilter) -> FilterState {
        let mut next = self.clone();
        match filter {
            ActiveFilter::SearchTerm(_) => next.search_term.clear(),
            ActiveFilter::Career(career) => {
                next.selected_careers.remove(career);
            }
            ActiveFilter::YearRange { .. } => {
                next.year_from = None;
                next.year_to = None;
            }
            ActiveFilter::Modality(modality) => {
                next.selected_modalities.remove(modality);
            }
            ActiveFilter::Area { .. } => next.set_area(None),
            ActiveFilter::Tutor(_) => next.tutor_name.clear(),
        }
        next
    }
}

/// One removable constraint of a [`FilterState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveFilter {
    SearchTerm(String),
    Career(Career),
    YearRange { from: Option<u32>, to: Option<u32> },
    Modality(Modality),
    Area { area: Area, subarea: Option<Subarea> },
    Tutor(String),
}

impl std::fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn bound(year: &Option<u32>) -> String {
            year.map(|y| y.to_string()).unwrap_or_else(|| "...".to_string())
        }
        match self {
            ActiveFilter::SearchTerm(term) => write!(f, "Search: \"{}\"", term),
            ActiveFilter::Career(career) => write!(f, "{}", career.label()),
            ActiveFilter::YearRange { from, to } => {
                write!(f, "Year: {} - {}", bound(from), bound(to))
            }
            ActiveFilter::Modality(modality) => write!(f, "{}", modality.label()),
            ActiveFilter::Area {
                area,
                subarea: Some(sub),
            } => write!(f, "{} / {}", area.label(), sub.label()),
            ActiveFilter::Area { area, subarea: None } => write!(f, "{}", area.label()),
            ActiveFilter::Tutor(name) => write!(f, "Tutor: \"{}\"", name),
        }
    }
}
