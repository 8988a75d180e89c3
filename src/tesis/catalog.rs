//! # Catalogs
//!
//! Fixed, closed code ↔ label tables for careers, modalities, areas and subareas.
//!
//! Filter selections are stored as codes (the enums below), while records carry
//! the human-readable label as plain text. Matching a record therefore always goes
//! through [`Career::label`] / [`Modality::label`] / [`Area::label`] /
//! [`Subarea::label`]: the labels here must stay byte-for-byte equal to the ones
//! used in the record data. No normalization is applied.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of entries offered by the year pickers.
pub const YEAR_OPTION_COUNT: i32 = 10;

/// A code that is not part of a catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} code '{code}' (expected one of: {expected})")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: String,
    pub expected: String,
}

impl UnknownCode {
    fn new(kind: &'static str, code: &str, expected: &[&str]) -> Self {
        Self {
            kind,
            code: code.to_string(),
            expected: expected.join(", "),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Career {
    Informatica,
    Sistemas,
    Civil,
    Industrial,
    Electronica,
}

impl Career {
    pub const ALL: [Career; 5] = [
        Career::Informatica,
        Career::Sistemas,
        Career::Civil,
        Career::Industrial,
        Career::Electronica,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Career::Informatica => "informatica",
            Career::Sistemas => "sistemas",
            Career::Civil => "civil",
            Career::Industrial => "industrial",
            Career::Electronica => "electronica",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Career::Informatica => "Ingeniería Informática",
            Career::Sistemas => "Ingeniería de Sistemas",
            Career::Civil => "Ingeniería Civil",
            Career::Industrial => "Ingeniería Industrial",
            Career::Electronica => "Ingeniería Electrónica",
        }
    }
}

impl FromStr for Career {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Career::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| UnknownCode::new("career", s, &Career::ALL.map(Career::code)))
    }
}

impl fmt::Display for Career {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Submission type of a record.
///
/// Selecting every modality is the "unfiltered" state; see
/// [`FilterState::modality_filter_active`](crate::filters::FilterState::modality_filter_active).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Tesis,
    Proyecto,
    Dirigido,
    Adscripcion,
    Tesina,
}

impl Modality {
    pub const ALL: [Modality; 5] = [
        Modality::Tesis,
        Modality::Proyecto,
        Modality::Dirigido,
        Modality::Adscripcion,
        Modality::Tesina,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Modality::Tesis => "tesis",
            Modality::Proyecto => "proyecto",
            Modality::Dirigido => "dirigido",
            Modality::Adscripcion => "adscripcion",
            Modality::Tesina => "tesina",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Modality::Tesis => "Tesis",
            Modality::Proyecto => "Proyecto de Grado",
            Modality::Dirigido => "Trabajo Dirigido",
            Modality::Adscripcion => "Trabajo por Adscripción",
            Modality::Tesina => "Tesina",
        }
    }
}

impl FromStr for Modality {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Modality::ALL
            .into_iter()
            .find(|m| m.code() == s)
            .ok_or_else(|| UnknownCode::new("modality", s, &Modality::ALL.map(Modality::code)))
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Area {
    Ia,
    Web,
    Security,
    Mobile,
    Data,
}

impl Area {
    pub const ALL: [Area; 5] = [Area::Ia, Area::Web, Area::Security, Area::Mobile, Area::Data];

    pub fn code(self) -> &'static str {
        match self {
            Area::Ia => "ia",
            Area::Web => "web",
            Area::Security => "security",
            Area::Mobile => "mobile",
            Area::Data => "data",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Area::Ia => "Inteligencia Artificial",
            Area::Web => "Desarrollo Web",
            Area::Security => "Ciberseguridad",
            Area::Mobile => "Desarrollo Móvil",
            Area::Data => "Ciencia de Datos",
        }
    }

    /// The fixed subarea list of this area, in display order.
    pub fn subareas(self) -> &'static [Subarea] {
        match self {
            Area::Ia => &[Subarea::Ml, Subarea::Dl, Subarea::Nlp, Subarea::Cv],
            Area::Web => &[Subarea::Frontend, Subarea::Backend, Subarea::Fullstack],
            Area::Security => &[Subarea::Network, Subarea::App],
            Area::Mobile => &[Subarea::Android, Subarea::Ios, Subarea::Cross],
            Area::Data => &[Subarea::Analytics, Subarea::Mining, Subarea::Viz],
        }
    }
}

impl FromStr for Area {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Area::ALL
            .into_iter()
            .find(|a| a.code() == s)
            .ok_or_else(|| UnknownCode::new("area", s, &Area::ALL.map(Area::code)))
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subarea {
    Ml,
    Dl,
    Nlp,
    Cv,
    Frontend,
    Backend,
    Fullstack,
    Network,
    App,
    Android,
    Ios,
    Cross,
    Analytics,
    Mining,
    Viz,
}

impl Subarea {
    pub const ALL: [Subarea; 15] = [
        Subarea::Ml,
        Subarea::Dl,
        Subarea::Nlp,
        Subarea::Cv,
        Subarea::Frontend,
        Subarea::Backend,
        Subarea::Fullstack,
        Subarea::Network,
        Subarea::App,
        Subarea::Android,
        Subarea::Ios,
        Subarea::Cross,
        Subarea::Analytics,
        Subarea::Mining,
        Subarea::Viz,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Subarea::Ml => "ml",
            Subarea::Dl => "dl",
            Subarea::Nlp => "nlp",
            Subarea::Cv => "cv",
            Subarea::Frontend => "frontend",
            Subarea::Backend => "backend",
            Subarea::Fullstack => "fullstack",
            Subarea::Network => "network",
            Subarea::App => "app",
            Subarea::Android => "android",
            Subarea::Ios => "ios",
            Subarea::Cross => "cross",
            Subarea::Analytics => "analytics",
            Subarea::Mining => "mining",
            Subarea::Viz => "viz",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Subarea::Ml => "Machine Learning",
            Subarea::Dl => "Deep Learning",
            Subarea::Nlp => "Procesamiento de Lenguaje Natural",
            Subarea::Cv => "Visión por Computadora",
            Subarea::Frontend => "Frontend",
            Subarea::Backend => "Backend",
            Subarea::Fullstack => "Full Stack",
            Subarea::Network => "Seguridad de Redes",
            Subarea::App => "Seguridad de Aplicaciones",
            Subarea::Android => "Android",
            Subarea::Ios => "iOS",
            Subarea::Cross => "Multiplataforma",
            Subarea::Analytics => "Análisis de Datos",
            Subarea::Mining => "Minería de Datos",
            Subarea::Viz => "Visualización de Datos",
        }
    }

    /// The area this subarea belongs to.
    pub fn area(self) -> Area {
        match self {
            Subarea::Ml | Subarea::Dl | Subarea::Nlp | Subarea::Cv => Area::Ia,
            Subarea::Frontend | Subarea::Backend | Subarea::Fullstack => Area::Web,
            Subarea::Network | Subarea::App => Area::Security,
            Subarea::Android | Subarea::Ios | Subarea::Cross => Area::Mobile,
            Subarea::Analytics | Subarea::Mining | Subarea::Viz => Area::Data,
        }
    }
}

impl FromStr for Subarea {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subarea::ALL
            .into_iter()
            .find(|sa| sa.code() == s)
            .ok_or_else(|| UnknownCode::new("subarea", s, &Subarea::ALL.map(Subarea::code)))
    }
}

impl fmt::Display for Subarea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Years offered by the year-range pickers: the current year and the nine before
/// it, newest first.
pub fn year_options(current_year: i32) -> Vec<i32> {
    (0..YEAR_OPTION_COUNT).map(|i| current_year - i).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_str() {
        for career in Career::ALL {
            assert_eq!(career.code().parse::<Career>(), Ok(career));
        }
        for modality in Modality::ALL {
            assert_eq!(modality.code().parse::<Modality>(), Ok(modality));
        }
        for subarea in Subarea::ALL {
            assert_eq!(subarea.code().parse::<Subarea>(), Ok(subarea));
        }
    }

    #[test]
    fn unknown_code_lists_expected_values() {
        let err = "medicina".parse::<Career>().unwrap_err();
        assert_eq!(err.kind, "career");
        assert_eq!(err.code, "medicina");
        assert!(err.to_string().contains("informatica, sistemas"));
    }

    #[test]
    fn every_subarea_is_listed_under_its_parent() {
        for subarea in Subarea::ALL {
            assert!(subarea.area().subareas().contains(&subarea));
        }
        let listed: usize = Area::ALL.iter().map(|a| a.subareas().len()).sum();
        assert_eq!(listed, Subarea::ALL.len());
    }

    #[test]
    fn modality_labels_match_record_conventions() {
        assert_eq!(Modality::Dirigido.label(), "Trabajo Dirigido");
        assert_eq!(Modality::Adscripcion.label(), "Trabajo por Adscripción");
    }

    #[test]
    fn year_options_are_newest_first() {
        let years = year_options(2025);
        assert_eq!(years.len(), 10);
        assert_eq!(years.first(), Some(&2025));
        assert_eq!(years.last(), Some(&2016));
    }
}
