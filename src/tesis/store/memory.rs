use super::{ensure_unique_ids, RecordStore};
use crate::error::Result;
use crate::model::Record;

/// In-memory storage for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        ensure_unique_ids(&records)?;
        Ok(Self { records })
    }
}

impl RecordStore for InMemoryStore {
    fn records(&self) -> &[Record] {
        &self.records
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::catalog::{Area, Career, Modality, Subarea};

    fn record(id: &str, title: &str, year: &str, career: Career, kind: Modality) -> Record {
        Record::new(
            id,
            title,
            format!("Autor {}", id),
            year,
            career.label(),
            kind.label(),
        )
    }

    /// Ten records, one per year from 2015 to 2024, across three careers and
    /// listed out of chronological order. Seven are Informática, five of those
    /// from 2020 on.
    pub fn sample_records() -> Vec<Record> {
        vec![
            record("1", "Redes neuronales para diagnóstico", "2019", Career::Informatica, Modality::Tesis)
                .with_tutor("Lic. María Rodríguez")
                .with_keywords(["deep learning", "salud"])
                .with_area(Area::Ia.label(), Some(Subarea::Dl.label())),
            record("2", "Chatbot universitario", "2024", Career::Informatica, Modality::Proyecto)
                .with_tutor("Ing. Carlos Gutiérrez")
                .with_summary("Asistente conversacional para consultas de estudiantes.")
                .with_area(Area::Ia.label(), Some(Subarea::Nlp.label())),
            record("3", "Gestión de inventarios", "2015", Career::Sistemas, Modality::Dirigido)
                .with_keywords(["erp", "logística"]),
            record("4", "Detección de intrusos en redes", "2022", Career::Informatica, Modality::Tesis)
                .with_tutor("Ing. Carlos Gutiérrez")
                .with_area(Area::Security.label(), Some(Subarea::Network.label())),
            record("5", "Puentes de hormigón pretensado", "2017", Career::Civil, Modality::Tesina)
                .with_summary("Análisis estructural de puentes de luz media."),
            record("6", "Aplicación móvil de turismo", "2020", Career::Informatica, Modality::Adscripcion)
                .with_area(Area::Mobile.label(), Some(Subarea::Cross.label())),
            record("7", "Compiladores didácticos", "2016", Career::Informatica, Modality::Tesis),
            record("8", "Visualización de datos climáticos", "2023", Career::Informatica, Modality::Dirigido)
                .with_area(Area::Data.label(), Some(Subarea::Viz.label())),
            record("9", "Red de sensores para riego", "2018", Career::Sistemas, Modality::Proyecto)
                .with_tutor("Lic. Jorge Vargas"),
            record("10", "Portal de empleo", "2021", Career::Informatica, Modality::Proyecto)
                .with_area(Area::Web.label(), Some(Subarea::Backend.label())),
        ]
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_sample_records(mut self) -> Self {
            self.store.records.extend(sample_records());
            self
        }

        pub fn with_record(mut self, record: Record) -> Self {
            self.store.records.push(record);
            self
        }
    }
}
