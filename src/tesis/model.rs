use serde::{Deserialize, Serialize};

/// Shown in place of a missing abstract.
pub const ABSTRACT_PLACEHOLDER: &str = "This work presents a thorough investigation into the application of modern techniques in the selected field of study. Results obtained through rigorous experimentation are analyzed and new methodologies are proposed to address the problems identified in the current literature.";

/// Shown in place of any other missing optional field.
pub const MISSING_FIELD: &str = "N/A";

/// One catalog entry (thesis, degree project, ...).
///
/// Records are loaded once and never mutated. `career`, `kind`, `area` and
/// `subarea` hold display labels (see [`crate::catalog`]), not codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Four-digit year, kept as text the way the source data stores it.
    pub year: String,
    pub career: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutor: Option<String>,
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subarea: Option<String>,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        career: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            year: year.into(),
            career: career.into(),
            kind: kind.into(),
            tutor: None,
            summary: None,
            keywords: None,
            pdf_url: None,
            area: None,
            subarea: None,
        }
    }

    pub fn with_tutor(mut self, tutor: impl Into<String>) -> Self {
        self.tutor = Some(tutor.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_keywords<I, K>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_area(mut self, area: impl Into<String>, subarea: Option<&str>) -> Self {
        self.area = Some(area.into());
        self.subarea = subarea.map(str::to_string);
        self
    }

    pub fn with_pdf_url(mut self, url: impl Into<String>) -> Self {
        self.pdf_url = Some(url.into());
        self
    }

    /// Numeric year, or `None` when the stored text is not a number.
    pub fn year_value(&self) -> Option<u32> {
        self.year.trim().parse().ok()
    }

    /// Location of the full document, falling back to the conventional
    /// `/pdfs/{id}.pdf` path.
    pub fn document_url(&self) -> String {
        self.pdf_url
            .clone()
            .unwrap_or_else(|| format!("/pdfs/{}.pdf", self.id))
    }

    /// File name offered when downloading the document: every non
    /// alphanumeric ASCII character of the title becomes `_`.
    pub fn download_file_name(&self) -> String {
        let stem: String = self
            .title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        format!("{}.pdf", stem)
    }

    pub fn summary_or_placeholder(&self) -> &str {
        self.summary.as_deref().unwrap_or(ABSTRACT_PLACEHOLDER)
    }

    pub fn tutor_or_placeholder(&self) -> &str {
        self.tutor.as_deref().unwrap_or(MISSING_FIELD)
    }

    /// "Area / Subarea" as displayed in previews.
    pub fn area_display(&self) -> String {
        match (&self.area, &self.subarea) {
            (Some(area), Some(sub)) => format!("{} / {}", area, sub),
            (Some(area), None) => area.clone(),
            _ => MISSING_FIELD.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new(
            "42",
            "Redes neuronales: ¿qué aprenden?",
            "Ana",
            "2021",
            "Ingeniería Informática",
            "Tesis",
        )
    }

    #[test]
    fn deserializes_source_field_names() {
        let json = r#"{
            "id": "7",
            "title": "T",
            "author": "A",
            "year": "2019",
            "career": "Ingeniería Civil",
            "type": "Tesina",
            "abstract": "Resumen",
            "pdfUrl": "/docs/7.pdf"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, "Tesina");
        assert_eq!(record.summary.as_deref(), Some("Resumen"));
        assert_eq!(record.pdf_url.as_deref(), Some("/docs/7.pdf"));
        assert_eq!(record.tutor, None);
        assert_eq!(record.keywords, None);
    }

    #[test]
    fn year_value_parses_numeric_years_only() {
        assert_eq!(sample().year_value(), Some(2021));
        let mut odd = sample();
        odd.year = "s/f".into();
        assert_eq!(odd.year_value(), None);
    }

    #[test]
    fn document_url_falls_back_to_id_path() {
        assert_eq!(sample().document_url(), "/pdfs/42.pdf");
        let linked = sample().with_pdf_url("https://example.org/x.pdf");
        assert_eq!(linked.document_url(), "https://example.org/x.pdf");
    }

    #[test]
    fn download_file_name_replaces_non_alphanumerics() {
        assert_eq!(
            sample().download_file_name(),
            "Redes_neuronales___qu__aprenden_.pdf"
        );
    }

    #[test]
    fn placeholders_cover_missing_fields() {
        let record = sample();
        assert_eq!(record.tutor_or_placeholder(), "N/A");
        assert_eq!(record.summary_or_placeholder(), ABSTRACT_PLACEHOLDER);
        assert_eq!(record.area_display(), "N/A");

        let full = sample()
            .with_tutor("Lic. Rojas")
            .with_area("Inteligencia Artificial", Some("Deep Learning"));
        assert_eq!(full.tutor_or_placeholder(), "Lic. Rojas");
        assert_eq!(full.area_display(), "Inteligencia Artificial / Deep Learning");
    }
}
