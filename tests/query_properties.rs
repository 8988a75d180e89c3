use tesis::api::{CatalogApi, SearchRequest};
use tesis::catalog::{Career, Modality};
use tesis::filters::FilterState;
use tesis::model::Record;
use tesis::page::{paginate, total_pages, PAGE_SIZE};
use tesis::query::{filter_records, query, SortKey};
use tesis::recent::{add_recent, RECENT_CAPACITY};
use tesis::session::Session;
use tesis::store::memory::InMemoryStore;

/// Ten records, 2015 through 2024, spread over three careers and stored out of
/// chronological order.
fn catalog() -> Vec<Record> {
    let rows = [
        ("1", "Redes neuronales para diagnóstico", "2019", Career::Informatica, Modality::Tesis),
        ("2", "Chatbot universitario", "2024", Career::Informatica, Modality::Proyecto),
        ("3", "Gestión de inventarios", "2015", Career::Sistemas, Modality::Dirigido),
        ("4", "Visión artificial en cultivos", "2022", Career::Informatica, Modality::Tesis),
        ("5", "Puentes de hormigón", "2017", Career::Civil, Modality::Tesis),
        ("6", "Aplicación móvil de turismo", "2020", Career::Informatica, Modality::Proyecto),
        ("7", "Compiladores educativos", "2016", Career::Informatica, Modality::Adscripcion),
        ("8", "Análisis de sentimiento en redes", "2023", Career::Informatica, Modality::Tesis),
        ("9", "Sistema de turnos médicos", "2018", Career::Sistemas, Modality::Proyecto),
        ("10", "Blockchain para trazabilidad", "2021", Career::Informatica, Modality::Dirigido),
    ];
    let mut records: Vec<Record> = rows
        .into_iter()
        .map(|(id, title, year, career, kind)| {
            Record::new(id, title, format!("Autor {}", id), year, career.label(), kind.label())
                .with_tutor(format!("Tutor {}", id))
        })
        .collect();
    records[2] = records[2].clone().with_keywords(["erp", "logística"]);
    records[4] = records[4]
        .clone()
        .with_summary("Estudio de cargas en estructuras de concreto armado.");
    records[6] = records[6]
        .clone()
        .with_keywords(["parsers", "docencia"])
        .with_summary("Herramienta para enseñar análisis sintáctico.");
    records
}

/// Every field the text search looks at, joined and lowercased.
fn searchable_text(record: &Record) -> String {
    let mut parts = vec![
        record.title.clone(),
        record.author.clone(),
        record.career.clone(),
    ];
    parts.extend(record.keywords.clone().unwrap_or_default());
    parts.extend(record.summary.clone());
    parts.join(" ").to_lowercase()
}

fn ids(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn every_text_match_contains_the_term() {
    let records = catalog();
    let terms = [
        "redes",
        "REDES",
        "autor 1",
        "informática",
        "tur",
        "logística",
        "concreto",
        "docencia",
    ];
    for term in terms {
        let mut filters = FilterState::new();
        filters.search_term = term.to_string();
        let needle = term.to_lowercase();
        let matched = filter_records(&records, &filters);
        assert!(!matched.is_empty(), "nothing matched '{}'", term);
        for record in matched {
            assert!(
                searchable_text(record).contains(&needle),
                "{} matched '{}'",
                record.id,
                term
            );
        }
    }
}

#[test]
fn keyword_and_abstract_hits_are_found() {
    let records = catalog();
    for (term, id) in [("erp", "3"), ("concreto armado", "5"), ("sintáctico", "7")] {
        let mut filters = FilterState::new();
        filters.search_term = term.to_string();
        assert_eq!(ids(&filter_records(&records, &filters)), vec![id.to_string()]);
    }
}

#[test]
fn full_and_empty_modality_selections_are_equivalent() {
    let records = catalog();
    let mut full = FilterState::new();
    full.selected_careers.insert(Career::Informatica);
    full.year_from = Some(2018);
    full.selected_modalities = Modality::ALL.into_iter().collect();

    let mut empty = full.clone();
    empty.selected_modalities.clear();

    for sort in SortKey::ALL {
        let with_all = query(&records, &full, sort);
        assert_eq!(with_all.len(), 6);
        assert_eq!(ids(&with_all), ids(&query(&records, &empty, sort)));
    }

    let mut strict = full.clone();
    strict.selected_modalities.remove(&Modality::Tesis);
    assert!(query(&records, &strict, SortKey::Relevance).len() < 6);
}

#[test]
fn pages_concatenate_to_the_full_result() {
    let records = catalog();
    let sorted = query(&records, &FilterState::new(), SortKey::DateDesc);
    let pages = total_pages(sorted.len());
    assert_eq!(pages, sorted.len().div_ceil(PAGE_SIZE));

    let joined: Vec<&Record> = (1..=pages)
        .flat_map(|page| paginate(&sorted, page).iter().copied())
        .collect();
    assert_eq!(ids(&joined), ids(&sorted));
    assert!(paginate(&sorted, pages + 1).is_empty());
}

#[test]
fn querying_twice_gives_the_same_answer() {
    let records = catalog();
    let mut filters = FilterState::new();
    filters.search_term = "de".to_string();
    filters.selected_careers.insert(Career::Informatica);

    for sort in SortKey::ALL {
        assert_eq!(
            ids(&query(&records, &filters, sort)),
            ids(&query(&records, &filters, sort))
        );
    }
}

#[test]
fn recent_list_is_bounded_and_unique() {
    let records = catalog();
    let mut recent: Vec<Record> = Vec::new();
    for record in records.iter().chain(records.iter().rev()) {
        recent = add_recent(&recent, record);
        assert!(recent.len() <= RECENT_CAPACITY);
        assert_eq!(recent[0].id, record.id);

        let mut seen: Vec<&str> = recent.iter().map(|r| r.id.as_str()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), recent.len());
    }
}

#[test]
fn recent_informatica_theses_newest_first() {
    let records = catalog();
    let mut session = Session::new(SortKey::DateDesc);
    session.edit(|draft| {
        draft.year_from = Some(2020);
        draft.selected_careers.insert(Career::Informatica);
    });
    session.commit().unwrap();

    let view = session.results(&records);
    assert_eq!(view.page.total_results, 5);
    assert_eq!(view.page.total_pages, 2);
    assert_eq!(
        view.page.items.iter().map(|r| r.year.as_str()).collect::<Vec<_>>(),
        vec!["2024", "2023", "2022", "2021"]
    );

    assert_eq!(session.go_to_page(&records, 2), 2);
    let second = session.results(&records);
    assert_eq!(second.page.items.len(), 1);
    assert_eq!(second.page.items[0].year, "2020");
}

#[test]
fn api_search_rejects_invalid_filters_without_results() {
    let store = InMemoryStore::from_records(catalog()).unwrap();
    let temp = tempfile::tempdir().unwrap();
    let api = CatalogApi::new(store, temp.path().to_path_buf());

    let mut request = SearchRequest::default();
    request.filters.search_term = "1234".to_string();
    request.filters.selected_modalities.clear();

    match api.search(&request) {
        Err(tesis::error::TesisError::Validation(errors)) => {
            assert_eq!(errors.messages().len(), 2);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}
