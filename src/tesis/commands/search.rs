use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TesisError};
use crate::filters::FilterState;
use crate::model::Record;
use crate::page::{clamp_page, Page};
use crate::query::{filter_records, related, sort_records, SortKey};
use crate::store::RecordStore;
use crate::validation::validate_filters;

/// One committed search: filters, ordering and the requested page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub filters: FilterState,
    pub sort: SortKey,
    pub page: usize,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            sort: SortKey::default(),
            page: 1,
        }
    }
}

/// Validates the filters, then filters, sorts and paginates the store.
///
/// Invalid filters produce [`TesisError::Validation`] and no results. A page
/// past the end is clamped to the last page with a warning.
pub fn run<S: RecordStore>(store: &S, request: &SearchRequest) -> Result<CmdResult> {
    validate_filters(&request.filters).map_err(TesisError::Validation)?;

    let filtered = filter_records(store.records(), &request.filters);
    let related: Vec<Record> = related(&filtered).into_iter().cloned().collect();
    let sorted = sort_records(filtered, &request.filters, request.sort);

    let number = clamp_page(request.page, sorted.len());
    let page = Page::new(&sorted, number).map(Record::clone);

    let mut result = CmdResult::default()
        .with_active_filters(request.filters.active_filters())
        .with_related(related);

    if page.total_results == 0 {
        result.add_message(CmdMessage::info("No records match the current filters."));
    } else if number != request.page {
        result.add_message(CmdMessage::warning(format!(
            "Page {} does not exist, showing page {} of {}.",
            request.page, number, page.total_pages
        )));
    }

    Ok(result.with_page(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Career;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    fn page_ids(result: &CmdResult) -> Vec<&str> {
        result
            .page
            .as_ref()
            .map(|p| p.items.iter().map(|r| r.id.as_str()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn default_request_lists_newest_first() {
        let fixture = StoreFixture::new().with_sample_records();
        let result = run(&fixture.store, &SearchRequest::default()).unwrap();
        assert_eq!(page_ids(&result), vec!["2", "8", "4", "10"]);
        assert!(result.active_filters.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn filters_and_sort_are_applied() {
        let fixture = StoreFixture::new().with_sample_records();
        let mut request = SearchRequest::default();
        request.filters.selected_careers.insert(Career::Sistemas);
        request.sort = SortKey::DateAsc;

        let result = run(&fixture.store, &request).unwrap();
        assert_eq!(page_ids(&result), vec!["3", "9"]);
        assert_eq!(result.active_filters.len(), 1);
    }

    #[test]
    fn related_comes_from_filter_order() {
        let fixture = StoreFixture::new().with_sample_records();
        let mut request = SearchRequest::default();
        request.sort = SortKey::Title;
        let result = run(&fixture.store, &request).unwrap();
        let related: Vec<&str> = result.related.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(related, vec!["1", "2", "3"]);
    }

    #[test]
    fn invalid_filters_are_rejected() {
        let fixture = StoreFixture::new().with_sample_records();
        let mut request = SearchRequest::default();
        request.filters.search_term = "12345".into();

        match run(&fixture.store, &request) {
            Err(TesisError::Validation(errors)) => assert!(errors.search_term.is_some()),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn page_past_the_end_is_clamped() {
        let fixture = StoreFixture::new().with_sample_records();
        let request = SearchRequest {
            page: 9,
            ..SearchRequest::default()
        };
        let result = run(&fixture.store, &request).unwrap();
        let page = result.page.as_ref().unwrap();
        assert_eq!(page.number, 3);
        assert_eq!(page.items.len(), 2);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn empty_result_reports_a_message() {
        let fixture = StoreFixture::new().with_sample_records();
        let mut request = SearchRequest::default();
        request.filters.search_term = "zzz no match".into();
        let result = run(&fixture.store, &request).unwrap();
        let page = result.page.as_ref().unwrap();
        assert_eq!(page.total_results, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }
}
