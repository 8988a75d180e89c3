use crate::commands::CmdResult;
use crate::error::Result;
use crate::recent::RecentItems;
use crate::store::RecordStore;

/// Resolves a record for preview and records the view in the recent list.
pub fn run<S: RecordStore>(store: &S, recent: &RecentItems, id: &str) -> Result<CmdResult> {
    let record = store.get_record(id)?;
    let recent = recent.with(record);
    Ok(CmdResult::default()
        .with_listed_records(vec![record.clone()])
        .with_recent(recent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TesisError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn preview_returns_record_and_updates_recent() {
        let fixture = StoreFixture::new().with_sample_records();
        let first = run(&fixture.store, &RecentItems::new(), "5").unwrap();
        assert_eq!(first.listed_records[0].id, "5");
        assert_eq!(first.recent.len(), 1);

        let second = run(&fixture.store, &first.recent, "2").unwrap();
        let ids: Vec<&str> = second.recent.items().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "5"]);
    }

    #[test]
    fn unknown_id_is_an_error_and_recent_is_untouched() {
        let fixture = StoreFixture::new().with_sample_records();
        let recent = RecentItems::new();
        let err = run(&fixture.store, &recent, "404").unwrap_err();
        assert!(matches!(err, TesisError::RecordNotFound(ref id) if id == "404"));
        assert!(recent.is_empty());
    }
}
