use crate::commands::CmdResult;
use crate::error::Result;
use crate::query::projection::project;
use crate::store::AttractionStore;

/// The whole catalog, sorted by name.
pub fn run<S: AttractionStore>(store: &S) -> Result<CmdResult> {
    let mut records: Vec<_> = store.scan()?.collect();
    records.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    Ok(CmdResult::default().with_listed(project(records)))
}
