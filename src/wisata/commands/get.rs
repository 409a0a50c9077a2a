use crate::commands::CmdResult;
use crate::error::Result;
use crate::query::AttractionView;
use crate::store::AttractionStore;

pub fn run<S: AttractionStore>(store: &S, ids: &[String]) -> Result<CmdResult> {
    let mut views = Vec::with_capacity(ids.len());
    for id in ids {
        views.push(AttractionView::from(store.get(id)?));
    }
    Ok(CmdResult::default().with_listed(views))
}
