use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::projection::project;
use crate::query::{AxisFilter, MatchMode, Selection};
use crate::store::AttractionStore;
use tracing::debug;

/// Look records up by one axis, or by two axes at once.
pub fn run<S: AttractionStore>(
    store: &S,
    filters: Vec<AxisFilter>,
    mode: MatchMode,
) -> Result<CmdResult> {
    let selection = Selection::from_filters(filters)?;
    let matched = selection.apply(store.scan()?, mode);
    debug!(%selection, %mode, matched = matched.len(), "axis lookup");

    let mut result = CmdResult::default();
    if matched.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No attractions match {}",
            selection
        )));
    }
    Ok(result.with_listed(project(matched)))
}
