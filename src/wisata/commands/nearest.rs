use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WisataError};
use crate::model::GeoPoint;
use crate::query::projection::project;
use crate::query::{nearest, DistanceMetric};
use crate::store::AttractionStore;

pub fn run<S: AttractionStore>(
    store: &S,
    origin: GeoPoint,
    limit: usize,
    metric: DistanceMetric,
) -> Result<CmdResult> {
    if limit == 0 {
        return Err(WisataError::InvalidInput("Limit must be at least 1".into()));
    }
    let ranked = nearest(store.scan()?, origin, limit, metric);

    let mut result = CmdResult::default();
    if ranked.is_empty() {
        result.add_message(CmdMessage::info("No attractions with coordinates"));
    }
    Ok(result.with_listed(project(ranked)))
}
