use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WisataError};
use crate::model::{AttractionPatch, GeoPoint};
use crate::store::AttractionStore;

pub fn run<S: AttractionStore>(
    store: &mut S,
    id: &str,
    mut patch: AttractionPatch,
) -> Result<CmdResult> {
    if let Some(name) = patch.name.as_mut() {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(WisataError::InvalidInput("Name cannot be empty".into()));
        }
        *name = trimmed.to_string();
    }
    GeoPoint::check(patch.lat, patch.lon)?;

    let mut result = CmdResult::default();
    if patch.is_empty() {
        let record = store.get(id)?;
        result.add_message(CmdMessage::info(format!(
            "Nothing to update ({}): {}",
            record.id, record.name
        )));
        return Ok(result.with_affected(vec![record]));
    }

    let record = store.update(id, &patch)?;
    result.add_message(CmdMessage::success(format!(
        "Attraction updated ({}): {}",
        record.id, record.name
    )));
    Ok(result.with_affected(vec![record]))
}
