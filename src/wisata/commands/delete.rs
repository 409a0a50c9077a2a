use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WisataError};
use crate::store::AttractionStore;

/// Delete records by id.
///
/// With `missing_ok`, an id that is already gone counts as deleted, which
/// makes the call safe to retry.
pub fn run<S: AttractionStore>(store: &mut S, ids: &[String], missing_ok: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let record = match store.get(id) {
            Ok(record) => record,
            Err(WisataError::NotFound(_)) if missing_ok => {
                result.add_message(CmdMessage::info(format!("Already absent: {}", id)));
                continue;
            }
            Err(e) => return Err(e),
        };

        match store.delete(id) {
            Ok(()) => {}
            Err(WisataError::NotFound(_)) if missing_ok => {}
            Err(e) => return Err(e),
        }
        result.add_message(CmdMessage::success(format!(
            "Attraction deleted ({}): {}",
            record.id, record.name
        )));
        result.affected.push(record);
    }

    Ok(result)
}
