use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ingest::PlaceCandidate;
use crate::model::{AttractionPatch, GeoPoint};
use crate::store::AttractionStore;

/// Create one record per candidate.
///
/// `classes` is merged into every new record, so a batch can be classified
/// on the way in. The first failure stops the import; records created before
/// it stay.
pub fn run<S: AttractionStore>(
    store: &mut S,
    candidates: Vec<PlaceCandidate>,
    photo_url_base: &str,
    classes: &AttractionPatch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for candidate in candidates {
        let mut record = candidate.into_attraction(photo_url_base)?;
        classes.apply_to(&mut record);
        GeoPoint::check(record.lat, record.lon)?;
        store.create(&record)?;
        result.add_message(CmdMessage::success(format!(
            "Attraction imported ({}): {}",
            record.id, record.name
        )));
        result.affected.push(record);
    }

    if result.affected.is_empty() {
        result.add_message(CmdMessage::warning("No candidates to import"));
    }
    Ok(result)
}
