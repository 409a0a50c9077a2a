use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WisataError};
use crate::model::{Attraction, GeoPoint};
use crate::store::AttractionStore;

pub fn run<S: AttractionStore>(store: &mut S, mut record: Attraction) -> Result<CmdResult> {
    let name = record.name.trim().to_string();
    if name.is_empty() {
        return Err(WisataError::InvalidInput("Name cannot be empty".into()));
    }
    if record.id.trim().is_empty() {
        return Err(WisataError::InvalidInput("Id cannot be empty".into()));
    }
    GeoPoint::check(record.lat, record.lon)?;
    record.name = name;

    store.create(&record)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Attraction created ({}): {}",
        record.id, record.name
    )));
    Ok(result.with_affected(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_with_generated_id() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, Attraction::new("  Danau Toba ")).unwrap();

        let created = &result.affected[0];
        assert_eq!(created.name, "Danau Toba");
        assert_eq!(store.get(&created.id).unwrap().name, "Danau Toba");
    }

    #[test]
    fn rejects_blank_name() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, Attraction::new("   "));
        assert!(matches!(result, Err(WisataError::InvalidInput(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_client_id_fails() {
        let mut store = InMemoryStore::new();
        run(&mut store, Attraction::with_id("toba", "Danau Toba")).unwrap();
        let result = run(&mut store, Attraction::with_id("toba", "Another"));
        assert!(matches!(result, Err(WisataError::AlreadyExists(_))));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, Attraction::new("Nowhere").located(500.0, 106.8));
        assert!(matches!(result, Err(WisataError::InvalidCoordinate(_))));

        let mut half = Attraction::new("Half");
        half.lon = Some(-181.0);
        assert!(matches!(
            run(&mut store, half),
            Err(WisataError::InvalidCoordinate(_))
        ));
        assert!(store.is_empty());
    }
}
