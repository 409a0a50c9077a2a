use crate::commands::CmdResult;
use crate::error::{Result, WisataError};
use crate::query::projection::project;
use crate::query::top_rated;
use crate::store::AttractionStore;

pub fn run<S: AttractionStore>(store: &S, limit: usize) -> Result<CmdResult> {
    if limit == 0 {
        return Err(WisataError::InvalidInput("Limit must be at least 1".into()));
    }
    let ranked = top_rated(store.scan()?, limit);
    Ok(CmdResult::default().with_listed(project(ranked)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Attraction;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_best_rated_first() {
        let store = StoreFixture::new().with_sample_catalog().store;
        let result = run(&store, 2).unwrap();

        let ids: Vec<_> = result.listed.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["r2", "r1"]);
    }

    #[test]
    fn unrated_records_trail() {
        let store = StoreFixture::new()
            .with_unrated("u", "Unrated Spot")
            .with(Attraction::with_id("low", "Low Spot").rated(1.0))
            .store;
        let result = run(&store, 10).unwrap();

        let ids: Vec<_> = result.listed.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["low", "u"]);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let store = StoreFixture::new().with_sample_catalog().store;
        assert!(matches!(run(&store, 0), Err(WisataError::InvalidInput(_))));
    }
}
