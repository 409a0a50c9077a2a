//! Ranking: top-N by rating and nearest-K by distance.
//!
//! Both rankings use a stable sort, so equal keys keep input order.

use super::distance::DistanceMetric;
use crate::model::{Attraction, GeoPoint};

/// Sort key for ratings. Unrated records sort below every rated one.
fn rating_key(record: &Attraction) -> f64 {
    record
        .rating
        .filter(|r| r.is_finite())
        .unwrap_or(f64::NEG_INFINITY)
}

/// The `n` highest-rated records, best first.
pub fn top_rated<I>(records: I, n: usize) -> Vec<Attraction>
where
    I: IntoIterator<Item = Attraction>,
{
    let mut ranked: Vec<Attraction> = records.into_iter().collect();
    ranked.sort_by(|a, b| rating_key(b).total_cmp(&rating_key(a)));
    ranked.truncate(n);
    ranked
}

/// The `k` closest records to `origin`, with their distances.
///
/// Records without usable coordinates are skipped, not placed at `(0, 0)`.
pub fn nearest_scored<I>(
    records: I,
    origin: GeoPoint,
    k: usize,
    metric: DistanceMetric,
) -> Vec<(Attraction, f64)>
where
    I: IntoIterator<Item = Attraction>,
{
    let mut scored: Vec<(Attraction, f64)> = records
        .into_iter()
        .filter_map(|r| {
            let d = metric.distance(r.location()?, origin);
            Some((r, d))
        })
        .collect();
    scored.sort_by(|(_, a), (_, b)| a.total_cmp(b));
    scored.truncate(k);
    scored
}

/// The `k` closest records to `origin`, closest first.
pub fn nearest<I>(records: I, origin: GeoPoint, k: usize, metric: DistanceMetric) -> Vec<Attraction>
where
    I: IntoIterator<Item = Attraction>,
{
    nearest_scored(records, origin, k, metric)
        .into_iter()
        .map(|(r, _)| r)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::distance::planar;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::AttractionStore;

    fn catalog() -> Vec<Attraction> {
        let store = StoreFixture::new().with_sample_catalog().store;
        store.scan().unwrap().collect()
    }

    fn ids(records: &[Attraction]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn origin() -> GeoPoint {
        GeoPoint::new(-6.25, 106.85).unwrap()
    }

    #[test]
    fn top_rated_best_first() {
        assert_eq!(ids(&top_rated(catalog(), 2)), vec!["r2", "r1"]);
        assert_eq!(ids(&top_rated(catalog(), 10)), vec!["r2", "r1", "r3"]);
    }

    #[test]
    fn top_rated_puts_unrated_last() {
        let mut records = vec![
            Attraction::with_id("none-1", "Unrated A"),
            Attraction::with_id("low", "Low").rated(0.5),
            Attraction::with_id("zero", "Zero").rated(0.0),
            Attraction::with_id("none-2", "Unrated B"),
        ];
        records.extend(catalog());

        let ranked = top_rated(records, 10);
        assert_eq!(
            ids(&ranked),
            vec!["r2", "r1", "r3", "low", "zero", "none-1", "none-2"]
        );
    }

    #[test]
    fn top_rated_ties_keep_scan_order() {
        let records = vec![
            Attraction::with_id("a", "A").rated(4.0),
            Attraction::with_id("b", "B").rated(4.5),
            Attraction::with_id("c", "C").rated(4.0),
            Attraction::with_id("d", "D").rated(4.0),
        ];
        assert_eq!(ids(&top_rated(records, 3)), vec!["b", "a", "c"]);
    }

    #[test]
    fn top_rated_zero_is_empty() {
        assert!(top_rated(catalog(), 0).is_empty());
    }

    #[test]
    fn nearest_closest_first() {
        let ranked = nearest(catalog(), origin(), 2, DistanceMetric::Planar);
        assert_eq!(ids(&ranked), vec!["r1", "r2"]);
    }

    #[test]
    fn nearest_skips_records_without_coordinates() {
        let mut records = catalog();
        // Would win outright if treated as (0, 0) against an origin at (0, 0).
        records.push(Attraction::with_id("nowhere", "No Coordinates"));
        let mut half = Attraction::with_id("half", "Only Latitude");
        half.lat = Some(0.0);
        records.push(half);

        let origin = GeoPoint::new(0.0, 0.0).unwrap();
        let ranked = nearest(records, origin, 10, DistanceMetric::Planar);
        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|r| r.location().is_some()));
    }

    #[test]
    fn nearest_distances_are_non_decreasing() {
        let mut records = catalog();
        for (i, (lat, lon)) in [(-6.9, 107.6), (-6.26, 106.84), (-7.8, 110.4), (-6.25, 106.85)]
            .into_iter()
            .enumerate()
        {
            records.push(Attraction::with_id(format!("p{}", i), "Point").located(lat, lon));
        }

        let scored = nearest_scored(records, origin(), 10, DistanceMetric::Planar);
        assert_eq!(scored.len(), 7);
        assert!(scored.windows(2).all(|w| w[0].1 <= w[1].1));
        assert_eq!(scored[0].0.id, "p3");
        assert_eq!(scored[0].1, 0.0);
        for (record, d) in &scored {
            let location = record.location().unwrap();
            assert_eq!(*d, planar(location, origin()));
        }
    }

    #[test]
    fn nearest_ties_keep_scan_order() {
        let records = vec![
            Attraction::with_id("east", "East").located(0.0, 1.0),
            Attraction::with_id("north", "North").located(1.0, 0.0),
            Attraction::with_id("west", "West").located(0.0, -1.0),
        ];
        let origin = GeoPoint::new(0.0, 0.0).unwrap();
        let ranked = nearest(records, origin, 2, DistanceMetric::Planar);
        assert_eq!(ids(&ranked), vec!["east", "north"]);
    }

    #[test]
    fn haversine_ranking_uses_kilometres() {
        // Planar puts r1 first; on the sphere r2 is a few metres closer.
        let scored = nearest_scored(catalog(), origin(), 1, DistanceMetric::Haversine);
        assert_eq!(scored[0].0.id, "r2");
        assert!(scored[0].1 > 7.0 && scored[0].1 < 9.0, "got {}", scored[0].1);
    }
}
