use crate::model::Attraction;
use serde::{Deserialize, Serialize};

/// The public shape of an attraction in query results.
///
/// Store bookkeeping (timestamps) is left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttractionView {
    pub id: String,
    pub name: String,
    pub photo: Option<String>,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub environment_class: Option<String>,
    pub scenery_class: Option<String>,
    pub category_class: Option<String>,
}

impl From<Attraction> for AttractionView {
    fn from(record: Attraction) -> Self {
        Self {
            id: record.id,
            name: record.name,
            photo: record.photo,
            rating: record.rating,
            description: record.description,
            lat: record.lat,
            lon: record.lon,
            environment_class: record.environment_class,
            scenery_class: record.scenery_class,
            category_class: record.category_class,
        }
    }
}

impl From<&Attraction> for AttractionView {
    fn from(record: &Attraction) -> Self {
        Self::from(record.clone())
    }
}

/// Project every record, keeping order.
pub fn project<I>(records: I) -> Vec<AttractionView>
where
    I: IntoIterator<Item = Attraction>,
{
    records.into_iter().map(AttractionView::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Axis;

    #[test]
    fn projection_keeps_order_and_drops_timestamps() {
        let records = vec![
            Attraction::with_id("b", "Second").rated(3.0),
            Attraction::with_id("a", "First")
                .located(-8.4, 115.2)
                .classed(Axis::Scenery, "rice terrace"),
        ];
        let views = project(records);

        assert_eq!(views[0].id, "b");
        assert_eq!(views[1].id, "a");
        assert_eq!(views[1].scenery_class.as_deref(), Some("rice terrace"));

        let json = serde_json::to_value(&views[1]).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("created_at"));
        assert!(!obj.contains_key("updated_at"));
        assert_eq!(obj.len(), 10);
    }
}
