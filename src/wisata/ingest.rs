//! Shaping places-lookup candidates into attraction records.
//!
//! The lookup request itself happens elsewhere; this module only knows the
//! shape of a candidate in the response and how one becomes an
//! [`Attraction`].

use crate::error::{Result, WisataError};
use crate::model::Attraction;
use serde::Deserialize;

/// One entry of a places-lookup response's `candidates` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceCandidate {
    pub name: Option<String>,
    #[serde(default)]
    pub rating: Option<serde_json::Value>,
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub photos: Vec<PlacePhoto>,
    pub geometry: Option<PlaceGeometry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlacePhoto {
    pub photo_reference: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceGeometry {
    pub location: PlaceLocation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceLocation {
    #[serde(default)]
    pub lat: Option<serde_json::Value>,
    #[serde(default)]
    pub lng: Option<serde_json::Value>,
}

/// Either a saved lookup response or a bare array of candidates.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CandidateDocument {
    Response {
        #[serde(default)]
        candidates: Vec<PlaceCandidate>,
        status: Option<String>,
        error_message: Option<String>,
    },
    List(Vec<PlaceCandidate>),
}

/// Parse a candidate document.
///
/// A lookup response yields only its best match, the first candidate, and
/// must carry status `OK` when a status is present. A bare array yields every
/// element.
pub fn parse_candidates(json: &str) -> Result<Vec<PlaceCandidate>> {
    let doc: CandidateDocument = serde_json::from_str(json)?;
    match doc {
        CandidateDocument::Response {
            candidates,
            status,
            error_message,
        } => {
            if let Some(status) = status.filter(|s| s != "OK") {
                return Err(WisataError::InvalidInput(format!(
                    "Place lookup failed ({}): {}",
                    status,
                    error_message.unwrap_or_else(|| "no error message".to_string())
                )));
            }
            let best = candidates.into_iter().next().ok_or_else(|| {
                WisataError::InvalidInput("Place lookup returned no candidates".to_string())
            })?;
            Ok(vec![best])
        }
        CandidateDocument::List(candidates) => Ok(candidates),
    }
}

fn number(value: &Option<serde_json::Value>) -> Option<f64> {
    value
        .as_ref()
        .and_then(|v| v.as_f64())
        .filter(|n| n.is_finite())
}

impl PlaceCandidate {
    /// Form a new record with a fresh id. Fields the lookup did not return
    /// stay absent.
    pub fn into_attraction(self, photo_url_base: &str) -> Result<Attraction> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| WisataError::InvalidInput("Place candidate has no name".to_string()))?;

        let mut record = Attraction::new(name);
        record.rating = number(&self.rating);
        record.description = self.formatted_address.filter(|a| !a.trim().is_empty());
        record.photo = self.photos.first().map(|photo| {
            format!(
                "{}?maxwidth=400&photoreference={}",
                photo_url_base, photo.photo_reference
            )
        });
        if let Some(geometry) = self.geometry {
            record.lat = number(&geometry.location.lat);
            record.lon = number(&geometry.location.lng);
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://photos.example/place/photo";

    #[test]
    fn full_candidate_becomes_record() {
        let json = r#"{
            "candidates": [{
                "name": "Candi Prambanan",
                "rating": 4.7,
                "formatted_address": "Jl. Raya Solo - Yogyakarta No.16",
                "photos": [{"photo_reference": "ref-1"}, {"photo_reference": "ref-2"}],
                "geometry": {"location": {"lat": -7.752, "lng": 110.491}}
            }],
            "status": "OK"
        }"#;
        let mut candidates = parse_candidates(json).unwrap();
        let record = candidates.remove(0).into_attraction(BASE).unwrap();

        assert_eq!(record.name, "Candi Prambanan");
        assert_eq!(record.rating, Some(4.7));
        assert_eq!(
            record.photo.as_deref(),
            Some("https://photos.example/place/photo?maxwidth=400&photoreference=ref-1")
        );
        assert_eq!(record.lat, Some(-7.752));
        assert_eq!(record.lon, Some(110.491));
        assert!(record.location().is_some());
        assert!(!record.id.is_empty());
    }

    #[test]
    fn response_yields_only_the_best_match() {
        let json = r#"{
            "candidates": [
                {"name": "Pantai Kuta"},
                {"name": "Kuta Beach Hotel"},
                {"name": "Kuta Square"}
            ],
            "status": "OK"
        }"#;
        let candidates = parse_candidates(json).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name.as_deref(), Some("Pantai Kuta"));
    }

    #[test]
    fn failed_lookup_status_is_rejected() {
        let json = r#"{
            "candidates": [],
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        }"#;
        match parse_candidates(json) {
            Err(WisataError::InvalidInput(msg)) => {
                assert!(msg.contains("REQUEST_DENIED"));
                assert!(msg.contains("API key is invalid"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn ok_response_without_candidates_is_rejected() {
        let json = r#"{"candidates": [], "status": "OK"}"#;
        assert!(matches!(
            parse_candidates(json),
            Err(WisataError::InvalidInput(_))
        ));
    }

    #[test]
    fn bare_array_yields_every_candidate() {
        let json = r#"[{"name": "A"}, {"name": "B"}, {"name": "C"}]"#;
        assert_eq!(parse_candidates(json).unwrap().len(), 3);
    }

    #[test]
    fn sparse_candidate_leaves_fields_absent() {
        let json = r#"[{"name": "Curug Tanpa Nama", "rating": "No rating"}]"#;
        let mut candidates = parse_candidates(json).unwrap();
        let record = candidates.remove(0).into_attraction(BASE).unwrap();

        assert_eq!(record.rating, None);
        assert_eq!(record.photo, None);
        assert_eq!(record.description, None);
        assert!(record.location().is_none());
    }

    #[test]
    fn nameless_candidate_is_rejected() {
        let candidate = PlaceCandidate {
            name: Some("   ".into()),
            ..Default::default()
        };
        assert!(matches!(
            candidate.into_attraction(BASE),
            Err(WisataError::InvalidInput(_))
        ));
    }

    #[test]
    fn each_candidate_gets_its_own_id() {
        let json = r#"[{"name": "A"}, {"name": "B"}]"#;
        let records: Vec<_> = parse_candidates(json)
            .unwrap()
            .into_iter()
            .map(|c| c.into_attraction(BASE).unwrap())
            .collect();
        assert_ne!(records[0].id, records[1].id);
    }
}
