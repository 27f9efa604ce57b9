//! Payload types returned by the analysis service.
//!
//! The service populates these incrementally (geocoding, content analysis and
//! transit lookups can each fail independently), so every nested field is
//! modeled as explicitly optional. A missing field is an ordinary outcome,
//! never an error; consumers decide section by section what to display.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Top-level response of `POST /api/analyze`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Geocoding outcome for the submitted address.
    #[serde(default)]
    pub geo_data: Option<GeoData>,

    /// Qualitative neighborhood analysis.
    #[serde(default)]
    pub analysis: Option<Analysis>,

    /// Public transport connectivity data.
    #[serde(default)]
    pub transport: Option<Transport>,
}

/// Geocoding data for a Paris address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoData {
    /// Paris district number. Valid values are 1 through 20; anything else
    /// is kept as-is and treated as "unknown district" by consumers.
    #[serde(default)]
    pub arrondissement: Option<i64>,

    /// Resolved display address.
    #[serde(default)]
    pub full_address: Option<String>,

    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub postcode: Option<String>,

    #[serde(default)]
    pub neighborhood: Option<String>,

    #[serde(default)]
    pub district: Option<String>,
}

/// Qualitative analysis of the neighborhood around the address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub overview: Option<Overview>,

    /// Resident word-of-mouth. The service returns either one blob of text
    /// or a list of paragraphs; see [`WordOfMouth`].
    #[serde(default)]
    pub what_locals_say: Option<WordOfMouth>,

    /// Category ratings. Insertion order is display order, hence IndexMap.
    #[serde(default)]
    pub ratings: Option<IndexMap<String, Rating>>,

    /// Key characteristics of the neighborhood.
    #[serde(default)]
    pub highlights: Option<Vec<String>>,

    #[serde(default)]
    pub recommendations: Option<Recommendations>,
}

/// Short neighborhood overview.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Overview {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub three_word_summary: Option<String>,
}

/// Resident commentary, as scraped and summarized by the service.
///
/// Older service versions return a single string, newer ones a list of
/// paragraphs. Both shapes are accepted at the decode boundary and
/// normalized through [`WordOfMouth::paragraphs`]; downstream code only ever
/// sees an ordered sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WordOfMouth {
    /// A single block of text, rendered as one paragraph.
    Single(String),
    /// Ordered paragraphs, rendered in sequence.
    Paragraphs(Vec<String>),
}

impl WordOfMouth {
    /// Normalize either shape into an ordered paragraph sequence.
    pub fn paragraphs(&self) -> Vec<&str> {
        match self {
            WordOfMouth::Single(text) => vec![text.as_str()],
            WordOfMouth::Paragraphs(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

/// A single category rating.
///
/// `score` is kept as a plain integer rather than a range-checked type: the
/// contract says 1-5, but enforcing that here would turn a service bug into
/// a decode failure for the whole payload. Range validation happens where
/// the score is displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub score: i64,

    #[serde(default)]
    pub justification: Option<String>,
}

/// Suggested places and activities near the address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub cafes: Vec<String>,

    #[serde(default)]
    pub restaurants: Vec<String>,

    #[serde(default)]
    pub activities: Vec<String>,
}

impl Recommendations {
    /// True when no list has any entry.
    pub fn is_empty(&self) -> bool {
        self.cafes.is_empty() && self.restaurants.is_empty() && self.activities.is_empty()
    }
}

/// Public transport connectivity around the address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transport {
    /// Overall connectivity score, 1-5.
    #[serde(default)]
    pub connectivity_score: Option<i64>,

    /// Estimated travel times to the major Paris landmarks.
    #[serde(default)]
    pub landmark_travel_times: Option<Vec<LandmarkTravelTime>>,

    /// Stations within walking distance, closest first.
    #[serde(default)]
    pub nearby_stations: Option<Vec<Station>>,

    /// Whether any nearby line runs past midnight on weekends.
    #[serde(default)]
    pub has_late_night_service: Option<bool>,
}

/// Travel time estimate to one landmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandmarkTravelTime {
    #[serde(default)]
    pub landmark: String,

    /// Human-readable estimate, e.g. "12 min walk" or "25 min metro".
    #[serde(default)]
    pub time: String,

    #[serde(default)]
    pub estimated_minutes: Option<i64>,
}

/// One nearby metro/RER/tram station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    #[serde(default)]
    pub name: String,

    /// "Metro", "RER" or "Tram".
    #[serde(default)]
    pub transport_type: Option<String>,

    /// Line identifiers served by this station.
    #[serde(default)]
    pub lines: Option<Vec<String>>,

    #[serde(default)]
    pub walk_time_minutes: Option<f64>,

    #[serde(default)]
    pub distance_meters: Option<i64>,
}

/// Response of `POST /api/compare`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompareResult {
    /// Per-criterion verdict, e.g. "families" -> "address1 - quieter streets".
    #[serde(default)]
    pub better_for: Option<IndexMap<String, String>>,

    #[serde(default)]
    pub overall_recommendation: Option<String>,
}

/// Structured error body the service attaches to non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
