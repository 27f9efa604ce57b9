//! Display model for the analysis report.
//!
//! [`view_of`] is a pure function of the request state: it decides which of
//! the four screens is shown, and for a settled analysis builds the report
//! section by section. Each section has its own presence guard over the
//! optional payload fields; a missing field omits its section (or line) and
//! never affects any other section.
//!
//! Present-but-invalid values are a different matter: a rating score
//! outside 1-5 aborts the report with a [`ContractViolation`] so the defect
//! is reported instead of mis-rendered.

use quartier_client::RequestState;
use quartier_common::{
    Analysis, AnalysisResult, ContractViolation, GeoData, Station, Transport,
};

use crate::assets;

/// Stations shown in the transport section, no matter how many the service
/// returns. A fixed display rule, not a data limit.
pub const MAX_VISIBLE_STATIONS: usize = 5;

/// Which of the four screens the terminal shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportView {
    /// Nothing submitted: input form only.
    Idle,
    /// Request in flight: loading indicator, input disabled.
    Loading { address: String },
    /// Settled with a payload: the report.
    Ready(Report),
    /// Settled with an error: a single banner, no sections.
    Error { message: String },
}

/// The rendered report: an ordered list of present sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub sections: Vec<Section>,
}

/// One block of the report, in display order.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Location(LocationSection),
    Overview(OverviewSection),
    WordOfMouth(WordOfMouthSection),
    Ratings(RatingsSection),
    Highlights(HighlightsSection),
    Recommendations(RecommendationsSection),
    Transport(TransportSection),
}

impl Section {
    /// Heading shown above the section.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Location(_) => "Location",
            Section::Overview(_) => "Overview",
            Section::WordOfMouth(_) => "What Locals Say",
            Section::Ratings(_) => "Ratings",
            Section::Highlights(_) => "Highlights",
            Section::Recommendations(_) => "Recommendations",
            Section::Transport(_) => "Getting Around",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationSection {
    /// District emblem; `None` when the number is missing or out of range.
    pub emblem: Option<&'static str>,
    pub arrondissement: Option<i64>,
    pub full_address: Option<String>,
    /// Supplementary geo lines (postcode, neighborhood, district name).
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewSection {
    pub description: Option<String>,
    pub three_word_summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordOfMouthSection {
    /// Normalized paragraphs, service order preserved.
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingsSection {
    /// Service insertion order preserved.
    pub entries: Vec<RatingEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingEntry {
    pub category: String,
    pub score: i64,
    pub glyph: &'static str,
    pub justification: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HighlightsSection {
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationsSection {
    pub cafes: Vec<String>,
    pub restaurants: Vec<String>,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransportSection {
    pub connectivity: Option<ConnectivityDisplay>,
    pub landmarks: Vec<LandmarkRow>,
    pub stations: Vec<StationRow>,
    pub late_night_service: Option<bool>,
}

/// Connectivity score display. The loud-error rule is scoped to the ratings
/// mapping, so an out-of-range connectivity score degrades to plain text.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectivityDisplay {
    Stars(&'static str),
    Plain(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkRow {
    /// Icon from the fixed landmark table; unknown names render without one.
    pub icon: Option<&'static str>,
    pub landmark: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationRow {
    pub name: String,
    pub transport_type: Option<String>,
    /// Comma-joined line identifiers; `None` when absent or empty.
    pub lines_label: Option<String>,
    pub walk_time_minutes: Option<f64>,
}

/// Derive the screen for a request state.
pub fn view_of(state: &RequestState) -> Result<ReportView, ContractViolation> {
    match state {
        RequestState::Idle => Ok(ReportView::Idle),
        RequestState::Pending { address } => Ok(ReportView::Loading {
            address: address.clone(),
        }),
        RequestState::Failed { message } => Ok(ReportView::Error {
            message: message.clone(),
        }),
        RequestState::Succeeded { result } => Ok(ReportView::Ready(build_report(result)?)),
    }
}

/// Build the report for a settled analysis. Sections appear in a fixed
/// order and each decides its own presence; only a contract violation can
/// abort the whole report.
pub fn build_report(result: &AnalysisResult) -> Result<Report, ContractViolation> {
    let mut sections = Vec::new();

    if let Some(section) = location_section(result.geo_data.as_ref()) {
        sections.push(Section::Location(section));
    }

    if let Some(analysis) = result.analysis.as_ref() {
        if let Some(section) = overview_section(analysis) {
            sections.push(Section::Overview(section));
        }
        if let Some(section) = word_of_mouth_section(analysis) {
            sections.push(Section::WordOfMouth(section));
        }
        if let Some(section) = ratings_section(analysis)? {
            sections.push(Section::Ratings(section));
        }
        if let Some(section) = highlights_section(analysis) {
            sections.push(Section::Highlights(section));
        }
        if let Some(section) = recommendations_section(analysis) {
            sections.push(Section::Recommendations(section));
        }
    }

    if let Some(section) = transport_section(result.transport.as_ref()) {
        sections.push(Section::Transport(section));
    }

    Ok(Report { sections })
}

fn location_section(geo: Option<&GeoData>) -> Option<LocationSection> {
    let geo = geo?;
    if geo.arrondissement.is_none() && geo.full_address.is_none() {
        return None;
    }

    let mut details = Vec::new();
    if let Some(neighborhood) = &geo.neighborhood {
        details.push(neighborhood.clone());
    }
    if let Some(district) = &geo.district {
        details.push(district.clone());
    }
    if let Some(postcode) = &geo.postcode {
        details.push(postcode.clone());
    }

    Some(LocationSection {
        emblem: geo.arrondissement.and_then(assets::arrondissement_emblem),
        arrondissement: geo.arrondissement,
        full_address: geo.full_address.clone(),
        details,
    })
}

fn overview_section(analysis: &Analysis) -> Option<OverviewSection> {
    let overview = analysis.overview.as_ref()?;
    Some(OverviewSection {
        description: overview.description.clone(),
        three_word_summary: overview.three_word_summary.clone(),
    })
}

fn word_of_mouth_section(analysis: &Analysis) -> Option<WordOfMouthSection> {
    let word_of_mouth = analysis.what_locals_say.as_ref()?;
    Some(WordOfMouthSection {
        paragraphs: word_of_mouth
            .paragraphs()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

fn ratings_section(analysis: &Analysis) -> Result<Option<RatingsSection>, ContractViolation> {
    let ratings = match analysis.ratings.as_ref() {
        Some(ratings) if !ratings.is_empty() => ratings,
        _ => return Ok(None),
    };

    let mut entries = Vec::with_capacity(ratings.len());
    for (category, rating) in ratings {
        let glyph = assets::rating_glyph(rating.score).ok_or_else(|| {
            ContractViolation::RatingScoreOutOfRange {
                category: category.clone(),
                score: rating.score,
            }
        })?;
        entries.push(RatingEntry {
            category: category.clone(),
            score: rating.score,
            glyph,
            justification: rating.justification.clone(),
        });
    }

    Ok(Some(RatingsSection { entries }))
}

fn highlights_section(analysis: &Analysis) -> Option<HighlightsSection> {
    let items = analysis.highlights.as_ref()?;
    if items.is_empty() {
        return None;
    }
    Some(HighlightsSection {
        items: items.clone(),
    })
}

fn recommendations_section(analysis: &Analysis) -> Option<RecommendationsSection> {
    let recommendations = analysis.recommendations.as_ref()?;
    if recommendations.is_empty() {
        return None;
    }
    Some(RecommendationsSection {
        cafes: recommendations.cafes.clone(),
        restaurants: recommendations.restaurants.clone(),
        activities: recommendations.activities.clone(),
    })
}

fn transport_section(transport: Option<&Transport>) -> Option<TransportSection> {
    let transport = transport?;

    let connectivity = transport.connectivity_score.map(|score| {
        match assets::rating_glyph(score) {
            Some(glyph) => ConnectivityDisplay::Stars(glyph),
            None => ConnectivityDisplay::Plain(score),
        }
    });

    let landmarks = transport
        .landmark_travel_times
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|entry| LandmarkRow {
            icon: assets::landmark_icon(&entry.landmark),
            landmark: entry.landmark.clone(),
            time: entry.time.clone(),
        })
        .collect();

    let stations = transport
        .nearby_stations
        .as_deref()
        .unwrap_or_default()
        .iter()
        .take(MAX_VISIBLE_STATIONS)
        .map(station_row)
        .collect();

    Some(TransportSection {
        connectivity,
        landmarks,
        stations,
        late_night_service: transport.has_late_night_service,
    })
}

fn station_row(station: &Station) -> StationRow {
    let lines_label = station
        .lines
        .as_ref()
        .filter(|lines| !lines.is_empty())
        .map(|lines| lines.join(", "));

    StationRow {
        name: station.name.clone(),
        transport_type: station.transport_type.clone(),
        lines_label,
        walk_time_minutes: station.walk_time_minutes,
    }
}
