//! Common types shared across the quartier crates

pub mod error;
pub mod types;

pub use error::ContractViolation;
pub use types::{
    Analysis, AnalysisResult, CompareResult, ErrorBody, GeoData, LandmarkTravelTime, Overview,
    Rating, Recommendations, Station, Transport, WordOfMouth,
};
