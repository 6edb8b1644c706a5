//! spidermatch-core — Heuristic facial feature estimation and character matching.
//!
//! Turns face geometry (a bounding box and six landmark points) into tagged
//! characteristics, then scores them against a catalog of Spider-Verse
//! character profiles. Everything here is pure and synchronous.

pub mod catalog;
pub mod estimator;
pub mod matcher;
pub mod pipeline;
pub mod report;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use matcher::{CharacterMatcher, Matcher};
pub use pipeline::{process, Detection};
pub use types::{
    AgeBracket, BoundingBox, CharacterProfile, Characteristic, CharacteristicKind,
    DetectionCandidate, FaceAnalysis, Gender, Landmark, MatchResult, Observation,
};
