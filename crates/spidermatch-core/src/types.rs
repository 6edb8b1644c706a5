use serde::{Deserialize, Serialize};
use std::fmt;

/// Face bounding box, normalized to [0, 1] relative to the source image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
    pub x_center: f64,
    pub y_center: f64,
}

impl BoundingBox {
    pub const fn new(width: f64, height: f64, x_center: f64, y_center: f64) -> Self {
        Self {
            width,
            height,
            x_center,
            y_center,
        }
    }

    /// Width over height. Callers guarantee `height > 0`.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// A single landmark point in the same normalized space as [`BoundingBox`].
///
/// Landmark sequences are positional: 0 = left eye, 1 = right eye,
/// 2 = left eyebrow, 3 = right eyebrow, 4 = mouth, 5 = chin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
}

impl Landmark {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One face as reported by an external detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionCandidate {
    /// Detector confidence in [0, 1].
    pub confidence: f64,
    pub bounding_box: BoundingBox,
    #[serde(default)]
    pub landmarks: Vec<Landmark>,
}

/// The closed set of characteristic categories the estimator can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacteristicKind {
    Age,
    Gender,
    Ethnicity,
    Hair,
    Beard,
    Glasses,
}

impl CharacteristicKind {
    pub const ALL: [CharacteristicKind; 6] = [
        Self::Age,
        Self::Gender,
        Self::Ethnicity,
        Self::Hair,
        Self::Beard,
        Self::Glasses,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Ethnicity => "ethnicity",
            Self::Hair => "hair",
            Self::Beard => "beard",
            Self::Glasses => "glasses",
        }
    }

    /// Case-insensitive lookup by name (e.g. `"Hair"` → [`CharacteristicKind::Hair`]).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for CharacteristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed observation about a face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Characteristic {
    #[serde(rename = "type")]
    pub kind: CharacteristicKind,
    pub value: String,
    pub confidence: f64,
}

impl Characteristic {
    pub fn new(kind: CharacteristicKind, value: impl Into<String>, confidence: f64) -> Self {
        Self {
            kind,
            value: value.into(),
            confidence,
        }
    }
}

/// Characteristics estimated for one accepted face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceAnalysis {
    /// Position of the face in the detector's candidate list.
    pub face_index: usize,
    pub confidence: f64,
    pub bounding_box: BoundingBox,
    pub characteristics: Vec<Characteristic>,
}

/// Age brackets, ordered from youngest to oldest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "child")]
    Child,
    #[serde(rename = "teen")]
    Teen,
    #[serde(rename = "young adult")]
    YoungAdult,
    #[serde(rename = "adult")]
    Adult,
    #[serde(rename = "senior")]
    Senior,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 5] = [
        Self::Child,
        Self::Teen,
        Self::YoungAdult,
        Self::Adult,
        Self::Senior,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Child => "child",
            Self::Teen => "teen",
            Self::YoungAdult => "young adult",
            Self::Adult => "adult",
            Self::Senior => "senior",
        }
    }

    /// Brackets considered close enough to earn partial age credit.
    pub fn adjacent(&self) -> &'static [AgeBracket] {
        match self {
            Self::Child => &[Self::Child],
            Self::Teen => &[Self::Teen, Self::YoungAdult],
            Self::YoungAdult => &[Self::Teen, Self::YoungAdult, Self::Adult],
            Self::Adult => &[Self::YoungAdult, Self::Adult],
            Self::Senior => &[Self::Adult, Self::Senior],
        }
    }

    /// Case-insensitive lookup by label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|bracket| bracket.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog entry that observations are scored against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterProfile {
    pub name: String,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub age_bracket: Option<AgeBracket>,
    #[serde(default)]
    pub gender: Option<Gender>,
}

/// Aggregated observations for one image, ready for matching.
///
/// `age` and `gender` are free text so that values from any detector can be
/// compared against the catalog case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub age: Option<String>,
    pub gender: Option<String>,
    pub characteristics: Vec<Characteristic>,
}

/// Best catalog profile for an observation set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// `None` when the catalog is empty or no profile scored above zero.
    pub profile: Option<CharacterProfile>,
    /// Weighted score of `profile`, 0 when there is no profile.
    pub score: f64,
}

impl MatchResult {
    pub fn none() -> Self {
        Self {
            profile: None,
            score: 0.0,
        }
    }
}
