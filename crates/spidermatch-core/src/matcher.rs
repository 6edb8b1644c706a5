//! Weighted matching of observed characteristics against the catalog.

use crate::catalog::Catalog;
use crate::types::{
    AgeBracket, CharacterProfile, CharacteristicKind, FaceAnalysis, MatchResult, Observation,
};

// --- Scoring weights ---
pub const AGE_WEIGHT: f64 = 3.0;
/// Credit for an age bracket adjacent to the profile's.
pub const AGE_COMPATIBLE_CREDIT: f64 = 1.5;
pub const GENDER_WEIGHT: f64 = 3.0;
pub const ETHNICITY_WEIGHT: f64 = 2.0;
pub const TRAIT_WEIGHT: f64 = 1.0;

/// Observations at or below this confidence are left out of matching.
pub const OBSERVATION_MIN_CONFIDENCE: f64 = 0.5;

/// Trait substrings that identify each ethnicity label.
const ETHNICITY_KEYWORDS: [(&str, &[&str]); 6] = [
    ("white", &["white man", "white woman", "young white"]),
    ("black", &["black", "black-latino", "british black", "black woman"]),
    ("latino", &["latino", "black-latino"]),
    ("asian", &["asian", "asian teen"]),
    ("indian", &["indian"]),
    ("japanese", &["japanese"]),
];

/// Characteristic keys that also match traits containing any listed synonym.
const TRAIT_SYNONYMS: [(&str, &[&str]); 5] = [
    ("stubble", &["stubble", "tired-looking"]),
    ("shaved head", &["shaved head"]),
    ("mohawk", &["mohawk"]),
    ("voluminous hair", &["voluminous hair"]),
    ("pregnant", &["pregnant"]),
];

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Whether two age labels are the same or neighbouring brackets.
///
/// Unknown labels are never compatible.
pub fn ages_compatible(a: &str, b: &str) -> bool {
    match (AgeBracket::from_label(a), AgeBracket::from_label(b)) {
        (Some(a), Some(b)) => a.adjacent().contains(&b) || b.adjacent().contains(&a),
        _ => false,
    }
}

/// Whether any trait carries a keyword for the given ethnicity label.
pub fn matches_ethnicity(label: &str, traits: &[String]) -> bool {
    let label = label.to_lowercase();
    let Some((_, keywords)) = ETHNICITY_KEYWORDS.iter().find(|(name, _)| *name == label) else {
        return false;
    };

    traits.iter().any(|t| {
        let t = t.to_lowercase();
        keywords.iter().any(|keyword| t.contains(keyword))
    })
}

/// Whether an observed value matches a profile trait: equal, either one
/// containing the other, or linked through the synonym table.
pub fn matches_characteristic(value: &str, trait_: &str) -> bool {
    let value = value.to_lowercase();
    let trait_ = trait_.to_lowercase();

    if value == trait_ || value.contains(&trait_) || trait_.contains(&value) {
        return true;
    }

    TRAIT_SYNONYMS.iter().any(|(key, synonyms)| {
        value.contains(key) && synonyms.iter().any(|synonym| trait_.contains(synonym))
    })
}

/// Weighted score of one profile against an observation set.
///
/// Each non-ethnicity characteristic adds [`TRAIT_WEIGHT`] to the weight but
/// earns one point per matching trait, so a characteristic that matches
/// several traits can push the score above 1.
pub fn score_profile(observed: &Observation, profile: &CharacterProfile) -> f64 {
    let mut weight = 0.0;
    let mut score = 0.0;

    // Empty labels count as absent.
    let age = observed.age.as_deref().filter(|s| !s.is_empty());
    let gender = observed.gender.as_deref().filter(|s| !s.is_empty());

    if let (Some(age), Some(bracket)) = (age, profile.age_bracket) {
        weight += AGE_WEIGHT;
        if eq_ignore_case(age, bracket.label()) {
            score += AGE_WEIGHT;
        } else if ages_compatible(age, bracket.label()) {
            score += AGE_COMPATIBLE_CREDIT;
        }
    }

    if let (Some(gender), Some(profile_gender)) = (gender, profile.gender) {
        weight += GENDER_WEIGHT;
        if eq_ignore_case(gender, profile_gender.label()) {
            score += GENDER_WEIGHT;
        }
    }

    if let Some(ethnicity) = observed
        .characteristics
        .iter()
        .find(|c| c.kind == CharacteristicKind::Ethnicity)
    {
        weight += ETHNICITY_WEIGHT;
        if matches_ethnicity(&ethnicity.value, &profile.traits) {
            score += ETHNICITY_WEIGHT;
        }
    }

    for c in observed
        .characteristics
        .iter()
        .filter(|c| c.kind != CharacteristicKind::Ethnicity)
    {
        weight += TRAIT_WEIGHT;
        for t in &profile.traits {
            if matches_characteristic(&c.value, t) {
                score += TRAIT_WEIGHT;
            }
        }
    }

    if weight > 0.0 {
        score / weight
    } else {
        0.0
    }
}

/// Fold every face's confident characteristics into one observation set.
///
/// The first age and first gender above [`OBSERVATION_MIN_CONFIDENCE`] are
/// kept as the image's age and gender; everything else above the threshold,
/// later ages and genders included, goes into `characteristics` in order.
pub fn observe(analyses: &[FaceAnalysis]) -> Observation {
    let mut observed = Observation::default();

    let confident = analyses
        .iter()
        .flat_map(|face| &face.characteristics)
        .filter(|c| c.confidence > OBSERVATION_MIN_CONFIDENCE);

    for c in confident {
        match c.kind {
            CharacteristicKind::Age if observed.age.is_none() => {
                observed.age = Some(c.value.clone());
            }
            CharacteristicKind::Gender if observed.gender.is_none() => {
                observed.gender = Some(c.value.clone());
            }
            _ => observed.characteristics.push(c.clone()),
        }
    }

    observed
}

/// Strategy for picking the catalog profile that best fits an observation set.
pub trait Matcher {
    fn best_match(&self, observed: &Observation) -> MatchResult;
}

/// Scores observations against every profile of an injected catalog.
#[derive(Debug, Clone)]
pub struct CharacterMatcher {
    catalog: Catalog,
}

impl CharacterMatcher {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Aggregate a whole image's analyses and find its best match.
    pub fn match_faces(&self, analyses: &[FaceAnalysis]) -> MatchResult {
        if analyses.is_empty() {
            return MatchResult::none();
        }
        self.best_match(&observe(analyses))
    }
}

impl Matcher for CharacterMatcher {
    /// Highest-scoring profile; ties keep the earliest in catalog order.
    fn best_match(&self, observed: &Observation) -> MatchResult {
        let mut best: Option<&CharacterProfile> = None;
        let mut best_score = 0.0;

        // Strict comparison: an equal later score never displaces the leader.
        for profile in self.catalog.profiles() {
            let score = score_profile(observed, profile);
            if score > best_score {
                best_score = score;
                best = Some(profile);
            }
        }

        match best {
            Some(profile) => {
                tracing::info!(profile = %profile.name, score = best_score, "best character match");
                MatchResult {
                    profile: Some(profile.clone()),
                    score: best_score,
                }
            }
            None => {
                tracing::debug!(profiles = self.catalog.len(), "no character matched");
                MatchResult::none()
            }
        }
    }
}
