//! Heuristic facial feature estimation.
//!
//! Maps one face's bounding box and six-point landmark set to tagged
//! characteristics. Every estimate is a fixed rule over a few geometric
//! ratios; nothing here is learned. A seed-driven simulation stands in when
//! no detector output is available.

use crate::types::{
    AgeBracket, BoundingBox, Characteristic, CharacteristicKind, DetectionCandidate, FaceAnalysis,
    Gender, Landmark,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// --- Landmark layout ---
const LEFT_EYE: usize = 0;
const RIGHT_EYE: usize = 1;
const LEFT_EYEBROW: usize = 2;
const RIGHT_EYEBROW: usize = 3;
const MOUTH: usize = 4;
const CHIN: usize = 5;
/// Landmarks needed by the eye/eyebrow rules.
const EYE_LANDMARK_COUNT: usize = 4;
/// A full landmark set; anything shorter is insufficient for a detection.
pub const FULL_LANDMARK_COUNT: usize = 6;

/// Detector confidence below which a candidate is dropped.
pub const MIN_FACE_CONFIDENCE: f64 = 0.5;

// --- Fixed confidences for characteristics from a real detection ---
pub const GLASSES_CONFIDENCE: f64 = 0.8;
pub const BEARD_CONFIDENCE: f64 = 0.7;
pub const HAIR_CONFIDENCE: f64 = 0.6;
pub const AGE_CONFIDENCE: f64 = 0.5;
pub const GENDER_CONFIDENCE: f64 = 0.6;
pub const ETHNICITY_CONFIDENCE: f64 = 0.5;

// --- Glasses ---
const GLASSES_SPREAD_THRESHOLD: f64 = 0.05;
const GLASSES_EYE_LEVEL_TOLERANCE: f64 = 0.02;
const GLASSES_PRESCRIPTION_RATIO: f64 = 0.8;
const GLASSES_SUNGLASSES_RATIO: f64 = 0.7;

// --- Beard (chin height as a fraction of eye spacing) ---
const BEARD_FULL_RATIO: f64 = 0.4;
const BEARD_LIGHT_RATIO: f64 = 0.35;
const BEARD_STUBBLE_RATIO: f64 = 0.3;

// --- Hair ---
const HAIR_SHORT_RATIO: f64 = 0.85;
const HAIR_LONG_RATIO: f64 = 0.7;
const HAIR_MOHAWK_ELONGATION: f64 = 1.3;

/// Aspect-ratio floors for each age bracket, checked top to bottom.
const AGE_RATIO_STEPS: [(f64, AgeBracket); 4] = [
    (0.9, AgeBracket::Child),
    (0.8, AgeBracket::Teen),
    (0.7, AgeBracket::YoungAdult),
    (0.6, AgeBracket::Adult),
];

// --- Gender ---
const GENDER_BROW_GAP: f64 = 0.05;
const GENDER_FALLBACK_RATIO: f64 = 0.8;

/// Ethnicity labels in fallback sampling order.
pub const ETHNICITY_LABELS: [&str; 6] = ["white", "black", "latino", "asian", "indian", "japanese"];

/// One-sided bound on a measured value.
#[derive(Clone, Copy)]
enum Bound {
    Above(f64),
    Below(f64),
    Any,
}

impl Bound {
    fn admits(self, value: f64) -> bool {
        match self {
            Bound::Above(limit) => value > limit,
            Bound::Below(limit) => value < limit,
            Bound::Any => true,
        }
    }
}

/// Ethnicity rules as (aspect ratio, eye distance, label). First match wins.
const ETHNICITY_RULES: [(Bound, Bound, &str); 5] = [
    (Bound::Above(0.85), Bound::Above(0.15), "white"),
    (Bound::Below(0.75), Bound::Below(0.12), "asian"),
    (Bound::Above(0.8), Bound::Above(0.13), "latino"),
    (Bound::Below(0.8), Bound::Above(0.14), "black"),
    (Bound::Below(0.75), Bound::Any, "indian"),
];
const ETHNICITY_DEFAULT: &str = "japanese";

/// Face shapes used by [`simulate`], indexed by `seed % 5`.
const SIMULATED_FACES: [BoundingBox; 5] = [
    BoundingBox::new(0.25, 0.35, 0.5, 0.5), // narrow
    BoundingBox::new(0.35, 0.4, 0.5, 0.5),  // medium
    BoundingBox::new(0.4, 0.45, 0.5, 0.5),  // wide
    BoundingBox::new(0.3, 0.5, 0.5, 0.5),   // elongated
    BoundingBox::new(0.45, 0.4, 0.5, 0.5),  // square
];

/// Confidence of the form `base + (seed % spread) / 100`.
#[derive(Clone, Copy)]
struct SeededConfidence {
    base: f64,
    spread: u64,
}

impl SeededConfidence {
    const fn new(base: f64, spread: u64) -> Self {
        Self { base, spread }
    }

    fn at(self, seed: u64) -> f64 {
        self.base + (seed % self.spread) as f64 / 100.0
    }
}

const SIMULATED_FACE: SeededConfidence = SeededConfidence::new(0.7, 20);
const SIMULATED_AGE: SeededConfidence = SeededConfidence::new(0.6, 30);
const SIMULATED_GENDER: SeededConfidence = SeededConfidence::new(0.7, 20);
const SIMULATED_ETHNICITY: SeededConfidence = SeededConfidence::new(0.5, 30);
const SIMULATED_HAIR: SeededConfidence = SeededConfidence::new(0.6, 20);
const SIMULATED_BEARD: SeededConfidence = SeededConfidence::new(0.5, 30);

fn eye_distance(landmarks: &[Landmark]) -> f64 {
    (landmarks[LEFT_EYE].x - landmarks[RIGHT_EYE].x).abs()
}

/// Whether the eye/eyebrow spacing suggests eyewear.
///
/// Needs at least four landmarks; returns `false` otherwise.
pub fn detect_glasses(landmarks: &[Landmark]) -> bool {
    if landmarks.len() < EYE_LANDMARK_COUNT {
        return false;
    }

    let eyebrow_distance = (landmarks[LEFT_EYEBROW].x - landmarks[RIGHT_EYEBROW].x).abs();
    let spread = (eye_distance(landmarks) - eyebrow_distance).abs() > GLASSES_SPREAD_THRESHOLD;
    let level =
        (landmarks[LEFT_EYE].y - landmarks[RIGHT_EYE].y).abs() < GLASSES_EYE_LEVEL_TOLERANCE;

    spread && level
}

/// Kind of eyewear, from face proportions alone.
pub fn classify_glasses(bbox: &BoundingBox) -> &'static str {
    let ratio = bbox.aspect_ratio();
    if ratio > GLASSES_PRESCRIPTION_RATIO {
        "prescription"
    } else if ratio < GLASSES_SUNGLASSES_RATIO {
        "sunglasses"
    } else {
        "dark glasses"
    }
}

/// Beard style from the mouth-to-chin span relative to eye spacing.
pub fn estimate_beard(landmarks: &[Landmark]) -> &'static str {
    if landmarks.len() < FULL_LANDMARK_COUNT {
        return "no beard";
    }

    let chin_area = (landmarks[MOUTH].y - landmarks[CHIN].y).abs();
    let face_width = eye_distance(landmarks);

    if chin_area > face_width * BEARD_FULL_RATIO {
        "full beard"
    } else if chin_area > face_width * BEARD_LIGHT_RATIO {
        "light beard"
    } else if chin_area > face_width * BEARD_STUBBLE_RATIO {
        "stubble"
    } else {
        "no beard"
    }
}

pub fn estimate_hair(bbox: &BoundingBox) -> &'static str {
    let ratio = bbox.aspect_ratio();
    if ratio > HAIR_SHORT_RATIO {
        "short hair"
    } else if ratio < HAIR_LONG_RATIO {
        "long hair"
    } else if bbox.height > bbox.width * HAIR_MOHAWK_ELONGATION {
        "mohawk"
    } else {
        "straight hair"
    }
}

/// Rounder faces read younger.
pub fn estimate_age(bbox: &BoundingBox) -> AgeBracket {
    let ratio = bbox.aspect_ratio();
    AGE_RATIO_STEPS
        .iter()
        .find(|(floor, _)| ratio > *floor)
        .map(|&(_, bracket)| bracket)
        .unwrap_or(AgeBracket::Senior)
}

/// Eyebrow-to-eye gap when eye landmarks exist, face proportions otherwise.
pub fn estimate_gender(bbox: &BoundingBox, landmarks: &[Landmark]) -> Gender {
    if landmarks.len() >= EYE_LANDMARK_COUNT {
        let brow_gap = (landmarks[LEFT_EYE].y - landmarks[LEFT_EYEBROW].y).abs();
        return if brow_gap < GENDER_BROW_GAP {
            Gender::Female
        } else {
            Gender::Male
        };
    }

    if bbox.aspect_ratio() > GENDER_FALLBACK_RATIO {
        Gender::Female
    } else {
        Gender::Male
    }
}

/// Ethnicity label from aspect ratio and eye spacing.
///
/// Without a full landmark set the label is drawn uniformly from
/// [`ETHNICITY_LABELS`] using `rng`, so a seeded generator keeps the
/// result reproducible.
pub fn estimate_ethnicity<R: Rng>(
    bbox: &BoundingBox,
    landmarks: &[Landmark],
    rng: &mut R,
) -> &'static str {
    if landmarks.len() < FULL_LANDMARK_COUNT {
        return ETHNICITY_LABELS[rng.gen_range(0..ETHNICITY_LABELS.len())];
    }

    let ratio = bbox.aspect_ratio();
    let eyes = eye_distance(landmarks);

    ETHNICITY_RULES
        .iter()
        .find(|(ratio_bound, eye_bound, _)| ratio_bound.admits(ratio) && eye_bound.admits(eyes))
        .map(|&(_, _, label)| label)
        .unwrap_or(ETHNICITY_DEFAULT)
}

/// Run every sub-estimator against one face.
///
/// Glasses are only reported when detected; every other characteristic is
/// always present. `rng` is only consulted by the ethnicity fallback.
pub fn analyze<R: Rng>(
    bbox: &BoundingBox,
    landmarks: &[Landmark],
    rng: &mut R,
) -> Vec<Characteristic> {
    let mut characteristics = Vec::with_capacity(6);

    if detect_glasses(landmarks) {
        characteristics.push(Characteristic::new(
            CharacteristicKind::Glasses,
            classify_glasses(bbox),
            GLASSES_CONFIDENCE,
        ));
    }

    characteristics.push(Characteristic::new(
        CharacteristicKind::Beard,
        estimate_beard(landmarks),
        BEARD_CONFIDENCE,
    ));
    characteristics.push(Characteristic::new(
        CharacteristicKind::Hair,
        estimate_hair(bbox),
        HAIR_CONFIDENCE,
    ));
    characteristics.push(Characteristic::new(
        CharacteristicKind::Age,
        estimate_age(bbox).label(),
        AGE_CONFIDENCE,
    ));
    characteristics.push(Characteristic::new(
        CharacteristicKind::Gender,
        estimate_gender(bbox, landmarks).label(),
        GENDER_CONFIDENCE,
    ));
    characteristics.push(Characteristic::new(
        CharacteristicKind::Ethnicity,
        estimate_ethnicity(bbox, landmarks, rng),
        ETHNICITY_CONFIDENCE,
    ));

    characteristics
}

/// Analyze every acceptable candidate from a detector.
///
/// Candidates below [`MIN_FACE_CONFIDENCE`] or with fewer than
/// [`FULL_LANDMARK_COUNT`] landmarks are dropped whole. Accepted faces keep
/// their position in `candidates` as `face_index`.
///
/// Accepted faces always carry a full landmark set, so the ethnicity
/// fallback never draws from the seeded generator and `seed` does not
/// change the output for valid input.
pub fn analyze_detections(candidates: &[DetectionCandidate], seed: u64) -> Vec<FaceAnalysis> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut analyses = Vec::new();

    for (index, candidate) in candidates.iter().enumerate() {
        if candidate.confidence < MIN_FACE_CONFIDENCE {
            tracing::debug!(
                face = index,
                confidence = candidate.confidence,
                "candidate rejected: confidence too low"
            );
            continue;
        }
        if candidate.landmarks.len() < FULL_LANDMARK_COUNT {
            tracing::debug!(
                face = index,
                landmarks = candidate.landmarks.len(),
                "candidate rejected: insufficient landmarks"
            );
            continue;
        }

        let characteristics = analyze(&candidate.bounding_box, &candidate.landmarks, &mut rng);
        tracing::debug!(face = index, count = characteristics.len(), "face analyzed");

        analyses.push(FaceAnalysis {
            face_index: index,
            confidence: candidate.confidence,
            bounding_box: candidate.bounding_box,
            characteristics,
        });
    }

    tracing::info!(
        candidates = candidates.len(),
        accepted = analyses.len(),
        "detections analyzed"
    );

    analyses
}

/// Manufacture a plausible face analysis from `seed` alone.
///
/// Same seed, same output. Runs the box-based estimators against one of five
/// canned face shapes with no landmarks, so beard is always "no beard" and
/// glasses are never reported.
pub fn simulate(seed: u64) -> FaceAnalysis {
    let bbox = SIMULATED_FACES[(seed % SIMULATED_FACES.len() as u64) as usize];
    let mut rng = StdRng::seed_from_u64(seed);

    let characteristics = vec![
        Characteristic::new(
            CharacteristicKind::Age,
            estimate_age(&bbox).label(),
            SIMULATED_AGE.at(seed),
        ),
        Characteristic::new(
            CharacteristicKind::Gender,
            estimate_gender(&bbox, &[]).label(),
            SIMULATED_GENDER.at(seed),
        ),
        Characteristic::new(
            CharacteristicKind::Ethnicity,
            estimate_ethnicity(&bbox, &[], &mut rng),
            SIMULATED_ETHNICITY.at(seed),
        ),
        Characteristic::new(
            CharacteristicKind::Hair,
            estimate_hair(&bbox),
            SIMULATED_HAIR.at(seed),
        ),
        Characteristic::new(
            CharacteristicKind::Beard,
            estimate_beard(&[]),
            SIMULATED_BEARD.at(seed),
        ),
    ];

    FaceAnalysis {
        face_index: 0,
        confidence: SIMULATED_FACE.at(seed),
        bounding_box: bbox,
        characteristics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(width: f64, height: f64) -> BoundingBox {
        BoundingBox::new(width, height, 0.5, 0.5)
    }

    fn lm(points: &[(f64, f64)]) -> Vec<Landmark> {
        points.iter().map(|&(x, y)| Landmark::new(x, y)).collect()
    }

    /// Reference face: eyes 0.2 apart, brows level with the eyes' spread,
    /// mouth-to-chin span 0.15.
    fn reference_landmarks() -> Vec<Landmark> {
        lm(&[
            (0.0, 0.0),
            (0.2, 0.0),
            (0.1, 0.02),
            (0.3, 0.02),
            (0.15, 0.3),
            (0.15, 0.45),
        ])
    }

    fn landmarks_with_eye_distance(distance: f64) -> Vec<Landmark> {
        lm(&[
            (0.4, 0.4),
            (0.4 + distance, 0.4),
            (0.4, 0.3),
            (0.4 + distance, 0.3),
            (0.5, 0.6),
            (0.5, 0.7),
        ])
    }

    fn beard_landmarks(chin_span: f64) -> Vec<Landmark> {
        lm(&[
            (0.0, 0.0),
            (0.2, 0.0),
            (0.0, 0.1),
            (0.2, 0.1),
            (0.1, 0.3),
            (0.1, 0.3 + chin_span),
        ])
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_detect_glasses_spread_and_level_eyes() {
        let landmarks = lm(&[(0.0, 0.3), (0.3, 0.3), (0.05, 0.2), (0.25, 0.2)]);
        assert!(detect_glasses(&landmarks));
    }

    #[test]
    fn test_detect_glasses_tilted_eyes() {
        let landmarks = lm(&[(0.0, 0.3), (0.3, 0.33), (0.05, 0.2), (0.25, 0.2)]);
        assert!(!detect_glasses(&landmarks));
    }

    #[test]
    fn test_detect_glasses_needs_four_landmarks() {
        let landmarks = lm(&[(0.0, 0.3), (0.3, 0.3), (0.05, 0.2)]);
        assert!(!detect_glasses(&landmarks));
        assert!(!detect_glasses(&[]));
    }

    #[test]
    fn test_classify_glasses() {
        assert_eq!(classify_glasses(&bbox(0.45, 0.5)), "prescription");
        assert_eq!(classify_glasses(&bbox(0.3, 0.5)), "sunglasses");
        assert_eq!(classify_glasses(&bbox(0.375, 0.5)), "dark glasses");
    }

    #[test]
    fn test_estimate_beard_reference_face_is_full() {
        // chin span 0.15 > 0.4 * 0.2
        assert_eq!(estimate_beard(&reference_landmarks()), "full beard");
    }

    #[test]
    fn test_estimate_beard_grades() {
        assert_eq!(estimate_beard(&beard_landmarks(0.075)), "light beard");
        assert_eq!(estimate_beard(&beard_landmarks(0.065)), "stubble");
        assert_eq!(estimate_beard(&beard_landmarks(0.05)), "no beard");
    }

    #[test]
    fn test_estimate_beard_insufficient_landmarks() {
        assert_eq!(estimate_beard(&reference_landmarks()[..5]), "no beard");
        assert_eq!(estimate_beard(&[]), "no beard");
    }

    #[test]
    fn test_estimate_hair() {
        // 0.4 / 0.45 ≈ 0.889
        assert_eq!(estimate_hair(&bbox(0.4, 0.45)), "short hair");
        assert_eq!(estimate_hair(&bbox(0.3, 0.5)), "long hair");
        // 0.25 / 0.35 ≈ 0.714 and 0.35 > 1.3 * 0.25
        assert_eq!(estimate_hair(&bbox(0.25, 0.35)), "mohawk");
        assert_eq!(estimate_hair(&bbox(0.4, 0.5)), "straight hair");
    }

    #[test]
    fn test_estimate_age_brackets() {
        assert_eq!(estimate_age(&bbox(0.95, 1.0)), AgeBracket::Child);
        assert_eq!(estimate_age(&bbox(0.85, 1.0)), AgeBracket::Teen);
        assert_eq!(estimate_age(&bbox(0.75, 1.0)), AgeBracket::YoungAdult);
        assert_eq!(estimate_age(&bbox(0.65, 1.0)), AgeBracket::Adult);
        assert_eq!(estimate_age(&bbox(0.5, 1.0)), AgeBracket::Senior);
    }

    #[test]
    fn test_estimate_age_boundary_is_exclusive() {
        assert_eq!(estimate_age(&bbox(0.6, 1.0)), AgeBracket::Senior);
        assert_eq!(estimate_age(&bbox(0.9, 1.0)), AgeBracket::Teen);
    }

    #[test]
    fn test_box_estimators_are_total() {
        let hair = ["short hair", "long hair", "mohawk", "straight hair"];
        for w in 1..=20 {
            for h in 1..=20 {
                let b = bbox(w as f64 * 0.05, h as f64 * 0.05);
                assert!(hair.contains(&estimate_hair(&b)));
                assert!(AgeBracket::ALL.contains(&estimate_age(&b)));
                let gender = estimate_gender(&b, &[]);
                assert!(gender == Gender::Male || gender == Gender::Female);
            }
        }
    }

    #[test]
    fn test_estimate_gender_from_landmarks() {
        // brow gap 0.02
        assert_eq!(estimate_gender(&bbox(0.3, 0.5), &reference_landmarks()), Gender::Female);
        // brow gap 0.1
        assert_eq!(estimate_gender(&bbox(0.45, 0.5), &beard_landmarks(0.1)), Gender::Male);
    }

    #[test]
    fn test_estimate_gender_fallback() {
        assert_eq!(estimate_gender(&bbox(0.35, 0.4), &[]), Gender::Female);
        assert_eq!(estimate_gender(&bbox(0.3, 0.5), &[]), Gender::Male);
    }

    #[test]
    fn test_estimate_ethnicity_first_match_wins() {
        // Also satisfies the "latino" rule; the earlier "white" rule wins.
        let label = estimate_ethnicity(&bbox(0.9, 1.0), &landmarks_with_eye_distance(0.2), &mut rng());
        assert_eq!(label, "white");
    }

    #[test]
    fn test_estimate_ethnicity_branches() {
        let cases = [
            (0.7, 0.1, "asian"),
            (0.82, 0.14, "latino"),
            (0.78, 0.145, "black"),
            (0.7, 0.13, "indian"),
            (0.78, 0.13, "japanese"),
        ];
        for (ratio, eyes, expected) in cases {
            let label =
                estimate_ethnicity(&bbox(ratio, 1.0), &landmarks_with_eye_distance(eyes), &mut rng());
            assert_eq!(label, expected, "ratio {ratio}, eye distance {eyes}");
        }
    }

    #[test]
    fn test_estimate_ethnicity_fallback_is_seeded() {
        let b = bbox(0.3, 0.4);
        for seed in 0..50 {
            let a = estimate_ethnicity(&b, &[], &mut StdRng::seed_from_u64(seed));
            let again = estimate_ethnicity(&b, &[], &mut StdRng::seed_from_u64(seed));
            assert_eq!(a, again);
            assert!(ETHNICITY_LABELS.contains(&a));
        }
    }

    #[test]
    fn test_analyze_reference_face() {
        let result = analyze(&bbox(0.4, 0.45), &reference_landmarks(), &mut rng());

        let kinds: Vec<_> = result.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                CharacteristicKind::Beard,
                CharacteristicKind::Hair,
                CharacteristicKind::Age,
                CharacteristicKind::Gender,
                CharacteristicKind::Ethnicity,
            ]
        );
        assert_eq!(result[0].value, "full beard");
        assert_eq!(result[0].confidence, BEARD_CONFIDENCE);
        assert_eq!(result[1].value, "short hair");
        assert_eq!(result[2].value, "teen");
        assert_eq!(result[3].value, "female");
        // ratio ≈ 0.889, eye distance 0.2
        assert_eq!(result[4].value, "white");
    }

    #[test]
    fn test_analyze_reports_glasses_first() {
        let landmarks = lm(&[
            (0.0, 0.3),
            (0.3, 0.3),
            (0.05, 0.2),
            (0.25, 0.2),
            (0.15, 0.5),
            (0.15, 0.6),
        ]);
        let result = analyze(&bbox(0.45, 0.5), &landmarks, &mut rng());
        assert_eq!(result[0].kind, CharacteristicKind::Glasses);
        assert_eq!(result[0].value, "prescription");
        assert_eq!(result[0].confidence, GLASSES_CONFIDENCE);
        assert_eq!(result.len(), 6);
    }

    #[test]
    fn test_analyze_detections_rejects_whole_faces() {
        let good = DetectionCandidate {
            confidence: 0.9,
            bounding_box: bbox(0.4, 0.45),
            landmarks: reference_landmarks(),
        };
        let unsure = DetectionCandidate {
            confidence: 0.3,
            ..good.clone()
        };
        let partial = DetectionCandidate {
            landmarks: reference_landmarks()[..4].to_vec(),
            ..good.clone()
        };

        let analyses = analyze_detections(&[unsure, good.clone(), partial], 7);
        assert_eq!(analyses.len(), 1);
        assert_eq!(analyses[0].face_index, 1);
        assert_eq!(analyses[0].confidence, 0.9);
        assert_eq!(analyses[0].bounding_box, good.bounding_box);
    }

    #[test]
    fn test_analyze_detections_accepts_threshold_confidence() {
        let candidate = DetectionCandidate {
            confidence: MIN_FACE_CONFIDENCE,
            bounding_box: bbox(0.4, 0.45),
            landmarks: reference_landmarks(),
        };
        assert_eq!(analyze_detections(&[candidate], 0).len(), 1);
    }

    #[test]
    fn test_analyze_detections_ignores_seed() {
        let candidate = DetectionCandidate {
            confidence: 0.9,
            bounding_box: bbox(0.4, 0.45),
            landmarks: reference_landmarks(),
        };
        let first = analyze_detections(std::slice::from_ref(&candidate), 0);
        for seed in 1..50 {
            assert_eq!(analyze_detections(std::slice::from_ref(&candidate), seed), first);
        }
    }

    #[test]
    fn test_analyze_detections_empty() {
        assert!(analyze_detections(&[], 0).is_empty());
    }

    #[test]
    fn test_simulate_deterministic() {
        for seed in 0..200 {
            assert_eq!(simulate(seed), simulate(seed));
        }
    }

    #[test]
    fn test_simulate_shape_and_confidences() {
        let face = simulate(1);
        assert_eq!(face.face_index, 0);
        assert_eq!(face.bounding_box, SIMULATED_FACES[1]);
        assert!((face.confidence - 0.71).abs() < 1e-9);

        let kinds: Vec<_> = face.characteristics.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                CharacteristicKind::Age,
                CharacteristicKind::Gender,
                CharacteristicKind::Ethnicity,
                CharacteristicKind::Hair,
                CharacteristicKind::Beard,
            ]
        );

        let c = &face.characteristics;
        assert_eq!(c[0].value, "teen");
        assert!((c[0].confidence - 0.61).abs() < 1e-9);
        assert_eq!(c[1].value, "female");
        assert!((c[1].confidence - 0.71).abs() < 1e-9);
        assert!(ETHNICITY_LABELS.contains(&c[2].value.as_str()));
        assert!((c[2].confidence - 0.51).abs() < 1e-9);
        assert_eq!(c[3].value, "short hair");
        assert!((c[3].confidence - 0.61).abs() < 1e-9);
        assert_eq!(c[4].value, "no beard");
        assert!((c[4].confidence - 0.51).abs() < 1e-9);
    }

    #[test]
    fn test_simulate_confidence_spreads() {
        let face = simulate(59);
        let c = &face.characteristics;
        // 59 % 30 = 29, 59 % 20 = 19
        assert!((c[0].confidence - 0.89).abs() < 1e-9);
        assert!((c[1].confidence - 0.89).abs() < 1e-9);
        assert!((c[2].confidence - 0.79).abs() < 1e-9);
        assert!((c[3].confidence - 0.79).abs() < 1e-9);
        assert!((c[4].confidence - 0.79).abs() < 1e-9);
        assert!((face.confidence - 0.89).abs() < 1e-9);
    }

    #[test]
    fn test_simulate_cycles_face_shapes() {
        assert_eq!(simulate(3).characteristics[0].value, "senior");
        assert_eq!(simulate(3).characteristics[3].value, "long hair");
        assert_eq!(simulate(4).characteristics[0].value, "child");
        assert_eq!(simulate(5).characteristics[3].value, "mohawk");
        assert_eq!(simulate(7).bounding_box, simulate(2).bounding_box);
    }
}
