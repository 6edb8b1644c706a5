use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use spidermatch_core::{
    estimator, report, Characteristic, CharacteristicKind, CharacterMatcher, DetectionCandidate,
    MatchResult, Matcher, Observation,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

#[derive(Parser)]
#[command(
    name = "spidermatch",
    version,
    about = "Tag a face and find its closest Spider-Verse character"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze detector output and find the best character match
    Analyze {
        /// JSON array of detected faces; omit when no detector is available
        #[arg(short, long)]
        detections: Option<PathBuf>,
        /// Seed for the simulated fallback
        #[arg(short, long)]
        seed: Option<u64>,
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print the simulated analysis for a seed
    Simulate {
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// List catalog profiles
    Catalog,
    /// Score a hand-written observation set against the catalog
    Match {
        /// Age bracket (e.g. "teen", "young adult")
        #[arg(long)]
        age: Option<String>,
        /// Gender ("male" or "female")
        #[arg(long)]
        gender: Option<String>,
        /// Observed characteristic as TYPE=VALUE (e.g. "hair=mohawk"); repeatable
        #[arg(long = "trait", value_parser = parse_characteristic)]
        traits: Vec<Characteristic>,
    },
}

/// Parse `TYPE=VALUE` into a fully confident characteristic.
fn parse_characteristic(s: &str) -> Result<Characteristic, String> {
    let (kind, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected TYPE=VALUE, got {s:?}"))?;
    let kind = CharacteristicKind::from_name(kind)
        .ok_or_else(|| format!("unknown characteristic type {kind:?}"))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("empty value for {kind}"));
    }
    Ok(Characteristic::new(kind, value, 1.0))
}

/// Analyze output: per-face analyses, display tags and the image-level match.
#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    faces_detected: usize,
    simulated: bool,
    faces: &'a [spidermatch_core::FaceAnalysis],
    tags: Vec<Characteristic>,
    #[serde(rename = "match")]
    best_match: &'a MatchResult,
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn read_detections(path: &Path) -> Result<Vec<DetectionCandidate>> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("reading detections from {}", path.display()))?;
    let candidates: Vec<DetectionCandidate> = serde_json::from_str(&src)
        .with_context(|| format!("parsing detections in {}", path.display()))?;

    if let Some(bad) = candidates
        .iter()
        .position(|c| !(c.bounding_box.width > 0.0 && c.bounding_box.height > 0.0))
    {
        bail!("detection {bad} has a non-positive bounding box");
    }

    tracing::debug!(path = %path.display(), count = candidates.len(), "detections loaded");
    Ok(candidates)
}

fn describe_match(result: &MatchResult) -> String {
    match &result.profile {
        Some(profile) => format!(
            "Best match: {} ({}%)",
            profile.name,
            (result.score * 100.0).round() as i64
        ),
        None => "Best match: none".to_string(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Analyze {
            detections,
            seed,
            format,
        } => {
            let catalog = config.load_catalog().context("loading character catalog")?;
            let matcher = CharacterMatcher::new(catalog);

            let candidates = detections.as_deref().map(read_detections).transpose()?;
            let seed = config.resolve_seed(seed);
            let detection = spidermatch_core::process(candidates.as_deref(), seed);
            let best_match = matcher.match_faces(&detection.analyses);

            match format {
                Format::Json => print_json(
                    &AnalyzeOutput {
                        faces_detected: detection.faces_detected,
                        simulated: detection.simulated,
                        faces: &detection.analyses,
                        tags: report::tags(&detection.analyses),
                        best_match: &best_match,
                    },
                    config.pretty,
                )?,
                Format::Text => {
                    println!("{}", report::format_report(&detection.analyses));
                    println!();
                    println!("{}", describe_match(&best_match));
                }
            }
        }
        Commands::Simulate { seed } => {
            let seed = config.resolve_seed(seed);
            tracing::info!(seed, "simulating face analysis");
            print_json(&estimator::simulate(seed), config.pretty)?;
        }
        Commands::Catalog => {
            let catalog = config.load_catalog().context("loading character catalog")?;
            for (n, profile) in catalog.profiles().iter().enumerate() {
                let age = profile.age_bracket.map_or("-", |a| a.label());
                let gender = profile.gender.map_or("-", |g| g.label());
                println!(
                    "{:>2}. {} [{age}, {gender}] {}",
                    n + 1,
                    profile.name,
                    profile.traits.join(", ")
                );
            }
        }
        Commands::Match {
            age,
            gender,
            traits,
        } => {
            let catalog = config.load_catalog().context("loading character catalog")?;
            let matcher = CharacterMatcher::new(catalog);
            let observed = Observation {
                age,
                gender,
                characteristics: traits,
            };
            print_json(&matcher.best_match(&observed), config.pretty)?;
        }
    }

    Ok(())
}
