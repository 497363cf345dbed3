//! Segment a recorded pen stroke and print the result as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example segment_stroke -- --input stroke.json
//! cat stroke.json | cargo run --example segment_stroke -- --config configs/default.yaml
//! ```
//!
//! # Input
//!
//! A JSON array of samples: `[{"x": 0.0, "y": 0.0, "t": 0.0}, ...]`
//!
//! # Output
//!
//! The segmentation (corners, segments with their fitted models, pass and
//! merge counts) as pretty-printed JSON on stdout. Progress goes to the log;
//! set `RUST_LOG=debug` to see it.

use std::io::Read;

use clap::Parser;

use rekha::segmentation::{EventLog, EventRecord};
use rekha::{PointSequence, RekhaConfig, StrokeSample};

#[derive(Parser)]
#[command(name = "segment-stroke")]
#[command(about = "Find corners in a pen stroke and classify its segments")]
struct Args {
    /// Input JSON file (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// YAML configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Include the pipeline event log in the output
    #[arg(long)]
    events: bool,
}

#[derive(serde::Serialize)]
struct Output<'a> {
    #[serde(flatten)]
    segmentation: &'a rekha::Segmentation,
    #[serde(skip_serializing_if = "Option::is_none")]
    events: Option<&'a [EventRecord]>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => RekhaConfig::from_yaml_file(path)?,
        None => RekhaConfig::default(),
    };

    let json = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let samples: Vec<StrokeSample> = serde_json::from_str(&json)?;
    log::info!("Loaded {} samples", samples.len());

    let mut stroke = PointSequence::from_samples(&samples, &config.stroke)?;
    let mut recorder = EventLog::new();
    let segmentation = config.to_segmenter().run_observed(&mut stroke, &mut recorder)?;

    log::info!(
        "{} corners, {} segments after {} passes",
        segmentation.corners.len(),
        segmentation.segments.len(),
        segmentation.passes
    );

    let output = Output {
        segmentation: &segmentation,
        events: args.events.then_some(recorder.events.as_slice()),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
