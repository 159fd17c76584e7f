//! FieldWeave - edit decision list checker
//!
//! Validates an EDL against a set of clip descriptors and prints where each
//! output field takes its Y, U and V planes from.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fieldweave_compose::plan_frame;
use fieldweave_core::VideoDescriptor;
use fieldweave_timeline::config::{DEFAULT_LINE_LIMIT, DEFAULT_MAX_CLIPS, DEFAULT_PATH};
use fieldweave_timeline::{ClipRegistry, EdlParser, Timeline};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "fieldweave", version, about = "Check field-level edit decision lists")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the EDL and print the resulting clip length
    Check(Inputs),
    /// Print per-plane sources of output frames
    Plan {
        #[command(flatten)]
        inputs: Inputs,
        /// First output frame to print
        #[arg(long, default_value_t = 0)]
        from: u32,
        /// Number of output frames to print (default: all remaining)
        #[arg(long)]
        count: Option<u32>,
    },
}

#[derive(Args)]
struct Inputs {
    /// JSON array of clip descriptors, clip 0 first
    #[arg(long)]
    clips: PathBuf,
    /// Edit decision list
    #[arg(long, default_value = DEFAULT_PATH)]
    edl: PathBuf,
    /// Maximum accepted EDL lines
    #[arg(long, default_value_t = DEFAULT_LINE_LIMIT)]
    line_limit: usize,
    /// Maximum number of clips
    #[arg(long, default_value_t = DEFAULT_MAX_CLIPS)]
    max_clips: usize,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match Cli::parse().command {
        Command::Check(inputs) => {
            let (registry, timeline) = load(&inputs)?;
            println!("clips:         {}", registry.len());
            for (i, descriptor) in registry.descriptors().iter().enumerate() {
                println!(
                    "  #{}: {}x{} {:?}, {} fields, {} frames",
                    i,
                    descriptor.width,
                    descriptor.height,
                    descriptor.color_space,
                    descriptor.frame_count,
                    registry.frame_based_count(i).unwrap_or(0)
                );
            }
            println!("lines:         {}", timeline.len());
            println!("output frames: {}", timeline.output_frame_count());
        }
        Command::Plan {
            inputs,
            from,
            count,
        } => {
            let (_, timeline) = load(&inputs)?;
            let total = timeline.output_frame_count();
            let end = match count {
                Some(count) => from.saturating_add(count).min(total),
                None => total,
            };
            for n in from..end {
                let (parity, sources) = plan_frame(&timeline, n)?;
                let planes: Vec<String> = sources
                    .iter()
                    .map(|s| format!("{} {}:{}", s.plane, s.clip, s.field_frame))
                    .collect();
                println!("{:>7} {:<6} {}", n, parity, planes.join("  "));
            }
        }
    }

    Ok(())
}

fn load(inputs: &Inputs) -> Result<(ClipRegistry, Timeline)> {
    let text = std::fs::read_to_string(&inputs.clips)
        .with_context(|| format!("reading {}", inputs.clips.display()))?;
    let descriptors: Vec<VideoDescriptor> = serde_json::from_str(&text)
        .with_context(|| format!("parsing clip descriptors in {}", inputs.clips.display()))?;

    let parsed = EdlParser::new(inputs.line_limit).parse_path(&inputs.edl)?;
    let registry = ClipRegistry::with_max_clips(descriptors, inputs.max_clips)?;
    let timeline = Timeline::build(parsed, &registry)?;
    info!(path = %inputs.edl.display(), "EDL is valid");
    Ok((registry, timeline))
}
