//! Mindtriage CLI.
//!
//! Commands:
//! - `assess`: Triage one utterance and print the assessment as JSON
//! - `resources`: List knowledge-base entries, optionally by type
//! - `greeting`: Print the opening assistant message

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use mindtriage_lib::triage::reply::GREETING;
use mindtriage_lib::triage::SensorSimulator;
use mindtriage_lib::{KnowledgeBase, Mood, SensorSnapshot, TriageEngine};

#[derive(Parser)]
#[command(
    name = "mindtriage",
    about = "Mindtriage: rule-based mental-health triage",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Knowledge-base JSON file (overrides MINDTRIAGE_KNOWLEDGE_BASE; defaults
    /// to the bundled dataset)
    #[arg(long, global = true)]
    knowledge_base: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Triage one utterance
    Assess {
        /// What the user said
        text: String,

        /// Heart rate in bpm
        #[arg(long)]
        heart_rate: Option<u32>,

        /// Mood label (low, very_low, agitated, manic, normal, ...)
        #[arg(long)]
        mood: Option<String>,

        /// Fill sensor data from the demo simulator
        #[arg(long, conflicts_with_all = ["heart_rate", "mood"])]
        simulate_sensors: bool,
    },

    /// List knowledge-base entries
    Resources {
        /// Only entries of this exact type
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },

    /// Print the opening assistant message
    Greeting,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    mindtriage_lib::init_tracing(cli.verbose);

    match cli.command {
        Commands::Assess {
            text,
            heart_rate,
            mood,
            simulate_sensors,
        } => {
            if text.trim().is_empty() {
                return Err("utterance must not be empty".into());
            }

            let kb = KnowledgeBase::configured(cli.knowledge_base.as_deref())?;
            let engine = TriageEngine::new(Arc::new(kb));

            let snapshot = if simulate_sensors {
                Some(SensorSimulator::new(rand::thread_rng()).sample())
            } else if heart_rate.is_some() || mood.is_some() {
                Some(SensorSnapshot::new(mood.map(Mood::from), heart_rate))
            } else {
                None
            };

            let assessment = engine.assess(&text, snapshot.as_ref());
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        }
        Commands::Resources { kind } => {
            let kb = KnowledgeBase::configured(cli.knowledge_base.as_deref())?;
            let entries: Vec<_> = match kind.as_deref() {
                Some(kind) => kb.by_type(kind),
                None => kb.entries().iter().collect(),
            };
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Commands::Greeting => println!("{GREETING}"),
    }

    Ok(())
}
