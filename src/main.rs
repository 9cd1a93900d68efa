use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::{info, warn};

use lineup_rotation::config::AppConfig;
use lineup_rotation::lineup::validate_roster;
use lineup_rotation::roster::load_roster;
use lineup_rotation::rotation::{plan_rotation, player_stats, Rotation, RotationPlan, RotationSettings};
use lineup_rotation::{logging, web};

#[derive(Parser)]
#[command(name = "lineup-rotation")]
#[command(version)]
#[command(about = "Plan fair fielding-position rotations for a lineup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a rotation from a roster CSV and print it as JSON
    Generate {
        /// Roster CSV (needs at least a name column)
        roster: PathBuf,
        /// Number of innings to plan
        #[arg(short, long)]
        innings: Option<u32>,
        /// Leave the pitcher position out of the rotation
        #[arg(long)]
        no_pitcher: bool,
        /// Leave the catcher position out of the rotation
        #[arg(long)]
        no_catcher: bool,
        /// Write the JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Count how often a player held each position in a saved rotation
    Stats {
        /// JSON written by `generate`, or a bare rotation array
        rotation: PathBuf,
        player_id: String,
    },
    /// Run the JSON web API
    Serve {
        /// Overrides LINEUP_PORT
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RotationFile {
    Plan(RotationPlan),
    Bare(Rotation),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            roster,
            innings,
            no_pitcher,
            no_catcher,
            output,
        } => {
            let settings = RotationSettings {
                number_of_innings: innings.unwrap_or(RotationSettings::default().number_of_innings),
                use_pitcher: !no_pitcher,
                use_catcher: !no_catcher,
            };
            let max_innings = AppConfig::max_innings_from_env()?;
            generate(&roster, &settings, max_innings, output.as_deref())
        }
        Commands::Stats { rotation, player_id } => stats(&rotation, &player_id),
        Commands::Serve { port } => {
            let mut config = AppConfig::from_env()?;
            if let Some(port) = port {
                config.port = port;
            }
            info!("Access the API at http://localhost:{}/api/health", config.port);
            web::start_server(&config).await?;
            Ok(())
        }
    }
}

fn generate(
    roster_path: &Path,
    settings: &RotationSettings,
    max_innings: u32,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let players = load_roster(roster_path)
        .with_context(|| format!("loading roster from {}", roster_path.display()))?;
    validate_roster(&players, settings, max_innings)?;

    let plan = plan_rotation(&players, settings);
    for gap in &plan.unfilled {
        warn!(inning = gap.inning, position = gap.position.display_name(), "position left unfilled");
    }

    let json = serde_json::to_string_pretty(&plan)?;
    match output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "rotation saved");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Accepts either the plan written by `generate` or a bare rotation array
fn parse_rotation_file(raw: &str) -> serde_json::Result<Rotation> {
    Ok(match serde_json::from_str(raw)? {
        RotationFile::Plan(plan) => plan.rotation,
        RotationFile::Bare(rotation) => rotation,
    })
}

fn stats(rotation_path: &Path, player_id: &str) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(rotation_path)
        .with_context(|| format!("reading {}", rotation_path.display()))?;
    let rotation = parse_rotation_file(&raw)
        .with_context(|| format!("parsing {}", rotation_path.display()))?;

    let counts = player_stats(player_id, &rotation);
    if counts.is_empty() {
        warn!(player_id, "player does not appear in the rotation");
    }
    println!("{}", serde_json::to_string_pretty(&counts)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_rotation::rotation::Position;

    const INNING: &str =
        r#"[{"inning":1,"playerId":"a","playerName":"A","position":"P","battingOrder":1}]"#;

    #[test]
    fn generate_output_is_read_back() {
        let raw = format!(r#"{{"rotation":[{INNING}],"unfilled":[]}}"#);
        assert!(matches!(
            serde_json::from_str::<RotationFile>(&raw).unwrap(),
            RotationFile::Plan(_)
        ));

        let rotation = parse_rotation_file(&raw).unwrap();
        assert_eq!(rotation.len(), 1);
        assert_eq!(rotation[0][0].position, Position::Pitcher);
    }

    #[test]
    fn bare_rotation_array_is_read() {
        let raw = format!("[{INNING}]");
        assert!(matches!(
            serde_json::from_str::<RotationFile>(&raw).unwrap(),
            RotationFile::Bare(_)
        ));
        assert_eq!(player_stats("a", &parse_rotation_file(&raw).unwrap()).len(), 1);
    }

    #[test]
    fn unrelated_json_is_rejected() {
        assert!(parse_rotation_file(r#"{"players":[]}"#).is_err());
    }
}
