use std::fs;
use std::io::{self, Write};
use std::num::NonZeroU16;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use dungeon::point::FloorDimension;
use dungeon::{Direction, Dungeon, DungeonType, Explorer, GenerationConfig, MoveOutcome};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "dungeon", version, about = "Cellular-automata cave dungeon generator")]
struct Cli {
    /// Log more (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a dungeon.
    Generate {
        #[arg(long, default_value = "50", value_parser = parse_dimension)]
        width: FloorDimension,
        #[arg(long, default_value = "50", value_parser = parse_dimension)]
        height: FloorDimension,
        #[arg(long, default_value = "5")]
        floors: NonZeroU16,
        /// Overrides the seed from --config.
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long = "type", value_enum, default_value_t = TypeArg::Cave)]
        dungeon_type: TypeArg,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Write here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
        /// GenerationConfig as JSON; missing fields take their defaults.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Overrides the worker count from --config.
        #[arg(long)]
        workers: Option<usize>,
        /// Save a GIF of each floor being built into this directory.
        #[arg(long)]
        record_dir: Option<PathBuf>,
    },
    /// Print the floors of a dungeon JSON file as text.
    Render {
        input: PathBuf,
        /// Only this floor.
        #[arg(long)]
        floor: Option<u16>,
    },
    /// Walk through a dungeon JSON file from the first entrance.
    Explore {
        input: PathBuf,
        /// Moves as letters: U, D, L, R.
        #[arg(long)]
        moves: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TypeArg {
    Cave,
    Forest,
}

impl From<TypeArg> for DungeonType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Cave => DungeonType::Cave,
            TypeArg::Forest => DungeonType::Forest,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Gif,
    Ascii,
}

fn parse_dimension(s: &str) -> Result<FloorDimension, String> {
    let n: i32 = s.parse().map_err(|e: std::num::ParseIntError| e.to_string())?;
    FloorDimension::new(n).map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Command::Generate {
            width,
            height,
            floors,
            seed,
            dungeon_type,
            format,
            output,
            config,
            workers,
            record_dir,
        } => {
            let mut config = match config {
                Some(path) => load_config(&path)?,
                None => GenerationConfig::default(),
            };
            config.seed = seed.or(config.seed);
            config.workers = workers.or(config.workers);
            config.record_frames |= record_dir.is_some();

            let (dungeon, recordings) =
                Dungeon::generate_recorded(height, width, floors, dungeon_type.into(), &config)
                    .context("generating dungeon")?;

            if let Some(dir) = record_dir {
                fs::create_dir_all(&dir)
                    .with_context(|| format!("creating {}", dir.display()))?;
                for recording in &recordings {
                    let path = dir.join(format!("floor_{}.gif", recording.id));
                    fs::write(&path, &recording.gif)
                        .with_context(|| format!("writing {}", path.display()))?;
                }
            }

            let bytes = match format {
                Format::Json => dungeon.to_json()?.into_bytes(),
                Format::Gif => dungeon.to_gif()?,
                Format::Ascii => render(&dungeon, None)?.into_bytes(),
            };
            emit(output.as_deref(), &bytes)?;
        }
        Command::Render { input, floor } => {
            let dungeon = load_dungeon(&input)?;
            print!("{}", render(&dungeon, floor)?);
        }
        Command::Explore { input, moves } => {
            let dungeon = load_dungeon(&input)?;
            let directions = moves
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| Direction::from_char(c).with_context(|| format!("unknown move {c:?}")))
                .collect::<anyhow::Result<Vec<_>>>()?;

            let Some(mut explorer) = Explorer::enter(&dungeon) else {
                bail!("dungeon has no entrance on its first floor");
            };
            let mut out = io::stdout().lock();
            for direction in directions {
                match explorer.step(&dungeon, direction) {
                    MoveOutcome::Moved => writeln!(out, "{direction:?}: moved")?,
                    MoveOutcome::Blocked => writeln!(out, "{direction:?}: blocked")?,
                    MoveOutcome::FloorChanged { from, to } => {
                        writeln!(out, "{direction:?}: floor {from} -> {to}")?
                    }
                }
            }
            writeln!(out, "floor {} at {}", explorer.floor, explorer.position)?;
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<GenerationConfig> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: GenerationConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    config.validate().context("invalid config")?;
    Ok(config)
}

fn load_dungeon(path: &Path) -> anyhow::Result<Dungeon> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Dungeon::from_json(&text).with_context(|| format!("loading {}", path.display()))
}

/// Every floor (or just `only`) as text, each under a header line.
fn render(dungeon: &Dungeon, only: Option<u16>) -> anyhow::Result<String> {
    let mut text = String::new();
    for (id, floor) in dungeon.floors.iter().enumerate() {
        if only.is_some_and(|n| usize::from(n) != id) {
            continue;
        }
        text.push_str(&format!("floor {id}\n{floor}\n\n"));
    }
    if text.is_empty() {
        bail!(
            "no floor {} (dungeon has {})",
            only.unwrap_or_default(),
            dungeon.floors.len()
        );
    }
    Ok(text)
}

fn emit(output: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
            Ok(())
        }
    }
}
