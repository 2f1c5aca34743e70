//! Command line and environment configuration.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::maze::{GeneratorKind, MazeConfig, MazeSizing, DEFAULT_FIXED_SIDE, MIN_DIMENSION};
use crate::protocol::DEFAULT_PORT;

/// Sizing policy as picked on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SizingMode {
    /// Grow the maze with the quiz's maximum score.
    Scaled,
    /// Always use `--fixed-side`.
    Fixed,
}

/// Generation algorithm as picked on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorMode {
    /// Randomized Prim's algorithm.
    Prims,
    /// Depth-first recursive backtracker.
    Backtracker,
}

impl From<GeneratorMode> for GeneratorKind {
    fn from(mode: GeneratorMode) -> Self {
        match mode {
            GeneratorMode::Prims => GeneratorKind::Prims,
            GeneratorMode::Backtracker => GeneratorKind::Backtracker,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Serves a quiz and mazes sized by its score", long_about = None)]
pub struct Args {
    /// JSON file to load the quiz questions from
    #[arg(short, long, env = "QUIZ_MAZE_QUIZ", default_value = "quiz.json")]
    pub quiz: PathBuf,

    /// Address to bind
    #[arg(long, env = "QUIZ_MAZE_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "QUIZ_MAZE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// How to pick the maze size
    #[arg(long, env = "QUIZ_MAZE_SIZING", value_enum, default_value_t = SizingMode::Scaled)]
    pub sizing: SizingMode,

    /// Rooms per maze side when `--sizing fixed` is used
    #[arg(long, env = "QUIZ_MAZE_FIXED_SIDE", default_value_t = DEFAULT_FIXED_SIDE)]
    pub fixed_side: usize,

    /// Maze generation algorithm
    #[arg(long, env = "QUIZ_MAZE_GENERATOR", value_enum, default_value_t = GeneratorMode::Prims)]
    pub generator: GeneratorMode,

    /// Return bare grids without a solution path
    #[arg(long, env = "QUIZ_MAZE_NO_SOLVE")]
    pub no_solve: bool,

    /// Seed for reproducible mazes
    #[arg(long, env = "QUIZ_MAZE_SEED")]
    pub seed: Option<u64>,
}

/// Validated server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub quiz_path: PathBuf,
    pub addr: SocketAddr,
    pub maze: MazeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `--fixed-side` leaves no room in the maze.
    FixedSideTooSmall(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FixedSideTooSmall(side) => write!(
                f,
                "--fixed-side must be at least {}, got {}",
                MIN_DIMENSION, side
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let sizing = match args.sizing {
            SizingMode::Scaled => MazeSizing::Scaled,
            SizingMode::Fixed if args.fixed_side < MIN_DIMENSION => {
                return Err(ConfigError::FixedSideTooSmall(args.fixed_side));
            }
            SizingMode::Fixed => MazeSizing::Fixed(args.fixed_side),
        };

        Ok(Self {
            quiz_path: args.quiz,
            addr: SocketAddr::new(args.host, args.port),
            maze: MazeConfig {
                sizing,
                generator: args.generator.into(),
                solve: !args.no_solve,
                seed: args.seed,
            },
        })
    }
}
