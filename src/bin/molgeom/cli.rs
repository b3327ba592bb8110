use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "molgeom",
    about = "Molecular mass, center of mass, and bond detection for XYZ structures",
    version,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Molecular mass and center of mass
    #[command(visible_alias = "m")]
    Mass(MassArgs),

    /// Detect bonds by interatomic distance
    #[command(visible_alias = "b")]
    Bonds(BondsArgs),

    /// Distance between two atoms
    #[command(visible_alias = "d")]
    Distance(DistanceArgs),

    /// Angle at the middle of three atoms
    #[command(visible_alias = "a")]
    Angle(AngleArgs),

    /// Summarize composition, mass, and bonding
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

impl Command {
    pub fn io(&self) -> &IoOptions {
        match self {
            Command::Mass(args) => &args.io,
            Command::Bonds(args) => &args.io,
            Command::Distance(args) => &args.io,
            Command::Angle(args) => &args.io,
            Command::Info(args) => &args.io,
        }
    }
}

/// I/O options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Input XYZ file (stdin if omitted or '-')
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Suppress banner and progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Atomic weight table options.
#[derive(Args)]
#[command(next_help_heading = "Atomic Weights")]
pub struct WeightOptions {
    /// Custom atomic weight table (TOML with a [weights] section)
    #[arg(long, value_name = "FILE")]
    pub weights: Option<PathBuf>,
}

/// Bond detection window.
#[derive(Args)]
#[command(next_help_heading = "Bond Criteria")]
pub struct BondOptions {
    /// Upper distance bound, exclusive (Å)
    #[arg(long = "max-bond", value_name = "Å", default_value = "1.5")]
    pub max_bond: f64,

    /// Lower distance bound, exclusive (Å); must be non-negative
    #[arg(
        long = "min-bond",
        value_name = "Å",
        default_value = "0.0",
        allow_hyphen_values = true
    )]
    pub min_bond: f64,
}

#[derive(Args)]
pub struct MassArgs {
    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub weights: WeightOptions,

    /// Also print the mass of every atom
    #[arg(long)]
    pub per_atom: bool,
}

#[derive(Args)]
pub struct BondsArgs {
    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub criteria: BondOptions,
}

#[derive(Args)]
pub struct DistanceArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// First atom (zero-based index)
    #[arg(long, short = 'a', value_name = "INDEX")]
    pub first: usize,

    /// Second atom (zero-based index)
    #[arg(long, short = 'b', value_name = "INDEX")]
    pub second: usize,
}

#[derive(Args)]
pub struct AngleArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// First arm atom (zero-based index)
    #[arg(long, short = 'a', value_name = "INDEX")]
    pub first: usize,

    /// Vertex atom (zero-based index)
    #[arg(long, short = 'b', value_name = "INDEX")]
    pub vertex: usize,

    /// Second arm atom (zero-based index)
    #[arg(long, short = 'c', value_name = "INDEX")]
    pub second: usize,

    /// Output unit
    #[arg(long, value_name = "UNIT", default_value = "degrees")]
    pub unit: AngleUnitArg,
}

#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub weights: WeightOptions,

    #[command(flatten)]
    pub criteria: BondOptions,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum AngleUnitArg {
    #[default]
    #[value(alias = "deg")]
    Degrees,
    #[value(alias = "rad")]
    Radians,
}

impl From<AngleUnitArg> for molgeom::AngleUnit {
    fn from(unit: AngleUnitArg) -> Self {
        match unit {
            AngleUnitArg::Degrees => molgeom::AngleUnit::Degrees,
            AngleUnitArg::Radians => molgeom::AngleUnit::Radians,
        }
    }
}

impl From<&BondOptions> for molgeom::BondCriteria {
    fn from(opts: &BondOptions) -> Self {
        molgeom::BondCriteria::new(opts.max_bond, opts.min_bond)
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
