//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use stock_core::modules::ModuleId;
use stock_core::profiles::ProfileFamily;
use stock_core::settings::InteractionMode;
use stock_core::shapes::PlateMaterial;
use stock_core::stock_code::ProducerCode;

#[derive(Parser)]
#[command(name = "stockcalc")]
#[command(author, version, about = "Stock weight calculator and stock-code builder")]
#[command(
    long_about = "Computes weight per piece for plates, bars, angles, tubes and rolled profiles, \
                  lists standard profile weights and builds stock codes."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Settings file (JSON)
    #[arg(long, global = true, env = "STOCKCALC_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Weight of a single piece
    #[command(subcommand)]
    Weight(WeightCommands),

    /// Weight of a rolled profile piece (NPU, HEA, HEB, NPI)
    Profile(ProfileArgs),

    /// List the nominal sizes of a profile family
    Sizes(SizesArgs),

    /// Profile weight ledger: 1 m and 6 m weights
    Ledger(LedgerArgs),

    /// Build a stock code
    #[command(subcommand)]
    Code(CodeCommands),

    /// List producer codes for semi-finished goods
    Producers,

    /// List panel modules
    Modules,

    /// Fill in a module's rows interactively
    Sheet(SheetArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum MaterialArg {
    /// Cast polyamide
    Polymer,
    Steel,
}

impl From<MaterialArg> for PlateMaterial {
    fn from(m: MaterialArg) -> Self {
        match m {
            MaterialArg::Polymer => PlateMaterial::Polymer,
            MaterialArg::Steel => PlateMaterial::Steel,
        }
    }
}

/// All measurements in millimeters
#[derive(Subcommand, Debug)]
pub enum WeightCommands {
    /// Flat plate
    Plate {
        #[arg(long, value_enum, default_value = "steel")]
        material: MaterialArg,
        thickness: f64,
        width: f64,
        length: f64,
    },
    /// Round rod
    Rod { diameter: f64, length: f64 },
    /// Hex bar measured across flats
    Hex { across_flats: f64, length: f64 },
    /// Square bar
    Square { side: f64, length: f64 },
    /// Flat bar
    Flat { width: f64, height: f64, length: f64 },
    /// Equal-leg angle
    Angle { leg: f64, wall: f64, length: f64 },
    /// Seamless tube
    Tube {
        outer_diameter: f64,
        wall: f64,
        length: f64,
        /// Inner diameter, overrides the wall thickness
        #[arg(long)]
        inner: Option<f64>,
    },
    /// Box or round structural tube: length in meters
    Hollow { length: f64 },
}

#[derive(clap::Args, Debug)]
pub struct ProfileArgs {
    /// Profile family (NPU, HEA, HEB, NPI)
    pub family: ProfileFamily,
    /// Nominal size in millimeters
    pub size: u32,
    /// Piece length in millimeters
    pub length: f64,
}

#[derive(clap::Args, Debug)]
pub struct SizesArgs {
    pub family: ProfileFamily,
}

#[derive(clap::Args, Debug)]
pub struct LedgerArgs {
    /// Only show one family
    #[arg(long)]
    pub family: Option<ProfileFamily>,

    /// Write the ledger to a CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum CodeCommands {
    /// Finished good: M-<order>-<unit>-<item>
    Finished {
        #[arg(long, default_value = "")]
        order: String,
        #[arg(long, default_value = "")]
        unit: String,
        #[arg(long, default_value = "")]
        item: String,
    },
    /// Semi-finished good: Y<producer>-<order>-<item>[-<drawing>][-<sub>...]
    Semi {
        #[arg(long, default_value = "HK")]
        producer: ProducerCode,
        #[arg(long, default_value = "")]
        order: String,
        #[arg(long, default_value = "")]
        item: String,
        #[arg(long)]
        drawing: Option<String>,
        /// Sub-positions, up to three
        #[arg(long, num_args = 1..=3)]
        sub: Vec<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Compute after all rows are entered
    Submit,
    /// Recompute after every row
    Live,
}

impl From<ModeArg> for InteractionMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Submit => InteractionMode::Submit,
            ModeArg::Live => InteractionMode::Live,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct SheetArgs {
    /// Module key, see `stockcalc modules`
    pub module: ModuleId,

    /// Write the result table to a CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Override the interaction mode from settings
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_profile() {
        let cli = Cli::try_parse_from(["stockcalc", "profile", "heb", "200", "6000"]).unwrap();
        match cli.command {
            Commands::Profile(args) => {
                assert_eq!(args.family, ProfileFamily::Heb);
                assert_eq!(args.size, 200);
            }
            _ => panic!("expected profile command"),
        }
    }

    #[test]
    fn test_parse_semi_code() {
        let cli = Cli::try_parse_from([
            "stockcalc", "code", "semi", "--producer", "ft", "--order", "O1", "--sub", "A", "B",
        ])
        .unwrap();
        match cli.command {
            Commands::Code(CodeCommands::Semi { producer, sub, .. }) => {
                assert_eq!(producer, ProducerCode::Ft);
                assert_eq!(sub, vec!["A", "B"]);
            }
            _ => panic!("expected semi code"),
        }
    }

    #[test]
    fn test_unknown_module_rejected() {
        assert!(Cli::try_parse_from(["stockcalc", "sheet", "girder"]).is_err());
    }
}
