use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::integration::DesignTool;
use crate::types::Margins;

#[derive(Parser)]
#[command(name = "brandcheck", version, about = "Brand guideline compliance checker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Print extra diagnostics
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check designs against a guideline file
    Check {
        /// Guideline file (.toml or .json)
        #[arg(long, short, value_name = "FILE")]
        guidelines: PathBuf,
        /// Design images or directories of images
        #[arg(required = true, value_name = "DESIGN")]
        designs: Vec<PathBuf>,
        /// Measured logo width in pixels
        #[arg(long, value_name = "PX")]
        logo_width: Option<f64>,
        /// Measured clear space around the logo in pixels
        #[arg(long, value_name = "PX", requires = "logo_width")]
        clear_space: Option<f64>,
        /// Measured page margins: `T,R,B,L` or one value for all sides
        #[arg(long, value_name = "T,R,B,L")]
        margins: Option<Margins>,
        /// Sample every Nth pixel (overrides brandcheck.toml)
        #[arg(long, value_name = "N")]
        stride: Option<usize>,
        /// Emit JSON instead of the console report
        #[arg(long)]
        json: bool,
        /// Also write the JSON export to FILE
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,
    },
    /// Show the dominant colors of a design
    Palette {
        #[arg(value_name = "DESIGN")]
        design: PathBuf,
        /// Number of colors to keep
        #[arg(long, value_name = "N")]
        top: Option<usize>,
        /// Tag each color with its class from this guideline file
        #[arg(long, short, value_name = "FILE")]
        guidelines: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Review the rules extracted from a guideline file
    Rules {
        #[arg(long, short, value_name = "FILE")]
        guidelines: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// List design-tool adapters and their capabilities
    Tools,
    /// Check the open document of a connected design tool
    Sync {
        /// figma, adobe-illustrator, sketch or canva
        #[arg(value_name = "TOOL")]
        tool: DesignTool,
        #[arg(long, short, value_name = "FILE")]
        guidelines: PathBuf,
        /// Access token or API key
        #[arg(long, value_name = "TOKEN")]
        token: String,
        #[arg(long, value_name = "ID")]
        document: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Write an example guideline file and brandcheck.toml
    Init {
        /// Directory to write into
        #[arg(long, default_value = ".", value_name = "DIR")]
        dir: PathBuf,
        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,
    },
}

/// Arguments for the Check command (used by handlers)
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    pub guidelines: PathBuf,
    pub designs: Vec<PathBuf>,
    pub logo_width: Option<f64>,
    pub clear_space: Option<f64>,
    pub margins: Option<Margins>,
    pub stride: Option<usize>,
    pub json: bool,
    pub export: Option<PathBuf>,
}
