//! CLI argument definitions using clap derive macros.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use swatchbook_core::{CaseStyle, CategoryPreset, PaletteExport, Separator, TokenExport, ValueType};

/// Design-system color palettes and token names
#[derive(Parser, Debug)]
#[command(name = "swatchbook", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: <config dir>/swatchbook/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate and export semantic color scales
    Palette {
        #[command(subcommand)]
        action: PaletteAction,
    },
    /// Build token names
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
    /// Manage the saved token library
    Tokens {
        #[command(subcommand)]
        action: TokensAction,
    },
}

/// Base colors and custom shades shared by the palette commands.
#[derive(Args, Debug, Default, Clone)]
pub struct PaletteArgs {
    /// Base color for the brand scale
    #[arg(long)]
    pub brand: Option<String>,
    /// Base color for the neutral scale
    #[arg(long)]
    pub neutral: Option<String>,
    /// Base color for the success scale
    #[arg(long)]
    pub success: Option<String>,
    /// Base color for the warning scale
    #[arg(long)]
    pub warning: Option<String>,
    /// Base color for the error (danger) scale
    #[arg(long)]
    pub error: Option<String>,
    /// Base color for the info scale
    #[arg(long)]
    pub info: Option<String>,
    /// Insert a custom shade: category:after[:label[:hex]]
    #[arg(long = "custom", value_name = "ENTRY")]
    pub customs: Vec<String>,
    /// Start from a previously exported generic JSON file
    #[arg(long, value_name = "PATH")]
    pub import: Option<PathBuf>,
}

/// Where an export goes. Stdout when no destination is given.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputArgs {
    /// Write to this file
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
    /// Write the default filename into the output directory
    #[arg(long, conflicts_with = "out")]
    pub download: bool,
    /// Copy to the clipboard
    #[arg(long)]
    pub copy: bool,
}

#[derive(Subcommand, Debug)]
pub enum PaletteAction {
    /// Print every scale
    Show {
        #[command(flatten)]
        palette: PaletteArgs,
    },
    /// Export the palette
    Export {
        #[command(flatten)]
        palette: PaletteArgs,
        #[arg(short, long, default_value = "css")]
        format: PaletteFormat,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PaletteFormat {
    /// CSS custom properties
    Css,
    /// Generic JSON
    Json,
    /// Figma design tokens
    Figma,
}

impl From<PaletteFormat> for PaletteExport {
    fn from(format: PaletteFormat) -> Self {
        match format {
            PaletteFormat::Css => PaletteExport::Css,
            PaletteFormat::Json => PaletteExport::Json,
            PaletteFormat::Figma => PaletteExport::Figma,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum TokenAction {
    /// Compose a token name from its parts
    Compose(ComposeArgs),
    /// List the preset chips and category presets
    Presets,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ComposeArgs {
    #[arg(long)]
    pub component: Option<String>,
    #[arg(long)]
    pub property: Option<String>,
    #[arg(long)]
    pub element: Option<String>,
    #[arg(long)]
    pub variant: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    /// Separator: - _ .
    #[arg(short, long)]
    pub separator: Option<Separator>,
    /// Case style: kebab, snake, camel, pascal
    #[arg(short, long)]
    pub case: Option<CaseStyle>,
    /// Category preset setting property and element (e.g. Colors, Typography)
    #[arg(short, long, value_parser = parse_preset)]
    pub preset: Option<CategoryPreset>,
    /// Save the composed name to the library
    #[arg(long)]
    pub save: bool,
    /// Token value stored with --save
    #[arg(long, requires = "save")]
    pub value: Option<String>,
    /// Value type stored with --save: color, dimension, other
    #[arg(long, requires = "save")]
    pub value_type: Option<ValueType>,
}

fn parse_preset(s: &str) -> Result<CategoryPreset, String> {
    CategoryPreset::from_label(s).ok_or_else(|| {
        let known: Vec<&str> = CategoryPreset::ALL.iter().map(|p| p.label()).collect();
        format!("Unknown preset '{}' (expected one of: {})", s, known.join(", "))
    })
}

#[derive(Subcommand, Debug)]
pub enum TokensAction {
    /// List saved tokens
    List,
    /// Delete tokens by id
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Delete every saved token
    Clear,
    /// Export saved tokens
    Export {
        #[arg(short, long, default_value = "generic")]
        format: TokenFormat,
        /// Only export these ids (default: all)
        #[arg(long, num_args = 1..)]
        ids: Vec<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TokenFormat {
    /// Name to value and type
    Generic,
    /// Figma variables, slash-separated names
    Figma,
}

impl From<TokenFormat> for TokenExport {
    fn from(format: TokenFormat) -> Self {
        match format {
            TokenFormat::Generic => TokenExport::Generic,
            TokenFormat::Figma => TokenExport::Figma,
        }
    }
}
