use clap::{Parser, Subcommand, ValueEnum};
use labelpress::model::FacetLevel;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "labelpress")]
#[command(about = "Generate print-ready product label sheets from a catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the catalog table
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Root directory for background template images
    #[arg(short, long, global = true)]
    pub templates: Option<PathBuf>,

    /// Brand facet
    #[arg(long, global = true)]
    pub brand: Option<String>,

    /// Collection facet (omit for "all collections")
    #[arg(long, global = true)]
    pub collection: Option<String>,

    /// Product series facet
    #[arg(long, global = true)]
    pub series: Option<String>,

    /// Color name facet
    #[arg(long, global = true)]
    pub color_name: Option<String>,

    /// Color number facet
    #[arg(long, global = true)]
    pub color_number: Option<String>,

    /// Finish facet (shown on the label, never matched against the catalog)
    #[arg(long, global = true)]
    pub finish: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the legal values for a facet under the current upstream selection
    #[command(alias = "ls")]
    Options {
        /// Facet level to list
        #[arg(value_enum)]
        facet: FacetArg,
    },

    /// Show the catalog record the current selection resolves to
    #[command(alias = "r")]
    Resolve,

    /// Render a single-label preview PNG
    #[command(alias = "p")]
    Preview {
        /// Output image path
        #[arg(short, long, default_value = "label.png")]
        out: PathBuf,

        /// Uniform scale factor over the 2x3in footprint
        #[arg(short, long)]
        scale: Option<u32>,
    },

    /// Rasterize the 8-label sheet and export it as a single-page PDF
    #[command(alias = "x")]
    Export {
        /// Output document path (defaults to the configured fixed name)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FacetArg {
    Brand,
    Collection,
    Series,
    ColorName,
    ColorNumber,
    Finish,
}

impl From<FacetArg> for FacetLevel {
    fn from(value: FacetArg) -> Self {
        match value {
            FacetArg::Brand => FacetLevel::Brand,
            FacetArg::Collection => FacetLevel::Collection,
            FacetArg::Series => FacetLevel::Series,
            FacetArg::ColorName => FacetLevel::ColorName,
            FacetArg::ColorNumber => FacetLevel::ColorNumber,
            FacetArg::Finish => FacetLevel::Finish,
        }
    }
}
