use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "wisata")]
#[command(about = "Tourist-attraction catalog: lookup, top-rated and nearest places", long_about = None)]
#[command(version = crate::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Display fields shared by `add` and `edit`.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Photo URL
    #[arg(long)]
    pub photo: Option<String>,

    /// Rating, e.g. 4.5
    #[arg(long)]
    pub rating: Option<f64>,

    /// Description or address
    #[arg(long)]
    pub description: Option<String>,

    /// Latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    #[command(flatten)]
    pub classes: ClassArgs,
}

/// The three classification axes.
#[derive(Args, Debug, Default)]
pub struct ClassArgs {
    /// Environment class, e.g. coastal
    #[arg(long)]
    pub environment: Option<String>,

    /// Scenery class, e.g. waterfall
    #[arg(long)]
    pub scenery: Option<String>,

    /// Category class, e.g. nature
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an attraction
    #[command(alias = "n")]
    Add {
        /// Name of the attraction
        name: String,

        /// Use this id instead of a generated one
        #[arg(long)]
        id: Option<String>,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Import places-lookup candidates from a JSON file
    Import {
        /// File holding a lookup response or an array of candidates
        file: std::path::PathBuf,

        #[command(flatten)]
        classes: ClassArgs,
    },

    /// Show one or more attractions by id
    #[command(alias = "v")]
    Show {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Change fields of an attraction; unspecified fields are kept
    #[command(alias = "e")]
    Edit {
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Remove one or more attractions
    #[command(alias = "rm")]
    Remove {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Succeed for ids that are already gone
        #[arg(long)]
        missing_ok: bool,
    },

    /// List every attraction, sorted by name
    #[command(alias = "ls")]
    List,

    /// Find attractions by one axis, or by two axes at once
    Find {
        /// Exact name
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        classes: ClassArgs,
    },

    /// Highest-rated attractions
    Top {
        /// How many to show (defaults to top-limit)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Attractions closest to a point
    Nearest {
        /// Latitude of the point
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<String>,

        /// Longitude of the point
        #[arg(long, allow_hyphen_values = true)]
        lng: Option<String>,

        /// How many to show (defaults to nearest-limit)
        #[arg(short = 'k', long)]
        limit: Option<usize>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., top-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
