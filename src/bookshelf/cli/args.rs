use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bookshelf", version)]
#[command(about = "Browse and edit a remote book catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog base URL (overrides BOOKSHELF_CATALOG_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every book with the catalog statistics
    #[command(alias = "ls")]
    List,

    /// Add a book to the catalog
    Add {
        #[arg(long)]
        title: String,

        /// Copies in stock (1 to 5)
        #[arg(long, allow_negative_numbers = true)]
        stock: i64,

        #[arg(long, allow_negative_numbers = true)]
        price: f64,

        #[arg(long)]
        in_color: bool,
    },

    /// Remove the book with the given title
    #[command(alias = "rm")]
    Delete { title: String },

    /// Show a filtered list
    Filter {
        #[command(subcommand)]
        by: FilterBy,
    },

    /// Show or set configuration (catalog-url)
    Config {
        key: Option<String>,
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FilterBy {
    /// Books priced strictly above the threshold
    Price {
        #[arg(allow_negative_numbers = true)]
        threshold: f64,
    },

    /// Books whose title contains the text
    Title { text: String },

    /// Books printed in color
    Color {
        /// Turn the color filter off and list everything
        #[arg(long)]
        off: bool,
    },
}
