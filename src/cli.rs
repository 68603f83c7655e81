use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::filter::{Filter, NameSets};

const EXAMPLES: &str = "\
Examples:
  siftree
  siftree /var/log
  siftree --exclude-extensions log tmp
  siftree --exclude-directories target \"build cache\"
  siftree src --include-extensions rs toml
  siftree --include-directories assets
  siftree --ee log     (short-style aliases work for every filter option)
";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "siftree",
    version,
    about = "Directory tree printer with filtering",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Directory to render (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Hide files with these exact names (case sensitive)
    #[arg(long = "exclude-files", alias = "ef", num_args = 1.., value_name = "NAME")]
    pub exclude_files: Vec<String>,

    /// Hide files with these extensions ("log" and ".log" both work)
    #[arg(long = "exclude-extensions", alias = "ee", num_args = 1.., value_name = "EXT")]
    pub exclude_extensions: Vec<String>,

    /// Hide directories with these exact names (case sensitive)
    #[arg(long = "exclude-directories", alias = "ed", num_args = 1.., value_name = "NAME")]
    pub exclude_directories: Vec<String>,

    /// Show only files with these exact names
    #[arg(long = "include-files", alias = "if", num_args = 1.., value_name = "NAME")]
    pub include_files: Vec<String>,

    /// Show only files with these extensions
    #[arg(long = "include-extensions", alias = "ie", num_args = 1.., value_name = "EXT")]
    pub include_extensions: Vec<String>,

    /// Show these directories with everything beneath them
    #[arg(long = "include-directories", alias = "id", num_args = 1.., value_name = "NAME")]
    pub include_directories: Vec<String>,

    /// Print the resolved path and filter to stderr before rendering
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    /// Resolve the parsed options into a single filter. Exclusion and
    /// inclusion options cannot be combined; everything else is valid,
    /// including no filter options at all.
    pub fn filter(&self) -> Result<Filter> {
        let exclude = NameSets::new(
            self.exclude_files.clone(),
            self.exclude_extensions.clone(),
            self.exclude_directories.clone(),
        );
        let include = NameSets::new(
            self.include_files.clone(),
            self.include_extensions.clone(),
            self.include_directories.clone(),
        );

        match (exclude.is_empty(), include.is_empty()) {
            (false, false) => bail!(
                "exclusion options (--exclude-files, --exclude-extensions, \
                 --exclude-directories) cannot be combined with inclusion options \
                 (--include-files, --include-extensions, --include-directories); \
                 pick one mode"
            ),
            (false, true) => Ok(Filter::Exclude(exclude)),
            (true, false) => Ok(Filter::Include(include)),
            (true, true) => Ok(Filter::Everything),
        }
    }
}
