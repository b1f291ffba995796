//! Command-line interface definitions.
//!
//! Defines the CLI structure for the lunchpick application using `clap`.
//! The CLI supports subcommands for random selection, listing, and
//! restaurant management.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::Filters;

/// Lunch restaurant picker backed by SQLite
#[derive(Parser, Debug)]
#[command(name = "lunchpick")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = "lunchpick.toml")]
    pub config: PathBuf,

    /// Path to the SQLite database file (overrides config)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the lunchpick CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick one active restaurant at random from the filtered candidates
    Pick(FilterArgs),

    /// List restaurants matching the filters
    List(ListArgs),

    /// Add a restaurant
    Add(AddArgs),

    /// Replace all fields of a restaurant
    Edit(EditArgs),

    /// Delete a restaurant by id
    Remove(RemoveArgs),

    /// List the distinct genres in use
    Genres,
}

/// Filter criteria shared by `pick` and `list`.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Keyword matched against name, tags, or genre (case-insensitive)
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Tag that must appear in the tag string; repeatable, all must match
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Genre substring (case-insensitive)
    #[arg(short, long)]
    pub genre: Option<String>,
}

impl FilterArgs {
    /// Convert parsed arguments into domain filter criteria.
    #[must_use]
    pub fn to_filters(&self) -> Filters {
        Filters {
            keyword: self.keyword.as_ref().map(|k| k.trim().to_string()),
            tags: self
                .tags
                .iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            genre: self.genre.as_ref().map(|g| g.trim().to_string()),
        }
    }
}

/// Arguments for the `list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Include inactive restaurants
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the `add` subcommand.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Restaurant name (required, unique)
    pub name: String,

    /// Free-text genre
    #[arg(long, default_value = "")]
    pub genre: String,

    /// Comma-delimited tag list
    #[arg(long, default_value = "")]
    pub tags: String,
}

/// Arguments for the `edit` subcommand.
///
/// Edit is a full replace: every mutable field takes the supplied value,
/// with genre and tags defaulting to empty when omitted.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Id of the restaurant to replace
    pub id: i32,

    /// New name
    #[arg(long)]
    pub name: String,

    /// New genre
    #[arg(long, default_value = "")]
    pub genre: String,

    /// New comma-delimited tag list
    #[arg(long, default_value = "")]
    pub tags: String,

    /// Exclude from random selection
    #[arg(long)]
    pub inactive: bool,
}

/// Arguments for the `remove` subcommand.
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Id of the restaurant to delete
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pick_with_filters() {
        let cli = Cli::try_parse_from([
            "lunchpick", "pick", "--keyword", "麺", "--tag", "安い", "--tag", "近い", "--genre",
            "中華",
        ])
        .unwrap();

        let Commands::Pick(args) = cli.command else {
            panic!("expected pick");
        };
        let filters = args.to_filters();
        assert_eq!(filters.keyword.as_deref(), Some("麺"));
        assert_eq!(filters.tags, vec!["安い", "近い"]);
        assert_eq!(filters.genre.as_deref(), Some("中華"));
    }

    #[test]
    fn parses_list_all() {
        let cli = Cli::try_parse_from(["lunchpick", "list", "--all"]).unwrap();
        assert!(matches!(cli.command, Commands::List(ListArgs { all: true, .. })));
    }

    #[test]
    fn parses_add_with_defaults() {
        let cli = Cli::try_parse_from(["lunchpick", "add", "Sushi Taro"]).unwrap();
        let Commands::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.name, "Sushi Taro");
        assert_eq!(args.genre, "");
        assert_eq!(args.tags, "");
    }

    #[test]
    fn parses_edit_inactive() {
        let cli = Cli::try_parse_from([
            "lunchpick", "edit", "3", "--name", "Ramen Jiro", "--inactive",
        ])
        .unwrap();
        let Commands::Edit(args) = cli.command else {
            panic!("expected edit");
        };
        assert_eq!(args.id, 3);
        assert!(args.inactive);
    }

    #[test]
    fn edit_requires_name() {
        let result = Cli::try_parse_from(["lunchpick", "edit", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = Cli::try_parse_from(["lunchpick", "genres", "--json", "--db", "/tmp/x.db"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.db.as_deref(), Some(std::path::Path::new("/tmp/x.db")));
    }

    #[test]
    fn blank_filter_args_become_empty_filters() {
        let args = FilterArgs {
            keyword: Some("  ".to_string()),
            tags: vec![" ".to_string()],
            genre: None,
        };
        let filters = args.to_filters();
        assert!(filters.is_empty());
    }
}
