//! Command-line interface for postquery.
//!
//! Each query gets its own subcommand. The catalog comes from `--catalog`,
//! then the configured catalog file, then the built-in sample.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::{self, ResolvedConfig};
use crate::domain::Post;
use crate::library::{sample_catalog, Catalog};
use crate::query;

/// postquery - queries over a catalog of blog, interview and podcast posts
#[derive(Parser, Debug)]
#[command(name = "postquery")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog JSON file (defaults to the configured catalog or the sample)
    #[arg(long, global = true, env = "POSTQUERY_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every post in catalog order
    List,

    /// Popular posts from the last few months, newest first
    Recent {
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Check that every post has a title and an expected URL host
    Check,

    /// Show posts sharing a URL
    Duplicates,

    /// Show the least liked posts with a likes boost applied
    Boost,

    /// Show the last post in the catalog
    Last,

    /// Total likes per category
    Likes,

    /// Best post of every prolific author
    Champions,

    /// Authors missing from the known author lists
    NewAuthors {
        /// Directory of author lists (defaults to the configured one)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Show resolved configuration (debug)
    Config,

    /// Save the active catalog as JSON
    Export {
        /// Destination file
        path: PathBuf,
    },
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let config = config::config()?;
        let catalog_path = active_catalog(self.catalog.as_deref(), config);

        // Config does not need the catalog
        if let Commands::Config = self.command {
            show_config(config, catalog_path);
            return Ok(());
        }

        let catalog = load_catalog(catalog_path).await?;

        match self.command {
            Commands::List => {
                print_posts(catalog.iter());
                Ok(())
            }
            Commands::Recent { date } => {
                let reference = date.unwrap_or_else(|| Local::now().date_naive());
                let posts = query::recent_popular(&catalog, reference, &config.queries);
                println!(
                    "Posts with more than {} likes from the {} months before {}:",
                    config.queries.min_likes, config.queries.window_months, reference
                );
                print_posts(posts);
                Ok(())
            }
            Commands::Check => check(&catalog, config),
            Commands::Duplicates => {
                let duplicates = query::find_duplicates(&catalog);
                if duplicates.is_empty() {
                    println!("No duplicate URLs");
                }
                for (url, posts) in duplicates {
                    println!("{}", url);
                    for post in posts {
                        println!("  {} ({})", post, post.id);
                    }
                }
                Ok(())
            }
            Commands::Boost => {
                let boosted = query::boost_least_liked(
                    &catalog,
                    config.queries.boost_count,
                    config.queries.boost_amount,
                );
                print_posts(boosted.iter());
                Ok(())
            }
            Commands::Last => {
                let post = query::last_post(&catalog)?;
                println!("{}", post);
                Ok(())
            }
            Commands::Likes => {
                for (post_type, likes) in query::likes_per_type(&catalog) {
                    println!("{:<10} {}", post_type, likes);
                }
                Ok(())
            }
            Commands::Champions => {
                for (author, post) in query::prolific_authors(&catalog, config.queries.min_posts) {
                    println!("{}: {}", author, post);
                }
                Ok(())
            }
            Commands::NewAuthors { dir } => {
                let dir = dir.unwrap_or_else(|| config.authors_dir.clone());
                let known = query::read_known_authors(&dir);
                info!(dir = %dir.display(), known = known.len(), "Loaded known authors");
                for author in query::new_authors(&catalog, &known) {
                    println!("{}", author);
                }
                Ok(())
            }
            Commands::Config => {
                show_config(config, catalog_path);
                Ok(())
            }
            Commands::Export { path } => {
                catalog.save(&path).await?;
                println!("Saved {} posts to {}", catalog.len(), path.display());
                Ok(())
            }
        }
    }
}

/// Catalog file in effect: `--catalog` wins over the configured one
fn active_catalog<'a>(flag: Option<&'a Path>, config: &'a ResolvedConfig) -> Option<&'a Path> {
    flag.or(config.catalog.as_deref())
}

/// Load the catalog from `path`, or build the sample catalog
async fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading catalog");
            Catalog::load(path).await
        }
        None => sample_catalog().context("Failed to build sample catalog"),
    }
}

fn print_posts<'a>(posts: impl IntoIterator<Item = &'a Post>) {
    let mut count = 0;
    for post in posts {
        println!("{}", post);
        count += 1;
    }
    if count == 0 {
        println!("(no posts)");
    }
}

fn check(catalog: &Catalog, config: &ResolvedConfig) -> Result<()> {
    let host = &config.queries.expected_host;
    if query::check_integrity(catalog, host) {
        println!("All {} posts have a title and live on {}", catalog.len(), host);
        return Ok(());
    }

    for (post, issue) in query::integrity_violations(catalog, host) {
        println!("{}: {}", issue, post);
    }
    anyhow::bail!("Catalog failed the integrity check")
}

fn show_config(config: &ResolvedConfig, catalog: Option<&Path>) {
    println!(
        "Config file:  {}",
        config
            .config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string())
    );
    println!("Authors dir:  {}", config.authors_dir.display());
    println!(
        "Catalog:      {}",
        catalog
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in sample)".to_string())
    );

    let q = &config.queries;
    println!("Min likes:    {}", q.min_likes);
    println!("Window:       {} months", q.window_months);
    println!("Boost:        {} posts by {} likes", q.boost_count, q.boost_amount);
    println!("Min posts:    {}", q.min_posts);
    println!("Host:         {}", q.expected_host);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QuerySettings;
    use tempfile::TempDir;

    fn resolved(catalog: Option<&str>) -> ResolvedConfig {
        ResolvedConfig {
            authors_dir: PathBuf::from("/test/authors"),
            catalog: catalog.map(PathBuf::from),
            config_file: None,
            queries: QuerySettings::default(),
        }
    }

    #[test]
    fn test_catalog_flag_overrides_config() {
        let config = resolved(Some("/test/configured.json"));
        let flag = PathBuf::from("/test/flag.json");

        assert_eq!(
            active_catalog(Some(&flag), &config),
            Some(Path::new("/test/flag.json"))
        );
        assert_eq!(
            active_catalog(None, &config),
            Some(Path::new("/test/configured.json"))
        );
        assert_eq!(active_catalog(None, &resolved(None)), None);
    }

    #[tokio::test]
    async fn test_config_command_ignores_broken_catalog() {
        let temp = TempDir::new().unwrap();
        let broken = temp.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        let broken = broken.to_str().unwrap();

        let cli = Cli::try_parse_from(["postquery", "--catalog", broken, "config"]).unwrap();
        assert!(cli.execute().await.is_ok());

        let cli = Cli::try_parse_from(["postquery", "--catalog", broken, "list"]).unwrap();
        assert!(cli.execute().await.is_err());
    }
}
