use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::{info, warn};

use keyweave::config::Config;
use keyweave::keywords::traits::KeywordRanker;
use keyweave::session::Session;

/// Keyweave: keyword relevance graphs for scraped article collections.
///
/// Load a CSV of article references, scrape their text, rank keywords by
/// TF-IDF, and see which articles each chosen keyword connects to.
#[derive(Parser)]
#[command(name = "keyweave", version, about)]
struct Cli {
    /// Session file (overrides KEYWEAVE_SESSION_PATH)
    #[arg(long, global = true)]
    session: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the columns of a CSV file and the guessed title/URL columns
    Columns {
        /// CSV file with a header row
        csv: PathBuf,
    },

    /// Scrape every row of a CSV file into a new session
    Scrape {
        /// CSV file with a header row
        csv: PathBuf,

        /// Column holding the article title (guessed if omitted)
        #[arg(long)]
        title_column: Option<String>,

        /// Column holding the article URL (guessed if omitted)
        #[arg(long)]
        url_column: Option<String>,

        /// Number of pages fetched in parallel (default: 5)
        #[arg(long)]
        concurrency: Option<usize>,
    },

    /// Show ranked keywords
    Keywords {
        /// Max keywords to rank (default: 200)
        #[arg(long)]
        max_terms: Option<usize>,

        /// Only show keywords containing this text
        #[arg(long, default_value = "")]
        query: String,

        /// Also show the document-frequency histogram
        #[arg(long)]
        histogram: bool,
    },

    /// Change the keyword selection
    Select {
        #[command(subcommand)]
        action: SelectAction,
    },

    /// Build the relevance graph for the selected keywords
    Graph {
        /// Use these keywords instead of the saved selection
        #[arg(long = "keyword")]
        keywords: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        format: GraphFormat,

        /// Write JSON output to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Ask a question about the articles matching the selection
    Ask {
        question: String,

        /// Don't send matching articles as context
        #[arg(long)]
        no_context: bool,
    },

    /// Summarize the articles matching the selection
    Summarize,

    /// Show session status (articles, selection, chat)
    Status,
}

#[derive(Subcommand)]
enum SelectAction {
    /// Add keywords to the selection
    Add { terms: Vec<String> },
    /// Remove keywords from the selection
    Remove { terms: Vec<String> },
    /// Clear the selection
    Reset,
    /// Show the selection
    List,
}

#[derive(Clone, Copy, ValueEnum)]
enum GraphFormat {
    Summary,
    Json,
    Tree,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("keyweave=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let session_path = cli.session.clone().unwrap_or_else(|| config.session_path.clone());

    match cli.command {
        Commands::Columns { csv } => {
            let rows = keyweave::corpus::csv_rows::read_rows(&csv)?;
            let columns = keyweave::corpus::columns::column_options(&rows, false);
            println!("{} rows, {} columns:", rows.len(), columns.len());
            for column in &columns {
                println!("  {column}");
            }
            if let Some(first) = rows.first() {
                println!(
                    "\nGuessed title column: {}",
                    keyweave::corpus::columns::guess_title_key(first).bold()
                );
                println!(
                    "Guessed URL column:   {}",
                    keyweave::corpus::columns::guess_url_key(first).bold()
                );
            }
        }

        Commands::Scrape {
            csv,
            title_column,
            url_column,
            concurrency,
        } => {
            let rows = keyweave::corpus::csv_rows::read_rows(&csv)?;
            let Some(first) = rows.first() else {
                anyhow::bail!("{} has no data rows", csv.display());
            };

            let title_column =
                title_column.unwrap_or_else(|| keyweave::corpus::columns::guess_title_key(first));
            let url_column =
                url_column.unwrap_or_else(|| keyweave::corpus::columns::guess_url_key(first));
            let concurrency = concurrency.unwrap_or(config.scrape_concurrency);

            let targets =
                keyweave::corpus::assemble::targets_from_rows(&rows, &title_column, &url_column);
            info!(
                rows = rows.len(),
                targets = targets.len(),
                title_column = %title_column,
                url_column = %url_column,
                "Starting scrape"
            );
            println!(
                "Scraping {} of {} rows ({} concurrent)...",
                targets.len(),
                rows.len(),
                concurrency
            );

            let scraper = keyweave::scrape::http::HttpScraper::new()?;
            let articles =
                keyweave::scrape::pool::scrape_all(&scraper, &targets, concurrency, true).await;

            let mut session = Session::load_or_default(&session_path)?;
            session.replace_corpus(rows, articles, title_column, url_column);
            session.save(&session_path)?;

            println!(
                "{} articles saved to {}",
                session.articles.len(),
                session_path.display()
            );
            println!("\nNext: keyweave keywords");
        }

        Commands::Keywords {
            max_terms,
            query,
            histogram,
        } => {
            let session = Session::load(&session_path)?;
            session.require_articles()?;

            let ranker = config.ranker(max_terms);
            let ranked = ranker.rank(&session.articles);
            let filtered = keyweave::keywords::stats::filter_ranked(&ranked, &query);

            keyweave::output::terminal::display_keywords(&filtered, &session.selected, ranked.len());

            if histogram {
                let bars = keyweave::keywords::stats::histogram(
                    filtered.iter().copied(),
                    keyweave::keywords::stats::HISTOGRAM_TERMS,
                );
                keyweave::output::terminal::display_histogram(&bars);
            }
        }

        Commands::Select { action } => {
            let mut session = Session::load(&session_path)?;
            match action {
                SelectAction::Add { terms } => {
                    let tf_df = config.ranker(None).tf_df(&session.articles);
                    for term in keyweave::keywords::selection::parse_terms(&terms) {
                        if tf_df.df(&term) == 0 {
                            warn!(term = %term, "Keyword does not occur in any article");
                        }
                        if session.selected.add(term.clone()) {
                            println!("  + {term}");
                        }
                    }
                }
                SelectAction::Remove { terms } => {
                    for term in keyweave::keywords::selection::parse_terms(&terms) {
                        if session.selected.remove(&term) {
                            println!("  - {term}");
                        }
                    }
                }
                SelectAction::Reset => {
                    session.selected.reset();
                    println!("Selection cleared.");
                }
                SelectAction::List => {}
            }
            session.save(&session_path)?;
            print_selection(&session);
        }

        Commands::Graph {
            keywords,
            format,
            out,
        } => {
            let session = Session::load(&session_path)?;
            session.require_articles()?;

            let selected: Vec<String> = if keywords.is_empty() {
                session.selected.as_slice().to_vec()
            } else {
                keyweave::keywords::selection::parse_terms(&keywords)
            };
            if selected.is_empty() {
                anyhow::bail!(
                    "No keywords selected.\n\
                     Run `keyweave select add <term>` or pass --keyword."
                );
            }

            let tf_df = config.ranker(None).tf_df(&session.articles);
            let graph = keyweave::graph::builder::build_graph(&session.articles, &selected, &tf_df);

            match format {
                GraphFormat::Summary => keyweave::output::terminal::display_graph_summary(&graph),
                GraphFormat::Tree => {
                    let tree = keyweave::graph::tree::to_tree(&graph);
                    match out {
                        Some(path) => write_json(&path, &tree)?,
                        None => keyweave::output::terminal::display_tree(&tree),
                    }
                }
                GraphFormat::Json => match out {
                    Some(path) => write_json(&path, &graph)?,
                    None => println!("{}", serde_json::to_string_pretty(&graph)?),
                },
            }
        }

        Commands::Ask {
            question,
            no_context,
        } => {
            config.require_gemini()?;
            let mut session = Session::load(&session_path)?;
            let summarizer = gemini(&config);

            let tf_df = config.ranker(None).tf_df(&session.articles);
            let keywords = session.selected.as_slice().to_vec();
            let context_refs: Vec<&keyweave::corpus::models::Article> = if no_context {
                Vec::new()
            } else {
                keyweave::keywords::stats::relevant_articles(
                    &session.articles,
                    &tf_df,
                    &session.selected,
                )
            };

            println!(
                "{}",
                format!(
                    "{} keywords · {} matching articles",
                    keywords.len(),
                    context_refs.len()
                )
                .dimmed()
            );

            let result = keyweave::chat::conversation::ask(
                &summarizer,
                &mut session.chat,
                &context_refs,
                &keywords,
                &question,
            )
            .await;

            // Save even on failure so the error shows up in the transcript
            session.save(&session_path)?;
            let answer = result?;
            println!("\n{answer}");
        }

        Commands::Summarize => {
            config.require_gemini()?;
            let session = Session::load(&session_path)?;
            session.require_articles()?;
            let summarizer = gemini(&config);

            let tf_df = config.ranker(None).tf_df(&session.articles);
            let relevant =
                keyweave::keywords::stats::relevant_articles(&session.articles, &tf_df, &session.selected);
            if relevant.is_empty() {
                anyhow::bail!("No articles match the selected keywords. Select keywords first.");
            }

            println!("Summarizing {} articles...", relevant.len());
            let summary = keyweave::chat::conversation::summarize(
                &summarizer,
                &relevant,
                session.selected.as_slice(),
            )
            .await?;
            println!("\n{summary}");
        }

        Commands::Status => {
            let session = Session::load_or_default(&session_path)?;
            keyweave::status::show(&session, &session_path);
        }
    }

    Ok(())
}

fn gemini(config: &Config) -> keyweave::chat::gemini::GeminiClient {
    keyweave::chat::gemini::GeminiClient::new(
        &config.gemini_api_url,
        config.google_api_key.clone(),
        config.model.clone(),
    )
}

fn print_selection(session: &Session) {
    if session.selected.is_empty() {
        println!("{}", "No keywords selected.".dimmed());
    } else {
        println!(
            "Selected ({}): {}",
            session.selected.len(),
            session.selected.iter().collect::<Vec<_>>().join(", ").bold()
        );
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
