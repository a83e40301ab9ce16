use anyhow::{Context, Result, bail};
use chrono::{SecondsFormat, Utc};
use clap::{Parser, Subcommand};
use docmark_config::{Config, default_author, default_marker_kind};
use docmark_engine::{
    AnnotateError, Block, Document, build_link_graph, find_backlinks, io, load_corpus,
    parse_wikilinks, parse_with_diagnostics, serialize, serializing::serialize_inline,
    try_annotate,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "docmark")]
#[command(about = "Convert markup documents to structured trees and back")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config file for a corpus
    Init {
        corpus_path: PathBuf,

        /// Defaults to $USER
        #[arg(long)]
        author: Option<String>,

        /// Defaults to `note`
        #[arg(long)]
        kind: Option<String>,

        /// Replace an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Parse a markup file and print its block outline
    Parse {
        file: PathBuf,

        /// Print the full document tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rewrite a markup file in canonical form
    Fmt {
        file: PathBuf,

        /// Write the result back instead of printing it
        #[arg(short, long)]
        write: bool,
    },

    /// Serialize a JSON document tree to markup
    Render { tree: PathBuf },

    /// Wrap the text added between two versions in a manual marker
    Annotate {
        original: PathBuf,
        edited: PathBuf,

        /// Defaults to the configured author
        #[arg(long)]
        author: Option<String>,

        /// Defaults to the configured marker kind
        #[arg(long)]
        kind: Option<String>,

        /// Defaults to the current UTC time
        #[arg(long)]
        timestamp: Option<String>,

        /// Overwrite the edited file with the annotated text
        #[arg(short, long)]
        write: bool,
    },

    /// List lines in the corpus linking to a document id
    Backlinks {
        target: String,

        /// Corpus root; defaults to the configured corpus path
        #[arg(long)]
        root: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// List the wikilinks in a markup file
    Links { file: PathBuf },

    /// Print the corpus link graph as JSON
    Graph {
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config file: {e}");
            None
        }
    };

    match cli.command {
        Commands::Init {
            corpus_path,
            author,
            kind,
            force,
        } => {
            let config_path = Config::config_path();
            if config_path.exists() && !force {
                bail!(
                    "Config file already exists at {}; pass --force to replace it",
                    config_path.display()
                );
            }
            io::validate_root(&corpus_path)
                .with_context(|| format!("Corpus path '{}' is invalid", corpus_path.display()))?;

            let mut new_config = Config::new(corpus_path);
            if let Some(author) = author {
                new_config.author = author;
            }
            if let Some(kind) = kind {
                new_config.marker_kind = kind;
            }
            new_config.validate(&config_path)?;
            new_config.save()?;
            log::info!("Wrote {}", config_path.display());
        }

        Commands::Parse { file, json } => {
            let markup = read_markup(&file)?;
            let parsed = parse_with_diagnostics(&markup);
            for diagnostic in &parsed.diagnostics {
                eprintln!("{}:{}: {diagnostic}", file.display(), diagnostic.line());
            }
            if json {
                println!("{}", parsed.document.to_json()?);
            } else {
                print_outline(&parsed.document.blocks, 0);
            }
        }

        Commands::Fmt { file, write } => {
            let markup = read_markup(&file)?;
            let formatted = serialize(&parse_with_diagnostics(&markup).document);
            if write {
                fs::write(&file, with_final_newline(formatted))
                    .with_context(|| format!("Failed to write {}", file.display()))?;
                log::info!("Formatted {}", file.display());
            } else {
                println!("{formatted}");
            }
        }

        Commands::Render { tree } => {
            let json = read_markup(&tree)?;
            let document = Document::from_json(&json)
                .with_context(|| format!("Failed to read document tree {}", tree.display()))?;
            println!("{}", serialize(&document));
        }

        Commands::Annotate {
            original,
            edited,
            author,
            kind,
            timestamp,
            write,
        } => {
            let original_text = read_markup(&original)?;
            let edited_text = read_markup(&edited)?;

            let author = author
                .or_else(|| config.as_ref().map(|c| c.author.clone()))
                .unwrap_or_else(default_author);
            let kind = kind
                .or_else(|| config.as_ref().map(|c| c.marker_kind.clone()))
                .unwrap_or_else(default_marker_kind);
            let timestamp =
                timestamp.unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));

            let annotated =
                match try_annotate(&original_text, &edited_text, &author, &timestamp, &kind) {
                    Ok(annotated) => annotated,
                    Err(AnnotateError::NothingToAnnotate) => {
                        log::info!(
                            "No added text between {} and {}",
                            original.display(),
                            edited.display()
                        );
                        edited_text
                    }
                };

            if write {
                fs::write(&edited, &annotated)
                    .with_context(|| format!("Failed to write {}", edited.display()))?;
            } else {
                print!("{annotated}");
            }
        }

        Commands::Backlinks { target, root, json } => {
            let root = resolve_root(root, config.as_ref())?;
            let corpus = load_corpus(&root)?;
            let backlinks = find_backlinks(&corpus, &target);

            if json {
                println!("{}", serde_json::to_string_pretty(&backlinks)?);
            } else {
                for link in &backlinks {
                    println!(
                        "{}:{}: {} ({})",
                        link.source_path,
                        link.line_number,
                        link.snippet.trim(),
                        link.source_title
                    );
                }
            }
        }

        Commands::Links { file } => {
            let markup = read_markup(&file)?;
            for link in parse_wikilinks(&markup) {
                match link.anchor {
                    Some(anchor) => println!("{}#{anchor}", link.target),
                    None => println!("{}", link.target),
                }
            }
        }

        Commands::Graph { root } => {
            let root = resolve_root(root, config.as_ref())?;
            let graph = build_link_graph(&load_corpus(&root)?);
            println!("{}", serde_json::to_string_pretty(&graph)?);
        }
    }

    Ok(())
}

fn read_markup(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn with_final_newline(mut text: String) -> String {
    if !text.is_empty() {
        text.push('\n');
    }
    text
}

/// `--root` wins over the config file.
fn resolve_root(root: Option<PathBuf>, config: Option<&Config>) -> Result<PathBuf> {
    let (root, source) = match (root, config) {
        (Some(root), _) => (root, "--root".to_string()),
        (None, Some(config)) => (
            config.corpus_path.clone(),
            format!("config file '{}'", Config::config_path().display()),
        ),
        (None, None) => bail!(
            "No --root given and no config file found at {}",
            Config::config_path().display()
        ),
    };

    io::validate_root(&root)
        .with_context(|| format!("Corpus path '{}' from {source} is invalid", root.display()))?;
    log::debug!("Using corpus root {}", root.display());
    Ok(root)
}

fn print_outline(blocks: &[Block], depth: usize) {
    let indent = "  ".repeat(depth);
    for block in blocks {
        match block {
            Block::Heading { level, inline } => {
                println!("{indent}heading {level}: {}", serialize_inline(inline));
            }
            Block::Paragraph { inline } => {
                println!("{indent}paragraph: {}", serialize_inline(inline));
            }
            Block::CodeBlock { language, raw_text } => println!(
                "{indent}code_block {}: {} lines",
                language.as_deref().unwrap_or("-"),
                raw_text.lines().count()
            ),
            Block::BulletList { items } | Block::OrderedList { items } => {
                let kind = if matches!(block, Block::BulletList { .. }) {
                    "bullet_list"
                } else {
                    "ordered_list"
                };
                println!("{indent}{kind}: {} items", items.len());
                for item in items {
                    print_outline(&item.blocks, depth + 1);
                }
            }
            Block::Blockquote { children } => {
                println!("{indent}blockquote");
                print_outline(children, depth + 1);
            }
            Block::Callout { kind, children } => {
                println!("{indent}callout {kind}");
                print_outline(children, depth + 1);
            }
            Block::ManualMarker {
                author,
                timestamp,
                kind,
                id,
                children,
            } => {
                println!("{indent}manual_marker {id} {kind} by {author} at {timestamp}");
                print_outline(children, depth + 1);
            }
            Block::Table { rows } => println!("{indent}table: {} rows", rows.len()),
            Block::HorizontalRule => println!("{indent}horizontal_rule"),
            Block::Extension { name, children } => {
                println!("{indent}extension {name}");
                print_outline(children, depth + 1);
            }
        }
    }
}
