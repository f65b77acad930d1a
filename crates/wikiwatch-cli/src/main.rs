use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wikiwatch_config::Config;
use wikiwatch_engine::{AutoLinker, WikiSite, parse_markup, title_from_href};

mod input;
mod output;

use output::OutputMode;

#[derive(Parser)]
#[command(
    name = "wikiwatch-cli",
    version,
    about = "Render feed markup and auto-link article summaries from the command line"
)]
struct Cli {
    /// Print runs as JSON
    #[arg(long, global = true, conflicts_with = "plain")]
    json: bool,

    /// Print text without terminal styling
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse HTML-subset markup (a, b, i, &nbsp;) into styled runs
    Markup {
        /// Input file, or `-` / nothing for stdin
        file: Option<PathBuf>,
    },
    /// Link known article titles in plain text
    Link {
        /// Input file, or `-` / nothing for stdin
        file: Option<PathBuf>,
        /// File with one candidate title per line
        #[arg(long)]
        titles: PathBuf,
    },
    /// Print the web, mobile-html and app URLs of an article
    Url {
        title: String,
        /// Language code, overriding the config file
        #[arg(long)]
        language: Option<String>,
        /// Wiki host, overriding the config file
        #[arg(long)]
        host: Option<String>,
    },
    /// Resolve a link target from markup to an article title
    Href { href: String },
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.plain {
            OutputMode::Plain
        } else {
            OutputMode::Styled
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mode = cli.output_mode();

    match cli.command {
        Command::Markup { file } => {
            let source = input::read_source(file.as_deref())?;
            let runs = parse_markup(&source);
            log::info!("parsed {} bytes into {} runs", source.len(), runs.len());
            println!("{}", output::format_runs(&runs, mode)?);
        }
        Command::Link { file, titles } => {
            let source = input::read_source(file.as_deref())?;
            let titles = input::read_titles(&titles)?;
            let linker = AutoLinker::new(titles);
            log::info!("linking with {} candidate titles", linker.candidates().len());
            let runs = linker.link(&source);
            println!("{}", output::format_runs(&runs, mode)?);
        }
        Command::Url {
            title,
            language,
            host,
        } => {
            let config = Config::load_or_default().context("Failed to load config")?;
            let language = language.unwrap_or(config.language);
            let host = host.unwrap_or(config.host);
            let site = WikiSite::new(&language, &host)?;
            log::info!("using {}", site.base_url());
            println!("{}", site.article_url(&title));
            println!("{}", site.mobile_html_url(&title));
            println!("{}", site.app_deep_link(&title));
        }
        Command::Href { href } => {
            println!("{}", title_from_href(&href));
        }
    }

    Ok(())
}
