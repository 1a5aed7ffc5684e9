use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lyricsplit::{
    attribute_lines, execute_render, load_alias_file, load_lyrics_file, resolve_performer_arg,
    split_lines, AliasMap, Classification, FormatConfig, IgnoreSet, MatchConfig, NormalizerConfig,
    OutputFormat, RenderConfig,
};

#[derive(Parser)]
#[command(name = "lyricsplit")]
#[command(author, version, about = "Split multi-performer lyrics by performer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that interprets markers
#[derive(Args)]
struct MatchArgs {
    /// Input lyrics transcript (UTF-8 text with [performer] markers)
    #[arg(short, long)]
    input: PathBuf,

    /// Alias table JSON ({"canonical": ["alias", ...]}); bundled table if omitted
    #[arg(short, long)]
    aliases: Option<PathBuf>,

    /// Extra structural labels to ignore (repeatable)
    #[arg(long = "ignore")]
    ignore: Vec<String>,

    /// Characters in labels treated as separators (historically "trimmed")
    #[arg(long, default_value = ":")]
    trim_chars: String,

    /// Characters in labels replaced with spaces
    #[arg(long, default_value = "&/+-(),")]
    space_chars: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Attribute lines to performers and write one file per performer
    Split {
        #[command(flatten)]
        matching: MatchArgs,

        /// Output directory (created if missing)
        #[arg(short, long, default_value = "output")]
        output_dir: PathBuf,

        /// Only write this performer (canonical name or any alias)
        #[arg(short, long)]
        performer: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Override the chat system prompt ("{performer}" is substituted)
        #[arg(long)]
        system_prompt: Option<String>,
    },

    /// Report how each marker in a transcript is classified
    Analyze {
        #[command(flatten)]
        matching: MatchArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            matching,
            output_dir,
            performer,
            format,
            system_prompt,
        } => {
            setup_logging(matching.verbose);
            split_transcript(&matching, &output_dir, performer.as_deref(), format, system_prompt)
        }
        Commands::Analyze { matching } => {
            setup_logging(matching.verbose);
            analyze_transcript(&matching)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn build_match_config(args: &MatchArgs) -> Result<MatchConfig> {
    let aliases = match &args.aliases {
        Some(path) => load_alias_file(path).context("Failed to load alias table")?,
        None => AliasMap::bundled().context("Bundled alias table is invalid")?,
    };
    let normalizer = NormalizerConfig::from_strings(&args.trim_chars, &args.space_chars);

    let mut ignore = IgnoreSet::default();
    ignore.extend(&args.ignore, &normalizer);

    info!(
        "Loaded {} performers, {} ignore labels",
        aliases.len(),
        ignore.len()
    );

    Ok(MatchConfig::new(aliases)
        .with_normalizer(normalizer)
        .with_ignore(ignore))
}

fn split_transcript(
    args: &MatchArgs,
    output_dir: &Path,
    performer: Option<&str>,
    format: OutputFormat,
    system_prompt: Option<String>,
) -> Result<()> {
    let config = build_match_config(args)?;

    let performer = performer
        .map(|p| resolve_performer_arg(p, &config))
        .transpose()
        .context("Failed to resolve performer")?;

    info!("Loading lyrics from {:?}", args.input);
    let text = load_lyrics_file(&args.input).context("Failed to load lyrics")?;
    let lines = split_lines(&text);

    info!("Attributing {} lines...", lines.len());
    let result = attribute_lines(&lines, &config);
    info!(
        "{} markers: {} performer, {} ignore, {} skip",
        result.markers.len(),
        result.count(Classification::Performer),
        result.count(Classification::Ignore),
        result.count(Classification::Skip)
    );

    let mut formatting = FormatConfig::default();
    if let Some(prompt) = system_prompt {
        formatting.system_prompt = prompt;
    }
    let render_config = RenderConfig {
        format,
        formatting,
        performer,
    };

    let render = execute_render(&result.chunks, output_dir, &render_config)
        .context("Failed to write performer files")?;

    info!(
        "Complete: {} lines written across {} files in {:?}",
        render.lines_written,
        render.written.len(),
        output_dir
    );

    Ok(())
}

fn analyze_transcript(args: &MatchArgs) -> Result<()> {
    let config = build_match_config(args)?;

    info!("Analyzing lyrics from {:?}", args.input);
    let text = load_lyrics_file(&args.input).context("Failed to load lyrics")?;
    let lines = split_lines(&text);
    let result = attribute_lines(&lines, &config);

    println!("Transcript Analysis");
    println!("===================");
    println!("Total lines: {}", lines.len());
    println!("Marker lines: {}", result.markers.len());
    println!("Attributed lines: {}", result.chunks.total_lines());
    println!();

    println!("Markers");
    println!("-------");
    println!("Performer: {}", result.count(Classification::Performer));
    println!("Ignore: {}", result.count(Classification::Ignore));
    println!("Skip: {}", result.count(Classification::Skip));
    println!();

    println!("Multi-performer Markers");
    println!("-----------------------");
    for marker in result.multi_performer_markers() {
        println!(
            "line {}: {} -> {}",
            marker.line_index + 1,
            marker.raw,
            marker.matches.join(", ")
        );
    }
    println!();

    println!("Unrecognized Keys");
    println!("-----------------");
    for key in result.unrecognized_keys() {
        println!("[{}]", key);
    }
    println!();

    println!("Performer Statistics");
    println!("--------------------");
    for (performer, lines) in result.chunks.iter() {
        let verses = lines
            .split(|l| l.trim().is_empty())
            .filter(|block| !block.is_empty())
            .count();
        println!("{}: {} lines, {} verses", performer, lines.len(), verses);
    }

    Ok(())
}
