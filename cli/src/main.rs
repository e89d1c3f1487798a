//! docdiff CLI - document comparison tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::{ColoredString, Colorize};

use docdiff::{
    read_document, Change, ChangeFilter, ChangeType, ComparisonMode, ComparisonOptions,
    ComparisonResult, DetailLevel, JsonFormat, SortBy,
};

#[derive(Parser)]
#[command(name = "docdiff")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Compare document versions and list their differences", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two documents (.json structural models or plain text)
    #[command(alias = "diff")]
    Compare {
        /// Original document
        #[arg(value_name = "ORIGINAL")]
        original: PathBuf,

        /// Modified document
        #[arg(value_name = "MODIFIED")]
        modified: PathBuf,

        /// Text comparison granularity
        #[arg(short, long, value_enum, default_value = "character")]
        level: Level,

        /// Comparison pipeline
        #[arg(short, long, value_enum, default_value = "auto")]
        mode: Mode,

        /// Treat upper and lower case as different
        #[arg(long)]
        case_sensitive: bool,

        /// Collapse whitespace before comparing
        #[arg(long)]
        ignore_whitespace: bool,

        /// Skip run formatting comparison
        #[arg(long)]
        no_formatting: bool,

        /// Skip table comparison
        #[arg(long)]
        no_tables: bool,

        /// Only show these change types (comma separated, e.g. "added,deleted")
        #[arg(long, value_delimiter = ',')]
        filter: Vec<String>,

        /// Sort key for the change list
        #[arg(long, value_enum, default_value = "position")]
        sort: SortKey,

        /// Sort in descending order
        #[arg(long)]
        desc: bool,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the similarity percentage of two text files
    Similarity {
        /// First file
        #[arg(value_name = "A")]
        a: PathBuf,

        /// Second file
        #[arg(value_name = "B")]
        b: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Level {
    /// Character-level diff with semantic cleanup
    Character,
    /// Word-level diff
    Word,
    /// Index-aligned sentences
    Sentence,
    /// Index-aligned paragraphs
    Paragraph,
}

impl From<Level> for DetailLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Character => DetailLevel::Character,
            Level::Word => DetailLevel::Word,
            Level::Sentence => DetailLevel::Sentence,
            Level::Paragraph => DetailLevel::Paragraph,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Structural when both inputs carry a structure, text otherwise
    Auto,
    /// Plain text comparison
    Text,
    /// Paragraph alignment, formatting and tables
    Structural,
}

impl From<Mode> for ComparisonMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Auto => ComparisonMode::Auto,
            Mode::Text => ComparisonMode::Text,
            Mode::Structural => ComparisonMode::Structural,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum SortKey {
    /// Document order
    Position,
    /// Change type
    Type,
    /// Content length
    Size,
    /// Metadata timestamp
    Time,
}

impl From<SortKey> for SortBy {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Position => SortBy::Position,
            SortKey::Type => SortBy::Type,
            SortKey::Size => SortBy::Size,
            SortKey::Time => SortBy::Time,
        }
    }
}

struct CompareArgs {
    options: ComparisonOptions,
    filter: ChangeFilter,
    json: Option<JsonFormat>,
    output: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare {
            original,
            modified,
            level,
            mode,
            case_sensitive,
            ignore_whitespace,
            no_formatting,
            no_tables,
            filter,
            sort,
            desc,
            json,
            compact,
            output,
        } => build_filter(&filter, sort, desc).and_then(|filter| {
            let options = ComparisonOptions::new()
                .with_detail_level(level.into())
                .with_mode(mode.into())
                .with_case_sensitive(case_sensitive)
                .with_whitespace(!ignore_whitespace)
                .with_formatting(!no_formatting)
                .with_tables(!no_tables);
            let json = json.then_some(if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            });
            cmd_compare(
                &original,
                &modified,
                CompareArgs {
                    options,
                    filter,
                    json,
                    output,
                },
            )
        }),
        Commands::Similarity { a, b } => cmd_similarity(&a, &b),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_filter(
    types: &[String],
    sort: SortKey,
    desc: bool,
) -> Result<ChangeFilter, Box<dyn std::error::Error>> {
    let mut filter = ChangeFilter::new().sort_by(sort.into());
    for name in types {
        let change_type = ChangeType::parse(name.trim())
            .ok_or_else(|| format!("Unknown change type: {}", name))?;
        filter = filter.with_type(change_type);
    }
    if desc {
        filter = filter.descending();
    }
    Ok(filter)
}

fn cmd_compare(
    original: &Path,
    modified: &Path,
    args: CompareArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let original = read_document(original)?;
    let modified = read_document(modified)?;
    log::debug!(
        "Comparing {} with {} ({:?} mode)",
        original.name(),
        modified.name(),
        args.options.mode
    );
    let result = docdiff::compare_documents(&original, &modified, &args.options)?;

    if let Some(format) = args.json {
        let json = docdiff::to_json(&result, format)?;
        if let Some(path) = args.output.as_deref() {
            fs::write(path, &json)?;
            println!("{} {}", "Saved to".green(), path.display());
        } else {
            println!("{}", json);
        }
        return Ok(());
    }

    if args.output.is_some() {
        colored::control::set_override(false);
    }
    let report = render_report(&result, &args.filter);
    if let Some(path) = args.output.as_deref() {
        fs::write(path, report)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", report);
    }

    Ok(())
}

fn render_report(result: &ComparisonResult, filter: &ChangeFilter) -> String {
    let mut out = String::new();
    let stats = result.statistics();

    out.push_str(&format!("{}\n", "Comparison Summary".cyan().bold()));
    out.push_str(&format!("{}\n", "─".repeat(40).dimmed()));
    out.push_str(&format!(
        "{}: {} ({} bytes)\n",
        "Original".bold(),
        result.original().name,
        result.original().size
    ));
    out.push_str(&format!(
        "{}: {} ({} bytes)\n",
        "Modified".bold(),
        result.modified().name,
        result.modified().size
    ));
    out.push_str(&format!(
        "{}: {}\n",
        "Compared".bold(),
        result.compared_at().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!(
        "{}: {} ({} {}, {} {}, {} {}, {} {})\n",
        "Changes".bold(),
        stats.total_changes,
        stats.added.to_string().green(),
        ChangeType::Added.label(),
        stats.deleted.to_string().red(),
        ChangeType::Deleted.label(),
        stats.modified.to_string().yellow(),
        ChangeType::Modified.label(),
        stats.format_changed.to_string().blue(),
        ChangeType::FormatChanged.label(),
    ));

    if result.is_identical() {
        out.push_str(&format!("\n{}\n", "Documents are identical".green().bold()));
        return out;
    }

    let changes = result.filtered(filter);
    out.push('\n');
    out.push_str(&format!(
        "{} ({}/{})\n",
        "Change List".cyan().bold(),
        changes.len(),
        stats.total_changes
    ));
    out.push_str(&format!("{}\n", "─".repeat(40).dimmed()));
    for change in changes {
        out.push_str(&format_change(change));
        out.push('\n');
    }

    out
}

fn format_change(change: &Change) -> String {
    let tag = format!("[{}]", change.change_type.label());
    let tag: ColoredString = match change.change_type {
        ChangeType::Added => tag.green(),
        ChangeType::Deleted => tag.red(),
        ChangeType::Modified => tag.yellow(),
        ChangeType::Moved => tag.magenta(),
        ChangeType::FormatChanged => tag.blue(),
    };

    let location = format!("p{}", change.position.paragraph).dimmed();
    match (change.change_type, &change.before_content, &change.after_content) {
        (ChangeType::Modified, Some(before), Some(after)) if before != after => format!(
            "{} {} {} {} {}",
            tag,
            location,
            before.red().strikethrough(),
            "→".dimmed(),
            after.green()
        ),
        _ => format!("{} {} {}", tag, location, change.content),
    }
}

fn cmd_similarity(a: &Path, b: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text_a = fs::read_to_string(a)?;
    let text_b = fs::read_to_string(b)?;
    let score = docdiff::similarity(&text_a, &text_b);

    let rendered = format!("{:.2}%", score);
    let rendered = if score >= 90.0 {
        rendered.green()
    } else if score >= 50.0 {
        rendered.yellow()
    } else {
        rendered.red()
    };
    println!("{}: {}", "Similarity".bold(), rendered);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docdiff".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document comparison tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/docdiff".dimmed());
    println!("License: MIT");
}
