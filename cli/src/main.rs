use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use ward_hierarchy_core::{WardHierarchy, validate_hierarchy};
use ward_hierarchy_extract::normalize::{PREVIEW_WIDTH, preview_lines, to_lines};
use ward_hierarchy_extract::output::{OutputFormat, format_hierarchy, format_report};
use ward_hierarchy_extract::report::{ExtractionReport, ExtractionRun};
use ward_hierarchy_extract::{ExtractorConfig, extract_with_report};

#[derive(Debug, Parser)]
#[command(name = "ward-extract")]
#[command(about = "Recover the State/LGA/Ward hierarchy from ward-listing PDF text")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract the hierarchy from a text file.
    Extract(ExtractArgs),
    /// Extract the hierarchy from text on stdin.
    ParseStdin(ParseStdinArgs),
    /// Extract several text files in parallel.
    Batch(BatchArgs),
    /// Check saved hierarchy JSON files against the hierarchy invariants.
    Validate(ValidateArgs),
    /// Print state/LGA/ward counts of a saved hierarchy JSON file.
    Stats(StatsArgs),
}

#[derive(Debug, Args)]
struct ExtractArgs {
    /// Text dump of the ward-listing PDF.
    #[arg(long)]
    input: PathBuf,
    /// Output path for the hierarchy (default: stdout).
    #[arg(long)]
    output: Option<PathBuf>,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
    /// Also produce the extraction report.
    #[arg(long)]
    with_report: bool,
    /// Extractor configuration YAML.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write the normalized lines to this path for inspection.
    #[arg(long)]
    dump_lines: Option<PathBuf>,
    /// Print the first N normalized lines to stderr.
    #[arg(long)]
    preview: Option<usize>,
}

#[derive(Debug, Args)]
struct ParseStdinArgs {
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
    /// Output both hierarchy and extraction report.
    #[arg(long)]
    with_report: bool,
    /// Extractor configuration YAML.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// Text files to extract.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Directory receiving one `<stem>.json` per input.
    #[arg(long)]
    output_dir: PathBuf,
    /// Number of parallel extraction jobs (default: number of CPUs).
    #[arg(long)]
    jobs: Option<usize>,
    /// Extractor configuration YAML.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Hierarchy JSON files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

#[derive(Debug, Args)]
struct StatsArgs {
    /// Hierarchy JSON file.
    input: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Extract(args) => run_extract(args),
        Command::ParseStdin(args) => run_parse_stdin(args),
        Command::Batch(args) => run_batch(args),
        Command::Validate(args) => run_validate(args),
        Command::Stats(args) => run_stats(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_extract(args: ExtractArgs) -> Result<(), String> {
    let config = load_config(args.config.as_deref())?;
    let text = fs::read_to_string(&args.input)
        .map_err(|err| format!("Failed to read '{}': {err}", args.input.display()))?;
    let lines = to_lines(&text);
    eprintln!("Total lines extracted: {}", lines.len());

    if let Some(path) = &args.dump_lines {
        fs::write(path, lines.join("\n"))
            .map_err(|err| format!("Failed to write '{}': {err}", path.display()))?;
        eprintln!("Normalized lines saved to {} for inspection", path.display());
    }
    if let Some(count) = args.preview {
        eprintln!("First {count} lines:");
        for line in preview_lines(&lines, count, PREVIEW_WIDTH) {
            eprintln!("{line}");
        }
    }

    let run = extract_with_report(&source_name(&args.input), &lines, &config)
        .map_err(|err| format!("Extraction failed: {err}"))?;
    print_summary(&run.report);

    match &args.output {
        Some(path) => {
            write_parent_dirs(path)?;
            let raw = format_hierarchy(&run.hierarchy, args.format).map_err(|e| e.to_string())?;
            fs::write(path, raw)
                .map_err(|err| format!("Failed to write '{}': {err}", path.display()))?;
            eprintln!("Hierarchy written to {}", path.display());

            if args.with_report {
                let report_path = report_path_for(path, args.format);
                let raw = format_report(&run.report, args.format).map_err(|e| e.to_string())?;
                fs::write(&report_path, raw).map_err(|err| {
                    format!("Failed to write '{}': {err}", report_path.display())
                })?;
                eprintln!("Report written to {}", report_path.display());
            }
            Ok(())
        }
        None => print_run(&run, args.with_report, args.format),
    }
}

fn run_parse_stdin(args: ParseStdinArgs) -> Result<(), String> {
    let config = load_config(args.config.as_deref())?;
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;

    let lines = to_lines(&text);
    let run = extract_with_report("-", &lines, &config)
        .map_err(|err| format!("Extraction failed: {err}"))?;
    print_run(&run, args.with_report, args.format)
}

fn print_run(run: &ExtractionRun, with_report: bool, format: OutputFormat) -> Result<(), String> {
    if !with_report {
        let output = format_hierarchy(&run.hierarchy, format).map_err(|e| e.to_string())?;
        println!("{output}");
        return Ok(());
    }

    #[derive(serde::Serialize)]
    struct ExtractOutput<'a> {
        hierarchy: &'a WardHierarchy,
        report: &'a ExtractionReport,
    }

    let output = ExtractOutput {
        hierarchy: &run.hierarchy,
        report: &run.report,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| format!("Failed to serialize output: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&output)
                .map_err(|e| format!("Failed to serialize output: {e}"))?;
            println!("{yaml}");
        }
        _ => {
            print!("{}", format_hierarchy(&run.hierarchy, format).map_err(|e| e.to_string())?);
            print!("{}", format_report(&run.report, format).map_err(|e| e.to_string())?);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// batch command
// ---------------------------------------------------------------------------

fn run_batch(args: BatchArgs) -> Result<(), String> {
    use rayon::prelude::*;

    let config = load_config(args.config.as_deref())?;
    fs::create_dir_all(&args.output_dir).map_err(|err| {
        format!(
            "Failed to create output directory '{}': {err}",
            args.output_dir.display()
        )
    })?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.jobs.unwrap_or(0))
        .build()
        .map_err(|e| format!("Failed to create thread pool: {e}"))?;

    let output_dir = &args.output_dir;
    let config = &config;
    let results: Vec<Result<ExtractionReport, String>> = pool.install(|| {
        args.inputs
            .par_iter()
            .map(|input| extract_file(input, output_dir, config))
            .collect()
    });

    let mut failures = 0usize;
    for result in &results {
        match result {
            Ok(report) => {
                print!(
                    "{}",
                    format_report(report, OutputFormat::Table).map_err(|e| e.to_string())?
                );
            }
            Err(err) => {
                failures += 1;
                eprintln!("{err}");
            }
        }
    }

    println!(
        "Extracted {} of {} input file(s).",
        results.len() - failures,
        results.len()
    );
    if failures > 0 {
        return Err(format!("{failures} input file(s) failed"));
    }
    Ok(())
}

fn extract_file(
    input: &Path,
    output_dir: &Path,
    config: &ExtractorConfig,
) -> Result<ExtractionReport, String> {
    let text = fs::read_to_string(input)
        .map_err(|err| format!("Failed to read '{}': {err}", input.display()))?;
    let lines = to_lines(&text);
    let run = extract_with_report(&source_name(input), &lines, config)
        .map_err(|err| format!("Extraction of '{}' failed: {err}", input.display()))?;

    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "wards".to_string());
    let path = output_dir.join(format!("{stem}.json"));
    let json = format_hierarchy(&run.hierarchy, OutputFormat::Json).map_err(|e| e.to_string())?;
    fs::write(&path, json).map_err(|err| format!("Failed to write '{}': {err}", path.display()))?;

    Ok(run.report)
}

// ---------------------------------------------------------------------------
// validate / stats commands
// ---------------------------------------------------------------------------

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let mut invalid = 0usize;
    for path in &args.inputs {
        let hierarchy = load_hierarchy(path)?;
        let errors = validate_hierarchy(&hierarchy);
        if errors.is_empty() {
            println!("{}: ok ({})", path.display(), hierarchy.stats());
        } else {
            invalid += 1;
            for error in &errors {
                eprintln!("{}: {error}", path.display());
            }
        }
    }

    if invalid > 0 {
        return Err(format!("{invalid} of {} file(s) failed validation", args.inputs.len()));
    }
    println!("Validated {} hierarchy file(s).", args.inputs.len());
    Ok(())
}

fn run_stats(args: StatsArgs) -> Result<(), String> {
    let hierarchy = load_hierarchy(&args.input)?;
    for (state, lgas) in hierarchy.iter() {
        let wards: usize = lgas.values().map(Vec::len).sum();
        println!("{state:<20} {:>4} LGAs {:>6} wards", lgas.len(), wards);
    }
    println!("{}", hierarchy.stats());
    Ok(())
}

// ---------------------------------------------------------------------------
// helpers
// ---------------------------------------------------------------------------

fn load_config(path: Option<&Path>) -> Result<ExtractorConfig, String> {
    match path {
        Some(path) => ExtractorConfig::load(path)
            .map_err(|e| format!("Failed to load config '{}': {e}", path.display())),
        None => Ok(ExtractorConfig::default()),
    }
}

fn load_hierarchy(path: &Path) -> Result<WardHierarchy, String> {
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read '{}': {err}", path.display()))?;
    serde_json::from_str(&raw).map_err(|err| format!("Failed to parse '{}': {err}", path.display()))
}

fn print_summary(report: &ExtractionReport) {
    eprintln!("Parsed {} states", report.stats.states);
    eprintln!("Total LGAs with wards: {}", report.stats.lgas);
    eprintln!("Total wards: {}", report.stats.wards);
    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn write_parent_dirs(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                format!(
                    "Failed to create output directory '{}': {err}",
                    parent.display()
                )
            })?;
        }
    }
    Ok(())
}

/// `wards.json` → `wards.report.json`.
fn report_path_for(output: &Path, format: OutputFormat) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "wards".to_string());
    output.with_file_name(format!("{stem}.report.{}", format_extension(format)))
}

fn format_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Json => "json",
        OutputFormat::Yaml => "yaml",
        OutputFormat::Markdown => "md",
        OutputFormat::Table => "txt",
    }
}
