use anyhow::Context;
use clap::Parser;
use simgroup::report::{summarize_groups, GroupReport};
use simgroup::{Options, Tolerance};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "simgroup", version, about = "Group near-duplicate lines by edit distance")]
struct Cli {
    /// Input files (`-` for stdin). May be repeated.
    #[arg(required = false)]
    input: Vec<String>,

    /// Allowed edit distance: a count (`3`) or a percentage of the longer line (`25%`)
    #[arg(long = "tolerance", short = 'T')]
    tolerance: Option<Tolerance>,
    /// Ignore runs of digits, `-`, `.` and `,` when comparing
    #[arg(long = "strip-digits", default_value_t = false)]
    strip_digits: bool,
    /// Ignore GUID-shaped identifiers when comparing
    #[arg(long = "strip-identifiers", default_value_t = false)]
    strip_identifiers: bool,
    /// JSON options file; explicit flags take precedence
    #[arg(long = "config")]
    config: Option<String>,

    /// Output format: json | table
    #[arg(long = "format", default_value = "json")] format: String,
    #[arg(long = "examples", default_value_t = 3)] examples: usize,
    #[arg(long = "min-count")] min_count: Option<usize>,
    /// Log grouping decisions to stderr
    #[arg(long = "verbose", short = 'v', default_value_t = false)] verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "simgroup=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_all_lines(paths: &[String]) -> io::Result<Vec<String>> {
    let mut out = Vec::new();
    for p in paths {
        if p == "-" {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                out.push(line?);
            }
        } else {
            let r = BufReader::new(File::open(p)?);
            for line in r.lines() {
                out.push(line?);
            }
        }
    }
    Ok(out)
}

fn load_options(cli: &Cli) -> anyhow::Result<Options> {
    let mut opts = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            Options::from_json(&text).with_context(|| format!("parsing {path}"))?
        }
        None => Options::default(),
    };
    if let Some(t) = cli.tolerance {
        opts = opts.with_tolerance(t);
    }
    if cli.strip_digits {
        opts = opts.with_strip_digits(true);
    }
    if cli.strip_identifiers {
        opts = opts.with_strip_identifiers(true);
    }
    Ok(opts)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let opts = load_options(&cli)?;

    let input_files = if cli.input.is_empty() {
        vec!["-".to_string()]
    } else {
        cli.input.clone()
    };
    let lines = read_all_lines(&input_files)?;
    let groups = simgroup::group(lines, &opts);

    let mut summary = summarize_groups(&groups, cli.examples);
    if let Some(mc) = cli.min_count {
        summary.groups.retain(|g| g.count >= mc);
    }

    if cli.format == "table" {
        print_groups_table(&summary.groups);
    } else {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

fn print_groups_table(groups: &[GroupReport]) {
    println!("{:<6} {:<8} {}", "Count", "Freq", "Representative");
    for g in groups {
        println!("{:<6} {:<8.4} {}", g.count, g.frequency, g.representative);
    }
}
