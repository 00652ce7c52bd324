use clap::{ArgGroup, Parser};
use colored::*;
use std::path::PathBuf;
use std::process;

use student_records::app::{Action, StudentsApp};
use student_records::config::{ConfigResolver, DEFAULT_CONFIG_FILE};
use student_records::display::OutputFormat;
use student_records::logging;
use student_records::store::RecordStore;
use student_records::Result;

#[derive(Parser)]
#[command(name = "students")]
#[command(version = "0.1.0")]
#[command(about = "Student Records - marks and contacts for a class", long_about = None)]
#[command(group(ArgGroup::new("action").required(true)))]
struct Cli {
    #[arg(short = 'm', long = "sort", group = "action", help = "List students by mark, best first")]
    sort: bool,

    #[arg(short = 'a', long, group = "action", help = "Show the average mark")]
    average: bool,

    #[arg(
        short = 'p',
        long,
        value_name = "MARK",
        group = "action",
        allow_negative_numbers = true,
        help = "List students with a mark at or above MARK"
    )]
    threshold: Option<f64>,

    #[arg(
        short = 's',
        long,
        value_name = "PATTERN",
        group = "action",
        help = "Find students whose name contains PATTERN"
    )]
    search: Option<String>,

    #[arg(
        short = 'o',
        long,
        group = "action",
        help = "List students at or above the average mark"
    )]
    above_average: bool,

    #[arg(
        short = 'd',
        long,
        value_name = "PATTERN",
        group = "action",
        help = "Delete students whose name contains PATTERN"
    )]
    delete: Option<String>,

    #[arg(
        short = 'r',
        long = "import",
        value_name = "FILE",
        group = "action",
        help = "Import students from a delimited text file"
    )]
    import: Option<PathBuf>,

    #[arg(
        long,
        num_args = 4..,
        value_names = ["NAME", "MARK", "EMAIL", "PHONE", "EXTRA"],
        group = "action",
        help = "Add a single student"
    )]
    add: Option<Vec<String>>,

    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_CONFIG_FILE,
        help = "Config file naming the data file"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = ',', help = "Field delimiter for imports")]
    delimiter: char,

    #[arg(long, help = "Print results as JSON")]
    json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

impl Cli {
    fn action(&self) -> Result<Action> {
        if self.sort {
            return Ok(Action::Sort);
        }
        if self.average {
            return Ok(Action::Average);
        }
        if self.above_average {
            return Ok(Action::AboveAverage);
        }
        if let Some(threshold) = self.threshold {
            return Ok(Action::Threshold(threshold));
        }
        if let Some(pattern) = &self.search {
            return Ok(Action::Search(pattern.clone()));
        }
        if let Some(pattern) = &self.delete {
            return Ok(Action::Delete(pattern.clone()));
        }
        if let Some(path) = &self.import {
            return Ok(Action::Import(path.clone()));
        }
        match &self.add {
            Some(fields) => Action::add_from_fields(fields),
            // clap enforces exactly one action
            None => Ok(Action::Sort),
        }
    }

    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("{} {}", "⚠".yellow(), e);
    }

    if cli.verbose {
        eprintln!("{}", "Verbose mode enabled".dimmed());
    }

    match run(&cli) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("{}", e.to_string().trim_end());
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let resolver = ConfigResolver::new(&cli.config);
    let store = RecordStore::from_config(&resolver);
    if cli.verbose {
        eprintln!(
            "{} Using data file: {}",
            "ℹ".blue(),
            store.path().display()
        );
    }

    let action = cli.action()?;
    let app = StudentsApp::new(store, cli.output_format()).with_delimiter(cli.delimiter);
    app.execute(action)
}
