//! # svnstat
//!
//! A CLI tool that turns `svn status -uv` output into a readable table.
//!
//! ## Overview
//!
//! svnstat is built on top of svnstatlib. It reads captured status output
//! from a file (or stdin), renders it as a bordered, word-wrapped table and
//! writes it to the console or to a file.
//!
//! ## Usage
//!
//! ```bash
//! # Render a saved status listing
//! svn status -uv > status.txt
//! svnstat status.txt
//!
//! # Read from stdin, write to a file
//! svn status -uv | svnstat - -o status-table.txt
//!
//! # Widen the path column (index 11) and narrow the author column
//! svnstat status.txt -w 11 80 -w 10 8
//!
//! # Parsed fields as JSON
//! svnstat status.txt --format json
//! ```
//!
//! Parsing is fail-fast: the first line that does not look like
//! `svn status -uv` output stops the run with a non-zero exit code.

mod writer;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::Term;
use svnstatlib::{parse_rows, Row, RowError, Table, TableStream};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::writer::{ConsoleRowWriter, FileRowWriter, RowWriter};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("svnstat")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Transform 'svn status -uv' output into a readable table")
        .arg(
            Arg::new("input")
                .help("File with the output of 'svn status -uv' ('-' for stdin)")
                .value_name("INPUT_FILE")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("File to write the table to (defaults to the console)"),
        )
        .arg(
            Arg::new("width")
                .short('w')
                .long("width")
                .num_args(2)
                .value_names(["INDEX", "WIDTH"])
                .action(ArgAction::Append)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64))
                .help("Set column width. Column index is 0-based (can be specified multiple times)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v, -vv, -vvv)"),
        )
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Extract `(index, width)` overrides from matches.
///
/// Negative indices name no column and are skipped like any other unknown
/// index; widths below 1 are an error.
fn extract_width_overrides(matches: &ArgMatches) -> Result<Vec<(usize, usize)>, anyhow::Error> {
    let values: Vec<i64> = matches
        .get_many::<i64>("width")
        .map(|v| v.copied().collect())
        .unwrap_or_default();

    let mut overrides = Vec::with_capacity(values.len() / 2);
    for pair in values.chunks_exact(2) {
        let (index, width) = (pair[0], pair[1]);
        let width = match usize::try_from(width) {
            Ok(width) if width >= 1 => width,
            _ => bail!("invalid width for column {index}: width must be at least 1"),
        };
        match usize::try_from(index) {
            Ok(index) => overrides.push((index, width)),
            Err(_) => warn!(index, "ignoring width override for unknown column"),
        }
    }
    Ok(overrides)
}

/// Build the default table with any width overrides applied
fn build_table(overrides: &[(usize, usize)]) -> Table {
    let mut table = Table::svn_status();
    for index in table.apply_width_overrides(overrides) {
        warn!(
            index,
            columns = table.columns().len(),
            "ignoring width override for unknown column"
        );
    }
    table
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>, anyhow::Error> {
    if path == Path::new("-") {
        info!("reading status lines from stdin");
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path)
        .with_context(|| format!("failed to open input file '{}'", path.display()))?;
    info!(path = %path.display(), "reading status lines");
    Ok(Box::new(BufReader::new(file)))
}

fn open_writer(path: Option<&PathBuf>) -> Result<Box<dyn RowWriter>, anyhow::Error> {
    match path {
        Some(path) => {
            let writer = FileRowWriter::create(path)
                .with_context(|| format!("failed to create output file '{}'", path.display()))?;
            info!(path = %path.display(), "writing table to file");
            Ok(Box::new(writer))
        }
        None => Ok(Box::new(ConsoleRowWriter::new())),
    }
}

/// Report a malformed line between two `!` banners as wide as the table.
fn report_malformed(table: &Table, err: &RowError) -> io::Result<()> {
    let term = Term::stderr();
    let banner = "!".repeat(table.width());
    term.write_line(&banner)?;
    term.write_line("Error while parsing line. Line:")?;
    term.write_line(&err.line)?;
    term.write_line(&err.source.to_string())?;
    term.write_line(&banner)
}

/// Stream the table to `writer`, stopping at the first malformed line.
fn write_table(
    table: &Table,
    lines: impl Iterator<Item = String>,
    writer: &mut dyn RowWriter,
) -> Result<Option<RowError>, anyhow::Error> {
    let mut stream = TableStream::new(table, lines);

    if let Some(header) = stream.next() {
        writer.write_header(&header?)?;
    }
    for block in stream.by_ref() {
        match block {
            Ok(block) => writer.write_block(&block)?,
            Err(err) => {
                writer.finish()?;
                return Ok(Some(err));
            }
        }
    }
    writer.finish()?;
    info!(rows = stream.lines_read(), "table written");
    Ok(None)
}

/// Parse every line and write the rows as a JSON array.
///
/// Nothing is written when a line is malformed or the input cannot be read,
/// so the output is always valid JSON.
fn write_json(
    reader: impl BufRead,
    output: Option<&PathBuf>,
) -> Result<Option<RowError>, anyhow::Error> {
    let mut read_error = None;
    let lines = reader
        .lines()
        .map_while(|line| line.map_err(|e| read_error = Some(e)).ok());
    let parsed = parse_rows(lines).collect::<Result<Vec<Row>, RowError>>();

    if let Some(err) = read_error {
        return Err(err).context("failed to read input");
    }
    let rows = match parsed {
        Ok(rows) => rows,
        Err(err) => return Ok(Some(err)),
    };
    let json = serde_json::to_string_pretty(&rows)?;
    match output {
        Some(path) => std::fs::write(path, json + "\n")
            .with_context(|| format!("failed to write output file '{}'", path.display()))?,
        None => println!("{}", json),
    }
    info!(rows = rows.len(), "json written");
    Ok(None)
}

fn run(matches: &ArgMatches) -> Result<ExitCode, anyhow::Error> {
    let overrides = extract_width_overrides(matches)?;
    let table = build_table(&overrides);

    let input = matches
        .get_one::<PathBuf>("input")
        .context("missing input file")?;
    let output = matches.get_one::<PathBuf>("output");
    let format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("table");

    let reader = open_input(input)?;

    let malformed = if format == "json" {
        write_json(reader, output)?
    } else {
        // Stop at the first unreadable line and surface the I/O error afterwards
        let mut read_error = None;
        let lines = reader
            .lines()
            .map_while(|line| line.map_err(|e| read_error = Some(e)).ok());

        let mut writer = open_writer(output)?;
        let malformed = write_table(&table, lines, writer.as_mut())?;
        if let Some(err) = read_error {
            return Err(err).context("failed to read input");
        }
        malformed
    };

    if let Some(err) = malformed {
        report_malformed(&table, &err)?;
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svnstatlib::FieldKind;

    fn matches(args: &[&str]) -> ArgMatches {
        build_command().try_get_matches_from(args).unwrap()
    }

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_width_overrides_parsed_in_pairs() {
        let m = matches(&["svnstat", "in.txt", "-w", "0", "10", "--width", "11", "80"]);
        assert_eq!(extract_width_overrides(&m).unwrap(), vec![(0, 10), (11, 80)]);
    }

    #[test]
    fn test_zero_width_rejected() {
        let m = matches(&["svnstat", "in.txt", "-w", "3", "0"]);
        assert!(extract_width_overrides(&m).is_err());
    }

    #[test]
    fn test_negative_width_rejected() {
        let m = matches(&["svnstat", "in.txt", "-w", "1", "-5"]);
        assert!(extract_width_overrides(&m).is_err());
    }

    #[test]
    fn test_negative_index_ignored() {
        let m = matches(&["svnstat", "in.txt", "-w", "-1", "5", "-w", "0", "10"]);
        assert_eq!(extract_width_overrides(&m).unwrap(), vec![(0, 10)]);

        let table = build_table(&extract_width_overrides(&m).unwrap());
        assert_eq!(table.columns()[0].width, 10);
        assert_eq!(table.columns()[1].width, "Props".len());
    }

    #[test]
    fn test_json_unreadable_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json");
        let input: &[u8] = b"?                                        a.txt\n\xff\xfe\n";

        let result = write_json(input, Some(&path));

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_json_malformed_line_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json");
        let input: &[u8] = b"?                                        a.txt\nshort\n";

        let err = write_json(input, Some(&path)).unwrap().expect("malformed line");

        assert_eq!(err.line, "short");
        assert!(!path.exists());
    }

    #[test]
    fn test_json_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json");
        let input: &[u8] = b"?                                        a.txt\n";

        assert!(write_json(input, Some(&path)).unwrap().is_none());

        let rows: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(rows[0]["value"]["path"], "a.txt");
    }

    #[test]
    fn test_build_table_ignores_unknown_columns() {
        let table = build_table(&[(0, 10), (12, 3)]);
        assert_eq!(table.columns()[0].width, 10);
        assert_eq!(table.columns().len(), 12);
        assert_eq!(
            table.columns()[11].width,
            svnstatlib::Column::for_field(FieldKind::Path).width
        );
    }

    #[test]
    fn test_write_table_streams_rows_before_error() {
        let table = Table::svn_status();
        let lines = vec![
            "?                                        a.txt".to_string(),
            "bad".to_string(),
            "?                                        b.txt".to_string(),
        ];
        let mut writer = FileRowWriter::new(Vec::new());
        let err = write_table(&table, lines.into_iter(), &mut writer)
            .unwrap()
            .expect("malformed line");
        assert_eq!(err.line, "bad");

        let written = String::from_utf8(writer.into_inner()).unwrap();
        assert!(written.contains("a.txt"));
        assert!(!written.contains("b.txt"));
        assert!(written.ends_with(&format!("{}\n", table.build_row_separator())));
    }

    #[test]
    fn test_six_char_line_rejected_without_terminator() {
        let table = Table::svn_status();
        let input: &[u8] = b"?  a.c\n";
        let mut writer = FileRowWriter::new(Vec::new());
        let err = write_table(&table, input.lines().map_while(Result::ok), &mut writer)
            .unwrap()
            .expect("malformed line");
        assert_eq!(err.line, "?  a.c");
    }

    #[test]
    fn test_format_defaults_to_table() {
        let m = matches(&["svnstat", "in.txt"]);
        assert_eq!(m.get_one::<String>("format").unwrap(), "table");
    }
}
