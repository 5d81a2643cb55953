//! Command-line front end: picks the input source, runs the solver and
//! writes the one-line report.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::error::TriangleError;
use crate::exitcode;
use crate::path::MinimumPath;
use crate::triangle::Triangle;

#[derive(Debug, Parser, Clone, Default)]
#[command(
    name = "min-triangle-path",
    version,
    about = "Print the minimum-sum top-to-bottom path through a triangle of integers."
)]
pub struct Cli {
    /// File holding one triangle row per line; standard input when absent or `-`.
    pub input: Option<PathBuf>,

    /// Exit with status 65 when the input is malformed or empty.
    #[arg(long, env = "MIN_TRIANGLE_PATH_STRICT")]
    pub strict: bool,

    /// Print the elapsed time in milliseconds after the result.
    #[arg(long, env = "MIN_TRIANGLE_PATH_TIMING")]
    pub timing: bool,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to open `{path}`: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Triangle(#[from] TriangleError),
}

impl CliError {
    /// Status for errors that escape [`run`]; triangle errors are reported
    /// by `run` itself.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Open { .. } => exitcode::NOINPUT,
            CliError::Io(_) => exitcode::IOERR,
            CliError::Triangle(_) => exitcode::DATAERR,
        }
    }
}

/// Opens `path`, or standard input for `None` and `-`.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, CliError> {
    match path {
        None => Ok(Box::new(io::stdin().lock())),
        Some(p) if p == Path::new("-") => Ok(Box::new(io::stdin().lock())),
        Some(p) => {
            let file = File::open(p).map_err(|source| CliError::Open {
                path: p.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Reads the triangle line by line and extracts its minimum path. Lines are
/// taken as raw bytes so undecodable text is reported as bad input, leaving
/// [`CliError::Io`] for failures of the reader itself.
pub fn solve(input: impl BufRead) -> Result<MinimumPath, CliError> {
    let triangle: Result<Triangle, CliError> =
        Triangle::try_from_raw_lines(input.split(b'\n'));
    Ok(triangle?.minimum_path()?)
}

/// Writes either the path or the triangle error to `out` and returns the
/// exit status. Read and write failures are returned as errors instead.
#[instrument(skip_all, fields(strict = cli.strict))]
pub fn run(cli: &Cli, input: impl BufRead, out: &mut impl Write) -> Result<u8, CliError> {
    let start = Instant::now();

    let status = match solve(input) {
        Ok(path) => {
            info!(rows = path.len(), total = path.total(), "minimal path found");
            writeln!(out, "{path}")?;
            exitcode::OK
        }
        Err(CliError::Triangle(err)) => {
            debug!(kind = ?err.kind(), row = ?err.row(), "input rejected");
            writeln!(out, "{err}")?;
            if cli.strict {
                exitcode::DATAERR
            } else {
                exitcode::OK
            }
        }
        Err(err) => return Err(err),
    };

    if cli.timing {
        writeln!(out, "{} Milliseconds", start.elapsed().as_millis())?;
    }

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;
    use std::io::{Cursor, Read};

    const TEST_INPUT: &str = include_str!("../data/test_input");

    fn run_bytes(cli: &Cli, input: &[u8]) -> (u8, String) {
        let mut out = Vec::new();
        let status = run(cli, Cursor::new(input), &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    fn run_str(cli: &Cli, input: &str) -> (u8, String) {
        run_bytes(cli, input.as_bytes())
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags_and_path() {
        let cli = Cli::try_parse_from(["min-triangle-path", "--strict", "tri.txt"]).unwrap();
        assert!(cli.strict);
        assert!(!cli.timing);
        assert_eq!(cli.input, Some(PathBuf::from("tri.txt")));
    }

    #[test]
    fn prints_single_success_line() {
        let (status, out) = run_str(&Cli::default(), TEST_INPUT);
        assert_eq!(status, exitcode::OK);
        assert_eq!(out, "Minimal path is: 7 + 3 + 2 + 6 = 18\n");
    }

    #[rstest]
    #[case("", "Error - Input is empty and will result in an empty triangle and therefore no path.\n")]
    #[case("1 2\n", "Error - Row 0 - Input line is too long. 1 integers expected. 2 integers found.\n")]
    #[case("1\n2\n", "Error - Row 1 - Input line is too short. 2 integers expected. Only 1 integers found.\n")]
    #[case("1\n1 a\n", "Error - Row 1 - Non-Integer detected.\n")]
    fn reports_errors_and_exits_cleanly(#[case] input: &str, #[case] expected: &str) {
        let (status, out) = run_str(&Cli::default(), input);
        assert_eq!(status, exitcode::OK);
        assert_eq!(out, expected);
    }

    #[test]
    fn undecodable_row_is_reported_as_non_integer() {
        let (status, out) = run_bytes(&Cli::default(), b"7\n6 \xff\n");
        assert_eq!(status, exitcode::OK);
        assert_eq!(out, "Error - Row 1 - Non-Integer detected.\n");

        let strict = Cli {
            strict: true,
            ..Cli::default()
        };
        assert_eq!(run_bytes(&strict, b"7\n6 \xff\n").0, exitcode::DATAERR);
    }

    #[test]
    fn crlf_input_is_accepted() {
        let (status, out) = run_bytes(&Cli::default(), b"7\r\n6 3\r\n");
        assert_eq!(status, exitcode::OK);
        assert_eq!(out, "Minimal path is: 7 + 3 = 10\n");
    }

    #[test]
    fn strict_mode_flags_bad_input() {
        let cli = Cli {
            strict: true,
            ..Cli::default()
        };
        let (status, out) = run_str(&cli, "1 2\n");
        assert_eq!(status, exitcode::DATAERR);
        assert!(out.starts_with("Error - Row 0"));

        let (status, _) = run_str(&cli, TEST_INPUT);
        assert_eq!(status, exitcode::OK);
    }

    #[test]
    fn timing_line_follows_result() {
        let cli = Cli {
            timing: true,
            ..Cli::default()
        };
        let (_, out) = run_str(&cli, "7\n");
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Minimal path is: 7 = 7");
        assert!(lines[1].ends_with(" Milliseconds"));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn read_failures_escape_run() {
        let mut out = Vec::new();
        let err = run(&Cli::default(), BufReader::new(FailingReader), &mut out).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(err.exit_code(), exitcode::IOERR);
        assert!(out.is_empty());
    }

    #[test]
    fn missing_file_is_noinput() {
        let Err(err) = open_input(Some(Path::new("/nonexistent/triangle.txt"))) else {
            panic!("opening a missing file succeeded");
        };
        assert!(matches!(err, CliError::Open { .. }));
        assert_eq!(err.exit_code(), exitcode::NOINPUT);
    }

    #[test]
    fn reads_from_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/test_input");
        let input = open_input(Some(&path)).unwrap();
        let mut out = Vec::new();
        assert_eq!(run(&Cli::default(), input, &mut out).unwrap(), exitcode::OK);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Minimal path is: 7 + 3 + 2 + 6 = 18\n"
        );
    }
}
