//! Line-oriented input and output shared by the commands.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("line count mismatch: {source_file} has {source_lines}, {reference_file} has {reference_lines}")]
    LineCountMismatch {
        source_file: String,
        source_lines: usize,
        reference_file: String,
        reference_lines: usize,
    },
}

impl CliError {
    fn io(path: &str, source: io::Error) -> Self {
        CliError::Io {
            path: path.to_string(),
            source,
        }
    }
}

/// Open `path` for reading, or stdin when absent or `-`.
pub fn open_input(path: Option<&str>) -> Result<Box<dyn BufRead>, CliError> {
    match path {
        None | Some("-") => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(p) => {
            let file = File::open(p).map_err(|e| CliError::io(p, e))?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Create `path` for writing, or stdout when absent or `-`.
pub fn open_output(path: Option<&str>) -> Result<Box<dyn Write>, CliError> {
    match path {
        None | Some("-") => Ok(Box::new(BufWriter::new(io::stdout()))),
        Some(p) => {
            let file = File::create(p).map_err(|e| CliError::io(p, e))?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}

/// Every line of a file, without line terminators.
pub fn read_lines(path: &str) -> Result<Vec<String>, CliError> {
    let content = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Apply `f` to each input line and write one output line per input line.
pub fn map_lines(
    input: Box<dyn BufRead>,
    output: &mut dyn Write,
    mut f: impl FnMut(&str) -> String,
) -> io::Result<usize> {
    let mut count = 0;
    for line in input.lines() {
        writeln!(output, "{}", f(&line?))?;
        count += 1;
    }
    output.flush()?;
    Ok(count)
}
