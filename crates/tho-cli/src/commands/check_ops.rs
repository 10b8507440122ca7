//! Batch accuracy check of one mode against a reference file.

use std::fs;
use std::time::Instant;

use serde::Serialize;
use thokit::{convert, ConvertOptions, Mode};

use super::die;
use super::io::{read_lines, CliError};

#[derive(Debug, Serialize)]
pub struct Mismatch {
    /// 1-based line number.
    pub line: usize,
    pub input: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub mode: String,
    pub total: usize,
    pub correct: usize,
    pub accuracy: String,
    pub elapsed_ms: f64,
    pub mismatches: Vec<Mismatch>,
}

/// Convert each source line and compare it to the same reference line.
pub fn check_lines(
    mode: Mode,
    source: &[String],
    reference: &[String],
    opts: &ConvertOptions,
) -> (Vec<String>, CheckReport) {
    let start = Instant::now();
    let mut actual = Vec::with_capacity(source.len());
    let mut mismatches = Vec::new();
    for (i, (input, expected)) in source.iter().zip(reference).enumerate() {
        let out = convert(mode, input, opts);
        if &out != expected {
            mismatches.push(Mismatch {
                line: i + 1,
                input: input.clone(),
                expected: expected.clone(),
                actual: out.clone(),
            });
        }
        actual.push(out);
    }

    let total = source.len();
    let correct = total - mismatches.len();
    let rate = if total > 0 {
        correct as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    let report = CheckReport {
        mode: mode.name().to_string(),
        total,
        correct,
        accuracy: format!("{rate:.2}%"),
        elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        mismatches,
    };
    (actual, report)
}

fn load_pair(source: &str, reference: &str) -> Result<(Vec<String>, Vec<String>), CliError> {
    let src = read_lines(source)?;
    let refs = read_lines(reference)?;
    if src.len() != refs.len() {
        return Err(CliError::LineCountMismatch {
            source_file: source.to_string(),
            source_lines: src.len(),
            reference_file: reference.to_string(),
            reference_lines: refs.len(),
        });
    }
    Ok((src, refs))
}

pub fn check_cmd(
    mode: &str,
    source: &str,
    reference: &str,
    hypothesis: Option<&str>,
    json: bool,
    opts: &ConvertOptions,
) {
    let mode: Mode = die!(mode.parse(), "Error: {}");
    let (src, refs) = die!(load_pair(source, reference), "Error: {}");
    let (actual, report) = check_lines(mode, &src, &refs, opts);

    if let Some(path) = hypothesis {
        let mut content = actual.join("\n");
        content.push('\n');
        die!(fs::write(path, content), "Error writing {path}: {}");
    }

    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&report), "Error: {}")
        );
        return;
    }

    for m in &report.mismatches {
        println!("line {}: {}", m.line, m.input);
        println!("  expected: {}", m.expected);
        println!("  actual:   {}", m.actual);
    }
    println!(
        "{}: {}/{} correct ({}) in {:.1}ms",
        report.mode, report.correct, report.total, report.accuracy, report.elapsed_ms
    );
}
