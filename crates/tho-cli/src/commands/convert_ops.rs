use std::time::Instant;

use thokit::{convert, tailo_ascii_to_ipa, ConvertOptions, IpaToneStyle, Mode};

use super::die;
use super::io::{map_lines, open_input, open_output};

pub fn convert_cmd(mode: &str, input: Option<&str>, output: Option<&str>, opts: &ConvertOptions) {
    let mode: Mode = die!(mode.parse(), "Error: {}");
    let reader = die!(open_input(input), "Error: {}");
    let mut writer = die!(open_output(output), "Error: {}");

    let start = Instant::now();
    let lines = die!(
        map_lines(reader, &mut writer, |line| convert(mode, line, opts)),
        "Error during {mode}: {}"
    );
    if output.is_some() {
        eprintln!(
            "{mode}: {lines} lines in {:.1}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );
    }
}

pub fn ipa_cmd(input: Option<&str>, output: Option<&str>, numbers: bool) {
    let style = if numbers {
        IpaToneStyle::Numbers
    } else {
        IpaToneStyle::Symbols
    };
    let reader = die!(open_input(input), "Error: {}");
    let mut writer = die!(open_output(output), "Error: {}");
    die!(
        map_lines(reader, &mut writer, |line| tailo_ascii_to_ipa(line, style)),
        "Error during ipa: {}"
    );
}

pub fn modes_cmd() {
    for mode in Mode::ALL {
        println!("{:<18} {}", mode.name(), mode.description());
    }
}
