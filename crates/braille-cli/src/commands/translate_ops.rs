use std::fs;
use std::path::Path;

use unicode_width::UnicodeWidthStr;

use braille_core::keypad::{keypad_keys, keypad_rows};
use braille_core::print::{render_print_document, PrintSheet};
use braille_core::settings::settings;
use braille_core::unicode::dot_numbers;
use braille_core::{translate, Alphabet, Direction};

use super::image_ops::image_source;
use super::open_ledger;

/// Direction as chosen on the command line; `None` means detect from the text.
pub fn resolve_direction(direction: Option<Direction>, text: &str) -> Direction {
    direction.unwrap_or_else(|| Direction::detect(text))
}

pub fn translate_cmd(data_dir: &Path, text: &str, direction: Option<Direction>, record: bool) {
    let direction = resolve_direction(direction, text);
    let output = translate(text, direction);
    if record {
        let mut ledger = open_ledger(data_dir);
        die!(
            ledger.record(text, &output, direction),
            "Error saving history: {}"
        );
    }
    println!("{output}");
}

/// Keypad rows for `direction`. Braille keys carry their dot numbers and the
/// space key is shown as `␣`.
pub fn format_keypad(direction: Direction, columns: usize) -> String {
    let labels: Vec<String> = keypad_keys(Alphabet::global(), direction)
        .into_iter()
        .map(|k| match direction {
            Direction::SpanishToBraille if k == ' ' => "␣".to_string(),
            Direction::SpanishToBraille => k.to_string(),
            Direction::BrailleToSpanish => {
                format!("{k} {}", dot_numbers(k).unwrap_or_default())
            }
        })
        .collect();
    let width = labels.iter().map(|l| l.width()).max().unwrap_or(0);

    let mut out = String::new();
    for row in keypad_rows(&labels, columns) {
        let cells: Vec<String> = row
            .iter()
            .map(|l| format!("{l}{}", " ".repeat(width - l.width())))
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    out
}

pub fn keypad_cmd(direction: Direction) {
    print!("{}", format_keypad(direction, settings().keypad.columns));
}

pub struct PrintOptions<'a> {
    pub text: Option<&'a str>,
    pub direction: Option<Direction>,
    pub image: Option<&'a str>,
    pub output_file: Option<&'a str>,
}

pub fn print_cmd(data_dir: &Path, opts: &PrintOptions<'_>) {
    let (direction, input, output) = match opts.text {
        Some(text) => {
            let direction = resolve_direction(opts.direction, text);
            (direction, text.to_string(), translate(text, direction))
        }
        None => {
            let ledger = open_ledger(data_dir);
            let Some(latest) = ledger.latest() else {
                eprintln!("Nothing to print: history is empty");
                std::process::exit(1);
            };
            (
                latest.direction,
                latest.input_text.clone(),
                latest.output_text.clone(),
            )
        }
    };

    let image = opts
        .image
        .map(|src| die!(image_source(src), "Error reading image {src}: {}"));
    let html = render_print_document(&PrintSheet {
        title: &settings().print.title,
        direction,
        input: &input,
        output: &output,
        image: image.as_deref(),
    });

    match opts.output_file {
        Some(file) => {
            die!(fs::write(file, &html), "Error writing {file}: {}");
            println!("Wrote {file}");
        }
        None => print!("{html}"),
    }
}
