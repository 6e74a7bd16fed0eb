//! Line-oriented interactive session.
//!
//! Plain text replaces the input and is translated at once; lines starting
//! with `:` are commands. An empty line translates the current input.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use braille_session::TranslatorSession;

use super::history_ops::format_history;
use super::image_ops::image_source;
use super::open_ledger;
use super::translate_ops::format_keypad;
use braille_core::settings::settings;

const HELP: &str = "\
Type text and press Enter to translate it.
  (empty line)      translate the current input
  :key <symbols>    append keypad symbols (`:key space` for a space)
  :back             delete the last input character
  :input            show the current input and output
  :toggle           switch direction (clears input and output)
  :keypad           show the keypad for the current direction
  :history          list recent translations
  :clear-history    delete all recorded translations
  :image [src]      attach an image to the print sheet (no src detaches)
  :print [file]     write the print sheet to a file, or show it
  :help             show this help
  :quit             leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Translate(Option<String>),
    Key(String),
    Back,
    Input,
    Toggle,
    Keypad,
    History,
    ClearHistory,
    Image(Option<String>),
    Print(Option<String>),
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("unknown command: {0} (try :help)")]
    UnknownCommand(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, ShellError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(if line.is_empty() {
                Self::Translate(None)
            } else {
                Self::Translate(Some(line.to_string()))
            });
        };
        let (name, arg) = match rest.split_once(' ') {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (rest, None),
        };
        let arg = arg.map(str::to_string);
        match name {
            "key" | "k" => match arg {
                Some(a) if a == "space" => Ok(Self::Key(" ".to_string())),
                Some(a) => Ok(Self::Key(a)),
                None => Err(ShellError::MissingArgument(":key")),
            },
            "back" | "b" => Ok(Self::Back),
            "input" | "i" => Ok(Self::Input),
            "toggle" | "t" => Ok(Self::Toggle),
            "keypad" => Ok(Self::Keypad),
            "history" | "h" => Ok(Self::History),
            "clear-history" => Ok(Self::ClearHistory),
            "image" => Ok(Self::Image(arg)),
            "print" | "p" => Ok(Self::Print(arg)),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            _ => Err(ShellError::UnknownCommand(name.to_string())),
        }
    }
}

/// Run commands from `input` until `:quit` or end of input.
pub fn run_shell<R: BufRead, W: Write>(
    session: &mut TranslatorSession,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Traductor Español-Braille. :help for commands.")?;
    writeln!(out, "[{}]", session.direction())?;
    for line in input.lines() {
        let line = line?;
        let command = match ShellCommand::parse(&line) {
            Ok(c) => c,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };
        if command == ShellCommand::Quit {
            break;
        }
        execute(session, command, out)?;
    }
    Ok(())
}

fn execute<W: Write>(
    session: &mut TranslatorSession,
    command: ShellCommand,
    out: &mut W,
) -> io::Result<()> {
    match command {
        ShellCommand::Translate(text) => {
            if let Some(text) = text {
                session.set_input(&text);
            }
            if let Err(e) = session.translate() {
                writeln!(out, "(not saved to history: {e})")?;
            }
            writeln!(out, "{}", session.output())?;
        }
        ShellCommand::Key(symbols) => {
            for c in symbols.chars() {
                session.press_key(c);
            }
            writeln!(out, "> {}", session.input())?;
        }
        ShellCommand::Back => {
            session.backspace();
            writeln!(out, "> {}", session.input())?;
        }
        ShellCommand::Input => {
            writeln!(out, "[{}]", session.direction())?;
            writeln!(out, "> {}", session.input())?;
            writeln!(out, "= {}", session.output())?;
        }
        ShellCommand::Toggle => {
            let toggle = session.toggle_direction();
            writeln!(out, "[{}]", toggle.direction)?;
        }
        ShellCommand::Keypad => {
            write!(
                out,
                "{}",
                format_keypad(session.direction(), settings().keypad.columns)
            )?;
        }
        ShellCommand::History => {
            if session.history().is_empty() {
                writeln!(out, "(empty)")?;
            } else {
                write!(out, "{}", format_history(session.history()))?;
            }
        }
        ShellCommand::ClearHistory => match session.clear_history() {
            Ok(()) => writeln!(out, "History cleared")?,
            Err(e) => writeln!(out, "Error clearing history: {e}")?,
        },
        ShellCommand::Image(None) => {
            session.attach_image(None);
            writeln!(out, "Image detached")?;
        }
        ShellCommand::Image(Some(src)) => match image_source(&src) {
            Ok(image) => {
                session.attach_image(Some(image));
                writeln!(out, "Image attached: {src}")?;
            }
            Err(e) => writeln!(out, "Error reading image {src}: {e}")?,
        },
        ShellCommand::Print(file) => {
            let html = session.print_document();
            match file {
                Some(file) => match fs::write(&file, html) {
                    Ok(()) => writeln!(out, "Wrote {file}")?,
                    Err(e) => writeln!(out, "Error writing {file}: {e}")?,
                },
                None => write!(out, "{html}")?,
            }
        }
        ShellCommand::Help => writeln!(out, "{HELP}")?,
        ShellCommand::Quit => {}
    }
    Ok(())
}

pub fn shell_cmd(data_dir: &Path) {
    let mut session = TranslatorSession::new(open_ledger(data_dir));
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    die!(
        run_shell(&mut session, stdin.lock(), &mut stdout),
        "Shell error: {}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    use braille_core::history::{HistoryLedger, MemorySlotStore};

    fn run(script: &str) -> (TranslatorSession, String) {
        let store = MemorySlotStore::new();
        let mut session =
            TranslatorSession::new(HistoryLedger::load_with(Box::new(store), "translations", 10));
        let mut out = Vec::new();
        run_shell(&mut session, script.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_commands() {
        assert_eq!(
            ShellCommand::parse("hola"),
            Ok(ShellCommand::Translate(Some("hola".into())))
        );
        assert_eq!(ShellCommand::parse(""), Ok(ShellCommand::Translate(None)));
        assert_eq!(
            ShellCommand::parse(":key space"),
            Ok(ShellCommand::Key(" ".into()))
        );
        assert_eq!(
            ShellCommand::parse(":key ⠉⠁"),
            Ok(ShellCommand::Key("⠉⠁".into()))
        );
        assert_eq!(ShellCommand::parse(":t"), Ok(ShellCommand::Toggle));
        assert_eq!(ShellCommand::parse(":image"), Ok(ShellCommand::Image(None)));
        assert_eq!(
            ShellCommand::parse(":print hoja.html"),
            Ok(ShellCommand::Print(Some("hoja.html".into())))
        );
        assert_eq!(
            ShellCommand::parse(":key"),
            Err(ShellError::MissingArgument(":key"))
        );
        assert_eq!(
            ShellCommand::parse(":fly"),
            Err(ShellError::UnknownCommand("fly".into()))
        );
    }

    #[test]
    fn translate_lines() {
        let (session, out) = run("casa\nhi!\n");
        assert!(out.contains("⠉⠁⠎⠁\n"));
        assert!(out.contains("⠓⠊!\n"));
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[0].input_text, "hi!");
    }

    #[test]
    fn keypad_editing_then_translate() {
        let (session, out) = run(":toggle\n:key ⠎⠕⠇⠁\n:back\n\n:quit\nignored\n");
        assert!(out.contains("[Braille → Español]"));
        assert!(out.contains("> ⠎⠕⠇\n"));
        assert!(out.contains("sol\n"));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn toggle_clears_input() {
        let (session, _) = run(":key abc\n:toggle\n");
        assert!(session.input().is_empty());
    }

    #[test]
    fn unknown_command_keeps_going() {
        let (session, out) = run(":fly\nsol\n");
        assert!(out.contains("unknown command: fly"));
        assert_eq!(session.output(), "⠎⠕⠇");
    }

    #[test]
    fn clear_history_command() {
        let (session, out) = run("casa\n:clear-history\n:history\n");
        assert!(out.contains("History cleared"));
        assert!(out.contains("(empty)"));
        assert!(session.history().is_empty());
    }

    #[test]
    fn print_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("hoja.html");
        let image = dir.path().join("foto.jpg");
        fs::write(&image, b"abc").unwrap();
        let script = format!(
            "casa\n:image {}\n:print {}\n",
            image.display(),
            file.display()
        );
        let (session, out) = run(&script);
        assert!(out.contains("Wrote"));
        assert_eq!(session.image(), Some("data:image/jpeg;base64,YWJj"));
        let html = fs::read_to_string(&file).unwrap();
        assert!(html.contains("<p>⠉⠁⠎⠁</p>"));
        assert!(html.contains("data:image/jpeg;base64,YWJj"));
    }

    #[test]
    fn missing_image_is_reported() {
        let (session, out) = run(":image /nonexistent/foto.jpg\n");
        assert!(out.contains("Error reading image /nonexistent/foto.jpg"));
        assert_eq!(session.image(), None);
    }
}
