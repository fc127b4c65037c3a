// seating-chart: line-oriented command host
//
// Each script line is one UI action. The session feeds them to a
// SeatingChart the same way a pointer/keyboard host would.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::chart::{Event, SeatingChart};
use crate::error::AppError;
use crate::export::Clipboard;
use crate::labels::Labels;
use crate::layout::{Identifier, ParseIdentifierError};
use crate::selection::Key;

/// A parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(Event),
    /// Click, type and save in one step
    Assign(Identifier, String),
    Export,
    Show,
}

/// Parse one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(raw: &str) -> Result<Option<Command>, String> {
    let line = raw.trim_end_matches(['\r', '\n']).trim_start();
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let no_args = |command: Command| {
        if rest.trim().is_empty() {
            Ok(command)
        } else {
            Err(format!("'{}' takes no arguments", word))
        }
    };

    let command = match word {
        "click" => Command::Event(Event::Click(parse_target(rest)?)),
        // everything after the first space is the text, verbatim
        "type" => Command::Event(Event::Input(rest.to_string())),
        "enter" => no_args(Command::Event(Event::Key(Key::Enter)))?,
        "escape" => no_args(Command::Event(Event::Key(Key::Escape)))?,
        "save" => no_args(Command::Event(Event::Save))?,
        "cancel" => no_args(Command::Event(Event::Cancel))?,
        "export" => no_args(Command::Export)?,
        "show" => no_args(Command::Show)?,
        "assign" => {
            let rest = rest.trim_start();
            let (target, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            Command::Assign(parse_target(target)?, name.to_string())
        }
        other => return Err(format!("unknown command '{}'", other)),
    };

    Ok(Some(command))
}

/// Only cells that exist on the chart can be clicked
fn parse_target(text: &str) -> Result<Identifier, String> {
    let text = text.trim();
    if text.is_empty() {
        return Err("missing table or seat".to_string());
    }
    let id: Identifier = text.parse().map_err(|e: ParseIdentifierError| e.to_string())?;
    if !id.in_layout() {
        return Err(format!("no such table or seat: {}", id));
    }
    Ok(id)
}

/// Runs scripts against one chart.
pub struct Session<'a, W: Write> {
    chart: SeatingChart,
    labels: &'a Labels,
    clipboard: &'a mut dyn Clipboard,
    out: W,
}

impl<'a, W: Write> Session<'a, W> {
    pub fn new(chart: SeatingChart, labels: &'a Labels, clipboard: &'a mut dyn Clipboard, out: W) -> Self {
        Self {
            chart,
            labels,
            clipboard,
            out,
        }
    }

    pub fn chart(&self) -> &SeatingChart {
        &self.chart
    }

    pub fn into_chart(self) -> SeatingChart {
        self.chart
    }

    /// Execute every line of `input`, stopping at the first bad one.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<(), AppError> {
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let command = parse_line(&line).map_err(|message| AppError::ScriptError {
                line: index + 1,
                message,
            })?;
            if let Some(command) = command {
                debug!(line = index + 1, ?command, "command");
                self.execute(command)?;
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<(), AppError> {
        match command {
            Command::Event(event) => self.chart.handle(event),
            Command::Assign(id, name) => {
                self.chart.handle(Event::Click(id));
                self.chart.handle(Event::Input(name));
                self.chart.handle(Event::Save);
            }
            Command::Export => self.chart.copy_plan(self.labels, &mut *self.clipboard),
            Command::Show => self.show()?,
        }
        Ok(())
    }

    fn show(&mut self) -> Result<(), AppError> {
        write!(self.out, "{}", self.chart.render_text(self.labels))?;
        if let Some(dialog) = self.chart.dialog(self.labels) {
            writeln!(
                self.out,
                "> {}: {} [{}]",
                dialog.title, dialog.caption, dialog.draft
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::render_plan;
    use crate::labels::ENGLISH;
    use std::io;

    #[derive(Default)]
    struct MemoryClipboard {
        last: Option<String>,
    }

    impl Clipboard for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> io::Result<()> {
            self.last = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_line("click table-2"),
            Ok(Some(Command::Event(Event::Click(Identifier::Table(2)))))
        );
        assert_eq!(
            parse_line("  click 3-4"),
            Ok(Some(Command::Event(Event::Click(Identifier::seat(3, 4)))))
        );
        assert_eq!(
            parse_line("type  Van  der Berg "),
            Ok(Some(Command::Event(Event::Input(" Van  der Berg ".to_string()))))
        );
        assert_eq!(parse_line("type"), Ok(Some(Command::Event(Event::Input(String::new())))));
        assert_eq!(parse_line("enter"), Ok(Some(Command::Event(Event::Key(Key::Enter)))));
        assert_eq!(parse_line("export\r"), Ok(Some(Command::Export)));
        assert_eq!(
            parse_line("assign seat-1-1 Ivanov Jr"),
            Ok(Some(Command::Assign(Identifier::seat(1, 1), "Ivanov Jr".to_string())))
        );
    }

    #[test]
    fn skips_comments_and_blanks() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# setup"), Ok(None));
    }

    #[test]
    fn rejects_bad_lines() {
        assert!(parse_line("dance").is_err());
        assert!(parse_line("click").is_err());
        assert!(parse_line("click table-4").is_err());
        assert!(parse_line("click seat-6-1").is_err());
        assert!(parse_line("save now").is_err());
        assert!(parse_line("assign").is_err());
    }

    #[test]
    fn runs_a_script() {
        let script = "\
# fill the front
click seat-1-1
type Ivanov
save
assign table-3 Petrov
click 1-1
type Someone else
cancel
export
";
        let mut clipboard = MemoryClipboard::default();
        let mut out = Vec::new();
        let mut session = Session::new(SeatingChart::new(), &ENGLISH, &mut clipboard, &mut out);
        session.run(script.as_bytes()).expect("script runs");

        let chart = session.into_chart();
        assert_eq!(chart.store().get(&Identifier::seat(1, 1)), Some("Ivanov"));
        assert_eq!(chart.store().get(&Identifier::Table(3)), Some("Petrov"));
        assert_eq!(clipboard.last, Some(render_plan(chart.store(), &ENGLISH)));
    }

    #[test]
    fn reports_failing_line() {
        let mut clipboard = MemoryClipboard::default();
        let mut session = Session::new(SeatingChart::new(), &ENGLISH, &mut clipboard, io::sink());
        let result = session.run("save\nclick nowhere\n".as_bytes());

        match result {
            Err(AppError::ScriptError { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected script error, got {:?}", other),
        }
    }

    #[test]
    fn show_prints_grid_and_open_dialog() {
        let mut clipboard = MemoryClipboard::default();
        let mut out = Vec::new();
        let mut session = Session::new(SeatingChart::new(), &ENGLISH, &mut clipboard, &mut out);
        session
            .run("assign seat-2-2 Petrov\nclick seat-2-2\nshow\n".as_bytes())
            .expect("script runs");
        assert!(session.chart().selection().is_open());
        drop(session);

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("Row 2  [  1][* 2]"));
        assert!(text.ends_with("> Edit seat: Row 2, Seat 2 [Petrov]\n"));
    }
}
