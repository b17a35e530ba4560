//! Interactive sheet: prompt for every field of a module, row by row.
//!
//! Pressing Enter keeps the current value (blank for a new sheet). Prompts
//! and live results are written to the prompter's output, which `main`
//! points at stderr.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use stock_core::format::NumberFormat;
use stock_core::modules::{FieldKind, FieldSpec, ModuleId};
use stock_core::profiles::{ProfileFamily, ProfileLedgerEntry};
use stock_core::session::{ModuleEvaluation, Session};
use stock_core::settings::{InteractionMode, PanelSettings};
use stock_core::stock_code::StockCode;

/// Line-oriented prompts over any reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Trimmed answer, `None` for a blank line or end of input
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    pub fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Millimeter value. Accepts a comma as decimal separator; NaN and
    /// infinities are asked again.
    pub fn number(&mut self, label: &str, current: Option<f64>) -> io::Result<Option<f64>> {
        let shown = current.map(|v| v.to_string()).unwrap_or_default();
        loop {
            let Some(answer) = self.ask(&format!("{} [{}]: ", label, shown))? else {
                return Ok(current);
            };
            match answer.replace(',', ".").parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(Some(value)),
                Ok(_) => self.say(format!("  '{}' is not a finite number", answer))?,
                Err(_) => self.say(format!("  '{}' is not a number", answer))?,
            }
        }
    }

    /// Size from the family's table. Blank keeps the current selection.
    pub fn size(&mut self, label: &str, family: ProfileFamily, current: Option<u32>) -> io::Result<Option<u32>> {
        let shown = current.unwrap_or_else(|| family.smallest_size());
        loop {
            let Some(answer) = self.ask(&format!("{} [{}]: ", label, shown))? else {
                return Ok(current);
            };
            match answer.parse::<u32>() {
                Ok(size) if family.has_size(size) => return Ok(Some(size)),
                _ => {
                    let sizes: Vec<String> = family.sizes().map(|s| s.to_string()).collect();
                    self.say(format!("  {} sizes: {}", family, sizes.join(", ")))?;
                }
            }
        }
    }

    pub fn text(&mut self, label: &str, current: Option<&str>) -> io::Result<Option<String>> {
        let shown = current.unwrap_or("");
        Ok(self
            .ask(&format!("{} [{}]: ", label, shown))?
            .or_else(|| current.map(str::to_string)))
    }
}

/// What a finished sheet produced
#[derive(Debug)]
pub enum SheetOutcome {
    Results(ModuleEvaluation),
    Code(StockCode),
    Ledger(&'static ProfileLedgerEntry),
}

fn fill_field<R: BufRead, W: Write>(
    session: &mut Session,
    module: ModuleId,
    spec: &FieldSpec,
    row: usize,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let label = if module.rows() > 1 {
        format!("Row {} {}", row, spec.label)
    } else {
        spec.label.to_string()
    };

    match spec.kind {
        FieldKind::Number => {
            let current = session.number(module, spec.name, row);
            if let Some(value) = prompter.number(&label, current)? {
                session.set_number(module, spec.name, row, value)?;
            }
        }
        FieldKind::Size => {
            if let Some(family) = module.profile_family() {
                let current = session.size(module, spec.name, row);
                if let Some(size) = prompter.size(&label, family, current)? {
                    session.set_size(module, spec.name, row, size)?;
                }
            }
        }
        FieldKind::Text => {
            let current = session.text(module, spec.name, row).map(str::to_string);
            if let Some(value) = prompter.text(&label, current.as_deref())? {
                session.set_text(module, spec.name, row, value)?;
            }
        }
    }
    Ok(())
}

fn fill_row<R: BufRead, W: Write>(
    session: &mut Session,
    module: ModuleId,
    row: usize,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    for spec in module.fields() {
        fill_field(session, module, spec, row, prompter)?;
    }
    Ok(())
}

/// Live mode feedback for one row. Row errors are reported, not fatal.
fn report_row<R: BufRead, W: Write>(
    session: &Session,
    module: ModuleId,
    row: usize,
    settings: &PanelSettings,
    fmt: &NumberFormat,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    match session.evaluate_row(module, row, settings) {
        Ok(Some(result)) => prompter.say(format!(
            "  = {} {}",
            fmt.quantity(&result.quantity),
            result.quantity.unit_label()
        ))?,
        Ok(None) => prompter.say("  = no result")?,
        Err(e) => prompter.say(format!("  ! {}", e))?,
    }
    Ok(())
}

/// Prompt through `module` and compute its outcome.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    module: ModuleId,
    settings: &PanelSettings,
    mode: InteractionMode,
    prompter: &mut Prompter<R, W>,
) -> Result<SheetOutcome> {
    prompter.say(format!("{} (Enter keeps the value in brackets)", module.label()))?;

    match module {
        ModuleId::StockCode => {
            fill_row(session, module, 1, prompter)?;
            Ok(SheetOutcome::Code(session.stock_code()?))
        }
        ModuleId::ProfileLedger => {
            fill_row(session, module, 1, prompter)?;
            Ok(SheetOutcome::Ledger(session.ledger_selection()?))
        }
        _ => {
            let fmt = settings.number_format();
            let rows = settings.rows_per_module.min(module.rows());
            for row in 1..=rows {
                fill_row(session, module, row, prompter)?;
                if mode == InteractionMode::Live {
                    report_row(session, module, row, settings, &fmt, prompter)?;
                }
            }
            let evaluation = session.evaluate(module, settings)?;
            for failed in &evaluation.errors {
                prompter.say(format!("Row {}: {}", failed.row, failed.error))?;
            }
            Ok(SheetOutcome::Results(evaluation))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.output).unwrap()
    }

    #[test]
    fn test_number_accepts_comma_and_retries() {
        let mut p = prompter("abc\n12,5\n");
        assert_eq!(p.number("Length", None).unwrap(), Some(12.5));
        assert!(output(p).contains("'abc' is not a number"));
    }

    #[test]
    fn test_number_retries_non_finite() {
        let mut p = prompter("nan\ninf\n-infinity\n12\n");
        assert_eq!(p.number("Length", None).unwrap(), Some(12.0));
        let out = output(p);
        assert!(out.contains("'nan' is not a finite number"));
        assert!(out.contains("'inf' is not a finite number"));
    }

    #[test]
    fn test_blank_keeps_current() {
        let mut p = prompter("\n");
        assert_eq!(p.number("Length", Some(300.0)).unwrap(), Some(300.0));
        let mut p = prompter("");
        assert_eq!(p.text("Order", Some("OR1")).unwrap(), Some("OR1".to_string()));
    }

    #[test]
    fn test_size_must_be_listed() {
        let mut p = prompter("205\n200\n");
        assert_eq!(p.size("Size", ProfileFamily::Heb, None).unwrap(), Some(200));
        assert!(output(p).contains("HEB sizes: 100, 120"));
    }

    #[test]
    fn test_submit_sheet_square_bar() {
        let settings = PanelSettings {
            rows_per_module: 2,
            ..PanelSettings::default()
        };
        let mut session = Session::new();
        // Row 1 complete, row 2 missing its length
        let mut p = prompter("50\n1000\n20\n\n");
        let outcome = run(&mut session, ModuleId::SquareBar, &settings, InteractionMode::Submit, &mut p).unwrap();
        match outcome {
            SheetOutcome::Results(evaluation) => {
                assert_eq!(evaluation.results.len(), 1);
                assert!(evaluation.errors.is_empty());
                assert!((evaluation.results[0].quantity.value() - 19.625).abs() < 1e-9);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(!output(p).contains("= "));
    }

    #[test]
    fn test_live_sheet_reports_each_row() {
        let settings = PanelSettings {
            rows_per_module: 2,
            ..PanelSettings::default()
        };
        let mut session = Session::new();
        let mut p = prompter("2450\n\n");
        run(&mut session, ModuleId::HollowSection, &settings, InteractionMode::Live, &mut p).unwrap();
        let out = output(p);
        assert!(out.contains("= 2,450 m/piece"));
        assert!(out.contains("= no result"));
    }

    #[test]
    fn test_stock_code_sheet() {
        let mut session = Session::new();
        // kind, producer, order, unit, item, drawing, sub1..3
        let mut p = prompter("semi\nHK\nORD1\n\nITEM1\nDWG1\nA\n\n\n");
        let outcome = run(
            &mut session,
            ModuleId::StockCode,
            &PanelSettings::default(),
            InteractionMode::Submit,
            &mut p,
        )
        .unwrap();
        match outcome {
            SheetOutcome::Code(code) => assert_eq!(code.as_str(), "YHK-ORD1-ITEM1-DWG1-A"),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_profile_sheet_uses_default_size() {
        let settings = PanelSettings {
            rows_per_module: 1,
            ..PanelSettings::default()
        };
        let mut session = Session::new();
        let mut p = prompter("\n1000\n");
        let outcome = run(&mut session, ModuleId::Npi, &settings, InteractionMode::Submit, &mut p).unwrap();
        match outcome {
            SheetOutcome::Results(evaluation) => assert_eq!(evaluation.results.len(), 1),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_sheet_keeps_valid_rows_beside_bad_one() {
        let settings = PanelSettings {
            rows_per_module: 2,
            ..PanelSettings::default()
        };
        let mut session = Session::new();
        // Row 2 carries a size the table does not list
        session.set_size(ModuleId::Heb, "size", 2, 205).unwrap();
        let mut p = prompter("200\n1000\n\n1000\n");
        let outcome = run(&mut session, ModuleId::Heb, &settings, InteractionMode::Submit, &mut p).unwrap();
        match outcome {
            SheetOutcome::Results(evaluation) => {
                assert_eq!(evaluation.results.len(), 1);
                assert_eq!(evaluation.results[0].row, 1);
                assert_eq!(evaluation.errors.len(), 1);
                assert_eq!(evaluation.errors[0].row, 2);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(output(p).contains("Row 2: "));
    }
}
