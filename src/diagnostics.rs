use std::fmt::Write;

use crate::error::Error;

/// Renders compiler-style reports for fatal errors.
///
/// A report names the stable error code and message, points at the file,
/// line and column, and repeats the offending source line with a caret under
/// the error position.
///
/// # Example
/// ```
/// use arrow::{diagnostics::DiagnosticPrinter, parse_source};
///
/// let source = "\"ok\" > a;\n{ \"x\" > y;\n";
/// let error = parse_source(source).unwrap_err();
/// let report = DiagnosticPrinter::new("demo.ar", source).render(&error);
///
/// assert_eq!(report,
///            "error[E0002]: Unterminated block literal, missing '}'.\n  --> demo.ar:2:1\n   |\n 2 | { \"x\" > y;\n   | ^\n");
/// ```
#[derive(Debug, Clone)]
pub struct DiagnosticPrinter {
    file_name: String,
    source:    String,
}

impl DiagnosticPrinter {
    /// Creates a printer for one source file.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self { file_name: file_name.into(),
               source:    source.into(), }
    }

    /// Builds the report for `error`.
    ///
    /// The gutter grows with the width of the line number. Tabs before the
    /// error column are kept in the caret line so the caret stays aligned.
    #[must_use]
    pub fn render(&self, error: &Error) -> String {
        let line = error.line();
        let column = error.column();
        let src_line = self.source
                           .lines()
                           .nth(line.saturating_sub(1))
                           .unwrap_or("");
        let gutter = " ".repeat(line.to_string().len());

        let underline: String = src_line.chars()
                                        .take(column.saturating_sub(1))
                                        .map(|ch| if ch == '\t' { '\t' } else { ' ' })
                                        .collect();

        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "error[{}]: {}", error.code(), error.message());
        let _ = writeln!(out, "{gutter} --> {}:{line}:{column}", self.file_name);
        let _ = writeln!(out, "{gutter}  |");
        let _ = writeln!(out, " {line} | {src_line}");
        let _ = writeln!(out, "{gutter}  | {underline}^");
        out
    }

    /// Prints the report for `error` to stderr.
    pub fn print(&self, error: &Error) {
        eprint!("{}", self.render(error));
    }
}
