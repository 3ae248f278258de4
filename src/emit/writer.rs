//! Output writer for generated C headers
//!
//! Tracks tab indentation and whether we are inside a multi-line `#define`, where every line but the last needs a
//! ` \` continuation.

/// Writer that builds a generated header
#[derive(Debug, Default)]
pub struct CodeWriter {
    /// The output buffer
    output: String,
    /// Current indentation level (tabs)
    indent_level: usize,
    /// Whether lines are continuation lines of a macro body
    in_macro: bool,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the generated output
    pub fn finish(self) -> String {
        self.output
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Append text verbatim, no indentation or continuation
    pub fn raw(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Write one indented line; inside a macro it gets a trailing ` \`.
    pub fn line(&mut self, text: &str) {
        self.write_indent();
        self.output.push_str(text);
        if self.in_macro {
            self.output.push_str(" \\");
        }
        self.output.push('\n');
    }

    pub fn blank_line(&mut self) {
        self.output.push('\n');
    }

    /// Start `#define <header> \`; following [`line`](Self::line)s continue the macro.
    pub fn begin_macro(&mut self, header: &str) {
        self.output.push_str("#define ");
        self.output.push_str(header);
        self.output.push_str(" \\\n");
        self.in_macro = true;
    }

    /// Write the last line of the macro body and leave macro mode at indentation zero.
    pub fn end_macro(&mut self, text: &str) {
        self.write_indent();
        self.output.push_str(text);
        self.output.push('\n');
        self.in_macro = false;
        self.indent_level = 0;
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push('\t');
        }
    }
}
