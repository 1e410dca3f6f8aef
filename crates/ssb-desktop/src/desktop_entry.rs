//! Desktop entry (.desktop file) generation.
//!
//! Implements the subset of the XDG Desktop Entry Specification needed for SSB
//! launcher descriptors. Rendering is pure; writing to disk happens in the
//! integrator.

use std::fmt::Write as FmtWrite;

/// A launcher descriptor before rendering.
#[derive(Debug, Clone)]
pub struct DesktopEntry {
    /// Entry name (shown in menus).
    pub name: String,
    /// Executable command.
    pub exec: String,
    /// Icon path. The `Icon=` key is omitted when no icon file exists.
    pub icon: Option<String>,
    /// Whether to run in a terminal.
    pub terminal: bool,
    /// Entry type (usually "Application").
    pub entry_type: String,
}

impl Default for DesktopEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            exec: String::new(),
            icon: None,
            terminal: false,
            entry_type: "Application".to_string(),
        }
    }
}

impl DesktopEntry {
    /// Create a new desktop entry builder.
    pub fn builder() -> DesktopEntryBuilder {
        DesktopEntryBuilder::new()
    }

    /// Render the .desktop file content.
    pub fn render(&self) -> String {
        let mut content = String::new();

        writeln!(content, "[Desktop Entry]").unwrap();
        writeln!(content, "Type={}", escape_value(&self.entry_type)).unwrap();
        writeln!(content, "Terminal={}", if self.terminal { "true" } else { "false" }).unwrap();
        writeln!(content, "Name={}", escape_value(&self.name)).unwrap();
        writeln!(content, "Exec={}", self.exec).unwrap();

        if let Some(ref icon) = self.icon {
            writeln!(content, "Icon={}", escape_value(icon)).unwrap();
        }

        content
    }
}

/// Escape a desktop-entry string value.
///
/// Backslashes and ASCII control characters use the escape sequences the spec
/// defines for values of type string. Everything else (spaces, quotes,
/// non-ASCII) passes through verbatim.
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Quote a single argument for an `Exec=` line.
///
/// The argument is wrapped in double quotes; the characters the spec reserves
/// inside quoted arguments are backslash-escaped.
pub fn quote_exec_arg(arg: &str) -> String {
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        match c {
            '"' | '`' | '$' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Builder for desktop entries.
pub struct DesktopEntryBuilder {
    entry: DesktopEntry,
}

impl DesktopEntryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            entry: DesktopEntry::default(),
        }
    }

    /// Set the entry name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entry.name = name.into();
        self
    }

    /// Set the executable command.
    pub fn exec(mut self, exec: impl Into<String>) -> Self {
        self.entry.exec = exec.into();
        self
    }

    /// Set the icon path.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.entry.icon = Some(icon.into());
        self
    }

    /// Set whether to run in terminal.
    pub fn terminal(mut self, terminal: bool) -> Self {
        self.entry.terminal = terminal;
        self
    }

    /// Build the desktop entry.
    pub fn build(self) -> DesktopEntry {
        self.entry
    }
}

impl Default for DesktopEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
