//! SCSS/CSS name extraction.
//!
//! The scanner is a small hand-written lexer rather than a full parser: it
//! blanks comments, strings and `url()` bodies, splits the source into
//! preludes and declarations on `{`, `;` and `}`, and pulls class names out
//! of selector preludes, `$variable:` declarations and `@mixin` headers.
//! Indented `.sass` sources have no braces; there a line that opens an
//! indented block is a selector and every other line is a declaration.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::detectors::naming::{NameToken, NamingConfig, SelectorContext};

static MIXIN_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@mixin\s+([^\s({;]+)").expect("valid mixin regex"));

static INDENTED_MIXIN_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^=\s*([^\s(]+)").expect("valid indented mixin regex"));

static AT_ROOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*@at-root\b").expect("valid at-root regex"));

static VARIABLE_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\$[^\s:]+)\s*:").expect("valid variable regex"));

/// Stylesheet dialect, picked from the file extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Syntax {
    /// Braced SCSS
    #[default]
    Scss,
    /// Indentation-based Sass
    Sass,
    /// Plain CSS, where `//` does not start a comment
    Css,
}

impl Syntax {
    /// Dialect for `path`; unknown extensions are read as SCSS.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("sass") => Self::Sass,
            Some(ext) if ext.eq_ignore_ascii_case("css") => Self::Css,
            _ => Self::Scss,
        }
    }

    fn has_line_comments(self) -> bool {
        self != Self::Css
    }
}

/// A name found in a stylesheet, with its 1-based line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedName {
    /// Line the name starts on
    pub line: usize,
    /// Name plus kind and selector context
    pub token: NameToken,
}

/// Extracts class, variable and mixin names from stylesheet source.
#[derive(Debug, Clone)]
pub struct ScssScanner {
    check_variables: bool,
    check_mixins: bool,
}

impl Default for ScssScanner {
    fn default() -> Self {
        Self::new(&NamingConfig::default())
    }
}

impl ScssScanner {
    /// Create a scanner honouring the variable/mixin switches in `config`.
    pub fn new(config: &NamingConfig) -> Self {
        Self {
            check_variables: config.check_variables,
            check_mixins: config.check_mixins,
        }
    }

    /// Scan SCSS source into names, ordered by position.
    pub fn scan(&self, source: &str) -> Vec<ScannedName> {
        self.scan_as(source, Syntax::Scss)
    }

    /// Scan source written in `syntax` into names, ordered by position.
    pub fn scan_as(&self, source: &str, syntax: Syntax) -> Vec<ScannedName> {
        let names = match syntax {
            Syntax::Sass => {
                let source = blank_indented_comments(source);
                self.scan_indented(&blank_non_code(&source, syntax))
            }
            Syntax::Scss | Syntax::Css => self.scan_braced(&blank_non_code(source, syntax)),
        };

        debug!("Scanned {} names ({:?})", names.len(), syntax);
        names
    }

    fn scan_braced(&self, cleaned: &str) -> Vec<ScannedName> {
        let mut names = Vec::new();

        let mut buffer = String::new();
        let mut buffer_line = 1usize;
        let mut line = 1usize;
        let mut interpolation_depth = 0usize;
        let mut chars = cleaned.chars().peekable();

        while let Some(c) = chars.next() {
            if interpolation_depth > 0 {
                match c {
                    '{' => interpolation_depth += 1,
                    '}' => interpolation_depth -= 1,
                    _ => {}
                }
                buffer.push(c);
            } else if c == '#' && chars.peek() == Some(&'{') {
                buffer.push(c);
                if let Some(brace) = chars.next() {
                    buffer.push(brace);
                }
                interpolation_depth = 1;
            } else {
                match c {
                    '{' => self.prelude(&buffer, buffer_line, &mut names),
                    ';' | '}' => self.declaration(&buffer, buffer_line, &mut names),
                    _ => buffer.push(c),
                }
                if matches!(c, '{' | ';' | '}') {
                    buffer.clear();
                    buffer_line = line;
                }
            }

            if c == '\n' {
                line += 1;
            }
        }
        self.declaration(&buffer, buffer_line, &mut names);

        names
    }

    fn scan_indented(&self, cleaned: &str) -> Vec<ScannedName> {
        let lines: Vec<(usize, &str)> = cleaned
            .split('\n')
            .map(|line| (indent_width(line), line.trim()))
            .collect();
        let mut names = Vec::new();

        for (index, &(indent, text)) in lines.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            let line = index + 1;
            let opens_block = lines[index + 1..]
                .iter()
                .find(|(_, next)| !next.is_empty())
                .is_some_and(|&(next_indent, _)| next_indent > indent);

            if text.starts_with('=') {
                if self.check_mixins {
                    if let Some(caps) = INDENTED_MIXIN_HEADER.captures(text) {
                        names.push(ScannedName {
                            line,
                            token: NameToken::mixin(&caps[1]),
                        });
                    }
                }
            } else if text.starts_with('@') {
                self.at_rule(text, line, &mut names);
            } else if text.starts_with('$') || text.starts_with('+') {
                self.declaration(text, line, &mut names);
            } else if (opens_block || text.ends_with(',')) && !text.ends_with(':') {
                names.extend(selector_names(text, line, 0));
            } else {
                self.declaration(text, line, &mut names);
            }
        }

        names
    }

    fn prelude(&self, buffer: &str, buffer_line: usize, names: &mut Vec<ScannedName>) {
        let (text, _) = trimmed_with_line(buffer, buffer_line);
        if text.is_empty() {
            return;
        }

        if text.starts_with('@') {
            self.at_rule(buffer, buffer_line, names);
            return;
        }

        // Nested property block such as `font: { ... }`.
        if text.ends_with(':') {
            return;
        }

        names.extend(selector_names(buffer, buffer_line, 0));
    }

    /// `@at-root` selectors are scanned; `@mixin` headers yield a mixin name.
    fn at_rule(&self, buffer: &str, buffer_line: usize, names: &mut Vec<ScannedName>) {
        if let Some(at_root) = AT_ROOT.find(buffer) {
            names.extend(selector_names(buffer, buffer_line, at_root.end()));
            return;
        }

        if !self.check_mixins {
            return;
        }
        let (text, line) = trimmed_with_line(buffer, buffer_line);
        if let Some(caps) = MIXIN_HEADER.captures(text) {
            names.push(ScannedName {
                line,
                token: NameToken::mixin(&caps[1]),
            });
        }
    }

    fn declaration(&self, buffer: &str, buffer_line: usize, names: &mut Vec<ScannedName>) {
        if !self.check_variables {
            return;
        }
        let (text, line) = trimmed_with_line(buffer, buffer_line);
        if let Some(caps) = VARIABLE_DECLARATION.captures(text) {
            names.push(ScannedName {
                line,
                token: NameToken::variable(&caps[1]),
            });
        }
    }
}

fn selector_names(text: &str, base_line: usize, start: usize) -> Vec<ScannedName> {
    let mut selector = SelectorScan::new(text, base_line);
    selector.scan_range(start, text.len(), false);
    selector.finish()
}

fn trimmed_with_line(buffer: &str, buffer_line: usize) -> (&str, usize) {
    let leading = buffer.len() - buffer.trim_start().len();
    let line = buffer_line + buffer[..leading].matches('\n').count();
    (buffer.trim(), line)
}

fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Blank indented-syntax comment blocks: a line opening with `//` or `/*`
/// and every following line indented deeper than it.
fn blank_indented_comments(source: &str) -> String {
    let mut comment_indent: Option<usize> = None;
    let mut lines = Vec::new();

    for line in source.split('\n') {
        let indent = indent_width(line);
        let trimmed = line.trim();

        if comment_indent.is_some_and(|open| trimmed.is_empty() || indent > open) {
            lines.push("");
            continue;
        }
        comment_indent = None;

        if trimmed.starts_with("//") || trimmed.starts_with("/*") {
            comment_indent = Some(indent);
            lines.push("");
        } else {
            lines.push(line);
        }
    }

    lines.join("\n")
}

/// Replace comments, string literals and `url()` bodies with spaces, keeping newlines.
fn blank_non_code(source: &str, syntax: Syntax) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let blank = |c: char| if c == '\n' { '\n' } else { ' ' };
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if c == '/' && next == Some('*') {
            let mut j = i;
            while j < chars.len() && !(chars[j] == '*' && chars.get(j + 1) == Some(&'/')) {
                // Indented-syntax comments never run past the line.
                if syntax == Syntax::Sass && chars[j] == '\n' {
                    break;
                }
                out.push(blank(chars[j]));
                j += 1;
            }
            if j < chars.len() && chars[j] == '*' {
                out.push_str("  ");
                i = j + 2;
            } else {
                i = j;
            }
        } else if c == '/' && next == Some('/') && syntax.has_line_comments() {
            while i < chars.len() && chars[i] != '\n' {
                out.push(' ');
                i += 1;
            }
        } else if c == '"' || c == '\'' {
            out.push(' ');
            i += 1;
            while i < chars.len() && chars[i] != c {
                if chars[i] == '\\' && i + 1 < chars.len() {
                    out.push(' ');
                    i += 1;
                }
                out.push(blank(chars[i]));
                i += 1;
            }
            if i < chars.len() {
                out.push(' ');
                i += 1;
            }
        } else if starts_url(&chars, i) {
            out.push_str("url(");
            i += 4;
            while i < chars.len() && chars[i] != ')' {
                out.push(blank(chars[i]));
                i += 1;
            }
        } else {
            out.push(c);
            i += 1;
        }
    }

    out
}

fn starts_url(chars: &[char], i: usize) -> bool {
    chars.len() >= i + 4
        && chars[i..i + 3]
            .iter()
            .zip("url".chars())
            .all(|(a, b)| a.eq_ignore_ascii_case(&b))
        && chars[i + 3] == '('
        && (i == 0 || !is_ident_char(chars[i - 1]))
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b >= 0x80
}

fn is_state_class(class: &str) -> bool {
    class
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("is-"))
}

fn is_flat_namespace(class: &str) -> bool {
    class.split_once('-').is_some_and(|(prefix, _)| {
        prefix.eq_ignore_ascii_case("u") || prefix.eq_ignore_ascii_case("js")
    })
}

/// Classes collected for one compound selector.
#[derive(Default)]
struct Compound {
    classes: Vec<(usize, String)>,
    parent_reference: bool,
}

/// Walks one selector prelude, emitting names per compound selector.
struct SelectorScan<'a> {
    text: &'a str,
    bytes: &'a [u8],
    base_line: usize,
    found: Vec<(usize, NameToken)>,
}

impl<'a> SelectorScan<'a> {
    fn new(text: &'a str, base_line: usize) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            base_line,
            found: Vec::new(),
        }
    }

    fn finish(mut self) -> Vec<ScannedName> {
        self.found.sort_by_key(|(offset, _)| *offset);
        let text = self.text;
        let base_line = self.base_line;
        self.found
            .into_iter()
            .map(|(offset, token)| ScannedName {
                line: base_line + text[..offset].matches('\n').count(),
                token,
            })
            .collect()
    }

    /// Scan `[start, end)`. `nested` is set inside pseudo-class arguments.
    fn scan_range(&mut self, start: usize, end: usize, nested: bool) {
        let mut compound = Compound::default();
        let mut i = start;

        while i < end {
            match self.bytes[i] {
                b' ' | b'\t' | b'\n' | b'\r' | b',' | b'>' | b'+' | b'~' => {
                    self.flush(std::mem::take(&mut compound), nested);
                    i += 1;
                }
                b'&' => {
                    compound.parent_reference = true;
                    // `&-suffix` and `&__suffix` build a name from the parent; skip it.
                    i = self.read_name(i + 1, end).0;
                }
                b'.' => {
                    let (next, interpolated) = self.read_name(i + 1, end);
                    // `.5` in `50.5%` keyframe selectors is not a class.
                    if !interpolated && next > i + 1 && !self.bytes[i + 1].is_ascii_digit() {
                        compound
                            .classes
                            .push((i + 1, self.text[i + 1..next].to_string()));
                    }
                    i = next;
                }
                b'#' | b'%' => i = self.read_name(i + 1, end).0,
                b':' => {
                    i += 1;
                    if i < end && self.bytes[i] == b':' {
                        i += 1;
                    }
                    i = self.read_name(i, end).0;
                    if i < end && self.bytes[i] == b'(' {
                        let close = self.matching(i, b'(', b')', end);
                        self.scan_range(i + 1, close, true);
                        i = close + 1;
                    }
                }
                b'[' => i = self.matching(i, b'[', b']', end) + 1,
                b'(' => i = self.matching(i, b'(', b')', end) + 1,
                b if is_ident_byte(b) => i = self.read_name(i, end).0,
                _ => i += 1,
            }
        }

        self.flush(compound, nested);
    }

    /// Consume a name starting at `i`. Returns the end offset and whether it
    /// contained `#{}` interpolation.
    fn read_name(&self, mut i: usize, end: usize) -> (usize, bool) {
        let mut interpolated = false;
        while i < end {
            let b = self.bytes[i];
            if b == b'#' && self.bytes.get(i + 1) == Some(&b'{') {
                interpolated = true;
                i = self.matching(i + 1, b'{', b'}', end) + 1;
            } else if b == b'\\' && i + 1 < end {
                i += 2;
            } else if is_ident_byte(b) {
                i += 1;
            } else {
                break;
            }
        }
        (i.min(end), interpolated)
    }

    /// Offset of the bracket closing the one at `open_at`, or `end` if unbalanced.
    fn matching(&self, open_at: usize, open: u8, close: u8, end: usize) -> usize {
        let mut depth = 0usize;
        for j in open_at..end {
            if self.bytes[j] == open {
                depth += 1;
            } else if self.bytes[j] == close {
                depth -= 1;
                if depth == 0 {
                    return j;
                }
            }
        }
        end
    }

    fn flush(&mut self, compound: Compound, nested: bool) {
        if compound.classes.is_empty() {
            return;
        }

        let (states, others): (Vec<_>, Vec<_>) = compound
            .classes
            .into_iter()
            .partition(|(_, class)| is_state_class(class));

        let lone_state_context = if compound.parent_reference || !others.is_empty() {
            SelectorContext::Adjoining
        } else if nested {
            SelectorContext::Unknown
        } else {
            SelectorContext::Standalone
        };

        let mut states = states.into_iter();
        let joinable = others.len() == 1
            && !compound.parent_reference
            && !is_flat_namespace(&others[0].1);

        if joinable {
            let (offset, component) = &others[0];
            match states.next() {
                Some((_, state)) => self
                    .found
                    .push((*offset, NameToken::class(format!("{component}.{state}")))),
                None => self.found.push((*offset, NameToken::class(component.clone()))),
            }
        } else {
            for (offset, class) in others {
                self.found.push((offset, NameToken::class(class)));
            }
        }

        for (offset, state) in states {
            self.found.push((
                offset,
                NameToken::class(state).with_context(lone_state_context),
            ));
        }
    }
}
