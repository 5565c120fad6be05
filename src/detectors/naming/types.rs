//! Data types shared by the tokenizer, grammar matcher and reporter.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What kind of identifier a token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A CSS class name, optionally compound with an adjoining `is-` state
    Class,
    /// A SCSS `$variable` name
    Variable,
    /// A SCSS `@mixin` name
    Mixin,
}

impl TokenKind {
    /// Whether the name follows the variable/mixin grammar.
    pub fn uses_variable_grammar(self) -> bool {
        matches!(self, Self::Variable | Self::Mixin)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => write!(f, "class"),
            Self::Variable => write!(f, "variable"),
            Self::Mixin => write!(f, "mixin"),
        }
    }
}

/// Where a class appeared in its selector, as far as the caller knows.
///
/// The standalone-state rule can only be checked with this information; a
/// name string alone never says whether it was the sole class on an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorContext {
    /// No selector information available
    #[default]
    Unknown,
    /// The class was the only simple selector in its compound selector
    Standalone,
    /// The class was attached to a parent reference or another selector
    Adjoining,
}

/// A file and 1-based line where a name was found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Stylesheet path
    pub file: PathBuf,
    /// 1-based line number
    pub line: usize,
}

impl SourceLocation {
    /// Create a location.
    pub fn new(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}

/// A single identifier extracted from source. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NameToken {
    text: String,
    kind: TokenKind,
    #[serde(default)]
    context: SelectorContext,
}

impl NameToken {
    /// Create a token of any kind with unknown selector context.
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
            context: SelectorContext::Unknown,
        }
    }

    /// Create a class name token.
    pub fn class(text: impl Into<String>) -> Self {
        Self::new(text, TokenKind::Class)
    }

    /// Create a variable name token (the leading `$` is optional).
    pub fn variable(text: impl Into<String>) -> Self {
        Self::new(text, TokenKind::Variable)
    }

    /// Create a mixin name token.
    pub fn mixin(text: impl Into<String>) -> Self {
        Self::new(text, TokenKind::Mixin)
    }

    /// Attach selector context.
    #[must_use]
    pub fn with_context(mut self, context: SelectorContext) -> Self {
        self.context = context;
        self
    }

    /// The raw text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The token kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The selector context.
    pub fn context(&self) -> SelectorContext {
        self.context
    }
}

/// Delimiter that precedes a segment in the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Separator {
    /// First segment
    None,
    /// `-`
    Hyphen,
    /// `--`
    DoubleHyphen,
    /// `.` between adjoining classes
    Dot,
}

impl Separator {
    /// The delimiter as written.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Hyphen => "-",
            Self::DoubleHyphen => "--",
            Self::Dot => ".",
        }
    }
}

/// Structural role of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentRole {
    /// `u`, `js` or a configured project namespace
    Namespace,
    /// Flat body of a `u-`/`js-` name
    Body,
    /// Base component name
    Component,
    /// `--modifier`
    Modifier,
    /// `-descendant`
    Descendant,
    /// The `is` of `is-<state>`
    StatePrefix,
    /// State name
    State,
    /// Variable grammar: property name
    Property,
    /// Variable grammar: variable name
    Variable,
    /// Variable grammar: `--modifier` after the variable name
    TrailingModifier,
}

impl SegmentRole {
    /// Human-readable label used in violation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Namespace => "namespace",
            Self::Body => "namespaced",
            Self::Component => "component",
            Self::Modifier | Self::TrailingModifier => "modifier",
            Self::Descendant => "descendant",
            Self::StatePrefix => "state prefix",
            Self::State => "state",
            Self::Property => "property",
            Self::Variable => "variable",
        }
    }

    /// Roles that must be camelCase.
    pub fn requires_camel_case(self) -> bool {
        matches!(
            self,
            Self::Component
                | Self::Modifier
                | Self::Descendant
                | Self::State
                | Self::Property
                | Self::Variable
                | Self::TrailingModifier
        )
    }
}

/// One piece of a parsed name, with the delimiter that preceded it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// Structural role
    pub role: SegmentRole,
    /// Preceding delimiter
    pub separator: Separator,
    /// Segment text as written
    pub text: String,
}

impl Segment {
    pub(crate) fn new(role: SegmentRole, separator: Separator, text: &str) -> Self {
        Self {
            role,
            separator,
            text: text.to_string(),
        }
    }
}

/// Which namespace a name was written under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    /// `u-` utility classes
    Utility,
    /// `js-` JavaScript hooks
    JsHook,
    /// A configured project prefix in front of a component
    Project,
}

impl Namespace {
    /// Match a written prefix against the built-in namespaces, ignoring case
    /// so that `U-` is still recognised as a (miscased) utility namespace.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        if prefix.eq_ignore_ascii_case("u") {
            Some(Self::Utility)
        } else if prefix.eq_ignore_ascii_case("js") {
            Some(Self::JsHook)
        } else {
            None
        }
    }
}

/// The decomposition of a [`NameToken`] into ordered segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedName {
    pub(crate) kind: TokenKind,
    pub(crate) sigil: Option<char>,
    pub(crate) namespace: Option<Namespace>,
    pub(crate) segments: Vec<Segment>,
}

impl ParsedName {
    /// Token kind the name was parsed as.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// All segments in source order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Namespace, if the name carried one.
    pub fn namespace(&self) -> Option<Namespace> {
        self.namespace
    }

    /// Namespace prefix as written (`U` for `U-textTruncate`).
    pub fn namespace_prefix(&self) -> Option<&str> {
        self.first(SegmentRole::Namespace)
    }

    /// Flat body of a namespaced utility or JS-hook name.
    pub fn body(&self) -> Option<&str> {
        self.first(SegmentRole::Body)
    }

    /// Base component name.
    pub fn component(&self) -> Option<&str> {
        self.first(SegmentRole::Component)
    }

    /// Modifier name (the one attached to the component).
    pub fn modifier(&self) -> Option<&str> {
        self.first(SegmentRole::Modifier)
    }

    /// Descendant names, outermost first.
    pub fn descendants(&self) -> Vec<&str> {
        self.all(SegmentRole::Descendant)
    }

    /// State name, without its `is-` prefix.
    pub fn state(&self) -> Option<&str> {
        self.first(SegmentRole::State)
    }

    /// State prefix as written, if any.
    pub fn state_prefix(&self) -> Option<&str> {
        self.first(SegmentRole::StatePrefix)
    }

    /// Variable grammar property name.
    pub fn property(&self) -> Option<&str> {
        self.first(SegmentRole::Property)
    }

    /// Variable grammar variable name.
    pub fn variable(&self) -> Option<&str> {
        self.first(SegmentRole::Variable)
    }

    /// Variable grammar trailing modifier.
    pub fn trailing_modifier(&self) -> Option<&str> {
        self.first(SegmentRole::TrailingModifier)
    }

    /// A bare `is-<state>` class with no component.
    pub fn is_standalone_state(&self) -> bool {
        self.kind == TokenKind::Class && self.state().is_some() && self.component().is_none()
    }

    /// Rejoin the segments with their delimiters.
    pub fn join(&self) -> String {
        let mut out = String::new();
        if let Some(sigil) = self.sigil {
            out.push(sigil);
        }
        for segment in &self.segments {
            out.push_str(segment.separator.as_str());
            out.push_str(&segment.text);
        }
        out
    }

    fn first(&self, role: SegmentRole) -> Option<&str> {
        self.segments
            .iter()
            .find(|s| s.role == role)
            .map(|s| s.text.as_str())
    }

    fn all(&self, role: SegmentRole) -> Vec<&str> {
        self.segments
            .iter()
            .filter(|s| s.role == role)
            .map(|s| s.text.as_str())
            .collect()
    }
}

impl fmt::Display for ParsedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}
