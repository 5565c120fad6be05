//! Splits raw names into structural segments.
//!
//! Class names are split namespace-first, then on the first `--` (modifier),
//! then on `-` (descendants, on either side of the modifier). An adjoining `.is-<state>` class is split off
//! before any of that. Variable and mixin names are split into hyphen tokens
//! and read from the end: an optional trailing `--modifier`, then the
//! `<propertyName>-<variableName>` pair, then the component prefix.

use super::config::NamingConfig;
use super::rules::NameFailure;
use super::types::{
    NameToken, Namespace, ParsedName, Segment, SegmentRole, Separator, TokenKind,
};

/// Characters accepted inside a single name. Underscores are accepted here so
/// the camelCase rule can report them as separators.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Turns [`NameToken`]s into [`ParsedName`]s.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    project_namespaces: Vec<String>,
}

impl Tokenizer {
    /// Create a tokenizer that also strips the configured project namespaces.
    pub fn new(config: &NamingConfig) -> Self {
        Self {
            project_namespaces: config.project_namespaces.clone(),
        }
    }

    /// Tokenize a name according to its kind.
    pub fn tokenize(&self, token: &NameToken) -> Result<ParsedName, NameFailure> {
        match token.kind() {
            TokenKind::Class => self.tokenize_class(token.text()),
            kind => tokenize_variable(token.text(), kind),
        }
    }

    /// Tokenize a class name, optionally compound with one adjoining state.
    pub fn tokenize_class(&self, raw: &str) -> Result<ParsedName, NameFailure> {
        if raw.is_empty() {
            return Err(NameFailure::malformed("empty name"));
        }
        if let Some(bad) = raw.chars().find(|&c| !is_name_char(c) && c != '.') {
            return Err(NameFailure::malformed(format!(
                "unexpected character '{bad}'"
            )));
        }

        let mut parts = raw.split('.');
        let head = parts.next().unwrap_or_default();
        let adjoining: Vec<&str> = parts.collect();

        if head.is_empty() {
            return Err(NameFailure::malformed("empty class before adjoining class"));
        }
        if adjoining.len() > 1 {
            return Err(NameFailure::malformed(
                "more than one adjoining state class",
            ));
        }

        let mut parsed = ParsedName {
            kind: TokenKind::Class,
            sigil: None,
            namespace: None,
            segments: Vec::new(),
        };
        self.split_head(head, &mut parsed)?;

        if let Some(state) = adjoining.first() {
            if matches!(parsed.namespace, Some(Namespace::Utility | Namespace::JsHook)) {
                return Err(NameFailure::malformed(
                    "namespaced names cannot carry an adjoining state class",
                ));
            }
            if parsed.state().is_some() {
                return Err(NameFailure::malformed(
                    "state classes cannot carry an adjoining state class",
                ));
            }
            push_adjoining_state(state, &mut parsed)?;
        }

        Ok(parsed)
    }

    fn split_head(&self, head: &str, parsed: &mut ParsedName) -> Result<(), NameFailure> {
        if let Some((prefix, body)) = head.split_once('-') {
            if let Some(namespace) = Namespace::from_prefix(prefix) {
                if body.is_empty() || body.split('-').any(str::is_empty) {
                    return Err(NameFailure::malformed(format!(
                        "empty segment after `{prefix}-` namespace"
                    )));
                }
                parsed.namespace = Some(namespace);
                parsed
                    .segments
                    .push(Segment::new(SegmentRole::Namespace, Separator::None, prefix));
                parsed
                    .segments
                    .push(Segment::new(SegmentRole::Body, Separator::Hyphen, body));
                return Ok(());
            }

            if prefix.eq_ignore_ascii_case("is") {
                if body.is_empty() {
                    return Err(NameFailure::malformed("empty state name after `is-`"));
                }
                parsed
                    .segments
                    .push(Segment::new(SegmentRole::StatePrefix, Separator::None, prefix));
                parsed
                    .segments
                    .push(Segment::new(SegmentRole::State, Separator::Hyphen, body));
                return Ok(());
            }

            if !body.is_empty() && self.project_namespaces.iter().any(|ns| ns == prefix) {
                parsed.namespace = Some(Namespace::Project);
                parsed
                    .segments
                    .push(Segment::new(SegmentRole::Namespace, Separator::None, prefix));
                return split_component(body, Separator::Hyphen, parsed);
            }
        }

        split_component(head, Separator::None, parsed)
    }
}

/// `component[-descendant...][--modifier[-descendant...]]`
fn split_component(
    text: &str,
    first_separator: Separator,
    parsed: &mut ParsedName,
) -> Result<(), NameFailure> {
    let (base, modifier) = match text.split_once("--") {
        Some((base, modifier)) => (base, Some(modifier)),
        None => (text, None),
    };

    if let Some(modifier) = modifier {
        if modifier.contains("--") {
            return Err(NameFailure::malformed(
                "only one modifier segment is permitted",
            ));
        }
        if modifier.is_empty() || modifier.starts_with('-') || modifier.ends_with('-') {
            return Err(NameFailure::malformed("empty modifier segment"));
        }
    }

    let mut pieces = base.split('-');
    let component = pieces.next().unwrap_or_default();
    if component.is_empty() {
        return Err(NameFailure::malformed("empty component name"));
    }
    parsed
        .segments
        .push(Segment::new(SegmentRole::Component, first_separator, component));

    for descendant in pieces {
        if descendant.is_empty() {
            return Err(NameFailure::malformed("empty descendant segment"));
        }
        parsed
            .segments
            .push(Segment::new(SegmentRole::Descendant, Separator::Hyphen, descendant));
    }

    if let Some(modifier) = modifier {
        let mut pieces = modifier.split('-');
        parsed.segments.push(Segment::new(
            SegmentRole::Modifier,
            Separator::DoubleHyphen,
            pieces.next().unwrap_or_default(),
        ));
        for descendant in pieces {
            if descendant.is_empty() {
                return Err(NameFailure::malformed("empty descendant segment"));
            }
            parsed
                .segments
                .push(Segment::new(SegmentRole::Descendant, Separator::Hyphen, descendant));
        }
    }

    Ok(())
}

fn push_adjoining_state(state: &str, parsed: &mut ParsedName) -> Result<(), NameFailure> {
    if state.is_empty() {
        return Err(NameFailure::malformed("empty adjoining class"));
    }

    match state.split_once('-') {
        Some((prefix, name)) if prefix.eq_ignore_ascii_case("is") => {
            if name.is_empty() {
                return Err(NameFailure::malformed("empty state name after `is-`"));
            }
            parsed
                .segments
                .push(Segment::new(SegmentRole::StatePrefix, Separator::Dot, prefix));
            parsed
                .segments
                .push(Segment::new(SegmentRole::State, Separator::Hyphen, name));
        }
        _ => {
            parsed
                .segments
                .push(Segment::new(SegmentRole::State, Separator::Dot, state));
        }
    }
    Ok(())
}

/// Split on hyphens, remembering whether each word followed `-` or `--`.
fn hyphen_tokens(text: &str) -> Result<Vec<(Separator, &str)>, NameFailure> {
    let mut tokens = Vec::new();
    let mut rest = text;
    let mut separator = Separator::None;

    loop {
        let end = rest.find('-').unwrap_or(rest.len());
        let word = &rest[..end];
        if word.is_empty() {
            return Err(NameFailure::malformed("empty segment"));
        }
        tokens.push((separator, word));
        if end == rest.len() {
            break;
        }

        let after = &rest[end..];
        let hyphens = after.len() - after.trim_start_matches('-').len();
        separator = match hyphens {
            1 => Separator::Hyphen,
            2 => Separator::DoubleHyphen,
            _ => return Err(NameFailure::malformed("unexpected run of hyphens")),
        };
        rest = &after[hyphens..];
    }

    Ok(tokens)
}

/// `[<component>[--modifier][-descendant]-]<property>-<variable>[--modifier]`
fn tokenize_variable(raw: &str, kind: TokenKind) -> Result<ParsedName, NameFailure> {
    let (sigil, body) = match raw.strip_prefix('$') {
        Some(rest) if kind == TokenKind::Variable => (Some('$'), rest),
        _ => (None, raw),
    };
    if body.is_empty() {
        return Err(NameFailure::malformed("empty name"));
    }
    if let Some(bad) = body.chars().find(|&c| !is_name_char(c)) {
        return Err(NameFailure::malformed(format!(
            "unexpected character '{bad}'"
        )));
    }

    let mut tokens = hyphen_tokens(body)?;
    let trailing = match tokens.last() {
        Some((Separator::DoubleHyphen, _)) if tokens.len() > 1 => tokens.pop(),
        _ => None,
    };

    let mut parsed = ParsedName {
        kind,
        sigil,
        namespace: None,
        segments: Vec::new(),
    };

    let n = tokens.len();
    let has_suffix = n >= 2 && {
        let (property_sep, _) = tokens[n - 2];
        let (variable_sep, _) = tokens[n - 1];
        variable_sep == Separator::Hyphen
            && matches!(property_sep, Separator::None | Separator::Hyphen)
    };

    if has_suffix {
        push_prefix(&tokens[..n - 2], &mut parsed)?;
        let (property_sep, property) = tokens[n - 2];
        let (variable_sep, variable) = tokens[n - 1];
        parsed
            .segments
            .push(Segment::new(SegmentRole::Property, property_sep, property));
        parsed
            .segments
            .push(Segment::new(SegmentRole::Variable, variable_sep, variable));
    } else {
        // No recognisable suffix; keep the structure so the suffix rule can say so.
        push_prefix(&tokens, &mut parsed)?;
    }

    if let Some((separator, modifier)) = trailing {
        parsed
            .segments
            .push(Segment::new(SegmentRole::TrailingModifier, separator, modifier));
    }

    Ok(parsed)
}

fn push_prefix(tokens: &[(Separator, &str)], parsed: &mut ParsedName) -> Result<(), NameFailure> {
    let mut seen_modifier = false;
    let mut seen_descendant = false;

    for (i, &(separator, word)) in tokens.iter().enumerate() {
        let role = if i == 0 {
            SegmentRole::Component
        } else if separator == Separator::DoubleHyphen {
            if seen_modifier {
                return Err(NameFailure::malformed(
                    "only one modifier segment is permitted",
                ));
            }
            if seen_descendant {
                return Err(NameFailure::malformed(
                    "modifier must precede the descendant in variable names",
                ));
            }
            seen_modifier = true;
            SegmentRole::Modifier
        } else {
            seen_descendant = true;
            SegmentRole::Descendant
        };
        parsed.segments.push(Segment::new(role, separator, word));
    }

    Ok(())
}
