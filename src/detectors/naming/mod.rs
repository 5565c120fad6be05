//! Naming-convention checks for stylesheet class, variable and mixin names.
//!
//! The pipeline is tokenizer → grammar matcher → reporter:
//! - [`Tokenizer`] splits a raw name into namespace, component, modifier,
//!   descendant, state and (for variables) property/variable segments
//! - [`GrammarMatcher`] runs the ordered rule set and returns a [`Verdict`]
//! - [`Reporter`] validates batches of located names into a [`NamingReport`]

pub mod config;
pub mod grammar;
pub mod reporter;
pub mod rules;
pub mod tokenizer;
pub mod types;

pub use config::NamingConfig;
pub use grammar::GrammarMatcher;
pub use reporter::{NamingReport, ReportEntry, Reporter};
pub use rules::{camel_case_problem, NameFailure, RuleId, Verdict, Violation};
pub use tokenizer::Tokenizer;
pub use types::{
    NameToken, Namespace, ParsedName, Segment, SegmentRole, SelectorContext, Separator,
    SourceLocation, TokenKind,
};

#[cfg(test)]
mod tests;
