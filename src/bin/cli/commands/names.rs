//! `classlint names`: validate names given on the command line.

use classlint_rs::detectors::naming::{NameToken, SelectorContext, TokenKind};
use classlint_rs::ClasslintEngine;

use crate::cli::args::NamesArgs;
use crate::cli::config_layer::{build_layered_config, CliOverrides, FromCliArgs};
use crate::cli::output::emit_report;
use crate::cli::quality_gates::handle_gate_result;

/// Run the names command.
pub async fn names_command(args: NamesArgs) -> anyhow::Result<()> {
    let config = build_layered_config(
        args.options.config.as_deref(),
        CliOverrides::from_cli_args(&args.options),
    )?;
    let format = config.report.format;
    let strict = config.report.strict;

    let engine = ClasslintEngine::new(config)?;
    let report = engine.check_names(tokens_from_args(&args));

    emit_report(&report, format, args.options.out.as_deref(), args.options.quiet)?;
    handle_gate_result(&report, strict, args.options.quiet)
}

fn tokens_from_args(args: &NamesArgs) -> Vec<NameToken> {
    let kind = TokenKind::from(args.kind);
    let context = if args.standalone && kind == TokenKind::Class {
        SelectorContext::Standalone
    } else {
        SelectorContext::Unknown
    };

    args.names
        .iter()
        .map(|name| NameToken::new(name.clone(), kind).with_context(context))
        .collect()
}
