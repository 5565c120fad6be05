//! `classlint check`: scan stylesheets and validate every name found.

use tracing::info;

use classlint_rs::ClasslintEngine;

use crate::cli::args::CheckArgs;
use crate::cli::config_layer::{build_layered_config, CliOverrides, FromCliArgs};
use crate::cli::output::emit_report;
use crate::cli::quality_gates::handle_gate_result;

/// Run the check command.
pub async fn check_command(args: CheckArgs) -> anyhow::Result<()> {
    let config = build_layered_config(
        args.options.config.as_deref(),
        CliOverrides::from_cli_args(&args),
    )?;
    let format = config.report.format;
    let strict = config.report.strict;

    info!("Checking {} inputs", args.paths.len());
    let engine = ClasslintEngine::new(config)?;
    let report = engine.check_paths(&args.paths);

    emit_report(&report, format, args.options.out.as_deref(), args.options.quiet)?;
    handle_gate_result(&report, strict, args.options.quiet)
}
