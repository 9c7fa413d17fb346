use anyhow::{Context, Result};
use comfy_table::Table;

use rowcheck_cli::pipeline::{
    PipelineConfig, VerifyConfig, run_pipeline, standard_patterns, verify_stored,
};
use rowcheck_cli::types::{CheckResult, VerifyResult};

use crate::cli::{CheckArgs, VerifyArgs};
use crate::summary::{apply_table_style, print_stdout};

pub fn run_fields() -> Result<()> {
    let patterns = standard_patterns()?;
    let mut table = Table::new();
    table.set_header(vec!["Field", "Pattern"]);
    apply_table_style(&mut table);
    for rule in &patterns {
        table.add_row(vec![rule.field(), rule.pattern()]);
    }
    print_stdout(&table)?;
    Ok(())
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let patterns = standard_patterns()?;
    let config = PipelineConfig {
        input: args.input.input.clone(),
        output: (!args.dry_run).then(|| args.output.clone()),
        variant: args.variant,
        scan: args.input.scan_options(),
    };
    run_pipeline(&config, &patterns)
        .with_context(|| format!("check of {} failed", config.input.display()))
}

pub fn run_verify(args: &VerifyArgs) -> Result<VerifyResult> {
    let patterns = standard_patterns()?;
    let config = VerifyConfig {
        input: args.input.input.clone(),
        result_path: args.result.clone(),
        scan: args.input.scan_options(),
    };
    verify_stored(&config, &patterns).with_context(|| {
        format!(
            "verification of {} against {} failed",
            config.input.display(),
            config.result_path.display()
        )
    })
}
