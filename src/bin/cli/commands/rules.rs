//! `classlint list-rules`: print the rule catalogue.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use classlint_rs::detectors::naming::{RuleId, TokenKind};

/// Row type for the rule table.
#[derive(Tabled)]
struct RuleRow {
    #[tabled(rename = "Order")]
    order: usize,
    #[tabled(rename = "Rule")]
    rule: String,
    #[tabled(rename = "Applies to")]
    applies_to: String,
    #[tabled(rename = "Description")]
    description: String,
}

fn rule_rows() -> Vec<RuleRow> {
    RuleId::ORDERED
        .iter()
        .enumerate()
        .map(|(index, rule)| RuleRow {
            order: index + 1,
            rule: rule.as_str().to_string(),
            applies_to: [TokenKind::Class, TokenKind::Variable, TokenKind::Mixin]
                .into_iter()
                .filter(|kind| rule.applies_to(*kind))
                .map(|kind| kind.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            description: rule.description().to_string(),
        })
        .collect()
}

/// List the naming rules in evaluation order
pub async fn list_rules() -> anyhow::Result<()> {
    println!("{}", "📏 Naming Rules".bright_blue().bold());
    println!();

    let mut table = Table::new(rule_rows());
    table.with(TableStyle::rounded());
    println!("{}", table);

    println!();
    println!(
        "{}",
        "Rules run in order; the first failing rule is reported. Disable one with --disable-rule <RULE>."
            .dimmed()
    );

    Ok(())
}
