use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use ah_dice::{CheckMode, CheckOutcome, CheckRequest, ReseedPolicy, Resolver, ResolverConfig};
use ah_interactions::render::{join_faces, render_outcomes, success_word};

/// How `ah roll` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A table, one row per repetition
    Table,
    /// The message text a Discord reply would carry
    Discord,
    /// Outcomes as JSON
    Json,
}

pub fn run(
    request: &CheckRequest,
    seed: Option<u64>,
    reseed: ReseedPolicy,
    format: OutputFormat,
) -> Result<(), String> {
    let resolver = Resolver::new(ResolverConfig::default().with_reseed(reseed));
    let outcomes = super::resolve(&resolver, request, seed);

    match format {
        OutputFormat::Discord => println!("{}", render_outcomes(&outcomes)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&outcomes)
                .map_err(|e| format!("failed to encode outcomes: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Table => {
            let dice = resolver.config().clamp_attribute(request.attribute);
            print_table(request.mode(), dice, &outcomes);
        }
    }

    Ok(())
}

fn print_table(mode: CheckMode, dice: u32, outcomes: &[CheckOutcome]) {
    let title = match mode {
        CheckMode::Attribute => "Attribute check",
        CheckMode::Skill => "Skill check",
    };
    println!("  {} {}", title.bold(), format!("({dice} dice)").dimmed());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    match mode {
        CheckMode::Attribute => {
            table.set_header(vec!["Dice", "Bonus", "Successes"]);
            for outcome in outcomes {
                table.add_row(vec![
                    faces_cell(&outcome.natural),
                    faces_cell(&outcome.bonus),
                    outcome.successes.to_string(),
                ]);
            }
        }
        CheckMode::Skill => {
            table.set_header(vec!["#", "Dice", "Skill", "Boosted", "Bonus", "Successes"]);
            for outcome in outcomes {
                let (points, boosted) = match &outcome.skill {
                    Some(skill) => (skill.points.to_string(), faces_cell(&skill.boosted)),
                    None => ("—".to_string(), "—".to_string()),
                };
                table.add_row(vec![
                    outcome.repetition.to_string(),
                    faces_cell(&outcome.natural),
                    points,
                    boosted,
                    faces_cell(&outcome.bonus),
                    outcome.successes.to_string(),
                ]);
            }
        }
    }

    println!("{table}");

    if mode == CheckMode::Skill {
        let total: u32 = outcomes.iter().map(|o| o.successes).sum();
        println!();
        println!(
            "  {}",
            format!("{total} {} across {} roll(s)", success_word(total), outcomes.len()).green()
        );
    }
}

fn faces_cell(faces: &[u8]) -> String {
    if faces.is_empty() {
        "—".to_string()
    } else {
        join_faces(faces)
    }
}
