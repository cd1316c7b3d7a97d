//! Message rendering for resolved checks.

use ah_dice::CheckOutcome;

/// Join faces as `6, 4, 1`.
pub fn join_faces(faces: &[u8]) -> String {
    faces
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `success` for exactly one, `successes` otherwise.
pub fn success_word(count: u32) -> &'static str {
    if count == 1 { "success" } else { "successes" }
}

/// Render one outcome.
///
/// Attribute checks show the dice only. Skill checks lead with a bold
/// success count and show the skill points and boosted results.
pub fn render_outcome(outcome: &CheckOutcome) -> String {
    let mut content = match &outcome.skill {
        None => format!("Dice result: {}", join_faces(&outcome.natural)),
        Some(skill) => format!(
            "**{} {}!**\nDice result: {} | Skill points: {} | Results w/skill points: {}",
            outcome.successes,
            success_word(outcome.successes),
            join_faces(&outcome.natural),
            skill.points,
            join_faces(&skill.boosted),
        ),
    };
    if !outcome.bonus.is_empty() {
        content.push_str(" | Bonus result: ");
        content.push_str(&join_faces(&outcome.bonus));
    }
    content
}

/// Render every outcome, one block per repetition.
pub fn render_outcomes(outcomes: &[CheckOutcome]) -> String {
    outcomes
        .iter()
        .map(render_outcome)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ah_dice::SkillApplication;
    use insta::assert_snapshot;

    fn attribute(natural: &[u8], bonus: &[u8]) -> CheckOutcome {
        CheckOutcome {
            repetition: 1,
            natural: natural.to_vec(),
            bonus: bonus.to_vec(),
            skill: None,
            successes: 0,
        }
    }

    fn skill(
        repetition: u32,
        natural: &[u8],
        boosted: &[u8],
        points: i64,
        successes: u32,
    ) -> CheckOutcome {
        CheckOutcome {
            repetition,
            natural: natural.to_vec(),
            bonus: Vec::new(),
            skill: Some(SkillApplication {
                points,
                boosted: boosted.to_vec(),
            }),
            successes,
        }
    }

    #[test]
    fn join() {
        assert_eq!(join_faces(&[6, 4, 1]), "6, 4, 1");
        assert_eq!(join_faces(&[]), "");
    }

    #[test]
    fn plural() {
        assert_eq!(success_word(0), "successes");
        assert_eq!(success_word(1), "success");
        assert_eq!(success_word(2), "successes");
    }

    #[test]
    fn attribute_without_bonus() {
        assert_snapshot!(render_outcome(&attribute(&[5, 3, 1], &[])), @"Dice result: 5, 3, 1");
    }

    #[test]
    fn attribute_with_bonus() {
        assert_snapshot!(
            render_outcome(&attribute(&[6, 2], &[6, 3])),
            @"Dice result: 6, 2 | Bonus result: 6, 3"
        );
    }

    #[test]
    fn empty_pool() {
        assert_eq!(render_outcome(&attribute(&[], &[])), "Dice result: ");
    }

    #[test]
    fn skill_single_success() {
        let outcome = skill(1, &[5, 3, 2], &[6, 3, 2], 1, 1);
        assert_eq!(
            render_outcome(&outcome),
            "**1 success!**\nDice result: 5, 3, 2 | Skill points: 1 | Results w/skill points: 6, 3, 2"
        );
    }

    #[test]
    fn skill_with_bonus() {
        let mut outcome = skill(1, &[6, 3], &[6, 6], 3, 3);
        outcome.bonus = vec![6, 2];
        assert_eq!(
            render_outcome(&outcome),
            "**3 successes!**\nDice result: 6, 3 | Skill points: 3 | Results w/skill points: 6, 6 | Bonus result: 6, 2"
        );
    }

    #[test]
    fn repetitions_are_newline_separated() {
        let outcomes = [
            skill(1, &[4], &[5], 1, 0),
            skill(2, &[5], &[6], 1, 1),
        ];
        assert_eq!(
            render_outcomes(&outcomes),
            "**0 successes!**\nDice result: 4 | Skill points: 1 | Results w/skill points: 5\n\
             **1 success!**\nDice result: 5 | Skill points: 1 | Results w/skill points: 6"
        );
    }
}
