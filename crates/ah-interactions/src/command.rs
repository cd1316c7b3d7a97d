//! Turning slash-command options into a check request.
//!
//! Options are read by position: attribute, then skill points, then
//! repetitions. Supplying skill points makes the check a skill check, and
//! repetitions are only read for skill checks.

use ah_dice::CheckRequest;

use crate::error::{InteractionError, InteractionResult};
use crate::payload::{CommandData, CommandOption};

/// Build a [`CheckRequest`] from command options.
pub fn parse_check(data: &CommandData) -> InteractionResult<CheckRequest> {
    let attribute = integer_option(&data.options, 0, "attribute")?
        .ok_or(InteractionError::MissingOption("attribute"))?;
    let skill_points = integer_option(&data.options, 1, "skill")?;
    let repetitions = match skill_points {
        Some(_) => integer_option(&data.options, 2, "repeat")?,
        None => None,
    };

    Ok(CheckRequest {
        attribute,
        skill_points,
        repetitions,
    })
}

fn integer_option(
    options: &[CommandOption],
    index: usize,
    label: &'static str,
) -> InteractionResult<Option<i64>> {
    options
        .get(index)
        .map(|option| {
            option
                .value
                .as_i64()
                .ok_or(InteractionError::InvalidOption(label))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(values: &[serde_json::Value]) -> CommandData {
        CommandData {
            name: "roll".to_string(),
            options: values
                .iter()
                .map(|value| CommandOption {
                    name: String::new(),
                    value: value.clone(),
                })
                .collect(),
        }
    }

    #[test]
    fn attribute_only() {
        let request = parse_check(&data(&[json!(4)])).unwrap();
        assert_eq!(request, CheckRequest::attribute(4));
    }

    #[test]
    fn attribute_and_skill() {
        let request = parse_check(&data(&[json!(4), json!(3)])).unwrap();
        assert_eq!(request, CheckRequest::skill(4, 3));
    }

    #[test]
    fn with_repetitions() {
        let request = parse_check(&data(&[json!(4), json!(3), json!(5)])).unwrap();
        assert_eq!(request, CheckRequest::skill(4, 3).with_repetitions(5));
    }

    #[test]
    fn raw_values_pass_through_unclamped() {
        let request = parse_check(&data(&[json!(40), json!(-2), json!(0)])).unwrap();
        assert_eq!(request.attribute, 40);
        assert_eq!(request.skill_points, Some(-2));
        assert_eq!(request.repetitions, Some(0));
    }

    #[test]
    fn missing_attribute() {
        let err = parse_check(&data(&[])).unwrap_err();
        assert!(matches!(err, InteractionError::MissingOption("attribute")));
    }

    #[test]
    fn non_integer_option() {
        let err = parse_check(&data(&[json!(4), json!("lots")])).unwrap_err();
        assert!(matches!(err, InteractionError::InvalidOption("skill")));

        let err = parse_check(&data(&[json!(2.5)])).unwrap_err();
        assert!(matches!(err, InteractionError::InvalidOption("attribute")));
    }
}
