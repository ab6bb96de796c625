use anyhow::Result;
use elpick::PickerOutcome;

/// Print a plain-text representation of the picker outcome.
pub(crate) fn print_plain(outcome: &PickerOutcome) {
    print!("{}", format_outcome_plain(outcome));
}

/// One committed name per line, or a notice when nothing is selected.
pub(crate) fn format_outcome_plain(outcome: &PickerOutcome) -> String {
    if outcome.selection.is_empty() {
        return "No selection\n".to_string();
    }
    outcome
        .selection
        .iter()
        .map(|item| format!("{}\n", item.name))
        .collect()
}

/// Format the picker outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickerOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the picker outcome.
pub(crate) fn print_json(outcome: &PickerOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use elpick::Item;

    use super::*;

    #[test]
    fn json_format_lists_selected_items() {
        let outcome = PickerOutcome::confirmed(&[Item::new(4, "Element 4"), Item::new(12, "Element 12")]);

        let json = format_outcome_json(&outcome).expect("json");
        insta::assert_snapshot!(json, @r#"
        {
          "confirmed": true,
          "selection": [
            {
              "id": 4,
              "name": "Element 4"
            },
            {
              "id": 12,
              "name": "Element 12"
            }
          ]
        }
        "#);
    }

    #[test]
    fn plain_format_reports_empty_selection() {
        let outcome = PickerOutcome::aborted(&[]);
        assert_eq!(format_outcome_plain(&outcome), "No selection\n");

        let outcome = PickerOutcome::confirmed(&[Item::new(1, "Element 1")]);
        assert_eq!(format_outcome_plain(&outcome), "Element 1\n");
    }
}
