use crate::output::{print_json, print_table};
use anyhow::Context;
use medstrat_core::session::Session;
use medstrat_core::view;
use medstrat_core::wizard::Action;
use serde::Serialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Serialize)]
struct Step {
    index: usize,
    action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn read_script(file: &Path) -> anyhow::Result<String> {
    if file == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read actions from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

/// Parse a JSON or YAML list of actions (JSON is accepted by the YAML parser).
fn parse_actions(text: &str) -> anyhow::Result<Vec<Action>> {
    serde_yaml::from_str(text).context("actions must be a JSON or YAML list")
}

pub fn run(file: &Path, strict: bool, json: bool) -> anyhow::Result<()> {
    let actions = parse_actions(&read_script(file)?)?;

    let mut session = Session::new();
    let mut steps = Vec::with_capacity(actions.len());
    for (i, action) in actions.into_iter().enumerate() {
        let index = i + 1;
        let name = action.name();
        match session.apply(action) {
            Ok(outcome) => steps.push(Step {
                index,
                action: name,
                outcome: Some(outcome.as_str()),
                error: None,
            }),
            Err(e) if strict => {
                return Err(e).with_context(|| format!("action #{index} ({name}) rejected"));
            }
            Err(e) => {
                tracing::warn!("action #{index} ({name}) rejected: {e}");
                steps.push(Step {
                    index,
                    action: name,
                    outcome: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    let rendered = view::render(&session);
    if json {
        return print_json(&serde_json::json!({
            "steps": steps,
            "session": session,
            "view": rendered,
        }));
    }

    let rows = steps
        .iter()
        .map(|s| {
            vec![
                s.index.to_string(),
                s.action.to_string(),
                s.outcome
                    .map(str::to_string)
                    .or_else(|| s.error.as_ref().map(|e| format!("rejected: {e}")))
                    .unwrap_or_default(),
            ]
        })
        .collect();
    print_table(&["#", "ACTION", "RESULT"], rows);
    println!(
        "\nStep {} of 6 ({}), mode {}",
        rendered.step, rendered.step_label, rendered.mode
    );
    if rendered.nav.can_proceed {
        println!("Ready for next step.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_and_yaml() {
        let from_json =
            parse_actions(r#"[{"type":"select_specialty","key":"cardiology"},{"type":"next"}]"#)
                .unwrap();
        let from_yaml =
            parse_actions("- type: select_specialty\n  key: cardiology\n- type: next\n").unwrap();
        assert_eq!(from_json, from_yaml);
        assert_eq!(from_json.len(), 2);
    }

    #[test]
    fn rejects_unknown_action_type() {
        assert!(parse_actions(r#"[{"type":"teleport"}]"#).is_err());
    }
}
