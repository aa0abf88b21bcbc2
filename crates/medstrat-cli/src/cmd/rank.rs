use crate::output::{print_json, print_table};
use medstrat_core::error::MedstratError;
use medstrat_core::knowledge;
use medstrat_core::ranking::Ranker;

pub fn run(focus: &str, json: bool) -> anyhow::Result<()> {
    let area = knowledge::focus_area(focus)
        .ok_or_else(|| MedstratError::UnknownFocus(focus.to_string()))?;
    let ranked = Ranker::default().rank(Some(area.key));

    if json {
        return print_json(&serde_json::json!({
            "focus": area.key,
            "strategies": ranked,
        }));
    }

    println!("{}\n", area.name);
    let rows = ranked
        .iter()
        .enumerate()
        .map(|(i, r)| {
            vec![
                (i + 1).to_string(),
                r.name.to_string(),
                r.score.to_string(),
                r.time.to_string(),
                r.budget.to_string(),
            ]
        })
        .collect();
    print_table(&["#", "STRATEGY", "SCORE", "TIME", "BUDGET"], rows);
    for r in &ranked {
        println!("\n{}: {}", r.name, r.reasoning);
    }
    Ok(())
}
