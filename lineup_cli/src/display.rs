use comfy_table::{Table, presets::UTF8_FULL};
use lineup_optimizer::solver::selection_result::SelectionResult;

pub fn lineup_table(result: &SelectionResult) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["#", "Player", "Role", "Score", "Confidence"]);

    for (position, candidate) in result.lineup().into_iter().enumerate() {
        let confidence = candidate
            .confidence()
            .map(|interval| format!("{:.1} - {:.1}", interval.lo, interval.hi))
            .unwrap_or_else(|| String::from("-"));

        let mut name = candidate.id().to_owned();
        if candidate.is_overseas() {
            name.push_str(" (OS)");
        }

        table.add_row(vec![
            (position + 1).to_string(),
            name,
            candidate.role().to_string(),
            format!("{:.1}", candidate.predicted_score()),
            confidence,
        ]);
    }

    table
}

pub fn print_result(result: &SelectionResult) {
    println!("{}", lineup_table(result));

    match result.fallback_reason() {
        Some(reason) => println!("Method: {} ({reason})", result.method_used()),
        None => println!("Method: {}", result.method_used()),
    }

    let composition = result.composition();
    println!("Total score: {:.1}", result.total_score());
    println!(
        "Players: {}, keepers: {}, batting options: {}, bowling options: {}, all-rounders: {}, overseas: {}",
        composition.players,
        composition.wicketkeepers,
        composition.batters,
        composition.bowlers,
        composition.allrounders,
        composition.overseas,
    );

    for violation in result.violations() {
        println!("Unmet: {violation}");
    }
}
