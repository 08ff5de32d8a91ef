use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use shuangforge::geometry::{Hand, Key};
use shuangforge::scheme::ShuangpinConfig;
use shuangforge::scorer::{Scorer, Scores};

/// Rows of the board as they appear on QWERTY, left to right.
fn board_rows() -> Vec<Vec<Key>> {
    (0..3u8)
        .map(|row| {
            let mut keys: Vec<Key> = Key::ALL
                .iter()
                .copied()
                .filter(|k| k.location().row == row)
                .collect();
            keys.sort_by_key(|k| {
                let l = k.location();
                match l.hand {
                    Hand::Left => 10 - l.col_weight as i32,
                    Hand::Right => 10 + l.col_weight as i32,
                }
            });
            keys
        })
        .collect()
}

pub fn print_layout_grid(name: &str, config: &ShuangpinConfig) {
    println!("\nScheme: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in board_rows() {
        let cells: Vec<Cell> = row
            .iter()
            .map(|&key| {
                let mut lines = vec![key.to_string().to_uppercase()];
                lines.extend(
                    config
                        .final_layout
                        .iter()
                        .filter(|(_, k)| *k == key)
                        .map(|(f, _)| f.to_string()),
                );
                lines.extend(
                    config
                        .variant_to_standard_finals
                        .iter()
                        .filter(|(_, s)| config.final_layout.get(s) == Some(key))
                        .map(|(v, _)| v.clone()),
                );
                lines.extend(
                    config
                        .digraph_initial_layout
                        .iter()
                        .filter(|(_, k)| **k == key)
                        .map(|(i, _)| i.clone()),
                );
                Cell::new(lines.join("\n")).set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_scoring_report(results: &[(String, Scores, f64)], scorer: &Scorer) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let w = &scorer.weights;
    table.add_row(vec![
        Cell::new("Scheme").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new(format!("Load\n{:.2}", w.weight_workload)),
        Cell::new(format!("Hand\n{:.2}", w.weight_hand_alternation)),
        Cell::new(format!("Fing\n{:.2}", w.weight_finger_alternation)),
        Cell::new(format!("Step\n{:.2}", w.weight_big_steps)),
        Cell::new(format!("Dir\n{:.2}", w.weight_hit_direction)),
    ]);

    for i in 1..=6 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, s, total) in results {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.4}", total)).fg(Color::Cyan),
            Cell::new(format!("{:.5}", s.tapping_workload_distribution)),
            Cell::new(format!("{:.4}", s.hand_alternation)),
            Cell::new(format!("{:.4}", s.finger_alternation)),
            Cell::new(format!("{:.4}", s.avoidance_of_big_steps)),
            Cell::new(format!("{:.4}", s.hit_direction)),
        ]);
    }
    println!("\n{}", table);
    for (name, _, total) in results {
        println!("Score: {} {:.6}", name, total);
    }
}

pub fn print_baseline_report(sampled: &Scores, frozen: &Scores) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Sampled").fg(Color::Cyan),
        Cell::new("Frozen"),
        Cell::new("Drift %"),
    ]);

    let rows = [
        (
            "tapping_workload_distribution",
            sampled.tapping_workload_distribution,
            frozen.tapping_workload_distribution,
        ),
        ("hand_alternation", sampled.hand_alternation, frozen.hand_alternation),
        (
            "finger_alternation",
            sampled.finger_alternation,
            frozen.finger_alternation,
        ),
        (
            "avoidance_of_big_steps",
            sampled.avoidance_of_big_steps,
            frozen.avoidance_of_big_steps,
        ),
        ("hit_direction", sampled.hit_direction, frozen.hit_direction),
    ];

    for (name, s, f) in rows {
        let drift = if f != 0.0 { (s - f) / f * 100.0 } else { 0.0 };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{:.6}", s)).fg(Color::Cyan),
            Cell::new(format!("{:.6}", f)),
            Cell::new(format!("{:+.2}", drift)),
        ]);
    }
    println!("\n{}", table);
}
