//! Table output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use liftlog_model::{Set, Workout};

pub fn print_workout_list(workouts: &[Workout], search: Option<&str>) {
    if workouts.is_empty() {
        match search {
            Some(query) => println!("No workouts match '{query}'."),
            None => println!("No workouts yet. Create one with `liftlog new`."),
        }
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Date"),
        header_cell("Exercises"),
        header_cell("Sets"),
        header_cell("Volume (kg)"),
    ]);
    apply_table_style(&mut table);
    for column in 3..6 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for workout in workouts {
        table.add_row(vec![
            dim_cell(&workout.id),
            Cell::new(&workout.name).add_attribute(Attribute::Bold),
            Cell::new(display_date(workout)),
            Cell::new(workout.exercises.len()),
            Cell::new(workout.total_sets()),
            Cell::new(format_weight(workout.total_volume())),
        ]);
    }
    println!("{table}");
}

pub fn print_workout(workout: &Workout) {
    println!("{} ({})", workout.name, display_date(workout));
    println!("ID: {}", workout.id);
    if workout.exercises.is_empty() {
        println!("No exercises.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Exercise"),
        header_cell("Exercise ID"),
        header_cell("Set"),
        header_cell("Weight (kg)"),
        header_cell("Reps"),
    ]);
    apply_table_style(&mut table);
    for column in 2..5 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for exercise in &workout.exercises {
        for (index, set) in exercise.sets.iter().enumerate() {
            let (name, id) = if index == 0 {
                (
                    Cell::new(&exercise.name).add_attribute(Attribute::Bold),
                    dim_cell(&exercise.id),
                )
            } else {
                (Cell::new(""), Cell::new(""))
            };
            table.add_row(vec![name, id, Cell::new(index + 1), weight_cell(set), reps_cell(set)]);
        }
        if exercise.sets.is_empty() {
            table.add_row(vec![
                Cell::new(&exercise.name).add_attribute(Attribute::Bold),
                dim_cell(&exercise.id),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
            ]);
        }
        if let Some(uri) = &exercise.image_uri {
            table.add_row(vec![
                Cell::new(""),
                dim_cell(format!("image: {uri}")),
                Cell::new(""),
                Cell::new(""),
                Cell::new(""),
            ]);
        }
    }
    println!("{table}");
    println!(
        "Total: {} sets, {} kg",
        workout.total_sets(),
        format_weight(workout.total_volume())
    );
}

fn display_date(workout: &Workout) -> String {
    workout
        .date_time()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| workout.date.clone())
}

fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{weight:.0}")
    } else {
        format!("{weight:.2}")
            .trim_end_matches('0')
            .to_string()
    }
}

fn weight_cell(set: &Set) -> Cell {
    Cell::new(format_weight(set.weight))
}

fn reps_cell(set: &Set) -> Cell {
    if set.reps == 0 {
        dim_cell(0)
    } else {
        Cell::new(set.reps)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_drop_trailing_zeros() {
        assert_eq!(format_weight(100.0), "100");
        assert_eq!(format_weight(102.5), "102.5");
        assert_eq!(format_weight(0.25), "0.25");
    }
}
