//! Text and JSON rendering of simulation outcomes.
//!
//! The text report for one policy has three parts:
//!
//! ```text
//! ------------------------------------------------------
//!              Shortest-job-first
//! ------------------------------------------------------
//! Gantt schedule
//! |   1   |   2   |   4   |   1   |   3   |
//! 0	1	5	10	17	26
//!
//! Schedule table
//! +----+----------+-------+---------+---------+------------+------------+
//! | ID | Priority | Burst | Arrival | Wait    | Turnaround | Exit       |
//! ...
//! ```
//!
//! The table footer carries the average wait, the average turnaround and
//! the throughput, each with two decimals.

use std::io::Write;

use crate::error::Result;
use crate::models::{Schedule, TimeSlice};
use crate::scheduler::ScheduleMetrics;
use crate::simulation::Outcome;

const HEADERS: [&str; 7] = [
    "ID",
    "Priority",
    "Burst",
    "Arrival",
    "Wait",
    "Turnaround",
    "Exit",
];

/// Width of one Gantt cell, borders excluded.
const GANTT_CELL: usize = 8;

/// Writes every outcome as a text report, separated by blank lines.
pub fn render_all_text<W: Write>(w: &mut W, outcomes: &[Outcome]) -> Result<()> {
    for (index, outcome) in outcomes.iter().enumerate() {
        if index > 0 {
            writeln!(w)?;
        }
        render_text(w, outcome)?;
    }
    Ok(())
}

/// Writes the text report of one outcome.
pub fn render_text<W: Write>(w: &mut W, outcome: &Outcome) -> Result<()> {
    write_title(w, outcome.title())?;
    match &outcome.metrics {
        Some(metrics) => {
            write_gantt(w, &outcome.schedule.slices)?;
            write_table(w, &outcome.schedule, metrics)?;
        }
        None => writeln!(w, "No processes to schedule.")?,
    }
    Ok(())
}

/// Writes all outcomes as one pretty-printed JSON array.
pub fn render_json<W: Write>(w: &mut W, outcomes: &[Outcome]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, outcomes)?;
    writeln!(w)?;
    Ok(())
}

fn write_title<W: Write>(w: &mut W, title: &str) -> Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {title}", " ".repeat(title.len() / 2))?;
    writeln!(w, "{rule}")?;
    Ok(())
}

fn write_gantt<W: Write>(w: &mut W, slices: &[TimeSlice]) -> Result<()> {
    writeln!(w, "Gantt schedule")?;
    write!(w, "|")?;
    for slice in slices {
        let pid = slice.process_id.to_string();
        let padding = " ".repeat(GANTT_CELL.saturating_sub(pid.len()) / 2);
        write!(w, "{padding}{pid}{padding}|")?;
    }
    writeln!(w)?;

    let mut times: Vec<String> = slices.iter().map(|s| s.start.to_string()).collect();
    if let Some(last) = slices.last() {
        times.push(last.stop.to_string());
    }
    writeln!(w, "{}", times.join("\t"))?;
    writeln!(w)?;
    Ok(())
}

fn write_table<W: Write>(w: &mut W, schedule: &Schedule, metrics: &ScheduleMetrics) -> Result<()> {
    writeln!(w, "Schedule table")?;

    let body: Vec<[String; 7]> = schedule
        .rows
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.priority.to_string(),
                r.burst.to_string(),
                r.arrival.to_string(),
                r.wait.to_string(),
                r.turnaround.to_string(),
                r.completion.to_string(),
            ]
        })
        .collect();
    let footer = footer_lines(metrics);

    let mut widths = HEADERS.map(str::len);
    for cells in body.iter().chain(footer.iter()) {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.len());
        }
    }

    let border = border_line(&widths);
    writeln!(w, "{border}")?;
    write_cells(w, &widths, &HEADERS.map(String::from))?;
    writeln!(w, "{border}")?;
    for cells in &body {
        write_cells(w, &widths, cells)?;
    }
    writeln!(w, "{border}")?;
    for cells in &footer {
        write_cells(w, &widths, cells)?;
    }
    writeln!(w, "{border}")?;
    Ok(())
}

/// Footer cells, one array per printed line.
fn footer_lines(metrics: &ScheduleMetrics) -> [[String; 7]; 2] {
    let blank = || String::new();
    [
        [
            blank(),
            blank(),
            blank(),
            blank(),
            "Average".to_string(),
            "Average".to_string(),
            "Throughput".to_string(),
        ],
        [
            blank(),
            blank(),
            blank(),
            blank(),
            format!("{:.2}", metrics.average_wait),
            format!("{:.2}", metrics.average_turnaround),
            format!("{:.2}/t", metrics.throughput),
        ],
    ]
}

fn border_line(widths: &[usize; 7]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn write_cells<W: Write>(w: &mut W, widths: &[usize; 7], cells: &[String; 7]) -> Result<()> {
    write!(w, "|")?;
    for (&width, cell) in widths.iter().zip(cells) {
        write!(w, " {cell:<width$} |")?;
    }
    writeln!(w)?;
    Ok(())
}
