use std::io::{self, Write};

use turn_roulette_core_rs::{GroupPartition, RunOrder, Status, TurnDisplay};

/// Numbered run order, one name per line
pub fn format_order(order: &RunOrder) -> String {
    order
        .names()
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:>3}. {}\n", i + 1, name))
        .collect()
}

/// Groups as headed blocks
pub fn format_groups(partition: &GroupPartition) -> String {
    let mut out = String::new();
    for (i, group) in partition.groups().iter().enumerate() {
        out.push_str(&format!("Group {} ({})\n", i + 1, group.len()));
        for name in group {
            out.push_str(&format!("  - {}\n", name));
        }
    }
    out
}

/// Single status line for the countdown
pub fn format_display(display: &TurnDisplay) -> String {
    let flag = if display.is_paused() { " ⏸" } else { "" };
    if display.entry.is_some() {
        format!(
            "[{}/{}] {}  {}{}",
            display.index + 1,
            display.total,
            display.headline,
            display.clock,
            flag
        )
    } else {
        display.headline.clone()
    }
}

/// Terminal renderer that redraws only when the visible text changes
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    last_line: String,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(&mut self, display: &TurnDisplay) -> io::Result<()> {
        let line = format_display(display);
        if line == self.last_line {
            return Ok(());
        }
        let mut out = io::stdout().lock();
        // pad to wipe leftovers of a longer previous line
        let width = self.last_line.chars().count().max(line.chars().count());
        write!(out, "\r{:<width$}", line, width = width)?;
        out.flush()?;
        self.last_line = line;
        Ok(())
    }

    pub fn status(&mut self, status: &Status) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out)?;
        writeln!(out, "» {}", status)?;
        self.last_line.clear();
        Ok(())
    }
}
