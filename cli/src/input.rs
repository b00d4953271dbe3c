/// A line typed by the presenter, mapped to a timer command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Start, or pause/resume (space bar in the slide overlay)
    Toggle,
    Skip,
    Quit,
    Unknown,
}

impl InputCommand {
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "" | "space" | "p" | "pause" => InputCommand::Toggle,
            "s" | "skip" | "n" | "next" => InputCommand::Skip,
            "q" | "quit" | "exit" => InputCommand::Quit,
            _ => InputCommand::Unknown,
        }
    }
}
