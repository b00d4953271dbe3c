use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Seeded name roulette and group maker for live sessions
#[derive(Parser, Debug, Clone)]
#[command(name = "turn-roulette", version, about)]
pub struct Cli {
    /// TOML session config (seconds_per_entry, seed, include_organizers,
    /// group_count, attendees, organizers)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the normalized roster
    Roster(SourceArgs),
    /// Print a run order
    Order(OrderArgs),
    /// Split attendees into groups
    Groups(GroupArgs),
    /// Run a live countdown through the run order
    Run(RunArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Roster file path or http(s) URL
    #[arg(long)]
    pub roster: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct OrderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Seed; omit for a fresh order every time
    #[arg(long)]
    pub seed: Option<String>,

    /// Put organizers (shuffled) before attendees
    #[arg(long)]
    pub include_organizers: bool,

    /// Print JSON instead of a numbered list
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct GroupArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Number of groups (default 4)
    #[arg(long)]
    pub count: Option<String>,

    #[arg(long)]
    pub seed: Option<String>,

    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Seconds per name (default 60, minimum 5)
    #[arg(long)]
    pub seconds: Option<String>,

    #[arg(long)]
    pub seed: Option<String>,

    #[arg(long)]
    pub include_organizers: bool,

    /// Frame rate of the countdown display
    #[arg(long, default_value_t = 30)]
    pub fps: u32,

    /// Write the timer event log as JSON when the session ends
    #[arg(long)]
    pub events: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_args() {
        let cli = Cli::parse_from([
            "turn-roulette",
            "run",
            "--roster",
            "team.yml",
            "--seconds",
            "90",
            "--include-organizers",
        ]);
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.source.roster.as_deref(), Some("team.yml"));
                assert_eq!(args.seconds.as_deref(), Some("90"));
                assert!(args.include_organizers);
                assert_eq!(args.fps, 30);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_events_path() {
        let cli = Cli::parse_from(["turn-roulette", "run", "--events", "out/events.json"]);
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.events, Some(PathBuf::from("out/events.json")));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["turn-roulette", "groups", "--count", "3", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Groups(_)));
    }
}
