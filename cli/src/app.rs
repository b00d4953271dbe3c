use anyhow::Context;
use turn_roulette_core_rs::{
    build_run_order, Facilitator, GroupParams, Seed, SessionConfig, Status, TurnParams,
};

use crate::args::{Cli, Command, SourceArgs};
use crate::driver::run_session;
use crate::render::{format_groups, format_order};
use crate::source::{load_roster, RosterSource};

/// Config file (or defaults) as the base layer for CLI flags
pub fn load_config(cli: &Cli) -> anyhow::Result<SessionConfig> {
    match &cli.config {
        Some(path) => SessionConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SessionConfig::default()),
    }
}

/// Build a facilitator and load its roster from `--roster`, if given
pub async fn prepare(config: SessionConfig, source: &SourceArgs) -> Facilitator {
    let mut facilitator = Facilitator::new(config);
    let source = source.roster.as_deref().map(RosterSource::parse);
    let status = load_roster(&mut facilitator, source.as_ref()).await;
    if status == Status::UsingDefaults {
        eprintln!("⚠️  Roster unavailable; using configured names");
    }
    facilitator
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Command::Roster(source) => {
            let facilitator = prepare(config, &source).await;
            let roster = facilitator.roster();
            println!("Organizers ({}):", roster.organizers().len());
            for name in roster.organizers() {
                println!("  - {}", name);
            }
            println!("Attendees ({}):", roster.attendees().len());
            for name in roster.attendees() {
                println!("  - {}", name);
            }
        }
        Command::Order(args) => {
            let seed_text = args.seed.clone().unwrap_or_else(|| config.seed.clone());
            let include = args.include_organizers || config.include_organizers;
            let facilitator = prepare(config, &args.source).await;

            let seed = Seed::from_input(&seed_text);
            let order = build_run_order(facilitator.roster(), &seed, include);
            if order.is_empty() {
                eprintln!("{}", Status::NoEntries);
            } else if args.json {
                println!("{}", serde_json::to_string_pretty(order.names())?);
            } else {
                print!("{}", format_order(&order));
            }
        }
        Command::Groups(args) => {
            let count = args
                .count
                .clone()
                .unwrap_or_else(|| config.group_count.to_string());
            let seed_text = args.seed.clone().unwrap_or_else(|| config.seed.clone());
            let mut facilitator = prepare(config, &args.source).await;

            let status = facilitator.make_groups(&GroupParams::from_inputs(&count, &seed_text));
            match facilitator.groups() {
                Some(partition) if args.json => {
                    println!("{}", serde_json::to_string_pretty(partition.groups())?)
                }
                Some(partition) => print!("{}", format_groups(partition)),
                None => eprintln!("{}", status),
            }
        }
        Command::Run(args) => {
            let seconds = args
                .seconds
                .clone()
                .unwrap_or_else(|| config.seconds_per_entry.to_string());
            let seed_text = args.seed.clone().unwrap_or_else(|| config.seed.clone());
            let include = args.include_organizers || config.include_organizers;
            let mut facilitator = prepare(config, &args.source).await;

            let params = TurnParams::from_inputs(&seconds, &seed_text, include);
            tracing::info!(
                seconds = params.seconds_per_entry,
                reproducible = !params.seed.is_empty(),
                "starting live session"
            );
            run_session(&mut facilitator, &params, args.fps).await?;

            if let Some(path) = &args.events {
                let events = facilitator.timer().events();
                tokio::fs::write(path, events.to_json()?)
                    .await
                    .with_context(|| format!("writing event log to {}", path.display()))?;
                tracing::info!(path = %path.display(), events = events.len(), "event log written");
            }
        }
    }

    Ok(())
}
