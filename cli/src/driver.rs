use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;
use turn_roulette_core_rs::{
    Facilitator, FrameRequest, MonotonicClock, Status, TimerState, TurnParams,
};

use crate::input::InputCommand;
use crate::render::TerminalRenderer;

fn frame_period(fps: u32) -> Duration {
    Duration::from_millis(1_000 / u64::from(fps.clamp(1, 120)))
}

/// Drive a live session: the interval is the frame scheduler, stdin lines
/// are the presenter's key presses
///
/// Frames are only polled while the timer asks for them, so pausing or
/// tearing down cancels any further ticks.
pub async fn run_session(
    facilitator: &mut Facilitator,
    params: &TurnParams,
    fps: u32,
) -> anyhow::Result<()> {
    let clock = MonotonicClock::new();
    let mut renderer = TerminalRenderer::new();

    println!("Enter = start/pause/resume · s = skip · q = quit");
    let status = facilitator.start(params, clock.now_ms());
    renderer.status(&status)?;
    if status == Status::NoEntries {
        return Ok(());
    }

    let mut ticker = tokio::time::interval(frame_period(fps));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = ticker.tick(), if facilitator.timer().wants_frame() => {
                let frame = facilitator.frame(clock.now_ms());
                if let Some(status) = &frame.status {
                    renderer.status(status)?;
                }
                renderer.draw(&frame.display)?;
                if frame.frame == FrameRequest::Stop
                    && facilitator.timer().state() == TimerState::Finished
                {
                    break;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("stdin closed");
                    break;
                };
                let now = clock.now_ms();
                let status = match InputCommand::parse(&line) {
                    InputCommand::Toggle => facilitator.toggle(params, now),
                    InputCommand::Skip => facilitator.skip(now),
                    InputCommand::Quit => break,
                    InputCommand::Unknown => {
                        tracing::warn!(input = line.as_str(), "unrecognized command");
                        continue;
                    }
                };
                renderer.status(&status)?;
                renderer.draw(&facilitator.display(now))?;
                if status == Status::AllDone {
                    break;
                }
            }
        }
    }

    facilitator.teardown();
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_period_clamped() {
        assert_eq!(frame_period(0), Duration::from_millis(1_000));
        assert_eq!(frame_period(30), Duration::from_millis(33));
        assert_eq!(frame_period(1_000), Duration::from_millis(8));
    }
}
