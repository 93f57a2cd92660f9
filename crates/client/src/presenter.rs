//! Writes session events to stdout for an overlay or a human to follow.
use std::io::Write;

use anyhow::Result;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::warn;

use runtime::{
    CombatEvent, CombatantStatus, Event, SessionEvent, SessionHandle, StatusSnapshot, Topic,
    TurnEvent, VoteEvent,
};

use crate::config::EventFormat;

pub struct Presenter<W> {
    format: EventFormat,
    out: W,
    turn: broadcast::Receiver<Event>,
    vote: broadcast::Receiver<Event>,
    combat: broadcast::Receiver<Event>,
    session: broadcast::Receiver<Event>,
    /// Whole seconds last shown for the running countdown.
    shown_second: Option<u64>,
}

impl<W: Write> Presenter<W> {
    pub fn new(handle: &SessionHandle, format: EventFormat, out: W) -> Self {
        Self {
            format,
            out,
            turn: handle.subscribe(Topic::Turn),
            vote: handle.subscribe(Topic::Vote),
            combat: handle.subscribe(Topic::Combat),
            session: handle.subscribe(Topic::Session),
            shown_second: None,
        }
    }

    /// Runs until the victory or defeat event has been written.
    pub async fn run(mut self) -> Result<()> {
        loop {
            let received = tokio::select! {
                result = self.session.recv() => result,
                result = self.combat.recv() => result,
                result = self.vote.recv() => result,
                result = self.turn.recv() => result,
            };

            match received {
                Ok(event) => {
                    let finished = matches!(
                        event,
                        Event::Session(SessionEvent::Victory | SessionEvent::Defeat)
                    );
                    self.emit(&event)?;
                    if finished {
                        return Ok(());
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "presenter fell behind, events dropped");
                }
                Err(RecvError::Closed) => {
                    warn!("event stream closed");
                    return Ok(());
                }
            }
        }
    }

    fn emit(&mut self, event: &Event) -> Result<()> {
        match self.format {
            EventFormat::Json => {
                serde_json::to_writer(&mut self.out, event)?;
                writeln!(self.out)?;
            }
            EventFormat::Text => {
                if let Some(line) = self.render(event) {
                    writeln!(self.out, "{line}")?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn render(&mut self, event: &Event) -> Option<String> {
        let line = match event {
            Event::Turn(TurnEvent::PhaseChanged { phase }) => format!("-- {phase} --"),
            Event::Turn(TurnEvent::CountdownStarted { duration }) => {
                self.shown_second = Some(duration.as_secs());
                format!("Vote now! {:.1}s", duration.as_secs_f32())
            }
            Event::Turn(TurnEvent::CountdownTick { remaining }) => {
                // Only announce when the displayed second rolls over.
                let second = remaining.as_secs();
                if self.shown_second == Some(second) {
                    return None;
                }
                self.shown_second = Some(second);
                format!("{}...", second + 1)
            }
            Event::Turn(TurnEvent::CountdownEnded { winner, tally }) => {
                let counts: Vec<String> = tally
                    .iter()
                    .map(|(symbol, count)| format!("{symbol}:{count}"))
                    .collect();
                format!("Votes closed, {winner} wins [{}]", counts.join(" "))
            }
            Event::Turn(TurnEvent::EnemyTurnStarted { entity }) => format!("{entity} moves"),
            Event::Vote(VoteEvent::Accepted { symbol, count }) => format!("{symbol} x{count}"),
            Event::Vote(VoteEvent::Rejected { symbol }) => format!("{symbol} ignored, no vote open"),
            Event::Combat(CombatEvent::ActionResolved { actor, action, .. }) => {
                format!("{actor}: {}", action.kind())
            }
            Event::Combat(CombatEvent::ActionFailed { actor, action, error }) => {
                format!("{actor}: {} failed ({error})", action.kind())
            }
            Event::Combat(CombatEvent::ResultBanner { text, .. }) => format!(">> {text} <<"),
            Event::Session(SessionEvent::StatusChanged(status)) => status_line(status),
            Event::Session(SessionEvent::Victory) => "VICTORY".to_owned(),
            Event::Session(SessionEvent::Defeat) => "DEFEAT".to_owned(),
        };
        Some(line)
    }
}

fn combatant_line(status: &CombatantStatus) -> String {
    format!(
        "{} {} hp {}/{} ({})",
        status.id,
        status.position,
        status.health.current,
        status.health.maximum,
        status.threshold
    )
}

fn status_line(status: &StatusSnapshot) -> String {
    let player = &status.player;
    let mut line = format!(
        "{} atk cd {} swap cd {}",
        combatant_line(player),
        player.attack_cooldown,
        player.swap_cooldown
    );
    for enemy in &status.enemies {
        line.push_str(" | ");
        line.push_str(&combatant_line(enemy));
        if enemy.charging {
            line.push_str(" charging!");
        }
    }
    line
}
