//! Stdin vote feed.
//!
//! Each line is one of:
//! - a raw IRC line (`:nick!user@host PRIVMSG #chan :!d`), as piped from a
//!   chat relay
//! - a bare chat command (`!jj`)
//! - a frame of key presses, one vote per recognised character (`ad j`)
use std::io::BufRead;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info};

use game_core::VoteSymbol;
use runtime::SessionHandle;
use runtime::input::{VoteKey, frame_votes, normalize_command, parse_privmsg};

/// Votes carried by one input line.
pub fn line_votes(line: &str) -> Vec<VoteSymbol> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.starts_with(':') {
        return parse_privmsg(line)
            .and_then(|message| {
                let vote = message.vote();
                debug!(chatter = %message.chatter, text = %message.text, ?vote, "chat line");
                vote
            })
            .into_iter()
            .collect();
    }
    if line.trim_start().starts_with('!') {
        return normalize_command(line).into_iter().collect();
    }
    frame_votes(line.chars().filter_map(VoteKey::from_char))
}

/// Reads stdin until EOF or until the session stops taking votes.
///
/// Lines are read on a detached thread: a blocking stdin read cannot be
/// cancelled and would otherwise hold up runtime shutdown.
pub async fn run(handle: SessionHandle) -> Result<()> {
    let (line_tx, mut line_rx) = mpsc::channel::<String>(64);
    std::thread::Builder::new()
        .name("stdin-feed".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if line_tx.blocking_send(line).is_err() {
                    break;
                }
            }
        })?;

    while let Some(line) = line_rx.recv().await {
        for symbol in line_votes(&line) {
            if handle.cast_vote(symbol).is_err() {
                debug!("session closed its vote queue");
                return Ok(());
            }
        }
    }

    info!("stdin closed, no more votes");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn irc_lines_vote_once() {
        let line = ":fan!fan@fan.tmi.twitch.tv PRIVMSG #arena :JJJ\r\n";
        assert_eq!(line_votes(line), vec![VoteSymbol::J]);
    }

    #[test]
    fn irc_chatter_that_is_not_a_command_is_ignored() {
        let line = ":fan!fan@host PRIVMSG #arena :hello there";
        assert!(line_votes(line).is_empty());
        assert!(line_votes("PING :tmi.twitch.tv").is_empty());
    }

    #[test]
    fn bare_commands_use_chat_rules() {
        assert_eq!(line_votes("!dd"), vec![VoteSymbol::D]);
        assert!(line_votes("!ad").is_empty());
    }

    #[test]
    fn key_frames_vote_per_key() {
        assert_eq!(
            line_votes("a dx"),
            vec![VoteSymbol::A, VoteSymbol::J, VoteSymbol::D]
        );
    }
}
