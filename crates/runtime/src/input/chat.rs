//! Chat command normalization.
//!
//! The chat connection itself lives outside the runtime; this module turns
//! raw IRC lines into vote symbols. A chat vote is `!` followed by a run of
//! one repeated symbol character (`!a`, `!DD`, `!jjj`), and counts once.

use game_core::VoteSymbol;

/// One chat line addressed to the channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub chatter: String,
    /// Message body, always `!`-prefixed.
    pub text: String,
}

impl ChatMessage {
    pub fn vote(&self) -> Option<VoteSymbol> {
        normalize_command(&self.text)
    }
}

/// Parses `:nick!user@host PRIVMSG #channel :body`.
///
/// Returns `None` for anything that is not a channel message (pings,
/// membership notices, malformed lines).
pub fn parse_privmsg(line: &str) -> Option<ChatMessage> {
    if !line.contains("PRIVMSG") {
        return None;
    }

    let (chatter, rest) = line.strip_prefix(':')?.split_once('!')?;
    let (_, body) = rest.split_once(':')?;
    let body = body.trim_end_matches(['\r', '\n']);
    if chatter.is_empty() {
        return None;
    }

    let text = if body.starts_with('!') {
        body.to_owned()
    } else {
        format!("!{body}")
    };

    Some(ChatMessage {
        chatter: chatter.to_owned(),
        text,
    })
}

/// Maps a `!`-command to a vote symbol, case-insensitively.
pub fn normalize_command(text: &str) -> Option<VoteSymbol> {
    let body = text.trim().strip_prefix('!')?.trim();
    let mut chars = body.chars();
    let first = chars.next()?;
    if !chars.all(|c| c.eq_ignore_ascii_case(&first)) {
        return None;
    }
    VoteSymbol::from_char(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_channel_message() {
        let line = ":viewer42!viewer42@viewer42.tmi.twitch.tv PRIVMSG #arena :!j\r\n";
        let message = parse_privmsg(line).unwrap();
        assert_eq!(message.chatter, "viewer42");
        assert_eq!(message.text, "!j");
        assert_eq!(message.vote(), Some(VoteSymbol::J));
    }

    #[test]
    fn bare_bodies_get_a_bang() {
        let line = ":someone!someone@host PRIVMSG #arena :dd";
        let message = parse_privmsg(line).unwrap();
        assert_eq!(message.text, "!dd");
        assert_eq!(message.vote(), Some(VoteSymbol::D));
    }

    #[test]
    fn non_messages_are_ignored() {
        assert_eq!(parse_privmsg("PING :tmi.twitch.tv"), None);
        assert_eq!(
            parse_privmsg(":tmi.twitch.tv 001 bot :Welcome, GLHF!"),
            None
        );
    }

    #[test]
    fn repeats_collapse_to_one_vote() {
        assert_eq!(normalize_command("!a"), Some(VoteSymbol::A));
        assert_eq!(normalize_command("!aa"), Some(VoteSymbol::A));
        assert_eq!(normalize_command("!AAA"), Some(VoteSymbol::A));
        assert_eq!(normalize_command("!Ss"), Some(VoteSymbol::S));
        assert_eq!(normalize_command("  !w  "), Some(VoteSymbol::W));
    }

    #[test]
    fn anything_else_is_not_a_vote() {
        assert_eq!(normalize_command("a"), None);
        assert_eq!(normalize_command("!"), None);
        assert_eq!(normalize_command("!ad"), None);
        assert_eq!(normalize_command("!x"), None);
        assert_eq!(normalize_command("!attack"), None);
        assert_eq!(normalize_command("!a a"), None);
    }
}
