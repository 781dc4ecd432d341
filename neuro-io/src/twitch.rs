//! Twitch chat adapter.
//!
//! A deliberately minimal IRC client: PASS/NICK/JOIN on connect, PONG on
//! PING, and PRIVMSG parsing. Nothing else of the protocol is needed to
//! forward chat into the companion. The connection is retried with a fixed
//! backoff whenever it drops; failures are surfaced to the operator via
//! `tracing` and never crash the perceive loop.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use neuro_core::config::TwitchConfig;

use crate::error::AdapterError;
use crate::event::InputEvent;

/// Seconds to wait before a reconnect attempt.
const RECONNECT_BACKOFF: Duration = Duration::from_secs(5);

/// A parsed chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Sender's nick.
    pub username: String,
    /// Message body.
    pub message: String,
}

/// Parse an IRC PRIVMSG line of the form
/// `:nick!user@host PRIVMSG #channel :message`.
///
/// Returns `None` for anything that is not a well-formed PRIVMSG.
#[must_use]
pub fn parse_privmsg(line: &str) -> Option<ChatMessage> {
    let rest = line.strip_prefix(':')?;
    let (prefix, rest) = rest.split_once(' ')?;
    let username = prefix.split('!').next()?.to_string();
    if username.is_empty() {
        return None;
    }

    let (command, rest) = rest.split_once(' ')?;
    if command != "PRIVMSG" {
        return None;
    }

    let (_channel, message) = rest.split_once(" :")?;
    Some(ChatMessage {
        username,
        message: message.to_string(),
    })
}

/// Twitch chat adapter.
pub struct TwitchAdapter {
    config: TwitchConfig,
}

impl TwitchAdapter {
    /// Build an adapter from configuration.
    #[must_use]
    pub fn new(config: TwitchConfig) -> Self {
        Self { config }
    }

    /// Run the connect-read-forward loop, reconnecting on failure. Returns
    /// when the consumer drops the receiving end of `tx`.
    ///
    /// # Errors
    ///
    /// Only [`AdapterError::ChannelClosed`] terminates the loop; connection
    /// and protocol errors are logged and retried.
    pub async fn run(self, tx: mpsc::Sender<InputEvent>) -> Result<(), AdapterError> {
        loop {
            match self.connect_and_read(&tx).await {
                Err(AdapterError::ChannelClosed) => {
                    info!("Twitch adapter stopping, channel closed");
                    return Err(AdapterError::ChannelClosed);
                }
                Err(err) => {
                    warn!(error = %err, "Twitch connection lost, reconnecting");
                }
                Ok(()) => {
                    warn!("Twitch server closed the connection, reconnecting");
                }
            }
            tokio::time::sleep(RECONNECT_BACKOFF).await;
        }
    }

    async fn connect_and_read(&self, tx: &mpsc::Sender<InputEvent>) -> Result<(), AdapterError> {
        let address = format!("{}:{}", self.config.server, self.config.port);
        let stream = TcpStream::connect(&address).await?;
        let (reader, mut writer) = stream.into_split();

        let login = format!(
            "PASS {}\r\nNICK {}\r\nJOIN #{}\r\n",
            self.config.token, self.config.username, self.config.channel
        );
        writer.write_all(login.as_bytes()).await?;

        info!(
            server = %address,
            channel = %self.config.channel,
            "Twitch adapter connected"
        );

        let mut lines = BufReader::new(reader).lines();
        while let Some(line) = lines.next_line().await? {
            if let Some(payload) = line.strip_prefix("PING ") {
                writer
                    .write_all(format!("PONG {payload}\r\n").as_bytes())
                    .await?;
                continue;
            }

            if let Some(chat) = parse_privmsg(&line) {
                debug!(user = %chat.username, "Chat message received");
                let event = InputEvent::twitch(&chat.username, &chat.message);
                if tx.send(event).await.is_err() {
                    return Err(AdapterError::ChannelClosed);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_privmsg() {
        let line = ":somestreamer!somestreamer@somestreamer.tmi.twitch.tv PRIVMSG #channel :hello bot";
        let chat = parse_privmsg(line).expect("should parse");
        assert_eq!(chat.username, "somestreamer");
        assert_eq!(chat.message, "hello bot");
    }

    #[test]
    fn message_may_contain_colons_and_spaces() {
        let line = ":viewer!v@v.tmi.twitch.tv PRIVMSG #chan :note: this has : colons";
        let chat = parse_privmsg(line).expect("should parse");
        assert_eq!(chat.message, "note: this has : colons");
    }

    #[test]
    fn ignores_non_privmsg_lines() {
        assert!(parse_privmsg("PING :tmi.twitch.tv").is_none());
        assert!(parse_privmsg(":tmi.twitch.tv 376 bot :End of /MOTD").is_none());
        assert!(parse_privmsg(":viewer!v@v JOIN #chan").is_none());
        assert!(parse_privmsg("").is_none());
    }

    #[test]
    fn privmsg_feeds_the_event_format() {
        let line = ":viewer!v@v.tmi.twitch.tv PRIVMSG #chan :hi there";
        let chat = parse_privmsg(line).expect("should parse");
        let event = InputEvent::twitch(&chat.username, &chat.message);
        assert_eq!(event.text, "[Twitch viewer]: hi there");
    }
}
