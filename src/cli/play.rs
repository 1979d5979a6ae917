//! Play command implementation.
//!
//! Runs one game on the real session actor. Each stdin line is an event:
//!
//! ```text
//! start
//! <player> bid <moves>
//! <player> move <robot> <direction>
//! <player> chat <text>
//! <player> leave
//! <player> {"category": "bid", "moves": 5}
//! ```

use super::output::{JsonLine, TextView};
use super::{CliError, OutputFormat};
use ricochet::config::Settings;
use ricochet::session::{ChannelSink, Envelope, GameRegistry, LoggingHooks};
use ricochet::{ClientEvent, Direction, PlayerId, RobotColor};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the settings are invalid or the game cannot start.
pub(crate) fn execute(
    players: Vec<String>,
    config: Option<PathBuf>,
    rounds: Option<u32>,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<(), CliError> {
    if players.is_empty() {
        return Err(CliError::new("At least one player is required"));
    }
    if let Some((i, _)) = players
        .iter()
        .enumerate()
        .find(|&(i, name)| players[..i].contains(name))
    {
        return Err(CliError::new(format!("Duplicate player name: {}", players[i])));
    }

    let mut settings = match config {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    if let Some(rounds) = rounds {
        settings.game.num_rounds = rounds;
    }
    if seed.is_some() {
        settings.seed = seed;
    }
    settings
        .game
        .validate()
        .map_err(|e| CliError::new(e.to_string()))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run(players, settings, format));
    // Stdin is read on a blocking thread that may still be waiting for input.
    runtime.shutdown_background();
    result
}

async fn run(players: Vec<String>, settings: Settings, format: OutputFormat) -> Result<(), CliError> {
    let registry = GameRegistry::new();
    let (sink, rx) = ChannelSink::new();
    let host = PlayerId(1);
    let game = registry
        .create(host, &settings, Arc::new(sink), Arc::new(LoggingHooks))
        .await?;
    for (id, name) in ids(&players) {
        game.join(id, name.clone())?;
    }

    let mut printer = tokio::spawn(print_envelopes(rx, players.clone(), format));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match parse_line(line, &players) {
                    Ok((player, event)) => game.send(player, event)?,
                    Err(e) => eprintln!("{e}"),
                }
            }
            _ = &mut printer => return Ok(()),
        }
    }

    // Out of input: everybody leaves, which ends the game.
    for (id, _) in ids(&players) {
        if game.send(id, ClientEvent::Leave).is_err() {
            break;
        }
    }
    printer
        .await
        .map_err(|e| CliError::new(format!("Output task failed: {e}")))
}

async fn print_envelopes(
    mut rx: mpsc::UnboundedReceiver<Envelope>,
    names: Vec<String>,
    format: OutputFormat,
) {
    let mut view = TextView::default();
    while let Some(envelope) = rx.recv().await {
        match format {
            OutputFormat::Text => println!("{}", view.format(&envelope, &names)),
            OutputFormat::Json => match serde_json::to_string(&JsonLine::from_envelope(&envelope)) {
                Ok(line) => println!("{line}"),
                Err(e) => eprintln!("Failed to encode notification: {e}"),
            },
        }
    }
}

fn ids(players: &[String]) -> impl Iterator<Item = (PlayerId, &String)> {
    (1..).map(PlayerId).zip(players)
}

/// Parse one input line into the sender and their event.
fn parse_line(line: &str, players: &[String]) -> Result<(PlayerId, ClientEvent), CliError> {
    if line == "start" {
        return Ok((PlayerId(1), ClientEvent::Start));
    }

    let (name, rest) = line
        .split_once(char::is_whitespace)
        .ok_or_else(|| CliError::new(format!("Expected '<player> <command>': {line}")))?;
    let player = ids(players)
        .find(|(_, n)| n.as_str() == name)
        .map(|(id, _)| id)
        .ok_or_else(|| CliError::new(format!("Unknown player: {name}")))?;
    let rest = rest.trim();

    if rest.starts_with('{') {
        return Ok((player, ClientEvent::from_json(rest)?));
    }

    let mut words = rest.split_whitespace();
    let event = match words.next() {
        Some("start") => ClientEvent::Start,
        Some("leave") => ClientEvent::Leave,
        Some("bid") => {
            let moves = words
                .next()
                .and_then(|w| w.parse().ok())
                .ok_or_else(|| CliError::new("Usage: <player> bid <moves>"))?;
            ClientEvent::Bid { moves }
        }
        Some("move") => {
            let usage = || CliError::new("Usage: <player> move <robot> <direction>");
            let robot: RobotColor = words.next().ok_or_else(usage)?.parse().map_err(|_| usage())?;
            let direction: Direction =
                words.next().ok_or_else(usage)?.parse().map_err(|_| usage())?;
            ClientEvent::Move { robot, direction }
        }
        Some("chat") => {
            let msg = rest.strip_prefix("chat").unwrap_or_default().trim().to_string();
            ClientEvent::Chat { msg }
        }
        _ => return Err(CliError::new(format!("Unknown command: {rest}"))),
    };
    Ok((player, event))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players() -> Vec<String> {
        vec!["ann".to_string(), "bo".to_string()]
    }

    #[test]
    fn test_parse_commands() {
        let p = players();
        assert_eq!(parse_line("start", &p).unwrap(), (PlayerId(1), ClientEvent::Start));
        assert_eq!(
            parse_line("bo bid 7", &p).unwrap(),
            (PlayerId(2), ClientEvent::Bid { moves: 7 })
        );
        assert_eq!(
            parse_line("ann move blue l", &p).unwrap(),
            (
                PlayerId(1),
                ClientEvent::Move {
                    robot: RobotColor::Blue,
                    direction: Direction::Left
                }
            )
        );
        assert_eq!(
            parse_line("bo chat good luck", &p).unwrap(),
            (
                PlayerId(2),
                ClientEvent::Chat {
                    msg: "good luck".to_string()
                }
            )
        );
        assert_eq!(
            parse_line(r#"bo {"category":"bid","moves":3}"#, &p).unwrap(),
            (PlayerId(2), ClientEvent::Bid { moves: 3 })
        );
    }

    #[test]
    fn test_parse_errors() {
        let p = players();
        assert!(parse_line("cy bid 3", &p).is_err());
        assert!(parse_line("ann bid lots", &p).is_err());
        assert!(parse_line("ann move purple up", &p).is_err());
        assert!(parse_line("ann dance", &p).is_err());
        assert!(parse_line("ann", &p).is_err());
    }
}
