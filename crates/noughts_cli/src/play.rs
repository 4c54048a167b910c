//! Interactive terminal game loop.

use anyhow::{Context, Result};
use noughts::{GameEngine, GameError, Position};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Plays games on `input`/`output` until the user quits or input ends.
///
/// Returns the number of games that were played to the end.
#[instrument(skip_all)]
pub fn run(mut game: GameEngine, mut input: impl BufRead, mut output: impl Write) -> Result<u32> {
    let mut finished = 0;

    loop {
        writeln!(output, "\n{}\n", game.board())?;

        if game.is_finished() {
            finished += 1;
            if let Some(message) = game.result_message() {
                writeln!(output, "{}", message)?;
            }
            write!(output, "Play again? [y/N] ")?;
            output.flush()?;

            match read_line(&mut input)? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => {
                    game = game.new_game().context("Failed to start a new game")?;
                    continue;
                }
                _ => return Ok(finished),
            }
        }

        let Some(player) = game.active_player() else {
            continue;
        };
        write!(
            output,
            "{} ({}), choose a square [1-9, row,col or q]: ",
            player.name(),
            player.mark()
        )?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            return Ok(finished);
        };
        if line.eq_ignore_ascii_case("q") {
            return Ok(finished);
        }

        let position = match Position::parse(&line) {
            Ok(Some(position)) => position,
            Ok(None) => {
                writeln!(output, "Unrecognized square {:?}", line)?;
                continue;
            }
            Err(err) => {
                writeln!(output, "{}", err)?;
                continue;
            }
        };

        match game.submit_move(position) {
            Ok(state) => debug!(?state, "Move accepted"),
            Err(GameError::InvalidMove(err)) => {
                writeln!(output, "{}", err)?;
            }
            Err(err) => {
                warn!(error = %err, "Game engine failed");
                return Err(err).context("Game engine failure");
            }
        }
    }
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts::GameConfig;
    use std::io::Cursor;

    fn transcript(moves: &str) -> (u32, String) {
        let game = GameEngine::new(GameConfig::default()).unwrap();
        let mut output = Vec::new();
        let played = run(game, Cursor::new(moves.to_string()), &mut output).unwrap();
        (played, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_plays_to_a_win() {
        let (played, output) = transcript("1\n5\n2\n9\n3\nn\n");
        assert_eq!(played, 1);
        assert!(output.contains("Player 1 wins!"), "{}", output);
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let (played, output) = transcript("5\n5\nwhat\n4,4\nq\n");
        assert_eq!(played, 0);
        assert!(output.contains("already occupied"), "{}", output);
        assert!(output.contains("Unrecognized square"), "{}", output);
        assert!(output.contains("off the board"), "{}", output);
    }

    #[test]
    fn test_end_of_input_quits() {
        let (played, _) = transcript("5\n");
        assert_eq!(played, 0);
    }
}
