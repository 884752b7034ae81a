use std::io::{BufRead, Write};

use crate::prelude::*;

/// A game between a human on a text stream and the engine.
pub struct Game<R: BufRead, W: Write>
{
    input:      R,
    output:     W,
    options:    Options,
    position:   Position,
    human:      Option<Side>,
    difficulty: Option<Difficulty>,
}

impl<R: BufRead, W: Write> Game<R, W>
{
    /// Creates a game from the given options, reading moves from `input` and writing everything to `output`.
    pub fn new(options: Options, input: R, output: W) -> Result<Self>
    {
        let position = options.position()?;
        Ok(Game {
            input,
            output,
            human: options.colour,
            difficulty: options.difficulty,
            options,
            position,
        })
    }

    /// The current position.
    pub fn position(&self) -> &Position
    {
        &self.position
    }

    /// Plays until the game ends or the human quits, and returns how the game ended, if it did.
    pub fn run(&mut self) -> Result<Option<Outcome>>
    {
        let Some(human) = self.choose_side()?
        else
        {
            return self.stop();
        };
        let Some(difficulty) = self.choose_difficulty()?
        else
        {
            return self.stop();
        };

        log::info!("playing {} against {} difficulty ({} plies)", human, difficulty, difficulty.depth());
        if let Some(fen) = &self.options.fen
        {
            log::debug!("starting from {}", fen);
        }

        writeln!(self.output, "Initial Board:")?;
        writeln!(self.output, "{}", self.position)?;

        while !self.position.is_game_over()
        {
            if self.position.to_move() == human
            {
                writeln!(self.output, "Your move (type 0 to quit):")?;
                let Some(line) = self.read_line()?
                else
                {
                    return self.stop();
                };

                if line == "0"
                {
                    return self.stop();
                }

                match self.position.parse_move(&line).and_then(|mv| self.position.play(mv))
                {
                    | Ok(()) =>
                    {}
                    | Err(err) if err.fatal() => return Err(err),
                    | Err(err) =>
                    {
                        log::info!("rejected move:\n{err}");
                        writeln!(self.output, "Invalid move. Try again.")?;
                        continue;
                    }
                }
            }
            else
            {
                writeln!(self.output, "{} is thinking...", env!("CARGO_PKG_NAME"))?;

                let result = select_best_move(&mut self.position, difficulty.depth());
                let Some(mv) = result.best
                else
                {
                    break;
                };

                self.position.play(mv)?;
                writeln!(self.output, "{} plays: {}", env!("CARGO_PKG_NAME"), mv)?;
            }

            log::debug!("material after {} plies: {:+}", self.position.history().len(), evaluate(&self.position));
            writeln!(self.output, "{}", self.position)?;
        }

        match self.position.outcome()
        {
            | Some(outcome) =>
            {
                writeln!(self.output, "{}", outcome)?;
                Ok(Some(outcome))
            }
            | None =>
            {
                writeln!(self.output, "Game stopped. Here's the final board:")?;
                writeln!(self.output, "{}", self.position)?;
                Ok(None)
            }
        }
    }

    /// Asks which side the human plays, unless it was given up front. `None` means the input ran out.
    fn choose_side(&mut self) -> Result<Option<Side>>
    {
        if self.human.is_some()
        {
            return Ok(self.human);
        }

        loop
        {
            write!(self.output, "Do you want to play as White or Black? (white/black): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()?
            else
            {
                return Ok(None);
            };

            match line.to_lowercase().as_str()
            {
                | "white" => return Ok(Some(Side::White)),
                | "black" => return Ok(Some(Side::Black)),
                | _ => continue,
            }
        }
    }

    /// Asks for the difficulty, unless it was given up front. `None` means the input ran out.
    fn choose_difficulty(&mut self) -> Result<Option<Difficulty>>
    {
        if self.difficulty.is_some()
        {
            return Ok(self.difficulty);
        }

        loop
        {
            write!(self.output, "Choose AI difficulty level (1 - Easy, 2 - Medium, 3 - Hard): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()?
            else
            {
                return Ok(None);
            };

            match line.parse::<Difficulty>()
            {
                | Ok(difficulty) => return Ok(Some(difficulty)),
                | Err(err) =>
                {
                    log::debug!("{err}");
                    writeln!(self.output, "Invalid input. Please choose 1, 2, or 3.")?;
                }
            }
        }
    }

    /// Reads a trimmed line, or `None` at the end of the input.
    fn read_line(&mut self) -> Result<Option<String>>
    {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0
        {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Ends the game at the human's request.
    fn stop(&mut self) -> Result<Option<Outcome>>
    {
        writeln!(self.output, "Game ended by user.")?;
        writeln!(self.output, "Game stopped. Here's the final board:")?;
        writeln!(self.output, "{}", self.position)?;
        Ok(None)
    }
}
