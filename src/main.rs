extern crate minefield;

use minefield::field::{self, Minefield, RevealOutcome};
use minefield::point::Point;
use std::io::{self, BufRead, Write};

const WIDTH: u16 = 10;
const HEIGHT: u16 = 10;
const MINES: u32 = 10;

fn main() -> io::Result<()> {
    let mut field = field::generate_field(WIDTH, HEIGHT, MINES, &mut rand::thread_rng())
        .expect("the default configuration leaves safe cells");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    loop {
        // Redraw from the top of the terminal each turn.
        write!(output, "\x1B[2J\x1B[H")?;
        field.print(&mut output, false)?;

        let position = match read_position(&mut input, &mut output, &field)? {
            Some(position) => position,
            None => return Ok(()),
        };

        match field.reveal(&position) {
            RevealOutcome::HitMine => {
                field.print(&mut output, true)?;
                writeln!(output, "Game over! You hit a mine.")?;
                return Ok(());
            }
            RevealOutcome::Continue => {
                if field.is_cleared() {
                    field.print(&mut output, true)?;
                    writeln!(output, "Congratulations! You've cleared the minefield!")?;
                    return Ok(());
                }
            }
        }
    }
}

/// Prompt for a cell until the player names one that is in bounds and not
/// yet revealed. Returns `None` once stdin is exhausted.
fn read_position(
    input: &mut impl BufRead,
    output: &mut impl Write,
    field: &Minefield,
) -> io::Result<Option<Point>> {
    loop {
        let x = match read_coordinate(input, output, "x", field.get_width())? {
            Some(x) => x,
            None => return Ok(None),
        };
        let y = match read_coordinate(input, output, "y", field.get_height())? {
            Some(y) => y,
            None => return Ok(None),
        };

        let position = Point { x, y };
        if field.is_revealed(&position) {
            writeln!(output, "Cell already revealed. Try again.")?;
            continue;
        }

        return Ok(Some(position));
    }
}

fn read_coordinate(
    input: &mut impl BufRead,
    output: &mut impl Write,
    axis: &str,
    limit: u16,
) -> io::Result<Option<u16>> {
    loop {
        write!(output, "Enter {} coordinate (0-{}): ", axis, limit - 1)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim().parse::<u16>() {
            Ok(value) if value < limit => return Ok(Some(value)),
            Ok(_) => writeln!(output, "Coordinate out of range. Try again.")?,
            Err(_) => writeln!(output, "Invalid input. Please enter numbers only.")?,
        }
    }
}
