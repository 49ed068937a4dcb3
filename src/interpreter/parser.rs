use log::warn;

use crate::matrix::Axis;
use super::{
    error::ParseError,
    lexer::{self, Token},
};

/// One fully parsed script command with typed arguments.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Line { x0: f32, y0: f32, z0: f32, x1: f32, y1: f32, z1: f32 },
    Circle { cx: f32, cy: f32, cz: f32, r: f32 },
    Hermite { x0: f32, y0: f32, x1: f32, y1: f32, rx0: f32, ry0: f32, rx1: f32, ry1: f32 },
    Bezier { x0: f32, y0: f32, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32 },
    Box { x: f32, y: f32, z: f32, w: f32, h: f32, d: f32 },
    Sphere { cx: f32, cy: f32, cz: f32, r: f32 },
    Torus { cx: f32, cy: f32, cz: f32, r1: f32, r2: f32 },
    Scale { sx: f32, sy: f32, sz: f32 },
    Move { dx: f32, dy: f32, dz: f32 },
    Rotate { axis: Axis, degrees: f32 },
    Push,
    Pop,
    Clear,
    Display,
    Save { file_path: String },
    Quit,
}

/// Parses a whole script: a command name per line, the command's arguments
/// on the following line. Unrecognized command lines are logged and skipped
/// without consuming an argument line; `quit`/`exit` ends the script.
pub fn parse_script<I>(lines: I) -> Result<Vec<Command>, ParseError>
where
    I: Iterator<Item = String>,
{
    let mut commands = Vec::new();
    let mut lines = lines.enumerate().map(|(index, line)| (index + 1, line));

    while let Some((line_number, line)) = lines.next() {
        let name = line.trim();
        if name.is_empty() || name.starts_with("//") {
            continue;
        }

        match name {
            "line" => {
                let [x0, y0, z0, x1, y1, z1] = numbers(&mut lines, line_number, name)?;
                commands.push(Command::Line { x0, y0, z0, x1, y1, z1 });
            }
            "circle" => {
                let [cx, cy, cz, r] = numbers(&mut lines, line_number, name)?;
                commands.push(Command::Circle { cx, cy, cz, r });
            }
            "hermite" => {
                let [x0, y0, x1, y1, rx0, ry0, rx1, ry1] = numbers(&mut lines, line_number, name)?;
                commands.push(Command::Hermite { x0, y0, x1, y1, rx0, ry0, rx1, ry1 });
            }
            "bezier" => {
                let [x0, y0, x1, y1, x2, y2, x3, y3] = numbers(&mut lines, line_number, name)?;
                commands.push(Command::Bezier { x0, y0, x1, y1, x2, y2, x3, y3 });
            }
            "box" => {
                let [x, y, z, w, h, d] = numbers(&mut lines, line_number, name)?;
                commands.push(Command::Box { x, y, z, w, h, d });
            }
            "sphere" => {
                let [cx, cy, cz, r] = numbers(&mut lines, line_number, name)?;
                commands.push(Command::Sphere { cx, cy, cz, r });
            }
            "torus" => {
                let [cx, cy, cz, r1, r2] = numbers(&mut lines, line_number, name)?;
                commands.push(Command::Torus { cx, cy, cz, r1, r2 });
            }
            "scale" => {
                let [sx, sy, sz] = numbers(&mut lines, line_number, name)?;
                commands.push(Command::Scale { sx, sy, sz });
            }
            "move" => {
                let [dx, dy, dz] = numbers(&mut lines, line_number, name)?;
                commands.push(Command::Move { dx, dy, dz });
            }
            "rotate" => {
                commands.push(parse_rotate(&mut lines, line_number)?);
            }
            "push" => commands.push(Command::Push),
            "pop" => commands.push(Command::Pop),
            "clear" => commands.push(Command::Clear),
            "display" => commands.push(Command::Display),
            "save" => {
                let (_, argument) = argument_line(&mut lines, line_number, name)?;
                commands.push(Command::Save { file_path: argument.trim().to_string() });
            }
            "quit" | "exit" => {
                commands.push(Command::Quit);
                break;
            }
            unrecognized => {
                warn!("line {}: unrecognized command \"{}\"", line_number, unrecognized);
            }
        }
    }

    Ok(commands)
}

fn parse_rotate<I>(lines: &mut I, line_number: usize) -> Result<Command, ParseError>
where
    I: Iterator<Item = (usize, String)>,
{
    let (argument_number, argument) = argument_line(lines, line_number, "rotate")?;
    let tokens = lexer::tokenize_line(argument_number, &argument)?;

    let [axis_token, degrees_token] = match <[Token; 2]>::try_from(tokens) {
        Ok(tokens) => tokens,
        Err(tokens) => {
            return Err(ParseError::WrongArity {
                line: argument_number,
                command: "rotate".to_string(),
                expected: 2,
                found: tokens.len(),
            });
        }
    };

    let axis = match &axis_token {
        Token::Word(word) => match word.to_lowercase().as_str() {
            "x" => Axis::X,
            "y" => Axis::Y,
            "z" => Axis::Z,
            _ => return Err(ParseError::BadAxis { line: argument_number, token: word.clone() }),
        },
        Token::Number(n) => {
            return Err(ParseError::BadAxis { line: argument_number, token: n.to_string() });
        }
    };

    let degrees = match degrees_token {
        Token::Number(n) => n,
        Token::Word(word) => {
            return Err(ParseError::ExpectedNumber { line: argument_number, found: word });
        }
    };

    Ok(Command::Rotate { axis, degrees })
}

fn argument_line<I>(lines: &mut I, line_number: usize, command: &str) -> Result<(usize, String), ParseError>
where
    I: Iterator<Item = (usize, String)>,
{
    lines.next().ok_or_else(|| ParseError::MissingArguments {
        line: line_number,
        command: command.to_string(),
    })
}

fn numbers<I, const N: usize>(lines: &mut I, line_number: usize, command: &str) -> Result<[f32; N], ParseError>
where
    I: Iterator<Item = (usize, String)>,
{
    let (argument_number, argument) = argument_line(lines, line_number, command)?;
    let tokens = lexer::tokenize_line(argument_number, &argument)?;

    if tokens.len() != N {
        return Err(ParseError::WrongArity {
            line: argument_number,
            command: command.to_string(),
            expected: N,
            found: tokens.len(),
        });
    }

    let mut values = [0.0; N];
    for (value, token) in values.iter_mut().zip(tokens) {
        match token {
            Token::Number(n) => *value = n,
            Token::Word(word) => {
                return Err(ParseError::ExpectedNumber { line: argument_number, found: word });
            }
        }
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(script: &str) -> Result<Vec<Command>, ParseError> {
        parse_script(script.lines().map(str::to_string))
    }

    #[test]
    fn parses_a_geometry_command_with_its_argument_line() {
        let commands = parse("line\n0 0 0 1 2 3").unwrap();
        assert_eq!(commands, vec![Command::Line { x0: 0.0, y0: 0.0, z0: 0.0, x1: 1.0, y1: 2.0, z1: 3.0 }]);
    }

    #[test]
    fn unrecognized_command_is_skipped_and_parsing_continues() {
        let commands = parse("foobar\npush\nscale\n2 2 2").unwrap();
        assert_eq!(commands, vec![
            Command::Push,
            Command::Scale { sx: 2.0, sy: 2.0, sz: 2.0 },
        ]);
    }

    #[test]
    fn rotate_takes_an_axis_letter_and_degrees() {
        let commands = parse("rotate\nx 30\nrotate\nZ -45.5").unwrap();
        assert_eq!(commands, vec![
            Command::Rotate { axis: Axis::X, degrees: 30.0 },
            Command::Rotate { axis: Axis::Z, degrees: -45.5 },
        ]);
    }

    #[test]
    fn bad_axis_is_a_fatal_error() {
        let error = parse("rotate\nq 30").unwrap_err();
        assert_eq!(error, ParseError::BadAxis { line: 2, token: "q".into() });
    }

    #[test]
    fn wrong_arity_names_the_argument_line() {
        let error = parse("box\n1 2 3").unwrap_err();
        assert_eq!(error, ParseError::WrongArity {
            line: 2,
            command: "box".into(),
            expected: 6,
            found: 3,
        });
    }

    #[test]
    fn word_where_number_expected_is_fatal() {
        let error = parse("circle\n0 0 zero 10").unwrap_err();
        assert_eq!(error, ParseError::ExpectedNumber { line: 2, found: "zero".into() });
    }

    #[test]
    fn missing_argument_line_at_end_of_input() {
        let error = parse("sphere").unwrap_err();
        assert_eq!(error, ParseError::MissingArguments { line: 1, command: "sphere".into() });
    }

    #[test]
    fn quit_stops_parsing_immediately() {
        let commands = parse("push\nquit\nbox\nnot even valid").unwrap();
        assert_eq!(commands, vec![Command::Push, Command::Quit]);
    }

    #[test]
    fn save_keeps_the_raw_file_name() {
        let commands = parse("save\nout/picture.png").unwrap();
        assert_eq!(commands, vec![Command::Save { file_path: "out/picture.png".into() }]);
    }

    #[test]
    fn blank_and_comment_lines_are_ignored() {
        let commands = parse("\n// a comment\npush\n\npop").unwrap();
        assert_eq!(commands, vec![Command::Push, Command::Pop]);
    }
}
