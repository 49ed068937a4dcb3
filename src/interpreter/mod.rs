pub mod coordinate_stack;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod run_script;

use std::{
    error::Error,
    fs::File,
    io::{self, BufRead},
    path::Path,
};

pub use parser::Command;
pub use run_script::{ScriptContext, evaluate_commands};

/// Parses and evaluates one script file.
pub fn run_script(path: &str) -> Result<(), Box<dyn Error>> {
    let lines = read_lines(path).map_err(|_| format!("Script '{}' not found", path))?;

    let commands = parser::parse_script(lines.map_while(Result::ok))?;

    let mut context = ScriptContext::new();
    evaluate_commands(commands, &mut context)
}

fn read_lines<P>(file_path: P) -> io::Result<io::Lines<io::BufReader<File>>>
where P: AsRef<Path> {
    let file = File::open(file_path)?;
    Ok(io::BufReader::new(file).lines())
}
