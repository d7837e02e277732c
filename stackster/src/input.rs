use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::Result;

/// One command per line; line endings are stripped, everything else is kept
/// for the interpreter to decide on.
pub fn read_commands<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut commands = Vec::new();
    for line in reader.lines() {
        commands.push(line?);
    }
    Ok(commands)
}

pub fn read_commands_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let command_file = File::open(path)?;
    read_commands(BufReader::new(command_file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn one_command_per_line() {
        let input = Cursor::new("push 3\r\npop\n\ninc 1 5");
        let commands = read_commands(input).unwrap();
        assert_eq!(vec!["push 3", "pop", "", "inc 1 5"], commands);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_commands_from_file("no/such/commands.txt").is_err());
    }
}
