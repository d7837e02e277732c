extern crate clap;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate env_logger;
extern crate stackproc;

mod input;

use std::io::{self, Write};
use stackproc::{LineSink, ParsePolicy, StackProcessor};

error_chain! {
    foreign_links {
        Stackproc(stackproc::Error);
        Io(io::Error);
    }
}

/// The sample the interpreter was first exercised with. The leading line is
/// a command count, which the interpreter does not understand.
const DEMO_COMMANDS: [&str; 10] = [
    "12",
    "push 3",
    "pop",
    "push 1",
    "inc 1 5",
    "push 4",
    "push 8",
    "push 7",
    "pop",
    "inc 3 7",
];

struct CommandArgs {
    command_file_name: Option<String>,
    parse_policy: ParsePolicy,
    demo: bool,
}

impl CommandArgs {
    fn parse() -> CommandArgs {
        use clap::{Arg, App};

        let matches = App::new("stack command interpreter")
            .arg(
                Arg::with_name("COMMAND_FILE")
                    .help("file with one command per line, `-` or nothing for stdin"),
            )
            .arg(
                Arg::with_name("strict")
                    .short("s")
                    .long("strict")
                    .help("Fail on malformed numeric arguments instead of taking them as 0"),
            )
            .arg(
                Arg::with_name("demo")
                    .long("demo")
                    .help("Run the built-in sample commands")
                    .conflicts_with("COMMAND_FILE"),
            )
            .get_matches();

        let parse_policy = policy_for(matches.is_present("strict"));

        CommandArgs {
            command_file_name: matches
                .value_of("COMMAND_FILE")
                .filter(|name| *name != "-")
                .map(|name| name.to_string()),
            parse_policy,
            demo: matches.is_present("demo"),
        }
    }
}

fn policy_for(strict: bool) -> ParsePolicy {
    if strict {
        ParsePolicy::Strict
    } else {
        ParsePolicy::Lenient
    }
}

fn exit_code<T>(result: &Result<T>) -> i32 {
    match *result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn main() {
    env_logger::init();

    let result = do_run();
    if let Err(ref e) = result {
        eprintln!("Error: {}", e);
    }
    std::process::exit(exit_code(&result));
}

fn do_run() -> Result<()> {
    let args = CommandArgs::parse();

    let commands: Vec<String> = if args.demo {
        DEMO_COMMANDS.iter().map(|line| line.to_string()).collect()
    } else {
        match args.command_file_name {
            Some(ref path) => input::read_commands_from_file(path)?,
            None => {
                let stdin = io::stdin();
                let lines = input::read_commands(stdin.lock())?;
                lines
            }
        }
    };
    info!("{} commands, {:?} parsing", commands.len(), args.parse_policy);

    let stdout = io::stdout();
    interpret(&commands, args.parse_policy, stdout.lock())?;

    Ok(())
}

/// Writes a report line per command to `out`. Whatever was reported before a
/// failing command is flushed before the error is returned.
fn interpret<W: Write>(commands: &[String], policy: ParsePolicy, out: W) -> Result<usize> {
    let mut sink = LineSink::new(out);
    let mut processor = StackProcessor::with_policy(policy);

    let result = processor.process(commands, &mut sink);
    sink.flush()?;
    let reported = result?;

    debug!("{} reports, final {:?}", reported, processor);

    Ok(reported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_output() {
        let mut sink = LineSink::new(Vec::new());
        StackProcessor::new()
            .process(DEMO_COMMANDS.iter(), &mut sink)
            .unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!("EMPTY\n3\nEMPTY\n1\n6\n4\n8\n7\n7\n14\n", output);
    }

    fn lines(commands: &[&str]) -> Vec<String> {
        commands.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn strict_flag_selects_policy() {
        assert_eq!(ParsePolicy::Strict, policy_for(true));
        assert_eq!(ParsePolicy::Lenient, policy_for(false));
    }

    #[test]
    fn lenient_run_succeeds() {
        let mut out = Vec::new();
        let result = interpret(&lines(&["push 2", "push x"]), policy_for(false), &mut out);

        assert_eq!(0, exit_code(&result));
        assert_eq!(2, result.unwrap());
        assert_eq!("2\n0\n", String::from_utf8(out).unwrap());
    }

    #[test]
    fn strict_run_flushes_reports_then_fails() {
        let mut out = Vec::new();
        let result = interpret(
            &lines(&["push 1", "push 2", "push x", "push 3"]),
            policy_for(true),
            &mut out,
        );

        assert_eq!(1, exit_code(&result));
        match result {
            Err(Error(ErrorKind::Stackproc(ref inner), _)) => match *inner.kind() {
                stackproc::ErrorKind::Command(stackproc::command::ErrorKind::MalformedNumber(
                    ref text,
                )) => assert_eq!("x", *text),
                ref other => panic!("unexpected {:?}", other),
            },
            other => panic!("expected malformed number, got {:?}", other),
        }
        assert_eq!("1\n2\n", String::from_utf8(out).unwrap());
    }

    #[test]
    fn underflow_exits_with_failure() {
        let mut out = Vec::new();
        let result = interpret(&lines(&["push 1", "pop", "pop"]), policy_for(false), &mut out);

        assert_eq!(1, exit_code(&result));
        assert_eq!("1\nEMPTY\n", String::from_utf8(out).unwrap());
    }
}
