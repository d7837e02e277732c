use std::fmt;
use std::num::IntErrorKind;

error_chain! {
    errors {
        MalformedNumber(text: String) {
            description("malformed numeric argument")
            display("malformed numeric argument: '{}'", text)
        }
        MissingArgument(verb: String) {
            description("missing numeric argument")
            display("missing numeric argument for '{}'", verb)
        }
    }
}

/// How numeric arguments that fail to parse are treated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Malformed literals are taken as zero, and literals that are
    /// well-formed but out of the `i64` range saturate. A command with an
    /// argument missing altogether decodes to a no-op.
    Lenient,
    /// Malformed or missing literals are an error.
    Strict,
}

impl Default for ParsePolicy {
    fn default() -> ParsePolicy {
        ParsePolicy::Lenient
    }
}

impl ParsePolicy {
    /// `None` means the argument is missing and the command should do nothing.
    fn number(self, verb: &str, token: Option<&str>) -> Result<Option<i64>> {
        let text = match (self, token) {
            (_, Some(text)) => text,
            (ParsePolicy::Lenient, None) => return Ok(None),
            (ParsePolicy::Strict, None) => {
                bail!(ErrorKind::MissingArgument(verb.to_string()))
            }
        };

        let value = match text.parse::<i64>() {
            Ok(value) => value,
            Err(e) => match (self, e.kind()) {
                (ParsePolicy::Lenient, &IntErrorKind::PosOverflow) => i64::max_value(),
                (ParsePolicy::Lenient, &IntErrorKind::NegOverflow) => i64::min_value(),
                (ParsePolicy::Lenient, _) => 0,
                (ParsePolicy::Strict, _) => {
                    bail!(ErrorKind::MalformedNumber(text.to_string()))
                }
            },
        };

        Ok(Some(value))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `push v`: append `v`, making it the new top.
    Push(i64),
    /// `pop`: drop the element at index 0.
    Pop,
    /// `inc k n`: add `n` to each of the first `k` elements.
    Inc { count: i64, amount: i64 },
    /// Unrecognized verb, a known verb missing an argument, or an empty
    /// string for a blank line.
    Nop(String),
}

impl Command {
    pub fn decode(line: &str, policy: ParsePolicy) -> Result<Command> {
        let mut tokens = line.split_whitespace();
        let verb = match tokens.next() {
            Some(verb) => verb,
            None => return Ok(Command::Nop(String::new())),
        };

        let command = match verb {
            "push" => match policy.number(verb, tokens.next())? {
                Some(value) => Command::Push(value),
                None => Command::Nop(verb.to_string()),
            },
            "pop" => Command::Pop,
            "inc" => {
                let count = policy.number(verb, tokens.next())?;
                let amount = policy.number(verb, tokens.next())?;
                match (count, amount) {
                    (Some(count), Some(amount)) => Command::Inc { count, amount },
                    _ => Command::Nop(verb.to_string()),
                }
            }
            other => Command::Nop(other.to_string()),
        };

        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Command::Push(value) => write!(f, "push {}", value),
            Command::Pop => write!(f, "pop"),
            Command::Inc { count, amount } => write!(f, "inc {} {}", count, amount),
            Command::Nop(ref verb) => write!(f, "nop '{}'", verb),
        }
    }
}
