// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

mod stack;
mod processor;

pub mod command;
pub mod report;

pub use self::command::{Command, ParsePolicy};
pub use self::processor::StackProcessor;
pub use self::report::{LineSink, Report, Sink};
pub use self::stack::Stack;

error_chain! {
    links {
        Command(command::Error, command::ErrorKind);
    }

    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        StackUnderflow {
            description("pop from an empty stack")
            display("pop from an empty stack")
        }
        IndexOutOfRange(count: usize, len: usize) {
            description("inc past the end of the stack")
            display("inc of {} elements on a stack of length {}", count, len)
        }
    }
}
