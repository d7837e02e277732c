use std::fmt;

use stack::Stack;
use command::{Command, ParsePolicy};
use report::{Report, Sink};

pub struct StackProcessor {
    stack: Stack,
    policy: ParsePolicy,
}

impl StackProcessor {
    pub fn new() -> StackProcessor {
        StackProcessor::with_policy(ParsePolicy::default())
    }

    pub fn with_policy(policy: ParsePolicy) -> StackProcessor {
        StackProcessor {
            stack: Stack::new(),
            policy,
        }
    }

    /// Starts from an existing stack instead of an empty one.
    pub fn with_stack(stack: Stack, policy: ParsePolicy) -> StackProcessor {
        StackProcessor { stack, policy }
    }

    /// Applies a single command line and returns the report for it.
    pub fn step(&mut self, line: &str) -> ::Result<Report> {
        let command = Command::decode(line, self.policy)?;
        debug!("{}", command);
        self.execute_command(command)?;

        let report = self.report();
        trace!("-> {}", report);
        Ok(report)
    }

    /// Feeds every command to `sink`, one report per command, in order.
    ///
    /// Stops at the first failing command. Reports for the commands before
    /// it have already been handed to `sink` by then.
    pub fn process<I, S>(&mut self, commands: I, sink: &mut S) -> ::Result<usize>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        S: Sink,
    {
        let mut reported = 0;
        for line in commands {
            let report = self.step(line.as_ref())?;
            sink.report(report)?;
            reported += 1;
        }

        Ok(reported)
    }

    /// Like `process`, collecting the reports. The error, if any, is the one
    /// that halted processing.
    pub fn run<I>(&mut self, commands: I) -> (Vec<Report>, Option<::Error>)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut reports = Vec::new();
        let halted = self.process(commands, &mut reports).err();
        (reports, halted)
    }

    fn execute_command(&mut self, command: Command) -> ::Result<()> {
        match command {
            Command::Push(value) => self.stack.push(value),
            Command::Pop => {
                self.stack.pop_front()?;
            }
            Command::Inc { count, amount } => self.stack.inc(count, amount)?,
            Command::Nop(_) => {}
        }

        Ok(())
    }

    pub fn report(&self) -> Report {
        Report::of(self.stack.top())
    }

    pub fn top(&self) -> Option<i64> {
        self.stack.top()
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn policy(&self) -> ParsePolicy {
        self.policy
    }
}

impl Default for StackProcessor {
    fn default() -> StackProcessor {
        StackProcessor::new()
    }
}

impl fmt::Debug for StackProcessor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("StackProcessor")
            .field("policy", &self.policy)
            .field("stack", &self.stack)
            .finish()
    }
}
