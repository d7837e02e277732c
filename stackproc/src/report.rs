use std::fmt;
use std::io::Write;

/// What gets reported after every command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Report {
    Empty,
    Top(i64),
}

impl Report {
    pub fn of(top: Option<i64>) -> Report {
        match top {
            Some(value) => Report::Top(value),
            None => Report::Empty,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Report::Empty => write!(f, "EMPTY"),
            Report::Top(value) => write!(f, "{}", value),
        }
    }
}

pub trait Sink {
    fn report(&mut self, report: Report) -> ::Result<()>;
}

impl Sink for Vec<Report> {
    fn report(&mut self, report: Report) -> ::Result<()> {
        self.push(report);
        Ok(())
    }
}

/// Writes one line per report.
pub struct LineSink<W: Write> {
    out: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(out: W) -> LineSink<W> {
        LineSink { out }
    }

    pub fn flush(&mut self) -> ::Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for LineSink<W> {
    fn report(&mut self, report: Report) -> ::Result<()> {
        writeln!(self.out, "{}", report)?;
        Ok(())
    }
}
