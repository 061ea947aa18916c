//! Terminal output shared by both binaries

use console::style;
use std::io::{self, Stdout, Write};

/// Output sink with the styled print helpers used by every command.
///
/// Quiet mode drops headers, info and success lines. Warnings and plain
/// lines are always written since they carry the actual result.
pub struct Console<W: Write> {
    out: W,
    quiet: bool,
}

impl Console<Stdout> {
    pub fn stdout(quiet: bool) -> Self {
        Self::new(io::stdout(), quiet)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, quiet: bool) -> Self {
        Self { out, quiet }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_header(&mut self, msg: &str) {
        if !self.quiet {
            self.write(format_args!("\n{}", style(msg).bold()));
        }
    }

    pub fn print_success(&mut self, msg: &str) {
        if !self.quiet {
            self.write(format_args!("{}", style(msg).green()));
        }
    }

    pub fn print_info(&mut self, msg: &str) {
        if !self.quiet {
            self.write(format_args!("{}", style(msg).cyan()));
        }
    }

    pub fn print_warning(&mut self, msg: &str) {
        self.write(format_args!("{}", style(msg).yellow()));
    }

    pub fn line(&mut self, msg: &str) {
        self.write(format_args!("{}", msg));
    }

    pub fn blank(&mut self) {
        if !self.quiet {
            self.write(format_args!(""));
        }
    }

    fn write(&mut self, args: std::fmt::Arguments<'_>) {
        // A closed stdout is not worth aborting over
        let _ = writeln!(self.out, "{}", args);
    }
}
