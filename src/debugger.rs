//! # Interactive Debugger Commands
//!
//! The line-mode debugger used to poke at the CPU and run the golden-log
//! verification. The command set:
//!
//! | Command            | Effect                                             |
//! |--------------------|----------------------------------------------------|
//! | `next [count]`     | Execute and print `count` trace lines (default 1)  |
//! | `goto <address>`   | Set PC directly                                    |
//! | `reset` / `rs`     | Re-initialize CPU and memory                       |
//! | `test [tolerance]` | Run the verification harness (default tolerance 1) |
//! | `quit` / `exit`    | End the session                                    |
//!
//! Commands match by prefix, so `n`, `g`, `r`, `t` and `q` all work.
//! Numeric arguments take decimal or `0x`-prefixed hex; a malformed count
//! falls back to the default, while a malformed `goto` address is an error.
//! Unrecognized commands and input errors are printed and the session
//! continues.
//!
//! All output goes through a generic writer so tests can capture it.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::cpu::Cpu;
use crate::verify::verify_log;
use crate::MemoryBus;

/// Reference log consumed by the `test` command.
pub const REFERENCE_LOG_PATH: &str = "tests/fixtures/reference.log";

/// A parsed debugger command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Execute and print this many instructions.
    Next(u32),
    /// Set PC to this address.
    Goto(u16),
    /// Re-initialize CPU and memory.
    Reset,
    /// Run the verification harness with this mismatch tolerance.
    Test(u32),
    /// End the session.
    Quit,
}

/// A line of input that could not be turned into a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The first word matched no command name.
    Unknown,
    /// `goto` without a parseable address.
    MissingAddress,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown => write!(f, "Invalid command"),
            CommandError::MissingAddress => write!(f, "Expected address"),
        }
    }
}

impl std::error::Error for CommandError {}

impl Command {
    /// Parses one line of debugger input.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim();
        let (word, arg) = match line.split_once(' ') {
            Some((word, arg)) => (word, arg.trim()),
            None => (line, ""),
        };

        // Prefix match, first hit wins. An empty word matches `next`,
        // so a bare return single-steps.
        const NAMES: [&str; 7] = ["next", "goto", "reset", "rs", "test", "quit", "exit"];
        let name = NAMES
            .iter()
            .find(|name| name.starts_with(word))
            .ok_or(CommandError::Unknown)?;

        Ok(match *name {
            "next" => Command::Next(parse_count(arg)),
            "goto" => {
                let addr = parse_number(arg)
                    .and_then(|n| u16::try_from(n).ok())
                    .ok_or(CommandError::MissingAddress)?;
                Command::Goto(addr)
            }
            "reset" | "rs" => Command::Reset,
            "test" => Command::Test(parse_count(arg)),
            _ => Command::Quit,
        })
    }
}

/// Parses a decimal or `0x`-prefixed hexadecimal number.
fn parse_number(arg: &str) -> Option<i64> {
    let arg = arg.trim();
    if let Some(hex) = arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()
    } else {
        arg.parse().ok()
    }
}

/// Count argument for `next` and `test`: malformed or out-of-range input
/// falls back to 1.
fn parse_count(arg: &str) -> u32 {
    parse_number(arg)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(1)
}

/// Executes one command against the CPU, writing output to `out`.
///
/// Returns `Ok(false)` when the session should end.
pub fn execute<M: MemoryBus, W: Write>(
    cpu: &mut Cpu<M>,
    command: Command,
    out: &mut W,
) -> io::Result<bool> {
    match command {
        Command::Next(count) => {
            for _ in 0..count {
                writeln!(out, "{}", cpu.trace_line())?;
                if let Err(e) = cpu.step() {
                    writeln!(out, "{e}")?;
                }
            }
        }
        Command::Goto(addr) => {
            cpu.set_pc(addr);
            writeln!(out, "PC = ${addr:04X}")?;
        }
        Command::Reset => {
            cpu.reset();
            cpu.memory_mut().reset();
            writeln!(out, "Reset to initial state")?;
        }
        Command::Test(tolerance) => match verify_log(cpu, REFERENCE_LOG_PATH, tolerance) {
            Ok(report) => {
                for m in &report.mismatches {
                    writeln!(
                        out,
                        "Test Failed (line {}):\nExpected: {}\nObtained: {}",
                        m.line, m.expected, m.obtained
                    )?;
                }
                if report.passed() {
                    writeln!(out, "Test passed ({} lines)", report.lines)?;
                }
            }
            Err(e) => writeln!(out, "Failed to load test: {e}")?,
        },
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Runs the interactive session: prompt, read, parse, execute, repeat.
///
/// Ends on `quit`/`exit` or end of input.
pub fn run<M: MemoryBus, R: BufRead, W: Write>(
    cpu: &mut Cpu<M>,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(command) => {
                if !execute(cpu, command, out)? {
                    break;
                }
            }
            Err(e) => writeln!(out, "{e}")?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}
