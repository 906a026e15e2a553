//! # Golden-Log Verification Harness
//!
//! Runs the CPU from power-on state against a reference execution log and
//! reports every line where the live trace diverges from the golden one.
//!
//! For each reference line the harness renders the trace for the *next*
//! instruction, compares it against the reference up to the trace width,
//! records a mismatch when they differ, then executes the instruction
//! regardless so one divergence does not cascade into a wall of noise. The
//! run stops once the mismatch tolerance is spent or the log is exhausted,
//! and always leaves the CPU and memory back in power-on state.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::cpu::Cpu;
use crate::trace::{trace_line, TRACE_LINE_WIDTH};
use crate::MemoryBus;

/// One divergence between the live trace and the reference log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// 1-based line number in the reference log.
    pub line: usize,
    /// The reference line, trimmed to the trace width.
    pub expected: String,
    /// The live trace line produced at the same point.
    pub obtained: String,
}

/// Outcome of one verification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    /// Number of reference lines consumed.
    pub lines: usize,
    /// Divergences recorded, at most the configured tolerance.
    pub mismatches: Vec<Mismatch>,
}

impl VerifyReport {
    /// True when the run produced no mismatches.
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Verifies the CPU against the reference log at `path`.
///
/// A missing or unreadable file is reported without touching engine state;
/// the file is opened before the CPU is reset.
pub fn verify_log<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    path: impl AsRef<Path>,
    tolerance: u32,
) -> io::Result<VerifyReport> {
    let file = File::open(path)?;
    verify_lines(cpu, BufReader::new(file).lines(), tolerance)
}

/// Verifies the CPU against reference lines from any source.
///
/// Resets the CPU and memory to power-on state, runs the comparison loop
/// until `tolerance` mismatches have been recorded or the lines run out,
/// then resets again. An I/O error from the line source ends the run the
/// same way exhaustion does.
pub fn verify_lines<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    lines: impl Iterator<Item = io::Result<String>>,
    tolerance: u32,
) -> io::Result<VerifyReport> {
    cpu.reset();
    cpu.memory.reset();

    let mut remaining = tolerance;
    let mut report = VerifyReport {
        lines: 0,
        mismatches: Vec::new(),
    };

    for line in lines {
        if remaining == 0 {
            break;
        }
        let reference = line?;
        let expected = truncate(&reference);
        report.lines += 1;

        let live = trace_line(cpu);
        let obtained = truncate(&live);
        if obtained != expected {
            report.mismatches.push(Mismatch {
                line: report.lines,
                expected: expected.to_owned(),
                obtained: obtained.to_owned(),
            });
            remaining -= 1;
        }

        // Execute regardless of match; an undocumented opcode in the log
        // still advances PC and the clock.
        let _ = cpu.step();
    }

    cpu.reset();
    cpu.memory.reset();
    Ok(report)
}

// Truncation counts characters, not bytes: reference files are expected to
// be ASCII, but a stray multibyte character must not panic the harness.
fn truncate(line: &str) -> &str {
    match line.char_indices().nth(TRACE_LINE_WIDTH) {
        Some((index, _)) => &line[..index],
        None => line,
    }
}
