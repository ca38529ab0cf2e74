use std::io::Write;

use hasher::vectors::{KNOWN_ANSWERS, KnownAnswer};

/// Outcome of running a known-answer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfTestReport {
    /// Cases whose digest matched.
    pub passed: usize,
    /// Cases run.
    pub total: usize,
}

impl SelfTestReport {
    /// Whether every case matched.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Hashes every entry of [`KNOWN_ANSWERS`] and writes a per-case report
/// followed by a summary line.
///
/// # Errors
///
/// Fails if a digest cannot be computed or `out` cannot be written.
pub fn run_self_test(out: &mut impl Write) -> anyhow::Result<SelfTestReport> {
    run_table(KNOWN_ANSWERS, out)
}

pub(crate) fn run_table(
    table: &[KnownAnswer],
    out: &mut impl Write,
) -> anyhow::Result<SelfTestReport> {
    let mut passed = 0;
    for case in table {
        let got = hasher::hash_hex(case.input)?;
        writeln!(out, "Input    : {}", case.input)?;
        writeln!(out, "Got      : {got}")?;
        writeln!(out, "Expected : {}", case.md5)?;
        if got == case.md5 {
            writeln!(out, "Test passed!")?;
            passed += 1;
        } else {
            tracing::warn!(input = case.input, got = %got, expected = case.md5, "digest mismatch");
            writeln!(out, "Test failed :-(")?;
        }
    }
    writeln!(out, "Passed {passed} out of {} tests.", table.len())?;
    Ok(SelfTestReport {
        passed,
        total: table.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_is_counted_as_failure() {
        let table = [
            KnownAnswer {
                input: "",
                md5: "d41d8cd98f00b204e9800998ecf8427e",
            },
            KnownAnswer {
                input: "a",
                md5: "00000000000000000000000000000000",
            },
        ];
        let mut out = Vec::new();
        let report = run_table(&table, &mut out).unwrap();
        assert_eq!(report, SelfTestReport { passed: 1, total: 2 });
        assert!(!report.all_passed());

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Test failed :-("));
        assert!(text.ends_with("Passed 1 out of 2 tests.\n"));
    }
}
