//! Output rendering - turns captured bytes into the text report

use std::fmt::Write;

/// Decode captured bytes, replacing invalid UTF-8 with U+FFFD
pub fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Assemble the report for a completed command
///
/// Empty streams get no section. Text is included verbatim.
pub fn format_output(exit_code: Option<i32>, stdout: &str, stderr: &str) -> String {
    let mut out = String::with_capacity(stdout.len() + stderr.len() + 32);

    match exit_code {
        Some(code) => {
            let _ = writeln!(out, "return code: {}", code);
        }
        None => out.push_str("return code: unknown\n"),
    }
    if !stdout.is_empty() {
        let _ = writeln!(out, "STDOUT:\n{}", stdout);
    }
    if !stderr.is_empty() {
        let _ = writeln!(out, "STDERR:\n{}", stderr);
    }

    out
}
