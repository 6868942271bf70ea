//! Console transcript for a demonstration.

use std::io::Write;

use anyhow::{Context, Result};

use crate::core::types::Demonstration;

const CALL_SEPARATOR: &str = "----Calling swap fn in main---";

/// Lines printed for a demonstration: the callee's view, then the caller's.
pub fn transcript(demo: &Demonstration) -> Vec<String> {
    vec![
        format!("Value of swap in fn {}", demo.in_callee.a),
        format!("Value of swap in fn {}", demo.in_callee.b),
        CALL_SEPARATOR.to_string(),
        format!("Value of a is {}", demo.after.a),
        format!("Value of b is {}", demo.after.b),
    ]
}

/// Write the transcript, one newline-terminated line each.
pub fn write_transcript<W: Write>(out: &mut W, demo: &Demonstration) -> Result<()> {
    for line in transcript(demo) {
        writeln!(out, "{line}").context("write transcript")?;
    }
    Ok(())
}

/// Header separating demonstrations when several are printed together.
pub fn header(demo: &Demonstration) -> String {
    format!("== {} ==", demo.mechanism)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Mechanism, Pair};
    use crate::demo::run;

    #[test]
    fn value_transcript_matches_sample_output() {
        let demo = run(Mechanism::Value, Pair::default());
        assert_eq!(
            transcript(&demo),
            vec![
                "Value of swap in fn 2",
                "Value of swap in fn 5",
                "----Calling swap fn in main---",
                "Value of a is 5",
                "Value of b is 2",
            ]
        );
    }

    #[test]
    fn reference_transcript_writes_trailing_newlines() {
        let demo = run(Mechanism::Reference, Pair::default());
        let mut buf = Vec::new();
        write_transcript(&mut buf, &demo).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert_eq!(
            text,
            "Value of swap in fn 2\n\
             Value of swap in fn 5\n\
             ----Calling swap fn in main---\n\
             Value of a is 2\n\
             Value of b is 5\n"
        );
    }

    #[test]
    fn header_names_mechanism() {
        let demo = run(Mechanism::Pointer, Pair::default());
        assert_eq!(header(&demo), "== pointer ==");
    }
}
