use anyhow::{Context as _, Result};
use mailnorm_core::SplitPolicy;
use std::io::{self, BufRead, IsTerminal};

use crate::error::invalid_input;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SplitPolicyArg {
    First,
    Last,
}

impl From<SplitPolicyArg> for SplitPolicy {
    fn from(arg: SplitPolicyArg) -> Self {
        match arg {
            SplitPolicyArg::First => SplitPolicy::First,
            SplitPolicyArg::Last => SplitPolicy::Last,
        }
    }
}

/// Values from the command line, or one per non-blank stdin line.
pub fn collect_inputs(values: Vec<String>) -> Result<Vec<String>> {
    if !values.is_empty() {
        return Ok(values);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(invalid_input("no values given and stdin is a terminal"));
    }
    read_lines(stdin.lock())
}

fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line.with_context(|| "read stdin")?;
        let trimmed = line.trim_end_matches('\r');
        if trimmed.trim().is_empty() {
            continue;
        }
        out.push(trimmed.to_string());
    }
    Ok(out)
}
