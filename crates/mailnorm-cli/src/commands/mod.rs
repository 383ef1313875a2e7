use anyhow::Result;
use mailnorm_core::{Normalizer, SeparatorSplitter};
use serde::Serialize;
use std::io::{self, Write};

pub mod compare;
pub mod completions;
pub mod normalize;

pub struct Context {
    pub json: bool,
    pub strict: bool,
    pub normalizer: Normalizer<SeparatorSplitter>,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
