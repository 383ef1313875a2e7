use crate::commands::{print_json, Context};
use crate::error::rejected;
use crate::util::collect_inputs;
use anyhow::Result;
use clap::Args;
use mailnorm_core::Normalized;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Values to normalize; read one per line from stdin when omitted
    pub values: Vec<String>,
    /// Exit with an error if any value cannot be normalized
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy)]
pub enum Target {
    User,
    Domain,
    Address,
    Display,
}

#[derive(Debug, Serialize)]
struct NormalizedDto {
    input: String,
    value: String,
    error: Option<String>,
}

pub fn run(ctx: &Context, target: Target, args: NormalizeArgs) -> Result<()> {
    let inputs = collect_inputs(args.values)?;
    let items: Vec<NormalizedDto> = inputs
        .into_iter()
        .map(|input| {
            let (value, error) = apply(ctx, target, &input).into_parts();
            NormalizedDto {
                input,
                value,
                error: error.map(|err| err.to_string()),
            }
        })
        .collect();

    if ctx.json {
        print_json(&items)?;
    } else {
        for item in &items {
            if let Some(error) = &item.error {
                warn!(input = %item.input, error = %error, "kept original value");
            }
            println!("{}", item.value);
        }
    }

    let failures = items.iter().filter(|item| item.error.is_some()).count();
    if failures > 0 && (args.strict || ctx.strict) {
        return Err(rejected(failures));
    }
    Ok(())
}

fn apply(ctx: &Context, target: Target, input: &str) -> Normalized {
    match target {
        Target::User => ctx.normalizer.user(input),
        Target::Domain => ctx.normalizer.domain(input),
        Target::Address => ctx.normalizer.address(input),
        Target::Display => ctx.normalizer.domain_to_unicode(input),
    }
}
