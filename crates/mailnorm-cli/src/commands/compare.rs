use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompareArgs {
    pub a: String,
    pub b: String,
}

pub fn compare(ctx: &Context, args: CompareArgs) -> Result<()> {
    let same = ctx.normalizer.same_mailbox(&args.a, &args.b);

    if ctx.json {
        print_json(&serde_json::json!({ "a": args.a, "b": args.b, "same": same }))?;
    } else if same {
        println!("same");
    } else {
        println!("different");
    }
    Ok(())
}
