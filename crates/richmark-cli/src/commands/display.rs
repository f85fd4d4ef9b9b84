//! `block-display`.

use richmark::block_display;

use crate::cli::BlockDisplayArgs;
use crate::commands::utils;
use crate::error::Result;

pub async fn execute(args: BlockDisplayArgs) -> Result<()> {
    let display = block_display(&args.tag);
    let out = if args.json {
        serde_json::to_string(&display)?
    } else {
        format!("{}\t{}", display.label, display.variant)
    };
    utils::write_output(None, &out).await
}
