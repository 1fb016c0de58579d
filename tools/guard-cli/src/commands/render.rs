//! Render the guarded form markup.

use std::fs;

use anyhow::{Context as _, Result};
use guard_core::markup::{render_cta_form, FormCopy};

use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    ctx.config.ensure_valid()?;

    let html = render_cta_form(&ctx.config, &copy_from_args(&args));

    match args.output {
        Some(ref path) => {
            let path = ctx.resolve_path(path);
            fs::write(&path, &html)
                .with_context(|| format!("Failed to write markup: {}", path.display()))?;
            ctx.output.success(&format!("Wrote: {}", path.display()));
        }
        None if ctx.output.is_json() => ctx.output.json(&serde_json::json!({ "html": html })),
        None => println!("{}", html),
    }

    Ok(())
}

fn copy_from_args(args: &RenderArgs) -> FormCopy {
    let mut copy = FormCopy::default();
    if let Some(ref placeholder) = args.placeholder {
        copy.placeholder = placeholder.clone();
    }
    if let Some(ref button) = args.button {
        copy.button = button.clone();
    }
    copy
}
