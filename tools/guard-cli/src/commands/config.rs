//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use console::Term;
use dialoguer::Confirm;
use guard_core::{generate_default_config, GuardConfig};

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "built-in defaults"),
    }

    ctx.output.kv("success_color", &ctx.config.success_color);

    ctx.output.info("[classes]");
    ctx.output.kv("form", &ctx.config.classes.form);
    ctx.output.kv("email_input", &ctx.config.classes.email_input);
    ctx.output.kv("message", &ctx.config.classes.message);

    ctx.output.info("[messages]");
    ctx.output.kv("empty", &ctx.config.messages.empty);
    ctx.output.kv("invalid", &ctx.config.messages.invalid);
    ctx.output.kv("success", &ctx.config.messages.success);

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("guard.toml");

    if config_path.exists() && !force {
        let overwrite = Term::stdout().is_term()
            && Confirm::new()
                .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
                .default(false)
                .interact()?;

        if !overwrite {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let report = ctx.config.validate();

    if report.errors.is_empty() && report.warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &report.errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &report.warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !report.is_valid() {
        bail!("Configuration has {} error(s)", report.errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn get_config_value(config: &GuardConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    let value = match parts.as_slice() {
        ["success_color"] => &config.success_color,
        ["classes", "form"] => &config.classes.form,
        ["classes", "email_input"] => &config.classes.email_input,
        ["classes", "message"] => &config.classes.message,
        ["messages", "empty"] => &config.messages.empty,
        ["messages", "invalid"] => &config.messages.invalid,
        ["messages", "success"] => &config.messages.success,
        _ => bail!("Unknown config key: {}", key),
    };

    Ok(value.clone())
}
