// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::commit::{load_messages, MessageSource, ReadOptions};
use crate::config::CmcConfig;
use crate::error::{CmcError, ConfigError, Result, ResultExt, ValidationError};
use crate::rules::RuleEngine;

use super::args::{CheckArgs, Cli, Commands, HooksAction, InitArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        CmcConfig::load_from(config_path)?
    } else {
        CmcConfig::load()?
    };

    if cli.no_color || !config.ui.color {
        console::set_colors_enabled(false);
    }

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Hooks(args) => run_hooks(args.action),
        Commands::Version => run_version(),
        Commands::Init(args) => run_init(args),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &CmcConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let source = MessageSource::from_args(args.file.as_deref(), args.rev.as_deref());
    let options = ReadOptions {
        raw: args.raw,
        strip_comments: args.strip_comments || config.input.strip_comments,
    };
    let messages = load_messages(&source, options)?;

    let engine = RuleEngine::new(config);
    let strict = args.strict || config.rules.strict;

    let mut errors = 0;
    let mut warnings = 0;

    for message in &messages {
        let report = engine.validate(&message.text);
        report.print(cli.format, message.commit_sha.as_deref());

        errors += report.error_count();
        warnings += report.warning_count();
    }

    // Determine exit status
    if errors > 0 {
        Err(ValidationError::Rejected { errors, warnings }.into())
    } else if strict && warnings > 0 {
        Err(ValidationError::StrictWarnings { warnings }.into())
    } else {
        Ok(())
    }
}

/// Run the hooks command.
fn run_hooks(action: HooksAction) -> Result<()> {
    use crate::hooks::HookManager;

    tracing::debug!("Running hooks command: {:?}", action);

    let manager = HookManager::new()?;

    match action {
        HooksAction::Install { hook, force } => {
            if let Some(hook_name) = hook {
                manager.install_hook(&hook_name, force)?;
                println!("✓ Installed {} hook", hook_name);
            } else {
                manager.install_all(force)?;
                println!("✓ Installed all hooks");
            }
        }
        HooksAction::Uninstall { hook } => {
            if let Some(hook_name) = hook {
                manager.uninstall_hook(&hook_name)?;
                println!("✓ Uninstalled {} hook", hook_name);
            } else {
                manager.uninstall_all()?;
                println!("✓ Uninstalled all hooks");
            }
        }
        HooksAction::Status => {
            for (hook, installed) in manager.status()? {
                let icon = if installed { "✓" } else { "✗" };
                println!("{} {}", icon, hook);
            }
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cmc {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new("cmc.toml");

    if config_path.exists() && !args.force {
        return Err(CmcError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, example_config()).context("Failed to write configuration")?;

    println!("✓ Created cmc.toml");

    Ok(())
}
