//! Command dispatch.

pub mod palette;
pub mod token;
pub mod tokens;

use crate::cli::{Command, OutputArgs, TokenAction};
use crate::clipboard::copy_text;
use crate::config::AppConfig;
use crate::download::{download, write_file};
use crate::error::AppResult;
use crate::notify::Notifier;
use std::io::Write;
use std::sync::Arc;
use swatchbook_core::storage::FileStorage;
use swatchbook_core::{create_default_storage, PlatformStorage, TokenLibrary};

/// Everything a command needs from its surroundings.
pub struct Context<'a> {
    pub config: &'a AppConfig,
    pub notifier: &'a mut dyn Notifier,
    pub out: &'a mut dyn Write,
}

pub fn handle(command: Command, ctx: &mut Context<'_>) -> AppResult<()> {
    match command {
        Command::Palette { action } => palette::handle(action, ctx),
        Command::Token { action: TokenAction::Compose(args) } => {
            let composer = token::compose(&args, ctx.config);
            writeln!(ctx.out, "{}", composer)?;
            if args.save {
                let library = open_library(ctx.config)?;
                token::save(&args, &composer, &library, ctx);
            }
            Ok(())
        }
        Command::Token { action: TokenAction::Presets } => token::print_presets(ctx),
        Command::Tokens { action } => {
            let library = open_library(ctx.config)?;
            tokens::handle(action, &library, ctx)
        }
    }
}

/// Token library over the configured directory, or the platform default.
pub fn open_library(config: &AppConfig) -> AppResult<TokenLibrary<PlatformStorage>> {
    let storage = match &config.storage.dir {
        Some(dir) => Arc::new(FileStorage::new(dir.clone())?),
        None => create_default_storage()?,
    };
    Ok(TokenLibrary::new(storage))
}

/// Send rendered export text to its destination: a file, the output directory, or stdout.
/// Clipboard failures are reported but never fail the command.
pub(crate) fn deliver(
    contents: &str,
    filename: &str,
    label: &str,
    output: &OutputArgs,
    ctx: &mut Context<'_>,
) -> AppResult<()> {
    if let Some(path) = &output.out {
        write_file(path, contents)?;
        ctx.notifier.success(&format!("Exported {} to {}", label, path.display()));
    } else if output.download {
        let path = download(&ctx.config.output_dir(), filename, contents)?;
        ctx.notifier.success(&format!("Downloaded {}", path.display()));
    } else {
        writeln!(ctx.out, "{}", contents)?;
    }

    if output.copy {
        match copy_text(contents) {
            Ok(()) => ctx.notifier.success(&format!("{} copied to clipboard", label)),
            Err(e) => ctx.notifier.error(&e.to_string()),
        }
    }
    Ok(())
}
