//! `swatchbook tokens`: the saved token library.

use super::{deliver, Context};
use crate::cli::TokensAction;
use crate::error::AppResult;
use std::io::Write;
use swatchbook_core::{ExportError, SavedToken, Storage, TokenExport, TokenLibrary};

pub fn handle<S: Storage>(action: TokensAction, library: &TokenLibrary<S>, ctx: &mut Context<'_>) -> AppResult<()> {
    match action {
        TokensAction::List => list(library, ctx),
        TokensAction::Delete { ids } => {
            let before = library.list().len();
            library.delete_many(&ids);
            let removed = before.saturating_sub(library.list().len());
            if removed == 0 {
                ctx.notifier.warning("No matching tokens");
            } else {
                ctx.notifier.success(&format!("Deleted {} token(s)", removed));
            }
            Ok(())
        }
        TokensAction::Clear => {
            library.clear();
            ctx.notifier.success("Cleared token library");
            Ok(())
        }
        TokensAction::Export { format, ids, output } => {
            let format = TokenExport::from(format);
            let selected = select(library.list(), &ids);
            match format.render(&selected) {
                Ok(contents) => deliver(&contents, format.filename(), format.label(), &output, ctx),
                Err(ExportError::NothingSelected) => {
                    ctx.notifier.warning(&ExportError::NothingSelected.to_string());
                    Ok(())
                }
                Err(e) => Err(e.into()),
            }
        }
    }
}

/// Tokens whose id is listed, in library order. An empty id list selects everything.
fn select(tokens: Vec<SavedToken>, ids: &[String]) -> Vec<SavedToken> {
    if ids.is_empty() {
        return tokens;
    }
    tokens.into_iter().filter(|t| ids.contains(&t.id)).collect()
}

fn list<S: Storage>(library: &TokenLibrary<S>, ctx: &mut Context<'_>) -> AppResult<()> {
    let tokens = library.list();
    if tokens.is_empty() {
        writeln!(ctx.out, "No saved tokens")?;
        return Ok(());
    }
    for token in &tokens {
        let kind = token.value_type.map(|v| v.as_str()).unwrap_or("-");
        let value = token.value.as_deref().filter(|v| !v.is_empty()).unwrap_or("-");
        writeln!(ctx.out, "{}  {}  {}  {}", token.id, token.name, value, kind)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{OutputArgs, TokenFormat};
    use crate::config::AppConfig;
    use crate::notify::{Level, RecordingNotifier};
    use std::sync::Arc;
    use swatchbook_core::{MemoryStorage, NewToken, ValueType};

    fn library() -> TokenLibrary<MemoryStorage> {
        let library = TokenLibrary::new(Arc::new(MemoryStorage::new()));
        library.save(NewToken {
            name: "button-color-background".into(),
            property: "color".into(),
            value: Some("#EA580C".into()),
            value_type: Some(ValueType::Color),
            format: None,
        });
        library.save(NewToken { name: "card-radius".into(), property: "radius".into(), ..NewToken::default() });
        library
    }

    fn run(action: TokensAction, library: &TokenLibrary<MemoryStorage>) -> (RecordingNotifier, String) {
        let config = AppConfig::default();
        let mut notifier = RecordingNotifier::default();
        let mut out = Vec::new();
        {
            let mut ctx = Context { config: &config, notifier: &mut notifier, out: &mut out };
            handle(action, library, &mut ctx).unwrap();
        }
        (notifier, String::from_utf8(out).unwrap())
    }

    fn export(format: TokenFormat, ids: Vec<String>) -> TokensAction {
        TokensAction::Export { format, ids, output: OutputArgs::default() }
    }

    #[test]
    fn test_list() {
        let library = library();
        let (_, out) = run(TokensAction::List, &library);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("button-color-background  #EA580C  color"));
        assert!(lines[1].ends_with("card-radius  -  -"));
    }

    #[test]
    fn test_list_empty() {
        let library = TokenLibrary::new(Arc::new(MemoryStorage::new()));
        let (_, out) = run(TokensAction::List, &library);
        assert_eq!(out, "No saved tokens\n");
    }

    #[test]
    fn test_delete() {
        let library = library();
        let id = library.list()[0].id.clone();
        let (notifier, _) = run(TokensAction::Delete { ids: vec![id] }, &library);
        assert_eq!(library.list().len(), 1);
        assert_eq!(notifier.last().map(|(l, m)| (*l, m.as_str())), Some((Level::Success, "Deleted 1 token(s)")));

        let (notifier, _) = run(TokensAction::Delete { ids: vec!["missing".into()] }, &library);
        assert_eq!(notifier.last().map(|(l, _)| *l), Some(Level::Warning));
    }

    #[test]
    fn test_clear() {
        let library = library();
        run(TokensAction::Clear, &library);
        assert!(library.list().is_empty());
    }

    #[test]
    fn test_export_all() {
        let library = library();
        let (_, out) = run(export(TokenFormat::Figma, Vec::new()), &library);
        assert!(out.contains("\"button/color/background\""));
        assert!(out.contains("\"card/radius\""));
    }

    #[test]
    fn test_export_selection() {
        let library = library();
        let id = library.list()[1].id.clone();
        let (_, out) = run(export(TokenFormat::Generic, vec![id]), &library);
        assert!(out.contains("\"card-radius\""));
        assert!(!out.contains("button-color-background"));
    }

    #[test]
    fn test_export_nothing_selected_warns() {
        let library = TokenLibrary::new(Arc::new(MemoryStorage::new()));
        let (notifier, out) = run(export(TokenFormat::Generic, Vec::new()), &library);
        assert!(out.is_empty());
        assert_eq!(
            notifier.last().map(|(l, m)| (*l, m.as_str())),
            Some((Level::Warning, "No tokens selected for export"))
        );
    }
}
