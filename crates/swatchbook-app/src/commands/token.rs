//! `swatchbook token`: compose token names.

use super::Context;
use crate::cli::ComposeArgs;
use crate::config::AppConfig;
use crate::error::AppResult;
use std::io::Write;
use swatchbook_core::{CategoryPreset, NewToken, Storage, TokenLibrary, TokenNameComposer, TokenPart};

/// Start from the builder defaults, apply the preset, then any explicit parts.
/// Separator and case fall back to the configured defaults.
pub fn compose(args: &ComposeArgs, config: &AppConfig) -> TokenNameComposer {
    let mut composer = TokenNameComposer::with_defaults();
    composer.separator = args.separator.unwrap_or(config.tokens.separator);
    composer.case = args.case.unwrap_or(config.tokens.case);

    if let Some(preset) = args.preset {
        composer.apply_preset(preset);
    }
    let parts = [
        (TokenPart::Component, &args.component),
        (TokenPart::Property, &args.property),
        (TokenPart::Element, &args.element),
        (TokenPart::Variant, &args.variant),
        (TokenPart::State, &args.state),
    ];
    for (part, value) in parts {
        if let Some(value) = value {
            composer.set_part(part, value.trim());
        }
    }
    composer
}

/// Persist the composed name. Storage failures are logged by the library, never fatal.
pub fn save<S: Storage>(
    args: &ComposeArgs,
    composer: &TokenNameComposer,
    library: &TokenLibrary<S>,
    ctx: &mut Context<'_>,
) {
    let saved = library.save(NewToken {
        name: composer.compose(),
        property: composer.parts.property.clone(),
        value: args.value.clone(),
        value_type: args.value_type,
        format: Some(composer.case.as_str().to_string()),
    });
    ctx.notifier.success(&format!("Saved {} ({})", saved.name, saved.id));
}

pub fn print_presets(ctx: &mut Context<'_>) -> AppResult<()> {
    writeln!(ctx.out, "Categories:")?;
    for preset in CategoryPreset::ALL {
        let (property, element) = preset.fields();
        writeln!(ctx.out, "  {:<10}  property={} element={}", preset.label(), property, element)?;
    }
    for part in TokenPart::ALL {
        writeln!(ctx.out, "{:?}: {}", part, part.presets().join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use std::sync::Arc;
    use swatchbook_core::{CaseStyle, MemoryStorage, Separator, ValueType};

    #[test]
    fn test_defaults() {
        let composer = compose(&ComposeArgs::default(), &AppConfig::default());
        assert_eq!(composer.compose(), "button-color-background-primary-default");
    }

    #[test]
    fn test_config_defaults_and_flags() {
        let mut config = AppConfig::default();
        config.tokens.separator = Separator::Dot;
        config.tokens.case = CaseStyle::Snake;

        let composer = compose(&ComposeArgs::default(), &config);
        assert_eq!(composer.compose(), "button.color.background.primary.default");

        let args = ComposeArgs { case: Some(CaseStyle::Camel), ..ComposeArgs::default() };
        assert_eq!(compose(&args, &config).compose(), "buttonColorBackgroundPrimaryDefault");
    }

    #[test]
    fn test_preset_then_parts() {
        let args = ComposeArgs {
            preset: Some(CategoryPreset::Typography),
            component: Some("card".into()),
            state: Some(String::new()),
            ..ComposeArgs::default()
        };
        let composer = compose(&args, &AppConfig::default());
        assert_eq!(composer.compose(), "card-font-text-primary");
    }

    #[test]
    fn test_save_to_library() {
        let config = AppConfig::default();
        let library = TokenLibrary::new(Arc::new(MemoryStorage::new()));
        let args = ComposeArgs {
            save: true,
            value: Some("#EA580C".into()),
            value_type: Some(ValueType::Color),
            ..ComposeArgs::default()
        };
        let composer = compose(&args, &config);

        let mut notifier = RecordingNotifier::default();
        let mut out = Vec::new();
        let mut ctx = Context { config: &config, notifier: &mut notifier, out: &mut out };
        save(&args, &composer, &library, &mut ctx);

        let tokens = library.list();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "button-color-background-primary-default");
        assert_eq!(tokens[0].property, "color");
        assert_eq!(tokens[0].value_type, Some(ValueType::Color));
        assert_eq!(tokens[0].format.as_deref(), Some("kebab"));
        assert_eq!(notifier.messages.len(), 1);
    }
}
