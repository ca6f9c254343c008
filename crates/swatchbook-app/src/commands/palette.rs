//! `swatchbook palette`: show and export the semantic color scales.

use super::{deliver, Context};
use crate::cli::{PaletteAction, PaletteArgs};
use crate::error::{AppError, AppResult};
use std::fs;
use std::io::Write;
use swatchbook_core::{parse_generic_json, Color, Palette, PaletteExport, ScaleCategory, ShadeLabel};

pub fn handle(action: PaletteAction, ctx: &mut Context<'_>) -> AppResult<()> {
    match action {
        PaletteAction::Show { palette } => {
            let palette = build_palette(&palette, ctx)?;
            show(&palette, ctx)
        }
        PaletteAction::Export { palette, format, output } => {
            let palette = build_palette(&palette, ctx)?;
            let format = PaletteExport::from(format);
            let contents = format.render(&palette)?;
            deliver(&contents, format.filename(), format.label(), &output, ctx)
        }
    }
}

/// Layer base colors: defaults, then config, then an imported export, then flags.
/// Custom shades from `--custom` are inserted last, in order.
pub fn build_palette(args: &PaletteArgs, ctx: &mut Context<'_>) -> AppResult<Palette> {
    let mut palette = Palette::with_base_colors(&ctx.config.palette.base_colors());

    if let Some(path) = &args.import {
        let json = fs::read_to_string(path).map_err(|source| AppError::Read { path: path.clone(), source })?;
        import_generic(&mut palette, &json, ctx)?;
    }

    for category in ScaleCategory::ALL {
        let Some(raw) = base_flag(args, category) else {
            continue;
        };
        if let Err(e) = palette.set_base_color(category, raw) {
            ctx.notifier.warning(&format!("Ignoring --{}: {}", category.key(), e));
        }
    }

    for entry in &args.customs {
        insert_custom(&mut palette, entry, ctx)?;
    }
    Ok(palette)
}

fn base_flag(args: &PaletteArgs, category: ScaleCategory) -> Option<&str> {
    match category {
        ScaleCategory::Brand => args.brand.as_deref(),
        ScaleCategory::Neutral => args.neutral.as_deref(),
        ScaleCategory::Success => args.success.as_deref(),
        ScaleCategory::Warning => args.warning.as_deref(),
        ScaleCategory::Error => args.error.as_deref(),
        ScaleCategory::Info => args.info.as_deref(),
    }
}

/// Restore a generic JSON export. The ladder depends only on hue and saturation, so the
/// `500` shade is enough to regenerate it; `custom-N` entries come back as custom shades.
fn import_generic(palette: &mut Palette, json: &str, ctx: &mut Context<'_>) -> AppResult<()> {
    let imported = parse_generic_json(json)?;
    for category in ScaleCategory::ALL {
        let Some(shades) = imported.get(&category) else {
            continue;
        };
        if let Some(&base) = shades.get("500") {
            palette.set_base(category, base);
        }
        let mut customs: Vec<(u32, Color)> = shades
            .iter()
            .filter_map(|(key, &color)| {
                let label = key.strip_prefix("custom-")?.parse().ok()?;
                Some((label, color))
            })
            .collect();
        customs.sort_by_key(|(label, _)| *label);
        for (label, color) in customs {
            if let Err(e) = palette.add_custom_shade(category, ShadeLabel(label), color) {
                ctx.notifier.warning(&format!("Skipping imported {} shade {}: {}", category, label, e));
            }
        }
    }
    log::debug!("Imported {} scale(s)", imported.len());
    Ok(())
}

/// Parse `category:after[:label[:hex]]` and insert through the validated slot path.
fn insert_custom(palette: &mut Palette, entry: &str, ctx: &mut Context<'_>) -> AppResult<()> {
    let mut fields = entry.split(':');
    let invalid = || AppError::InvalidArgument(format!("Invalid --custom '{}': expected category:after[:label[:hex]]", entry));

    let category: ScaleCategory = fields
        .next()
        .ok_or_else(invalid)?
        .parse()
        .map_err(AppError::InvalidArgument)?;
    let after: u32 = fields
        .next()
        .and_then(|s| s.trim().parse().ok())
        .ok_or_else(invalid)?;

    let slot = palette.open_custom_slot(category, ShadeLabel(after))?;
    let label = fields.next().map(str::to_string).unwrap_or_else(|| slot.suggested_label_text());
    let color = fields.next().map(str::to_string).unwrap_or_else(|| slot.suggested_color_text());
    if fields.next().is_some() {
        return Err(invalid());
    }

    let shade = palette.confirm_custom_shade(&slot, &label, &color)?;
    ctx.notifier.success(&format!("Added {} shade {} ({})", category.display_label(), shade.label, shade.color.to_hex_upper()));
    Ok(())
}

fn show(palette: &Palette, ctx: &mut Context<'_>) -> AppResult<()> {
    for (i, category) in ScaleCategory::DISPLAY_ORDER.into_iter().enumerate() {
        if i > 0 {
            writeln!(ctx.out)?;
        }
        writeln!(
            ctx.out,
            "{} (base {})",
            category.display_label(),
            palette.base_color(category).to_hex_upper()
        )?;
        for shade in palette.shades(category) {
            let marker = if shade.is_custom { "  custom" } else { "" };
            writeln!(ctx.out, "  {:>4}  {}{}", shade.label.value(), shade.color.to_hex_upper(), marker)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::notify::{Level, RecordingNotifier};

    fn run<T>(config: &AppConfig, f: impl FnOnce(&mut Context<'_>) -> T) -> (T, RecordingNotifier, String) {
        let mut notifier = RecordingNotifier::default();
        let mut out = Vec::new();
        let result = {
            let mut ctx = Context { config, notifier: &mut notifier, out: &mut out };
            f(&mut ctx)
        };
        (result, notifier, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = AppConfig::default();
        config.palette.brand = Some("#2563eb".into());
        config.palette.info = Some("#0891b2".into());
        let args = PaletteArgs { brand: Some("#16a34a".into()), ..PaletteArgs::default() };

        let (palette, _, _) = run(&config, |ctx| build_palette(&args, ctx).unwrap());
        assert_eq!(palette.base_color(ScaleCategory::Brand), Color::new(0x16, 0xa3, 0x4a));
        assert_eq!(palette.base_color(ScaleCategory::Info), Color::new(0x08, 0x91, 0xb2));
    }

    #[test]
    fn test_invalid_flag_keeps_base() {
        let args = PaletteArgs { warning: Some("#zzz".into()), ..PaletteArgs::default() };
        let (palette, notifier, _) = run(&AppConfig::default(), |ctx| build_palette(&args, ctx).unwrap());
        assert_eq!(
            palette.base_color(ScaleCategory::Warning),
            ScaleCategory::Warning.default_base_color()
        );
        assert_eq!(notifier.last().map(|(level, _)| *level), Some(Level::Warning));
    }

    #[test]
    fn test_custom_with_suggestions() {
        let args = PaletteArgs { customs: vec!["brand:500".into()], ..PaletteArgs::default() };
        let (palette, _, _) = run(&AppConfig::default(), |ctx| build_palette(&args, ctx).unwrap());
        let custom = palette.custom_shades(ScaleCategory::Brand);
        assert_eq!(custom.len(), 1);
        assert_eq!(custom[0].label, ShadeLabel(550));
    }

    #[test]
    fn test_custom_with_label_and_color() {
        let args = PaletteArgs { customs: vec!["danger:100:150:123456".into()], ..PaletteArgs::default() };
        let (palette, _, _) = run(&AppConfig::default(), |ctx| build_palette(&args, ctx).unwrap());
        let custom = palette.custom_shades(ScaleCategory::Error);
        assert_eq!(custom[0].label, ShadeLabel(150));
        assert_eq!(custom[0].color, Color::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_custom_rejected() {
        let args = PaletteArgs { customs: vec!["brand:500:700".into()], ..PaletteArgs::default() };
        let (result, _, _) = run(&AppConfig::default(), |ctx| build_palette(&args, ctx));
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Shade number must be between 500 and 600");
    }

    #[test]
    fn test_custom_malformed() {
        for entry in ["brand", "purple:500", "brand:abc", "brand:500:550:#fff:extra"] {
            let args = PaletteArgs { customs: vec![entry.into()], ..PaletteArgs::default() };
            let (result, _, _) = run(&AppConfig::default(), |ctx| build_palette(&args, ctx));
            assert!(matches!(result, Err(AppError::InvalidArgument(_))), "{entry}");
        }
    }

    #[test]
    fn test_import_generic_export() {
        let mut original = Palette::new();
        original.set_base_color(ScaleCategory::Brand, "#7c3aed").unwrap();
        original
            .add_custom_shade(ScaleCategory::Brand, ShadeLabel(550), Color::new(0x12, 0x34, 0x56))
            .unwrap();
        let json = PaletteExport::Json.render(&original).unwrap();

        let (palette, _, _) = run(&AppConfig::default(), |ctx| {
            let mut palette = Palette::new();
            import_generic(&mut palette, &json, ctx).unwrap();
            palette
        });
        assert_eq!(palette.custom_shades(ScaleCategory::Brand), original.custom_shades(ScaleCategory::Brand));
        assert_eq!(palette.shades(ScaleCategory::Brand).len(), 10);
    }

    #[test]
    fn test_show_lists_display_order() {
        let (result, _, out) = run(&AppConfig::default(), |ctx| show(&Palette::new(), ctx));
        result.unwrap();
        let brand = out.find("Brand (base").unwrap();
        let info = out.find("Info (base").unwrap();
        let danger = out.find("Danger (base").unwrap();
        assert!(brand < info && info < danger);
        assert_eq!(out.lines().filter(|l| l.starts_with("   100  #")).count(), 6);
    }
}
