//! Swatchbook Core Library
//!
//! Platform-agnostic color palette generation, token naming and token library logic.

pub mod color;
pub mod custom_shade;
pub mod export;
pub mod library;
pub mod palette;
pub mod picker;
pub mod scale;
pub mod storage;
pub mod token_export;
pub mod token_name;

pub use color::{is_valid_hex, mix, normalize_hex_input, Color, ColorError, Hsl};
pub use custom_shade::{CustomShadeSlot, ShadeError};
pub use export::{parse_generic_json, ExportError, ExportResult, PaletteExport};
pub use library::{NewToken, SavedToken, TokenLibrary, ValueType, TOKENS_KEY};
pub use self::palette::Palette;
pub use picker::{ColorPicker, DragState, PickerLayout, PointerEvent, RgbChannel};
pub use scale::{generate_scale, merge_shades, ColorScale, ScaleCategory, Shade, ShadeLabel};
pub use storage::{create_default_storage, MemoryStorage, PlatformStorage, Storage, StorageError, StorageResult};
pub use token_export::TokenExport;
pub use token_name::{CaseStyle, CategoryPreset, Separator, TokenNameComposer, TokenPart, TokenParts};
