use crate::presentation::view_models::{IconKey, IconResources};

/// Terminal stand-in for a badge image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub symbol: &'static str,
    /// Color of the original asset; None for template glyphs
    pub tint: Option<(u8, u8, u8)>,
}

const ASSET_GRAY: (u8, u8, u8) = (149, 165, 166);
const ASSET_YELLOW: (u8, u8, u8) = (241, 196, 15);

/// Badge glyphs for console output
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphIcons;

impl IconResources for GlyphIcons {
    type Image = Glyph;

    fn image(&self, key: IconKey) -> Option<Glyph> {
        let (symbol, tint) = match key {
            IconKey::Fork => ("⑂", ASSET_GRAY),
            IconKey::Repository => ("▣", ASSET_GRAY),
            IconKey::Branch => ("⎇", ASSET_GRAY),
            IconKey::Tag => ("◈", ASSET_GRAY),
            IconKey::Comment => ("✎", ASSET_GRAY),
            IconKey::Issue => ("◉", ASSET_GRAY),
            IconKey::Collaborator => ("☺", ASSET_GRAY),
            IconKey::PullRequest => ("⇄", ASSET_GRAY),
            IconKey::Push => ("↑", ASSET_GRAY),
            IconKey::Star => ("★", ASSET_YELLOW),
        };
        Some(Glyph {
            symbol,
            tint: Some(tint),
        })
    }

    fn template(&self, image: Glyph) -> Glyph {
        Glyph { tint: None, ..image }
    }
}
