//! Symbol catalog
//!
//! The fixed, ordered set of pictures a board can be dealt from.

/// A tile picture. Each pair on a board shares one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Heart,
    WaterDrop,
    Dice,
    Umbrella,
    Cube,
    BeachBall,
    Dragonfly,
    Hummingbird,
    Flower,
    Book,
}

impl Symbol {
    /// Every symbol in dealing order; a board of N pairs uses the first N
    pub const CATALOG: [Symbol; 10] = [
        Symbol::Heart,
        Symbol::WaterDrop,
        Symbol::Dice,
        Symbol::Umbrella,
        Symbol::Cube,
        Symbol::BeachBall,
        Symbol::Dragonfly,
        Symbol::Hummingbird,
        Symbol::Flower,
        Symbol::Book,
    ];

    /// Glyph drawn on a face-up tile
    pub fn glyph(&self) -> &'static str {
        match self {
            Symbol::Heart => "♥",
            Symbol::WaterDrop => "💧",
            Symbol::Dice => "⚄",
            Symbol::Umbrella => "☂",
            Symbol::Cube => "■",
            Symbol::BeachBall => "◍",
            Symbol::Dragonfly => "🦋",
            Symbol::Hummingbird => "🐦",
            Symbol::Flower => "✿",
            Symbol::Book => "📖",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Symbol::Heart => "Heart",
            Symbol::WaterDrop => "Water Drop",
            Symbol::Dice => "Dice",
            Symbol::Umbrella => "Umbrella",
            Symbol::Cube => "Cube",
            Symbol::BeachBall => "Beach Ball",
            Symbol::Dragonfly => "Dragonfly",
            Symbol::Hummingbird => "Hummingbird",
            Symbol::Flower => "Flower",
            Symbol::Book => "Book",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_distinct() {
        let unique: HashSet<_> = Symbol::CATALOG.iter().collect();
        assert_eq!(unique.len(), Symbol::CATALOG.len());
        assert!(Symbol::CATALOG.len() >= 10);
    }

    #[test]
    fn test_catalog_order() {
        assert_eq!(Symbol::CATALOG[0], Symbol::Heart);
        assert_eq!(Symbol::CATALOG[9], Symbol::Book);
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let glyphs: HashSet<_> = Symbol::CATALOG.iter().map(|s| s.glyph()).collect();
        assert_eq!(glyphs.len(), Symbol::CATALOG.len());
    }
}
