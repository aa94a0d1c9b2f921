//! Card categories inferred from CSV file names

use std::fmt;

/// The kind of card a CSV file describes.
///
/// Upstream exports name their files after the category they contain
/// (e.g. `creatures.csv`, `spells_core.csv`), so the file name is the only
/// place the category is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Component,
    Creature,
    Spell,
    /// File name matched none of the known keywords
    Unknown,
}

impl Category {
    /// Keywords checked against the file name, in precedence order
    const KEYWORDS: &'static [(&'static str, Category)] = &[
        ("component", Category::Component),
        ("creature", Category::Creature),
        ("spell", Category::Spell),
    ];

    /// Classify a file name. The first keyword contained in the name wins.
    pub fn from_file_name(file_name: &str) -> Self {
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| file_name.contains(keyword))
            .map(|(_, category)| *category)
            .unwrap_or(Category::Unknown)
    }

    /// Lowercase keyword for this category, `None` for `Unknown`
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Category::Component => Some("component"),
            Category::Creature => Some("creature"),
            Category::Spell => Some("spell"),
            Category::Unknown => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword().unwrap_or("unknown"))
    }
}

/// Everything the card mapping needs to know about a file's name.
///
/// The table row follows the single winning [`Category`], but the spell
/// and creature rules apply whenever their keyword appears, so a file like
/// `spell_components.csv` is placed as a component yet still carries a
/// mana cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardKind {
    pub category: Category,
    /// Name contains `spell`: mana cost comes from `level`
    pub spell: bool,
    /// Name contains `creature`: power/toughness and stat-line text
    pub creature: bool,
}

impl CardKind {
    /// Classify a file name
    pub fn from_file_name(file_name: &str) -> Self {
        Self {
            category: Category::from_file_name(file_name),
            spell: file_name.contains("spell"),
            creature: file_name.contains("creature"),
        }
    }
}

impl From<Category> for CardKind {
    fn from(category: Category) -> Self {
        Self {
            category,
            spell: category == Category::Spell,
            creature: category == Category::Creature,
        }
    }
}
