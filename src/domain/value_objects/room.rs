//! Room categories and the static template catalog
//!
//! Templates are catalog data, not game state: they are defined at process
//! start and copied into an adventure's rooms at generation time.

use serde::{Deserialize, Serialize};

/// Room classification, determining which outcome table applies to a choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomCategory {
    Enemy,
    Treasure,
    Trap,
}

impl RoomCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Enemy => "Enemy",
            Self::Treasure => "Treasure",
            Self::Trap => "Trap",
        }
    }
}

impl std::fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A catalog entry used to instantiate adventure rooms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTemplate {
    pub title: String,
    pub category: RoomCategory,
    pub description: String,
}

impl RoomTemplate {
    pub fn new(
        title: impl Into<String>,
        category: RoomCategory,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category,
            description: description.into(),
        }
    }
}

/// The pool of room templates an adventure is drawn from
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    templates: Vec<RoomTemplate>,
}

impl RoomCatalog {
    /// Maximum number of rooms a single adventure can draw
    pub const MAX_DRAW: usize = 5;

    /// Build a catalog from a template pool.
    ///
    /// The pool must hold at least [`Self::MAX_DRAW`] templates so the
    /// largest adventure can still sample without replacement.
    pub fn new(templates: Vec<RoomTemplate>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            templates.len() >= Self::MAX_DRAW,
            "room catalog needs at least {} templates, got {}",
            Self::MAX_DRAW,
            templates.len()
        );
        Ok(Self { templates })
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RoomTemplate> {
        self.templates.get(index)
    }

    pub fn templates(&self) -> &[RoomTemplate] {
        &self.templates
    }
}

impl Default for RoomCatalog {
    /// The built-in eight-room pool
    fn default() -> Self {
        let templates = vec![
            RoomTemplate::new(
                "Dark Entrance",
                RoomCategory::Enemy,
                "A goblin lunges out of the shadows!",
            ),
            RoomTemplate::new(
                "Treasure Chamber",
                RoomCategory::Treasure,
                "A mysterious chest glints in the half-light.",
            ),
            RoomTemplate::new(
                "Trapped Corridor",
                RoomCategory::Trap,
                "Suspicious floor tiles... Danger!",
            ),
            RoomTemplate::new(
                "Abandoned Crypt",
                RoomCategory::Enemy,
                "A skeleton rises to challenge you!",
            ),
            RoomTemplate::new(
                "Ancient Library",
                RoomCategory::Treasure,
                "Shelves of precious grimoires...",
            ),
            RoomTemplate::new(
                "Rickety Bridge",
                RoomCategory::Trap,
                "The bridge creaks ominously underfoot.",
            ),
            RoomTemplate::new(
                "Boss Chamber",
                RoomCategory::Enemy,
                "A miniature dragon awaits you!",
            ),
            RoomTemplate::new(
                "Enchanted Garden",
                RoomCategory::Treasure,
                "Rare herbs grow here.",
            ),
        ];
        Self { templates }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_covers_the_maximum_draw() {
        let catalog = RoomCatalog::default();
        assert!(catalog.len() >= RoomCatalog::MAX_DRAW);
    }

    #[test]
    fn default_catalog_has_no_blank_fields() {
        for template in RoomCatalog::default().templates() {
            assert!(!template.title.trim().is_empty());
            assert!(!template.description.trim().is_empty());
        }
    }

    #[test]
    fn undersized_pool_is_rejected() {
        let templates = vec![
            RoomTemplate::new("A", RoomCategory::Enemy, "a"),
            RoomTemplate::new("B", RoomCategory::Trap, "b"),
        ];
        assert!(RoomCatalog::new(templates).is_err());
    }
}
