use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName};

/// Class category together with the colours the site uses to badge it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub color: String,
    pub text_color: String,
    pub bg_color: String,
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: CategoryName,
    pub color: String,
    pub text_color: String,
    pub bg_color: String,
}

impl NewCategory {
    pub fn into_category(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name,
            color: self.color,
            text_color: self.text_color,
            bg_color: self.bg_color,
        }
    }
}

/// Partial update for a [`Category`]; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPatch {
    pub name: Option<CategoryName>,
    pub color: Option<String>,
    pub text_color: Option<String>,
    pub bg_color: Option<String>,
}

impl CategoryPatch {
    pub fn apply_to(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(color) = self.color {
            category.color = color;
        }
        if let Some(text_color) = self.text_color {
            category.text_color = text_color;
        }
        if let Some(bg_color) = self.bg_color {
            category.bg_color = bg_color;
        }
    }
}
