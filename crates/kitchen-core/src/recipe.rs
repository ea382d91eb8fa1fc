//! Recipe domain model and its persisted wire shape.
//!
//! Saved collections are serialized in the shape the recipe providers use
//! (`idMeal`, `strMeal`, `strIngredient1..N`, ...), so externally sourced
//! recipes round-trip with every provider field intact. The domain type
//! keeps the ingredient fields as an ordered list; everything else the
//! provider sent rides along in `extra`.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Thumbnail used for locally authored recipes that have no image.
pub const PLACEHOLDER_THUMBNAIL: &str =
    "https://via.placeholder.com/300/fcf1ef/333333?text=Custom+Recipe";

/// Default title for locally authored recipes saved without one.
pub const DEFAULT_CUSTOM_TITLE: &str = "Custom Recipe";

/// Category/area marker for locally authored recipes.
pub const CUSTOM_ORIGIN: &str = "Custom";

const INGREDIENT_PREFIX: &str = "strIngredient";

/// A recipe, either provider-sourced or locally authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RecipeRecord", from = "RecipeRecord")]
pub struct Recipe {
    /// Provider id, or `custom_<millis>` for locally authored recipes.
    pub id: String,
    pub title: String,
    /// Thumbnail URI.
    pub thumbnail: String,
    /// Free-text instructions, may be large.
    pub instructions: String,
    /// Ordered ingredient list. Serialized as `strIngredient1..N`.
    pub ingredients: Vec<String>,
    pub category: String,
    pub area: String,
    /// True for locally authored (including generated) recipes.
    pub is_custom: bool,
    /// ISO-8601 timestamp stamped when the recipe enters a saved collection.
    pub saved_at: Option<String>,
    /// Provider fields we do not model (measures, tags, video links, ...).
    pub extra: Map<String, Value>,
}

impl Recipe {
    /// Creates an empty custom recipe with the given title.
    pub fn custom(title: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            thumbnail: String::new(),
            instructions: String::new(),
            ingredients: Vec::new(),
            category: String::new(),
            area: String::new(),
            is_custom: true,
            saved_at: None,
            extra: Map::new(),
        }
    }

    /// Applies the defaults every locally authored recipe gets before it is
    /// persisted: a synthetic id, placeholder thumbnail and `Custom`
    /// category/area where fields were left empty. Provider-style extra
    /// fields are dropped; a custom recipe only carries what we model.
    pub fn normalized_custom(self) -> Self {
        let id = if self.id.is_empty() {
            synthetic_recipe_id()
        } else {
            self.id
        };
        let title = if self.title.is_empty() {
            DEFAULT_CUSTOM_TITLE.to_string()
        } else {
            self.title
        };
        let thumbnail = if self.thumbnail.is_empty() {
            PLACEHOLDER_THUMBNAIL.to_string()
        } else {
            self.thumbnail
        };
        let category = if self.category.is_empty() {
            CUSTOM_ORIGIN.to_string()
        } else {
            self.category
        };
        let area = if self.area.is_empty() {
            CUSTOM_ORIGIN.to_string()
        } else {
            self.area
        };
        Self {
            id,
            title,
            thumbnail,
            instructions: self.instructions,
            ingredients: self.ingredients,
            category,
            area,
            is_custom: true,
            saved_at: self.saved_at,
            extra: Map::new(),
        }
    }

    /// Returns a copy stamped with the current save timestamp.
    pub fn stamped(mut self) -> Self {
        self.saved_at = Some(saved_at_now());
        self
    }
}

/// Generates a synthetic identifier for a locally authored recipe.
pub fn synthetic_recipe_id() -> String {
    format!("custom_{}", Utc::now().timestamp_millis())
}

/// Current time in the ISO-8601 format used for `savedAt`.
pub fn saved_at_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Wire shape of a persisted or provider-returned recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRecord {
    #[serde(rename = "idMeal", default)]
    pub id_meal: String,
    #[serde(rename = "strMeal", default)]
    pub str_meal: String,
    #[serde(rename = "strMealThumb", default)]
    pub str_meal_thumb: String,
    #[serde(rename = "strInstructions", default)]
    pub str_instructions: String,
    #[serde(rename = "strCategory", default)]
    pub str_category: String,
    #[serde(rename = "strArea", default)]
    pub str_area: String,
    #[serde(rename = "isCustomRecipe", default)]
    pub is_custom_recipe: bool,
    #[serde(rename = "savedAt", default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
    /// `strIngredient1..N` plus any provider field we do not model.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Parses the numeric suffix of a `strIngredientN` key.
fn ingredient_index(key: &str) -> Option<u32> {
    key.strip_prefix(INGREDIENT_PREFIX)?.parse().ok()
}

impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        let mut ingredient_slots: Vec<(u32, String)> = Vec::new();
        let mut extra = Map::new();
        for (key, value) in record.fields {
            match ingredient_index(&key) {
                Some(index) => {
                    if let Value::String(text) = &value {
                        let text = text.trim();
                        if !text.is_empty() {
                            ingredient_slots.push((index, text.to_string()));
                        }
                    }
                }
                None => {
                    extra.insert(key, value);
                }
            }
        }
        // Providers pad to a fixed slot count; order by slot, drop blanks.
        ingredient_slots.sort_by_key(|(index, _)| *index);

        Self {
            id: record.id_meal,
            title: record.str_meal,
            thumbnail: record.str_meal_thumb,
            instructions: record.str_instructions,
            ingredients: ingredient_slots
                .into_iter()
                .map(|(_, text)| text)
                .collect(),
            category: record.str_category,
            area: record.str_area,
            is_custom: record.is_custom_recipe,
            saved_at: record.saved_at,
            extra,
        }
    }
}

impl From<Recipe> for RecipeRecord {
    fn from(recipe: Recipe) -> Self {
        let mut fields = Map::new();
        for (position, ingredient) in recipe.ingredients.iter().enumerate() {
            fields.insert(
                format!("{}{}", INGREDIENT_PREFIX, position + 1),
                Value::String(ingredient.clone()),
            );
        }
        for (key, value) in recipe.extra {
            fields.insert(key, value);
        }

        Self {
            id_meal: recipe.id,
            str_meal: recipe.title,
            str_meal_thumb: recipe.thumbnail,
            str_instructions: recipe.instructions,
            str_category: recipe.category,
            str_area: recipe.area,
            is_custom_recipe: recipe.is_custom,
            saved_at: recipe.saved_at,
            fields,
        }
    }
}
