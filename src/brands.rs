//! The brands collection: the reference entity wiring.
//!
//! Brands are the simplest entity that exercises the whole surface:
//! bilingual names (both searchable), a visibility order, a visibility
//! toggle, and a product count. Other collections (categories, colors,
//! sizes, sliders, orders, notifications, return reasons) wire up the
//! same way: a serde model, a validated draft, a toggle enum, and a
//! [`ListItem`] implementation.

use crate::entity::{Column, DraftPayload, Language, ListItem, SortValue, ToggleAction};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A brand as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Opaque identifier.
    pub id: String,
    /// Arabic display name.
    pub ar_name: String,
    /// English display name.
    pub en_name: String,
    /// Client-facing display position, 1-based.
    pub visibility_order: u32,
    /// Whether the brand is exposed to the storefront.
    pub is_visible: bool,
    /// Number of products attached to the brand.
    #[serde(default)]
    pub products_count: u32,
}

impl Brand {
    /// A minimal brand for fixtures and docs.
    pub fn sample(id: &str, ar_name: &str, en_name: &str) -> Self {
        Self {
            id: id.to_string(),
            ar_name: ar_name.to_string(),
            en_name: en_name.to_string(),
            visibility_order: 1,
            is_visible: true,
            products_count: 0,
        }
    }

    /// The localized visibility label shown in the table and details.
    pub fn visibility_label(&self, language: Language) -> &'static str {
        match (self.is_visible, language) {
            (true, Language::En) => "Visible",
            (true, Language::Ar) => "مرئي",
            (false, Language::En) => "Hidden",
            (false, Language::Ar) => "مخفي",
        }
    }
}

/// The create/update payload for a brand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandDraft {
    /// Arabic display name; required.
    pub ar_name: String,
    /// English display name; required.
    pub en_name: String,
    /// Client-facing display position; at least 1.
    pub visibility_order: u32,
    /// Whether the brand is exposed to the storefront.
    pub is_visible: bool,
}

impl DraftPayload for BrandDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        if self.ar_name.trim().is_empty() {
            errors.push(("arName", "Arabic name is required".to_string()));
        }
        if self.en_name.trim().is_empty() {
            errors.push(("enName", "English name is required".to_string()));
        }
        if self.visibility_order < 1 {
            errors.push(("visibilityOrder", "must be at least 1".to_string()));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }
}

/// Toggles available on a brand row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandToggle {
    /// Flip storefront visibility.
    Visibility,
}

impl ToggleAction for BrandToggle {
    fn action(&self) -> &'static str {
        match self {
            BrandToggle::Visibility => "toggle-visibility",
        }
    }

    fn describe(&self, language: Language) -> &'static str {
        match (self, language) {
            (BrandToggle::Visibility, Language::En) => "visibility",
            (BrandToggle::Visibility, Language::Ar) => "الظهور",
        }
    }
}

impl ListItem for Brand {
    type Id = String;
    type Draft = BrandDraft;
    type Toggle = BrandToggle;

    const RESOURCE: &'static str = "brands";

    fn id(&self) -> String {
        self.id.clone()
    }

    fn search_text(&self) -> Vec<String> {
        vec![self.ar_name.clone(), self.en_name.clone()]
    }

    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "arName" => SortValue::Text(self.ar_name.clone()),
            "enName" => SortValue::Text(self.en_name.clone()),
            "visibilityOrder" => SortValue::Number(self.visibility_order as f64),
            "isVisible" => SortValue::Flag(self.is_visible),
            "productsCount" => SortValue::Number(self.products_count as f64),
            _ => SortValue::Text(String::new()),
        }
    }

    fn cells(&self, language: Language) -> Vec<String> {
        let name = match language {
            Language::En => self.en_name.clone(),
            Language::Ar => self.ar_name.clone(),
        };
        vec![
            name,
            self.visibility_order.to_string(),
            self.visibility_label(language).to_string(),
            self.products_count.to_string(),
        ]
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("enName", "Name", "الاسم", 24),
            Column::new("visibilityOrder", "Order", "الترتيب", 7),
            Column::new("isVisible", "Status", "الحالة", 8),
            Column::new("productsCount", "Products", "المنتجات", 10),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_both_names_and_a_positive_order() {
        let draft = BrandDraft {
            ar_name: " ".into(),
            en_name: "Nike".into(),
            visibility_order: 0,
            is_visible: true,
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field("arName"), Some("Arabic name is required"));
        assert_eq!(err.field("visibilityOrder"), Some("must be at least 1"));
        assert_eq!(err.field("enName"), None);
    }

    #[test]
    fn valid_draft_passes() {
        let draft = BrandDraft {
            ar_name: "نايكي".into(),
            en_name: "Nike".into(),
            visibility_order: 3,
            is_visible: false,
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn wire_format_is_camel_case() {
        let brand: Brand = serde_json::from_str(
            r#"{"id":"7","arName":"نايكي","enName":"Nike","visibilityOrder":2,"isVisible":false}"#,
        )
        .expect("brand parses");
        assert_eq!(brand.en_name, "Nike");
        assert!(!brand.is_visible);
        assert_eq!(brand.products_count, 0); // defaulted when absent

        let json = serde_json::to_string(&BrandDraft {
            ar_name: "نايكي".into(),
            en_name: "Nike".into(),
            visibility_order: 2,
            is_visible: true,
        })
        .expect("draft serializes");
        assert!(json.contains("\"arName\""));
        assert!(json.contains("\"visibilityOrder\""));
    }

    #[test]
    fn labels_are_localized() {
        let brand = Brand::sample("1", "نايكي", "Nike");
        assert_eq!(brand.visibility_label(Language::En), "Visible");
        assert_eq!(brand.visibility_label(Language::Ar), "مرئي");
    }

    #[test]
    fn search_fields_cover_both_names() {
        let brand = Brand::sample("1", "نايكي", "Nike");
        assert_eq!(brand.search_text(), vec!["نايكي", "Nike"]);
    }

    #[test]
    fn sortable_columns_have_typed_keys() {
        let brand = Brand::sample("1", "نايكي", "Nike");
        assert!(matches!(brand.sort_value("enName"), SortValue::Text(_)));
        assert!(matches!(
            brand.sort_value("visibilityOrder"),
            SortValue::Number(_)
        ));
        assert!(matches!(brand.sort_value("isVisible"), SortValue::Flag(_)));
    }
}
