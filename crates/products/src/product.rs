use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, ProductId};

/// A catalog product.
///
/// Every product held by the store carries all five business attributes;
/// `id` is assigned at creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// Incoming product fields, each one present-or-absent.
///
/// One type serves both the create payload (validated into a [`NewProduct`])
/// and the update patch (present fields overwrite, absent fields survive).
/// A JSON `null` and a missing key both count as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

/// The five product fields, all present and validated.
///
/// Only obtainable through [`ProductDraft::validate`], so nothing downstream
/// can sidestep the required-field rule.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl ProductDraft {
    /// Check that all five product fields are present and produce the
    /// validated set.
    ///
    /// Presence is judged field by field: a `price` of `0` and an `inStock`
    /// of `false` pass. The three string fields must also be non-empty.
    pub fn validate(self) -> Result<NewProduct, DomainError> {
        match self {
            ProductDraft {
                name: Some(name),
                description: Some(description),
                price: Some(price),
                category: Some(category),
                in_stock: Some(in_stock),
            } if !name.is_empty() && !description.is_empty() && !category.is_empty() => {
                Ok(NewProduct {
                    name,
                    description,
                    price,
                    category,
                    in_stock,
                })
            }
            _ => Err(DomainError::validation("all product fields are required")),
        }
    }
}

impl NewProduct {
    /// Attach an identifier, producing the stored form.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            in_stock: self.in_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> ProductDraft {
        ProductDraft {
            name: Some("Heavy Bolt".to_string()),
            description: Some("M8 hex bolt, zinc plated".to_string()),
            price: Some(0.35),
            category: Some("Hardware".to_string()),
            in_stock: Some(true),
        }
    }

    #[test]
    fn validate_accepts_a_complete_draft() {
        let fields = full_draft().validate().unwrap();

        assert_eq!(fields.name, "Heavy Bolt");
        assert_eq!(fields.description, "M8 hex bolt, zinc plated");
        assert_eq!(fields.price, 0.35);
        assert_eq!(fields.category, "Hardware");
        assert!(fields.in_stock);
    }

    #[test]
    fn validate_rejects_each_missing_field() {
        let drafts = [
            ProductDraft {
                name: None,
                ..full_draft()
            },
            ProductDraft {
                description: None,
                ..full_draft()
            },
            ProductDraft {
                price: None,
                ..full_draft()
            },
            ProductDraft {
                category: None,
                ..full_draft()
            },
            ProductDraft {
                in_stock: None,
                ..full_draft()
            },
        ];

        for draft in drafts {
            let err = draft.validate().unwrap_err();
            match err {
                DomainError::Validation(_) => {}
                other => panic!("Expected Validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn validate_accepts_zero_price_and_false_in_stock() {
        let draft = ProductDraft {
            price: Some(0.0),
            in_stock: Some(false),
            ..full_draft()
        };

        let fields = draft.validate().unwrap();
        assert_eq!(fields.price, 0.0);
        assert!(!fields.in_stock);
    }

    #[test]
    fn validate_rejects_empty_strings() {
        for draft in [
            ProductDraft {
                name: Some(String::new()),
                ..full_draft()
            },
            ProductDraft {
                description: Some(String::new()),
                ..full_draft()
            },
            ProductDraft {
                category: Some(String::new()),
                ..full_draft()
            },
        ] {
            assert!(draft.validate().is_err());
        }
    }

    #[test]
    fn draft_treats_null_and_missing_keys_as_absent() {
        let draft: ProductDraft =
            serde_json::from_str(r#"{"name":null,"price":12.5}"#).unwrap();

        assert_eq!(draft.name, None);
        assert_eq!(draft.description, None);
        assert_eq!(draft.price, Some(12.5));
        assert_eq!(draft.category, None);
        assert_eq!(draft.in_stock, None);
    }

    #[test]
    fn draft_ignores_unknown_keys() {
        // Clients cannot smuggle an id (or anything else) through a payload.
        let draft: ProductDraft =
            serde_json::from_str(r#"{"id":"abc","name":"Hammer","extra":1}"#).unwrap();

        assert_eq!(draft.name.as_deref(), Some("Hammer"));
    }

    #[test]
    fn product_serializes_in_stock_in_camel_case() {
        let product = full_draft()
            .validate()
            .unwrap()
            .into_product(ProductId::new());

        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("inStock").is_some());
        assert!(json.get("in_stock").is_none());
        assert_eq!(json["name"], "Heavy Bolt");
    }
}
