//! Product catalog entities
//!
//! A product owns an ordered list of variants; every variant carries its own
//! inventory count and a derived display name and SKU (see
//! [`ProductVariant::derive_name`] and [`ProductVariant::derive_sku`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::value_objects::{Money, Sku};

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct Product {
    pub id: String,
    #[validate(length(min = 1, message = "product name is required"))]
    pub name: String,
    pub description: String,
    /// References a `Category` id. The store does not check the reference;
    /// callers validate it before dispatching.
    #[validate(length(min = 1, message = "a category is required"))]
    pub category_id: String,
    #[validate(custom = "price_positive")]
    pub price: Money,
    pub compare_at_price: Option<Money>,
    pub sku: Sku,
    pub status: ProductStatus,
    pub images: Vec<String>,
    #[validate(length(min = 1, message = "at least one variant is required"))]
    pub variants: Vec<ProductVariant>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn price_positive(price: &Money) -> Result<(), ValidationError> {
    if !price.is_positive() {
        let mut err = ValidationError::new("price_positive");
        err.message = Some("price must be greater than zero".into());
        return Err(err);
    }
    Ok(())
}

impl Product {
    pub fn new(name: impl Into<String>, sku: Sku, category_id: impl Into<String>, price: Money) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: String::new(),
            category_id: category_id.into(),
            price,
            compare_at_price: None,
            sku,
            status: ProductStatus::default(),
            images: vec![],
            variants: vec![],
            tags: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    /// True when any variant sits at or below its warning threshold.
    pub fn has_low_stock(&self) -> bool {
        self.variants.iter().any(ProductVariant::is_low_stock)
    }

    pub fn low_stock_variants(&self) -> Vec<&ProductVariant> {
        self.variants.iter().filter(|v| v.is_low_stock()).collect()
    }

    pub(crate) fn touch(&mut self) { self.updated_at = Utc::now(); }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus { Active, Inactive, #[default] Draft }

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: String,
    /// Back-reference to the owning product. Relation only; variants are
    /// never stored outside their parent.
    pub product_id: String,
    pub name: String,
    pub sku: String,
    pub price: Option<Money>,
    pub compare_at_price: Option<Money>,
    pub inventory: u32,
    pub low_stock_threshold: u32,
    pub attributes: Vec<VariantAttribute>,
    pub image: Option<String>,
    pub status: VariantStatus,
}

impl ProductVariant {
    pub fn new(
        product_id: impl Into<String>,
        base_sku: &Sku,
        attributes: Vec<VariantAttribute>,
        inventory: u32,
        low_stock_threshold: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            product_id: product_id.into(),
            name: Self::derive_name(&attributes),
            sku: Self::derive_sku(base_sku, &attributes),
            price: None,
            compare_at_price: None,
            inventory,
            low_stock_threshold,
            attributes,
            image: None,
            status: VariantStatus::Active,
        }
    }

    /// Display name: attribute values joined with `" - "`, e.g. "Black - S".
    pub fn derive_name(attributes: &[VariantAttribute]) -> String {
        attributes.iter().map(|a| a.value.as_str()).collect::<Vec<_>>().join(" - ")
    }

    /// Generated SKU: the product base SKU plus a dash-joined 2-character
    /// uppercase prefix of each attribute value, e.g. `KAZ-001-BL-S`.
    /// An empty attribute value contributes an empty segment.
    pub fn derive_sku(base_sku: &Sku, attributes: &[VariantAttribute]) -> String {
        let codes = attributes
            .iter()
            .map(|a| a.value.chars().take(2).collect::<String>().to_uppercase())
            .collect::<Vec<_>>()
            .join("-");
        format!("{}-{}", base_sku, codes)
    }

    pub fn add_attribute(&mut self, attribute: VariantAttribute, base_sku: &Sku) {
        self.attributes.push(attribute);
        self.rederive(base_sku);
    }

    pub fn set_attribute(&mut self, index: usize, attribute: VariantAttribute, base_sku: &Sku) {
        if let Some(slot) = self.attributes.get_mut(index) {
            *slot = attribute;
            self.rederive(base_sku);
        }
    }

    pub fn remove_attribute(&mut self, index: usize, base_sku: &Sku) {
        if index < self.attributes.len() {
            self.attributes.remove(index);
            self.rederive(base_sku);
        }
    }

    /// Inventory edits never touch the derived name/sku.
    pub fn set_inventory(&mut self, inventory: u32) { self.inventory = inventory; }

    pub fn set_low_stock_threshold(&mut self, threshold: u32) { self.low_stock_threshold = threshold; }

    /// Inclusive boundary: a variant exactly at its threshold counts.
    pub fn is_low_stock(&self) -> bool { self.inventory <= self.low_stock_threshold }

    fn rederive(&mut self, base_sku: &Sku) {
        self.name = Self::derive_name(&self.attributes);
        self.sku = Self::derive_sku(base_sku, &self.attributes);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantStatus { #[default] Active, Inactive }

/// Name/value pair such as Color=Black. Order matters for derivation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantAttribute {
    pub name: String,
    pub value: String,
}

impl VariantAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// Reference data backing the variant attribute pickers. Not mutated by
/// catalog operations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub id: String,
    pub name: String,
    pub kind: AttributeType,
    pub values: Vec<String>,
    pub required: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType { Color, Size, Text, Number }

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn base() -> Sku { Sku::new("KAZ-001").unwrap() }

    fn color_size() -> Vec<VariantAttribute> {
        vec![VariantAttribute::new("Color", "Black"), VariantAttribute::new("Size", "S")]
    }

    #[test]
    fn test_derive_name_and_sku() {
        let attrs = color_size();
        assert_eq!(ProductVariant::derive_name(&attrs), "Black - S");
        assert_eq!(ProductVariant::derive_sku(&base(), &attrs), "KAZ-001-BL-S");
    }

    #[test]
    fn test_empty_value_keeps_empty_segment() {
        let attrs = vec![VariantAttribute::new("Color", ""), VariantAttribute::new("Size", "S")];
        assert_eq!(ProductVariant::derive_sku(&base(), &attrs), "KAZ-001--S");
        assert_eq!(ProductVariant::derive_name(&attrs), " - S");
    }

    #[test]
    fn test_attribute_edit_rederives() {
        let mut variant = ProductVariant::new("p1", &base(), color_size(), 10, 5);
        variant.set_attribute(0, VariantAttribute::new("Color", "White"), &base());
        assert_eq!(variant.name, "White - S");
        assert_eq!(variant.sku, "KAZ-001-WH-S");
    }

    #[test]
    fn test_inventory_edit_keeps_derived_fields() {
        let mut variant = ProductVariant::new("p1", &base(), color_size(), 10, 5);
        let (name, sku) = (variant.name.clone(), variant.sku.clone());
        variant.set_inventory(0);
        variant.set_low_stock_threshold(2);
        assert_eq!(variant.name, name);
        assert_eq!(variant.sku, sku);
    }

    #[test]
    fn test_remove_attribute_rederives() {
        let mut variant = ProductVariant::new("p1", &base(), color_size(), 10, 5);
        variant.remove_attribute(1, &base());
        assert_eq!(variant.name, "Black");
        assert_eq!(variant.sku, "KAZ-001-BL");
    }

    #[test]
    fn test_low_stock_boundary() {
        let mut variant = ProductVariant::new("p1", &base(), color_size(), 3, 5);
        assert!(variant.is_low_stock());
        variant.set_inventory(5);
        assert!(variant.is_low_stock());
        variant.set_inventory(6);
        assert!(!variant.is_low_stock());
    }

    #[test]
    fn test_product_low_stock() {
        let mut product = Product::new("Winter Sweater", base(), "womens-clothing", Money::usd(Decimal::new(29999, 2)));
        product.variants.push(ProductVariant::new(&product.id, &base(), color_size(), 15, 5));
        assert!(!product.has_low_stock());
        product.variants.push(ProductVariant::new(&product.id, &base(), color_size(), 3, 5));
        assert!(product.has_low_stock());
        assert_eq!(product.low_stock_variants().len(), 1);
    }

    #[test]
    fn test_validation() {
        let mut product = Product::new("", base(), "", Money::usd(Decimal::ZERO));
        let errors = product.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("category_id"));
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("variants"));

        product.name = "Winter Sweater".into();
        product.category_id = "womens-clothing".into();
        product.price = Money::usd(Decimal::new(29999, 2));
        product.variants.push(ProductVariant::new(&product.id, &base(), color_size(), 15, 5));
        assert!(product.validate().is_ok());
    }
}
