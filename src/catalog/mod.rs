//! Catalog commands: validated product and category mutations.
//!
//! The store applies any well-formed action without question, so this layer
//! is the sole guardian of the catalog invariants: field validation runs
//! before dispatch, and a category that still has children or products is
//! never deleted. A rejected command leaves the state unchanged.

pub mod tree;

pub use tree::CategoryTree;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::aggregates::{Category, Product};
use crate::store::{Action, Store};
use crate::{AdminError, Result};

pub fn create_product(store: &mut Store, product: Product) -> Result<()> {
    product.validate()?;
    store.dispatch(Action::AddProduct(product));
    Ok(())
}

pub fn update_product(store: &mut Store, product: Product) -> Result<()> {
    product.validate()?;
    if !store.state().products.iter().any(|p| p.id == product.id) {
        return Err(AdminError::ProductNotFound);
    }
    store.dispatch(Action::UpdateProduct(product));
    Ok(())
}

pub fn delete_product(store: &mut Store, id: &str) -> Result<()> {
    if !store.state().products.iter().any(|p| p.id == id) {
        return Err(AdminError::ProductNotFound);
    }
    store.dispatch(Action::DeleteProduct(id.to_string()));
    Ok(())
}

/// Field checks plus the case-insensitive name uniqueness rule. The record
/// under edit is excluded so saving without renaming stays valid.
pub fn validate_category(candidate: &Category, existing: &[Category]) -> std::result::Result<(), ValidationErrors> {
    let mut errors = match candidate.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };

    let name = candidate.name.to_lowercase();
    let duplicate = existing.iter().any(|c| c.id != candidate.id && c.name.to_lowercase() == name);
    if duplicate {
        let mut error = ValidationError::new("unique_name");
        error.message = Some("a category with this name already exists".into());
        errors.add("name", error);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

pub fn create_category(store: &mut Store, category: Category) -> Result<()> {
    validate_category(&category, &store.state().categories)?;
    store.dispatch(Action::AddCategory(category));
    Ok(())
}

pub fn update_category(store: &mut Store, category: Category) -> Result<()> {
    if !store.state().categories.iter().any(|c| c.id == category.id) {
        return Err(AdminError::CategoryNotFound);
    }
    validate_category(&category, &store.state().categories)?;
    store.dispatch(Action::UpdateCategory(category));
    Ok(())
}

/// Deletion precondition lives here, not in the store: a category with
/// children or with products still referencing it is rejected outright.
pub fn delete_category(store: &mut Store, id: &str) -> Result<()> {
    let state = store.state();
    if !state.categories.iter().any(|c| c.id == id) {
        return Err(AdminError::CategoryNotFound);
    }

    let tree = CategoryTree::new(&state.categories);
    if tree.has_children(id) {
        tracing::warn!(category = id, "delete rejected: category has subcategories");
        return Err(AdminError::CategoryHasChildren);
    }

    let in_use = state.products.iter().filter(|p| p.category_id == id).count();
    if in_use > 0 {
        tracing::warn!(category = id, products = in_use, "delete rejected: category in use");
        return Err(AdminError::CategoryInUse(in_use));
    }

    store.dispatch(Action::DeleteCategory(id.to_string()));
    Ok(())
}
