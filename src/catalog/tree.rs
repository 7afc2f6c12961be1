//! Category Tree Resolver.
//!
//! The hierarchy is never materialized: a tree is an index built on demand
//! over the flat category collection and dropped after the read.

use std::collections::HashMap;

use crate::domain::aggregates::Category;

pub struct CategoryTree<'a> {
    by_id: HashMap<&'a str, &'a Category>,
    by_parent: HashMap<Option<&'a str>, Vec<&'a Category>>,
}

impl<'a> CategoryTree<'a> {
    pub fn new(categories: &'a [Category]) -> Self {
        let mut by_id = HashMap::new();
        let mut by_parent: HashMap<Option<&'a str>, Vec<&'a Category>> = HashMap::new();
        for category in categories {
            by_id.insert(category.id.as_str(), category);
            by_parent.entry(category.parent_id.as_deref()).or_default().push(category);
        }
        Self { by_id, by_parent }
    }

    pub fn get(&self, id: &str) -> Option<&'a Category> {
        self.by_id.get(id).copied()
    }

    /// Categories with no parent, in collection order.
    pub fn roots(&self) -> Vec<&'a Category> {
        self.by_parent.get(&None).cloned().unwrap_or_default()
    }

    /// Direct children of `id`, in collection order.
    pub fn children(&self, id: &str) -> Vec<&'a Category> {
        self.by_parent.get(&Some(id)).cloned().unwrap_or_default()
    }

    pub fn has_children(&self, id: &str) -> bool {
        !self.children(id).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        let womens = Category::new("Women's Clothing");
        let mens = Category::new("Men's Clothing");
        let dresses = Category::child_of("Dresses", &womens.id);
        let knitwear = Category::child_of("Knitwear", &womens.id);
        vec![womens, mens, dresses, knitwear]
    }

    #[test]
    fn test_roots() {
        let all = categories();
        let tree = CategoryTree::new(&all);
        let roots = tree.roots();
        assert_eq!(roots.len(), 2);
        assert!(roots.iter().all(|c| c.is_root()));
    }

    #[test]
    fn test_children() {
        let all = categories();
        let tree = CategoryTree::new(&all);
        let womens_id = all[0].id.clone();

        let children = tree.children(&womens_id);
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].name, "Dresses");
        assert_eq!(children[1].name, "Knitwear");
        assert!(tree.children(&all[1].id).is_empty());
    }

    #[test]
    fn test_each_child_appears_under_its_parent_only() {
        let all = categories();
        let tree = CategoryTree::new(&all);
        for category in &all {
            match &category.parent_id {
                None => {
                    assert!(tree.roots().iter().any(|c| c.id == category.id));
                }
                Some(parent) => {
                    assert!(tree.children(parent).iter().any(|c| c.id == category.id));
                    assert!(!tree.roots().iter().any(|c| c.id == category.id));
                }
            }
        }
    }

    #[test]
    fn test_get() {
        let all = categories();
        let tree = CategoryTree::new(&all);
        assert_eq!(tree.get(&all[0].id).map(|c| c.name.as_str()), Some("Women's Clothing"));
        assert!(tree.get("missing").is_none());
    }
}
