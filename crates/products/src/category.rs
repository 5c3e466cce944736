use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitrine_core::{DomainResult, Entity, Slug};

/// Strongly-typed category identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

vitrine_core::impl_id_newtype!(CategoryId, "CategoryId");

/// A product category. The catalog page renders one selector option per
/// category, addressed by slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    slug: Slug,
    featured: bool,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>, slug: Slug) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(vitrine_core::DomainError::validation(
                "category name cannot be empty",
            ));
        }

        Ok(Self {
            id,
            name,
            slug,
            featured: false,
        })
    }

    pub fn as_featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    /// Orders categories the way the selector lists them: by display name.
    pub fn sorted_by_name(mut categories: Vec<Category>) -> Vec<Category> {
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        categories
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
