use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitrine_core::{DomainResult, Entity, Money, Slug};

/// Strongly-typed product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

vitrine_core::impl_id_newtype!(ProductId, "ProductId");

/// A sellable product as the storefront reads it.
///
/// Flat, queryable shape: the listing filters and sorts over these fields,
/// and the rendered catalog cards are derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    slug: Slug,
    title: String,
    description: String,
    price: Money,
    stock: u32,
    image_url: Option<String>,
    category_slug: Option<Slug>,
    active: bool,
    featured: bool,
    views: u64,
    created_at: DateTime<Utc>,
}

impl Product {
    /// Creates a product with the required fields. Everything else starts at
    /// its storefront default: active, not featured, zero views, no stock.
    pub fn new(
        id: ProductId,
        slug: Slug,
        title: impl Into<String>,
        price: Money,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(vitrine_core::DomainError::validation(
                "product title cannot be empty",
            ));
        }

        Ok(Self {
            id,
            slug,
            title,
            description: String::new(),
            price,
            stock: 0,
            image_url: None,
            category_slug: None,
            active: true,
            featured: false,
            views: 0,
            created_at,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: Slug) -> Self {
        self.category_slug = Some(category);
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn as_featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn category_slug(&self) -> Option<&Slug> {
        self.category_slug.as_ref()
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    /// Whether the product appears in the public catalog at all.
    pub fn is_listed(&self) -> bool {
        self.active
    }

    pub fn views(&self) -> u64 {
        self.views
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Bumps the popularity counter. Called once per detail-page hit; the
    /// `pop` listing sort ranks by this value.
    pub fn record_view(&mut self) {
        self.views = self.views.saturating_add(1);
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
