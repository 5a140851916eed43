use domain::gateway::CatalogGateway;
use domain::models::{Product, ProductDraft};
use shared::types::Result;

const FETCH_FALLBACK: &str = "Failed to fetch products";
const CREATE_FALLBACK: &str = "Failed to create product";
const UPDATE_FALLBACK: &str = "Failed to update product";
const DELETE_FALLBACK: &str = "Failed to delete product";

/// In-memory mirror of the medications collection.
///
/// The collection is replaced wholesale on fetch and spliced on writes;
/// it is never persisted, a new process refetches from the backend.
pub struct CatalogService<G> {
    gateway: G,
    products: Vec<Product>,
    is_loading: bool,
    last_error: Option<String>,
}

impl<G: CatalogGateway> CatalogService<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            products: Vec::new(),
            is_loading: false,
            last_error: None,
        }
    }

    pub async fn fetch_all(&mut self) -> Result<&[Product]> {
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.list_medications().await;
        self.is_loading = false;
        match result {
            Ok(products) => {
                self.products = products;
                Ok(&self.products)
            }
            Err(err) => {
                self.last_error = Some(err.human_message(FETCH_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub async fn fetch_by_id(&mut self, id: &str) -> Result<Product> {
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.fetch_medication(id).await;
        self.is_loading = false;
        match result {
            Ok(product) => Ok(product),
            Err(err) => {
                self.last_error = Some(err.human_message(FETCH_FALLBACK));
                Err(err.into())
            }
        }
    }

    /// New records go to the front, matching the backend's newest-first
    /// ordering on the next fetch.
    pub async fn create(&mut self, draft: &ProductDraft) -> Result<Product> {
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.create_medication(draft).await;
        self.is_loading = false;
        match result {
            Ok(product) => {
                self.products.insert(0, product.clone());
                Ok(product)
            }
            Err(err) => {
                self.last_error = Some(err.human_message(CREATE_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub async fn update(&mut self, id: &str, draft: &ProductDraft) -> Result<Product> {
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.update_medication(id, draft).await;
        self.is_loading = false;
        match result {
            Ok(updated) => {
                if let Some(slot) = self.products.iter_mut().find(|product| product.id == id) {
                    *slot = updated.clone();
                }
                Ok(updated)
            }
            Err(err) => {
                self.last_error = Some(err.human_message(UPDATE_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub async fn remove(&mut self, id: &str) -> Result<()> {
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.delete_medication(id).await;
        self.is_loading = false;
        match result {
            Ok(()) => {
                self.products.retain(|product| product.id != id);
                Ok(())
            }
            Err(err) => {
                self.last_error = Some(err.human_message(DELETE_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|product| product.name.eq_ignore_ascii_case(name))
    }

    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| {
                product
                    .category
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(category))
            })
            .collect()
    }

    pub fn by_price_range(&self, min: f64, max: f64) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.price >= min && product.price <= max)
            .collect()
    }

    pub fn count(&self) -> usize {
        self.products.len()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
