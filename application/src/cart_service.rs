use domain::models::{CartItem, Product};

/// Local shopping cart. Lives only for the process; checkout goes through
/// the payment service.
#[derive(Default)]
pub struct CartService {
    items: Vec<CartItem>,
}

impl CartService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adding an already-carted product merges quantities.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.product.id == product.id)
        {
            existing.quantity += quantity;
        } else {
            self.items.push(CartItem { product, quantity });
        }
    }

    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|item| item.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.product.price * f64::from(item.quantity))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
