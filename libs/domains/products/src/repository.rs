use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{Product, ProductFields, ProductOrder};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products, ordered ascending by the given field
    async fn list_all(&self, order: ProductOrder) -> ProductResult<Vec<Product>>;

    /// Get a product by ID; absence is a non-error result
    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Get the product only when its quantity is strictly above `min_quantity`
    async fn find_available(&self, id: i64, min_quantity: i32) -> ProductResult<Option<Product>>;

    /// Insert a new product; the store assigns the id
    async fn create(&self, fields: ProductFields) -> ProductResult<Product>;

    /// Overwrite all mutable fields of an existing product.
    ///
    /// Returns `None` when the id is unknown; nothing is written in that case.
    async fn update_fields(
        &self,
        id: i64,
        fields: ProductFields,
    ) -> ProductResult<Option<Product>>;

    /// Delete a product by ID; `false` when nothing was deleted
    async fn delete_by_id(&self, id: i64) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i64, Product>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Ascending comparison matching PostgreSQL's default ordering: nulls sort
/// after every present value.
fn cmp_nulls_last<T>(
    a: Option<&T>,
    b: Option<&T>,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self, order: ProductOrder) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products.values().cloned().collect();
        match order {
            ProductOrder::Name => result.sort_by(|a, b| {
                cmp_nulls_last(a.name.as_ref(), b.name.as_ref(), |x, y| x.cmp(y))
            }),
            ProductOrder::Price => result.sort_by(|a, b| {
                cmp_nulls_last(a.price.as_ref(), b.price.as_ref(), |x, y| x.total_cmp(y))
            }),
        }

        Ok(result)
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn find_available(&self, id: i64, min_quantity: i32) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;

        // A null quantity never satisfies the comparison, as in SQL
        Ok(products
            .get(&id)
            .filter(|p| p.quantity.is_some_and(|q| q > min_quantity))
            .cloned())
    }

    async fn create(&self, fields: ProductFields) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst);
        let product = Product {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            quantity: fields.quantity,
        };
        products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn update_fields(
        &self,
        id: i64,
        fields: ProductFields,
    ) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;

        let Some(product) = products.get_mut(&id) else {
            return Ok(None);
        };

        product.name = fields.name;
        product.description = fields.description;
        product.price = fields.price;
        product.quantity = fields.quantity;
        let updated = product.clone();

        tracing::info!(product_id = id, "Updated product");
        Ok(Some(updated))
    }

    async fn delete_by_id(&self, id: i64) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: Option<&str>, price: Option<f64>, quantity: Option<i32>) -> ProductFields {
        ProductFields {
            name: name.map(str::to_string),
            description: None,
            price,
            quantity,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(fields(Some("first"), None, None)).await.unwrap();
        let second = repo.create(fields(Some("second"), None, None)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_list_sorts_by_name_with_nulls_last() {
        let repo = InMemoryProductRepository::new();
        repo.create(fields(Some("pear"), None, None)).await.unwrap();
        repo.create(fields(None, None, None)).await.unwrap();
        repo.create(fields(Some("apple"), None, None)).await.unwrap();

        let listed = repo.list_all(ProductOrder::Name).await.unwrap();
        let names: Vec<Option<&str>> = listed.iter().map(|p| p.name.as_deref()).collect();

        assert_eq!(names, vec![Some("apple"), Some("pear"), None]);
    }

    #[tokio::test]
    async fn test_list_sorts_by_price_with_nulls_last() {
        let repo = InMemoryProductRepository::new();
        repo.create(fields(Some("a"), Some(9.5), None)).await.unwrap();
        repo.create(fields(Some("b"), None, None)).await.unwrap();
        repo.create(fields(Some("c"), Some(1.25), None)).await.unwrap();

        let listed = repo.list_all(ProductOrder::Price).await.unwrap();
        let prices: Vec<Option<f64>> = listed.iter().map(|p| p.price).collect();

        assert_eq!(prices, vec![Some(1.25), Some(9.5), None]);
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let repo = InMemoryProductRepository::new();
        let created = repo
            .create(fields(Some("widget"), Some(3.0), Some(7)))
            .await
            .unwrap();

        let updated = repo
            .update_fields(created.id, fields(Some("renamed"), None, None))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name.as_deref(), Some("renamed"));
        assert_eq!(updated.price, None);
        assert_eq!(updated.quantity, None);
    }

    #[tokio::test]
    async fn test_update_unknown_id_writes_nothing() {
        let repo = InMemoryProductRepository::new();

        let result = repo
            .update_fields(42, fields(Some("ghost"), None, None))
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(repo.list_all(ProductOrder::Name).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_available_requires_quantity_above_threshold() {
        let repo = InMemoryProductRepository::new();
        let stocked = repo
            .create(fields(Some("stocked"), None, Some(5)))
            .await
            .unwrap();
        let unstocked = repo.create(fields(Some("unstocked"), None, None)).await.unwrap();

        assert!(repo.find_available(stocked.id, 4).await.unwrap().is_some());
        assert!(repo.find_available(stocked.id, 5).await.unwrap().is_none());
        // Null quantity never satisfies the comparison
        assert!(repo.find_available(unstocked.id, -1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_whether_row_existed() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(fields(Some("gone"), None, None)).await.unwrap();

        assert!(repo.delete_by_id(created.id).await.unwrap());
        assert!(!repo.delete_by_id(created.id).await.unwrap());
    }
}
