use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFields, ProductInput, ProductOrder};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products, sorted ascending by the given field
    pub async fn list_products(&self, order: ProductOrder) -> ProductResult<Vec<Product>> {
        self.repository.list_all(order).await
    }

    /// Get a product by ID; absence is not an error here
    pub async fn get_product(&self, id: i64) -> ProductResult<Option<Product>> {
        self.repository.find_by_id(id).await
    }

    /// Get the product only when its quantity is strictly above `count`
    ///
    /// An absent threshold matches nothing, the way `quantity > NULL` is
    /// never true in SQL.
    pub async fn check_stock(&self, id: i64, count: Option<i32>) -> ProductResult<Option<Product>> {
        match count {
            Some(count) => self.repository.find_available(id, count).await,
            None => Ok(None),
        }
    }

    /// Create a new product; assigning the id is the store's job
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        if input.id.is_some() {
            return Err(ProductError::IdSetOnRequest);
        }

        self.repository.create(input.into_fields()).await
    }

    /// Overwrite an existing product's fields with the request's values
    pub async fn update_product(&self, id: i64, input: ProductInput) -> ProductResult<Product> {
        if input.name.is_none() {
            return Err(ProductError::NameNotSet);
        }

        self.repository
            .update_fields(id, input.into_fields())
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        let deleted = self.repository.delete_by_id(id).await?;

        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_create_rejects_request_with_id() {
        // No expectations: the repository must not be called
        let mock_repo = MockProductRepository::new();
        let service = ProductService::new(mock_repo);

        let input = ProductInput {
            id: Some(7),
            name: Some("widget".to_string()),
            ..Default::default()
        };

        let result = service.create_product(input).await;
        assert!(matches!(result, Err(ProductError::IdSetOnRequest)));
    }

    #[tokio::test]
    async fn test_create_passes_fields_through() {
        let mut mock_repo = MockProductRepository::new();
        let expected_fields = ProductFields {
            name: Some("widget".to_string()),
            description: Some("a widget".to_string()),
            price: Some(2.5),
            quantity: Some(3),
        };

        mock_repo
            .expect_create()
            .with(eq(expected_fields.clone()))
            .returning(|fields| {
                Ok(Product {
                    id: 1,
                    name: fields.name,
                    description: fields.description,
                    price: fields.price,
                    quantity: fields.quantity,
                })
            });

        let service = ProductService::new(mock_repo);
        let input = ProductInput {
            id: None,
            name: expected_fields.name.clone(),
            description: expected_fields.description.clone(),
            price: expected_fields.price,
            quantity: expected_fields.quantity,
        };

        let product = service.create_product(input).await.unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.name.as_deref(), Some("widget"));
    }

    #[tokio::test]
    async fn test_update_rejects_missing_name() {
        let mock_repo = MockProductRepository::new();
        let service = ProductService::new(mock_repo);

        let input = ProductInput {
            description: Some("nameless".to_string()),
            ..Default::default()
        };

        let result = service.update_product(1, input).await;
        assert!(matches!(result, Err(ProductError::NameNotSet)));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_update_fields()
            .returning(|_, _| Ok(None));

        let service = ProductService::new(mock_repo);
        let input = ProductInput {
            name: Some("renamed".to_string()),
            ..Default::default()
        };

        let result = service.update_product(99, input).await;
        assert!(matches!(result, Err(ProductError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete_by_id()
            .with(eq(13))
            .returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        let result = service.delete_product(13).await;

        assert!(matches!(result, Err(ProductError::NotFound(13))));
    }

    #[tokio::test]
    async fn test_check_stock_forwards_threshold() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_available()
            .with(eq(5), eq(10))
            .returning(|_, _| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.check_stock(5, Some(10)).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_check_stock_absent_threshold_matches_nothing() {
        // No expectations: the repository must not be queried
        let mock_repo = MockProductRepository::new();
        let service = ProductService::new(mock_repo);

        let result = service.check_stock(5, None).await.unwrap();
        assert!(result.is_none());
    }
}
