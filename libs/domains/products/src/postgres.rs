use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::ProductResult,
    models::{Product, ProductFields, ProductOrder},
    repository::ProductRepository,
};

pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list_all(&self, order: ProductOrder) -> ProductResult<Vec<Product>> {
        let column = match order {
            ProductOrder::Name => entity::Column::Name,
            ProductOrder::Price => entity::Column::Price,
        };

        // Ascending sort puts nulls last on PostgreSQL
        let models = entity::Entity::find()
            .order_by_asc(column)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        Ok(self.base.find_by_id(id).await?.map(Into::into))
    }

    async fn find_available(&self, id: i64, min_quantity: i32) -> ProductResult<Option<Product>> {
        // A null quantity never satisfies the comparison
        let model = entity::Entity::find()
            .filter(entity::Column::Id.eq(id))
            .filter(entity::Column::Quantity.gt(min_quantity))
            .one(self.base.db())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, fields: ProductFields) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = fields.into();
        let model = self.base.insert(active_model).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn update_fields(
        &self,
        id: i64,
        fields: ProductFields,
    ) -> ProductResult<Option<Product>> {
        // Load and write share one transaction; dropping it without commit
        // rolls back
        let txn = self.base.begin().await?;

        let Some(model) = entity::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active_model: entity::ActiveModel = model.into();
        active_model.name = Set(fields.name);
        active_model.description = Set(fields.description);
        active_model.price = Set(fields.price);
        active_model.quantity = Set(fields.quantity);

        let updated = active_model.update(&txn).await?;
        txn.commit().await?;

        tracing::info!(product_id = id, "Updated product");
        Ok(Some(updated.into()))
    }

    async fn delete_by_id(&self, id: i64) -> ProductResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
