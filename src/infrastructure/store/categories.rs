// src/infrastructure/store/categories.rs
use super::client::StoreClient;
use crate::domain::category::{Category, CategoryId, CategoryRepository};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

const TABLE: &str = "categories";

#[derive(Clone)]
pub struct HttpCategoryRepository {
    client: Arc<StoreClient>,
}

impl HttpCategoryRepository {
    pub fn new(client: Arc<StoreClient>) -> Self {
        Self { client }
    }

    async fn select_one(&self, column: &str, value: String) -> DomainResult<Option<Category>> {
        let rows: Vec<CategoryRow> = self
            .client
            .select(
                TABLE,
                &[
                    ("select", "*".to_string()),
                    (column, value),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        rows.into_iter().next().map(Category::try_from).transpose()
    }
}

#[derive(Debug, Deserialize)]
struct CategoryRow {
    id: i64,
    name: String,
    color: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = crate::domain::errors::DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: row.name,
            color: row.color,
        })
    }
}

#[async_trait]
impl CategoryRepository for HttpCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        self.select_one("id", format!("eq.{id}")).await
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Category>> {
        self.select_one("name", format!("eq.{name}")).await
    }
}
