use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::Book;
use crate::repositories::{BookFilter, BookRepository};

/// `books` 컬렉션 저장소
pub struct MongoBookRepository {
    db: Arc<Database>,
}

impl MongoBookRepository {
    pub const COLLECTION: &'static str = "books";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Book> {
        self.db.get_database().collection::<Book>(Self::COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let category_index = IndexModel::builder()
            .keys(doc! { "category": 1, "created_at": 1 })
            .options(
                IndexOptions::builder()
                    .name("category_created_at".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": 1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_asc".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([category_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl BookRepository for MongoBookRepository {
    async fn create(&self, book: Book) -> AppResult<Book> {
        self.collection()
            .insert_one(&book)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(book)
    }

    async fn find_all(&self, filter: &BookFilter) -> AppResult<Vec<Book>> {
        let mut query = Document::new();
        if let Some(category) = &filter.category {
            query.insert("category", category.as_str());
        }

        let limit = i64::try_from(filter.limit)
            .map_err(|_| AppError::InternalError("limit 값이 너무 큽니다".to_string()))?;

        let cursor = self
            .collection()
            .find(query)
            .sort(doc! { "created_at": 1 })
            .skip(filter.skip)
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn replace(&self, book: Book) -> AppResult<Option<Book>> {
        let result = self
            .collection()
            .replace_one(doc! { "_id": book.id.as_str() }, &book)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        Ok(Some(book))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
