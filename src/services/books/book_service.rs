use std::sync::Arc;

use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::books::request::BookListQuery;
use crate::domain::entities::{Book, NewBook};
use crate::repositories::{BookFilter, BookRepository};

/// 도서 CRUD 비즈니스 로직
pub struct BookService {
    books: Arc<dyn BookRepository>,
}

impl BookService {
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }

    pub async fn create(&self, input: NewBook) -> AppResult<Book> {
        let book = self.books.create(Book::new(input)).await?;
        log::info!("도서 생성: {} ({})", book.id, book.title);
        Ok(book)
    }

    pub async fn list(&self, query: &BookListQuery) -> AppResult<Vec<Book>> {
        let filter = BookFilter {
            category: query.category().map(str::to_string),
            skip: query.skip(),
            limit: query.limit(),
        };

        self.books.find_all(&filter).await
    }

    pub async fn get(&self, id: &str) -> AppResult<Book> {
        let id = parse_id(id)?;

        self.books
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book".to_string()))
    }

    /// 전체 교체. 생성 시간과 식별자는 유지됩니다.
    pub async fn update(&self, id: &str, input: NewBook) -> AppResult<Book> {
        let mut book = self.get(id).await?;
        book.replace_with(input);

        let updated = self
            .books
            .replace(book)
            .await?
            .ok_or_else(|| AppError::NotFound("Book".to_string()))?;

        log::info!("도서 수정: {}", updated.id);
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = parse_id(id)?;

        if !self.books.delete(&id).await? {
            return Err(AppError::NotFound("Book".to_string()));
        }

        log::info!("도서 삭제: {}", id);
        Ok(())
    }
}

/// 경로의 도서 ID를 정규화된 UUID 문자열로 변환합니다.
fn parse_id(id: &str) -> AppResult<String> {
    Uuid::parse_str(id.trim())
        .map(|uuid| uuid.to_string())
        .map_err(|_| AppError::invalid_field("id", "id must be a valid UUID"))
}
