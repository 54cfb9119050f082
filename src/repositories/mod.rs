//! # Repository Layer
//!
//! 영속성 경계를 trait으로 정의하고, MongoDB 구현과 인메모리 구현을 제공합니다.
//! 서비스는 `Arc<dyn BookRepository>` / `Arc<dyn UserRepository>`만 알고 있으므로
//! 저장소 교체는 시작 단계의 구성만으로 이루어집니다.

pub mod books;
pub mod memory;
pub mod users;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::{Book, User};

pub use books::book_repo::MongoBookRepository;
pub use memory::{InMemoryBookRepository, InMemoryUserRepository};
pub use users::user_repo::MongoUserRepository;

/// 도서 목록 조회 조건
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    pub category: Option<String>,
    pub skip: u64,
    pub limit: u64,
}

#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn create(&self, book: Book) -> AppResult<Book>;

    /// 생성 시간 오름차순으로 조회합니다.
    async fn find_all(&self, filter: &BookFilter) -> AppResult<Vec<Book>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>>;

    /// 같은 `id`의 도서를 교체합니다. 존재하지 않으면 `None`.
    async fn replace(&self, book: Book) -> AppResult<Option<Book>>;

    /// 삭제 여부를 반환합니다.
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 이메일 또는 사용자명이 이미 존재하면 `ConflictError`.
    async fn create(&self, user: User) -> AppResult<User>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}
