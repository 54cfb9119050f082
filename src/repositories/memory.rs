//! 인메모리 저장소
//!
//! `STORAGE_BACKEND=memory` 설정과 통합 테스트에서 사용합니다.
//! 삽입 순서를 유지하는 `Vec`에 보관하므로 생성 시간 오름차순 조회가 그대로 보장됩니다.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{Book, User};
use crate::repositories::{BookFilter, BookRepository, UserRepository};

fn read<T>(lock: &RwLock<T>) -> AppResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|_| AppError::InternalError("인메모리 저장소 잠금이 오염되었습니다".to_string()))
}

fn write<T>(lock: &RwLock<T>) -> AppResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|_| AppError::InternalError("인메모리 저장소 잠금이 오염되었습니다".to_string()))
}

#[derive(Default)]
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, book: Book) -> AppResult<Book> {
        write(&self.books)?.push(book.clone());
        Ok(book)
    }

    async fn find_all(&self, filter: &BookFilter) -> AppResult<Vec<Book>> {
        let skip = usize::try_from(filter.skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(filter.limit).unwrap_or(usize::MAX);

        Ok(read(&self.books)?
            .iter()
            .filter(|book| match &filter.category {
                Some(category) => &book.category == category,
                None => true,
            })
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>> {
        Ok(read(&self.books)?.iter().find(|book| book.id == id).cloned())
    }

    async fn replace(&self, book: Book) -> AppResult<Option<Book>> {
        let mut books = write(&self.books)?;
        match books.iter_mut().find(|existing| existing.id == book.id) {
            Some(existing) => {
                *existing = book.clone();
                Ok(Some(book))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let mut books = write(&self.books)?;
        let before = books.len();
        books.retain(|book| book.id != id);
        Ok(books.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        // 중복 검사와 삽입을 하나의 쓰기 잠금 안에서 수행
        let mut users = write(&self.users)?;

        if users.iter().any(|existing| existing.email == user.email) {
            return Err(AppError::ConflictError("Email is already registered".to_string()));
        }
        if users.iter().any(|existing| existing.username == user.username) {
            return Err(AppError::ConflictError("Username is already taken".to_string()));
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(read(&self.users)?.iter().find(|user| user.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(read(&self.users)?
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }
}
