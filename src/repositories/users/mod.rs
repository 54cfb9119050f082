//! 사용자 데이터 액세스 계층
//!
//! [`MongoUserRepository`](user_repo::MongoUserRepository)는 `users` 컬렉션을 사용하며,
//! 이메일/사용자명 유니크 인덱스로 동시 가입 경합을 막습니다.
//!
//! ```rust,ignore
//! let users = MongoUserRepository::new(database.clone());
//! users.create_indexes().await?;
//! let user = users.find_by_email("user@example.com").await?;
//! ```

pub mod user_repo;
