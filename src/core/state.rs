//! 애플리케이션 상태 조립
//!
//! 설정, 저장소, 서비스를 시작 단계에서 한 번 연결하고
//! `web::Data<AppState>`로 모든 핸들러와 미들웨어에 공유합니다.

use std::sync::Arc;

use crate::config::{AppConfig, StorageBackend};
use crate::core::errors::AppResult;
use crate::db::Database;
use crate::repositories::{
    BookRepository, InMemoryBookRepository, InMemoryUserRepository, MongoBookRepository,
    MongoUserRepository, UserRepository,
};
use crate::services::{BookService, TokenService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub books: Arc<BookService>,
    pub users: Arc<UserService>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    /// 주어진 저장소 구현으로 서비스를 조립합니다.
    pub fn new(
        config: AppConfig,
        book_repo: Arc<dyn BookRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        let tokens = Arc::new(TokenService::new(&config.jwt));
        let books = Arc::new(BookService::new(book_repo));
        let users = Arc::new(UserService::new(user_repo, tokens.clone(), config.bcrypt_cost));

        Self {
            config: Arc::new(config),
            books,
            users,
            tokens,
        }
    }

    /// 인메모리 저장소를 사용하는 상태
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryBookRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
        )
    }

    /// 설정된 저장소 백엔드에 연결하여 상태를 구성합니다.
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        match config.database.backend {
            StorageBackend::Memory => {
                log::warn!("⚠️ 인메모리 저장소 사용 - 재시작 시 데이터가 사라집니다");
                Ok(Self::in_memory(config))
            }
            StorageBackend::MongoDb => {
                log::info!("📡 데이터베이스 연결 중...");
                let database = Arc::new(Database::connect(&config.database).await?);

                let book_repo = MongoBookRepository::new(database.clone());
                let user_repo = MongoUserRepository::new(database);
                book_repo.create_indexes().await?;
                user_repo.create_indexes().await?;
                log::info!("✅ 인덱스 생성 완료");

                Ok(Self::new(config, Arc::new(book_repo), Arc::new(user_repo)))
            }
        }
    }
}
