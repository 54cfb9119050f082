//! 비즈니스 로직 계층
//!
//! 서비스는 저장소 trait 객체와 설정 값을 생성자로 전달받으며,
//! [`AppState`](crate::core::state::AppState)가 이를 한 번 조립해 모든 워커에 공유합니다.

pub mod auth;
pub mod books;
pub mod users;

pub use auth::TokenService;
pub use books::BookService;
pub use users::UserService;
