//! 영속 엔티티와 검증된 입력 모델

pub mod books;
pub mod users;

pub use books::book::{Book, NewBook};
pub use users::user::{Credentials, NewUser, User};
