use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 도서 엔티티
///
/// `books` 컬렉션에 저장되는 영속 객체입니다. 클라이언트에는 항상
/// [`BookDto`](crate::domain::dto::books::response::BookDto)로 투영되어 전달되므로
/// 타임스탬프 등 저장 전용 필드는 응답에 노출되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// UUID v4 문자열
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
    /// ISO-8601 날짜 또는 날짜/시간 문자열
    pub published_date: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

/// 검증된 도서 입력 모델
///
/// 생성과 전체 교체(PUT)에 공통으로 사용됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
    pub published_date: String,
}

impl Book {
    /// 새 도서를 생성합니다. 식별자와 타임스탬프는 여기서 부여됩니다.
    pub fn new(input: NewBook) -> Self {
        let now = DateTime::now();
        let NewBook {
            title,
            author,
            category,
            price,
            rating,
            published_date,
        } = input;

        Self {
            id: Uuid::new_v4().to_string(),
            title,
            author,
            category,
            price,
            rating,
            published_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// 입력 모델로 모든 필드를 교체합니다. `id`와 `created_at`은 유지됩니다.
    pub fn replace_with(&mut self, input: NewBook) {
        self.title = input.title;
        self.author = input.author;
        self.category = input.category;
        self.price = input.price;
        self.rating = input.rating;
        self.published_date = input.published_date;
        self.updated_at = DateTime::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> NewBook {
        NewBook {
            title: "Test Book".to_string(),
            author: "Test Author".to_string(),
            category: "Fiction".to_string(),
            price: 12.99,
            rating: 4.5,
            published_date: "2023-01-01".to_string(),
        }
    }

    #[test]
    fn test_new_book_assigns_uuid_and_timestamps() {
        let book = Book::new(sample_input());

        assert!(Uuid::parse_str(&book.id).is_ok());
        assert_eq!(book.created_at, book.updated_at);
        assert_eq!(book.title, "Test Book");
    }

    #[test]
    fn test_replace_keeps_identity() {
        let mut book = Book::new(sample_input());
        let id = book.id.clone();
        let created_at = book.created_at;

        book.replace_with(NewBook {
            title: "Second Edition".to_string(),
            ..sample_input()
        });

        assert_eq!(book.id, id);
        assert_eq!(book.created_at, created_at);
        assert_eq!(book.title, "Second Edition");
    }
}
