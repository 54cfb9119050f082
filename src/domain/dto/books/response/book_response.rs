use serde::{Deserialize, Serialize};

use crate::domain::entities::Book;

/// 도서 응답 DTO
///
/// 허용된 7개 필드만 투영합니다. 엔티티에 저장 전용 필드가 추가되어도
/// 응답 형태는 바뀌지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
    /// 검증 시점의 ISO-8601 문자열 그대로
    pub published_date: String,
}

impl BookDto {
    pub fn from_model(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            category: book.category.clone(),
            price: book.price,
            rating: book.rating,
            published_date: book.published_date.clone(),
        }
    }

    /// 입력 순서를 유지하여 변환합니다.
    pub fn from_model_array(books: &[Book]) -> Vec<Self> {
        books.iter().map(Self::from_model).collect()
    }
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        let Book {
            id,
            title,
            author,
            category,
            price,
            rating,
            published_date,
            ..
        } = book;

        Self {
            id,
            title,
            author,
            category,
            price,
            rating,
            published_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewBook;
    use serde_json::json;

    fn sample_book(title: &str) -> Book {
        let mut book = Book::new(NewBook {
            title: title.to_string(),
            author: "Test Author".to_string(),
            category: "Fiction".to_string(),
            price: 12.99,
            rating: 4.5,
            published_date: "2023-01-01".to_string(),
        });
        book.id = "123".to_string();
        book
    }

    #[test]
    fn test_from_model_projects_allowed_fields_only() {
        let dto = BookDto::from_model(&sample_book("Test Book"));
        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "123",
                "title": "Test Book",
                "author": "Test Author",
                "category": "Fiction",
                "price": 12.99,
                "rating": 4.5,
                "publishedDate": "2023-01-01"
            })
        );
        assert!(value.get("createdAt").is_none());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_from_model_array_preserves_order() {
        let books = vec![sample_book("A"), sample_book("B"), sample_book("C")];
        let titles: Vec<String> = BookDto::from_model_array(&books)
            .into_iter()
            .map(|dto| dto.title)
            .collect();

        assert_eq!(titles, vec!["A", "B", "C"]);
        assert!(BookDto::from_model_array(&[]).is_empty());
    }

    #[test]
    fn test_owned_conversion_matches_borrowed() {
        let book = sample_book("Owned");
        assert_eq!(BookDto::from_model(&book), BookDto::from(book));
    }
}
