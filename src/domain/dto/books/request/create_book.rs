//! 도서 생성/교체 요청 DTO
//!
//! `POST /api/books`와 `PUT /api/books/{id}`가 같은 규칙을 공유합니다.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::core::errors::AppResult;
use crate::domain::dto::factory::RequestKind;
use crate::domain::dto::validation::{
    FieldSpec, RequestDto, check_rules, number_field, require, string_field,
};
use crate::domain::entities::NewBook;

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct CreateBookDto {
    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title must not be empty")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "author is required"),
        length(min = 1, message = "author must not be empty")
    )]
    pub author: Option<String>,

    #[validate(
        required(message = "category is required"),
        length(min = 1, message = "category must not be empty")
    )]
    pub category: Option<String>,

    #[validate(
        required(message = "price is required"),
        range(min = 0.0, message = "price must be greater than or equal to 0")
    )]
    pub price: Option<f64>,

    #[validate(
        required(message = "rating is required"),
        range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5")
    )]
    pub rating: Option<f64>,

    /// `YYYY-MM-DD` 또는 RFC 3339 날짜/시간
    #[validate(
        required(message = "publishedDate is required"),
        custom(function = "validate_published_date")
    )]
    pub published_date: Option<String>,
}

fn validate_published_date(value: &str) -> Result<(), ValidationError> {
    if parse_published_date(value).is_none() {
        return Err(ValidationError::new("invalid_date")
            .with_message("publishedDate must be a valid ISO-8601 date".into()));
    }
    Ok(())
}

/// ISO-8601 날짜 문자열을 달력 날짜로 변환합니다.
///
/// 시간 정보가 포함된 경우 입력에 명시된 오프셋 기준의 날짜를 사용합니다.
pub fn parse_published_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

impl RequestDto for CreateBookDto {
    const KIND: RequestKind = RequestKind::CreateBook;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::string("title"),
        FieldSpec::string("author"),
        FieldSpec::string("category"),
        FieldSpec::number("price"),
        FieldSpec::number("rating"),
        FieldSpec::string("publishedDate").attr("published_date"),
    ];
    type Model = NewBook;

    fn from_raw(data: &Value) -> Self {
        Self {
            title: string_field(data, "title"),
            author: string_field(data, "author"),
            category: string_field(data, "category"),
            price: number_field(data, "price"),
            rating: number_field(data, "rating"),
            published_date: string_field(data, "publishedDate"),
        }
    }

    fn to_model(&self) -> AppResult<NewBook> {
        check_rules(self)?;

        Ok(NewBook {
            title: require(&self.title, "title")?,
            author: require(&self.author, "author")?,
            category: require(&self.category, "category")?,
            price: require(&self.price, "price")?,
            rating: require(&self.rating, "rating")?,
            // 검증된 원문을 보존하여 입력과 모델이 같은 값을 갖도록 합니다.
            published_date: require(&self.published_date, "publishedDate")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::domain::dto::validation::FieldError;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "title": "Test Book",
            "author": "Test Author",
            "category": "Fiction",
            "price": 12.99,
            "rating": 4.5,
            "publishedDate": "2023-01-01"
        })
    }

    fn fields(details: &[FieldError]) -> Vec<&str> {
        details.iter().map(|d| d.field.as_str()).collect()
    }

    #[test]
    fn test_valid_payload_passes() {
        assert_eq!(CreateBookDto::validate_payload(&valid_payload()), Ok(()));
    }

    #[test]
    fn test_missing_author_is_reported() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("author");

        let details = CreateBookDto::validate_payload(&payload).unwrap_err();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].field, "author");
        assert!(details[0].message.contains("author"));
    }

    #[test]
    fn test_rating_above_five_is_reported() {
        let mut payload = valid_payload();
        payload["rating"] = json!(6.0);

        let details = CreateBookDto::validate_payload(&payload).unwrap_err();
        assert_eq!(fields(&details), vec!["rating"]);
        assert!(details[0].message.contains("rating"));
    }

    #[test]
    fn test_rating_bounds_are_inclusive() {
        for rating in [0.0, 5.0] {
            let mut payload = valid_payload();
            payload["rating"] = json!(rating);
            assert!(CreateBookDto::validate_payload(&payload).is_ok());
        }
    }

    #[test]
    fn test_negative_price_is_reported() {
        let mut payload = valid_payload();
        payload["price"] = json!(-0.01);

        let details = CreateBookDto::validate_payload(&payload).unwrap_err();
        assert_eq!(fields(&details), vec!["price"]);
    }

    #[test]
    fn test_empty_payload_reports_every_field_in_order() {
        let details = CreateBookDto::validate_payload(&json!({})).unwrap_err();
        assert_eq!(
            fields(&details),
            vec!["title", "author", "category", "price", "rating", "publishedDate"]
        );
    }

    #[test]
    fn test_price_as_string_is_a_type_error() {
        let mut payload = valid_payload();
        payload["price"] = json!("12.99");

        let details = CreateBookDto::validate_payload(&payload).unwrap_err();
        assert_eq!(details, vec![FieldError::new("price", "price must be a number")]);
    }

    #[test]
    fn test_invalid_date_is_reported_with_input_name() {
        let mut payload = valid_payload();
        payload["publishedDate"] = json!("2023-13-45");

        let details = CreateBookDto::validate_payload(&payload).unwrap_err();
        assert_eq!(fields(&details), vec!["publishedDate"]);
        assert!(details[0].message.starts_with("publishedDate"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut payload = valid_payload();
        payload["isbn"] = json!("978-3-16-148410-0");
        payload["createdAt"] = json!("2020-01-01");

        assert!(CreateBookDto::validate_payload(&payload).is_ok());
        let dto = CreateBookDto::from_raw(&payload);
        assert_eq!(dto, CreateBookDto::from_raw(&valid_payload()));
    }

    #[test]
    fn test_to_model_round_trips_input() {
        let dto = CreateBookDto::from_raw(&valid_payload());
        let model = dto.to_model().unwrap();

        assert_eq!(serde_json::to_value(&model).unwrap(), valid_payload());
    }

    #[test]
    fn test_to_model_keeps_date_time_input_unchanged() {
        let mut payload = valid_payload();
        payload["publishedDate"] = json!("2023-01-01T10:30:00Z");

        let model = CreateBookDto::from_raw(&payload).to_model().unwrap();

        assert_eq!(model.published_date, "2023-01-01T10:30:00Z");
        assert_eq!(serde_json::to_value(&model).unwrap(), payload);
    }

    #[test]
    fn test_to_model_rejects_unvalidated_dto() {
        let dto = CreateBookDto::from_raw(&json!({ "title": "Only a title" }));
        assert!(matches!(dto.to_model(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_rfc3339_dates_are_accepted() {
        assert_eq!(
            parse_published_date("2023-01-01T10:30:00Z"),
            NaiveDate::from_ymd_opt(2023, 1, 1)
        );
        assert_eq!(
            parse_published_date("2023-01-01T10:30:00"),
            NaiveDate::from_ymd_opt(2023, 1, 1)
        );
        assert_eq!(parse_published_date("01/01/2023"), None);
    }
}
