use serde::Deserialize;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::validation::{FieldError, collect_field_errors};

/// 쿼리 문자열 원문
///
/// 숫자 변환 실패를 필드별 상세 항목으로 보고하기 위해 모든 값을 문자열로 받습니다.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BookListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub category: Option<String>,
}

/// `GET /api/books` 쿼리 파라미터
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct BookListQuery {
    /// 1부터 시작하는 페이지 번호 (기본값 1)
    #[validate(range(min = 1, message = "page must be greater than or equal to 1"))]
    pub page: Option<i64>,

    /// 페이지 크기 (기본값 20, 최대 100)
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<i64>,

    /// 정확히 일치하는 카테고리만 조회
    pub category: Option<String>,
}

/// 상세 항목 정렬 순서
const QUERY_FIELDS: [&str; 2] = ["page", "limit"];

impl BookListQuery {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_LIMIT: u64 = 20;

    /// 쿼리 문자열 원문을 변환하고 검증합니다.
    ///
    /// 숫자가 아닌 값과 범위를 벗어난 값을 모두 모아 하나의 `ValidationError`로 반환합니다.
    pub fn from_params(params: BookListParams) -> AppResult<Self> {
        let mut details = Vec::new();

        let query = Self {
            page: parse_integer(params.page.as_deref(), "page", &mut details),
            limit: parse_integer(params.limit.as_deref(), "limit", &mut details),
            category: params.category,
        };

        if let Err(errors) = query.validate() {
            details.extend(collect_field_errors(&errors));
        }

        if details.is_empty() {
            return Ok(query);
        }

        details.sort_by_key(|detail| {
            QUERY_FIELDS
                .iter()
                .position(|name| *name == detail.field)
                .unwrap_or(QUERY_FIELDS.len())
        });
        Err(AppError::ValidationError(details))
    }

    pub fn page(&self) -> u64 {
        self.page
            .and_then(|page| u64::try_from(page).ok())
            .unwrap_or(Self::DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u64 {
        self.limit
            .and_then(|limit| u64::try_from(limit).ok())
            .unwrap_or(Self::DEFAULT_LIMIT)
    }

    pub fn skip(&self) -> u64 {
        self.page().saturating_sub(1).saturating_mul(self.limit())
    }

    /// 빈 문자열 카테고리는 필터 없음으로 취급
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// 빈 값은 누락으로 취급합니다.
fn parse_integer(value: Option<&str>, field: &str, details: &mut Vec<FieldError>) -> Option<i64> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;

    match value.parse::<i64>() {
        Ok(number) => Some(number),
        Err(_) => {
            details.push(FieldError::new(field, format!("{} must be a number", field)));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, limit: Option<&str>) -> BookListParams {
        BookListParams {
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
            category: None,
        }
    }

    fn details(result: AppResult<BookListQuery>) -> Vec<FieldError> {
        match result {
            Err(AppError::ValidationError(details)) => details,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let query = BookListQuery::from_params(BookListParams::default()).unwrap();
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 20);
        assert_eq!(query.skip(), 0);
    }

    #[test]
    fn test_skip_is_derived_from_page_and_limit() {
        let query = BookListQuery::from_params(params(Some("3"), Some("10"))).unwrap();
        assert_eq!(query.skip(), 20);
    }

    #[test]
    fn test_non_numeric_values_name_their_field() {
        let details = details(BookListQuery::from_params(params(Some("abc"), Some("ten"))));

        assert_eq!(
            details,
            vec![
                FieldError::new("page", "page must be a number"),
                FieldError::new("limit", "limit must be a number"),
            ]
        );
    }

    #[test]
    fn test_out_of_range_values_fail_validation() {
        let details = details(BookListQuery::from_params(params(Some("0"), Some("101"))));

        assert_eq!(
            details,
            vec![
                FieldError::new("page", "page must be greater than or equal to 1"),
                FieldError::new("limit", "limit must be between 1 and 100"),
            ]
        );
    }

    #[test]
    fn test_negative_page_is_a_range_error() {
        let details = details(BookListQuery::from_params(params(Some("-2"), None)));
        assert_eq!(details[0].field, "page");
        assert!(details[0].message.starts_with("page must be greater"));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let query = BookListQuery::from_params(BookListParams {
            page: Some(" ".to_string()),
            limit: Some(String::new()),
            category: Some("  ".to_string()),
        })
        .unwrap();

        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 20);
        assert_eq!(query.category(), None);
    }
}
