//! # Request Validation Primitives
//!
//! 원시 JSON 페이로드를 요청 DTO로 검증하기 위한 공통 구성 요소입니다.
//!
//! 검증은 두 단계로 이루어집니다.
//!
//! 1. **타입 검사**: 선언된 필드가 존재하지만 JSON 타입이 맞지 않으면
//!    `"{field} must be a string"` 형태의 상세 항목을 하나만 남깁니다.
//! 2. **규칙 검사**: 올바른 타입의 필드만 복사한 DTO에 `validator` 규칙을 적용합니다.
//!    이미 타입 오류가 보고된 필드는 `required` 등의 중복 보고를 건너뜁니다.
//!
//! 모든 상세 항목은 DTO에 선언된 필드 순서대로 정렬되고, 메시지는 항상 필드 이름으로 시작합니다.
//! `null` 값은 누락된 필드로 취급합니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::factory::RequestKind;

/// 검증 실패 상세 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// 원시 입력에서의 필드 이름 (예: `publishedDate`)
    pub field: String,
    /// 필드 이름으로 시작하는 사람이 읽을 수 있는 메시지
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 선언된 필드가 기대하는 JSON 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
}

impl FieldKind {
    fn matches(&self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Number => value.is_number(),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            FieldKind::String => "a string",
            FieldKind::Number => "a number",
        }
    }
}

/// DTO가 선언하는 입력 필드 하나
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// 원시 입력에서의 이름
    pub name: &'static str,
    /// DTO 구조체의 필드 이름 (`validator` 에러 키)
    pub attr: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn string(name: &'static str) -> Self {
        Self {
            name,
            attr: name,
            kind: FieldKind::String,
        }
    }

    pub const fn number(name: &'static str) -> Self {
        Self {
            name,
            attr: name,
            kind: FieldKind::Number,
        }
    }

    /// 구조체 필드 이름이 원시 입력 이름과 다를 때 지정합니다.
    pub const fn attr(self, attr: &'static str) -> Self {
        Self { attr, ..self }
    }
}

/// 요청 DTO 공통 인터페이스
///
/// 각 요청 DTO는 자신의 필드 목록과 `validator` 규칙을 선언하고,
/// 원시 입력에서 자신을 구성하는 방법과 도메인 입력 모델로 변환하는 방법을 제공합니다.
pub trait RequestDto: Validate + Sized {
    /// 팩토리에서 이 DTO를 가리키는 요청 종류
    const KIND: RequestKind;

    /// 원시 입력에서 인식하는 필드 목록 (선언 순서가 곧 상세 항목의 순서)
    const FIELDS: &'static [FieldSpec];

    /// 변환 결과인 도메인 입력 모델
    type Model;

    /// 원시 입력에서 DTO를 구성합니다.
    ///
    /// 실패하지 않으며, 올바른 타입의 인식된 필드만 그대로 복사합니다.
    /// 누락되었거나 타입이 맞지 않는 필드는 `None`으로 남습니다.
    fn from_raw(data: &Value) -> Self;

    /// 도메인 입력 모델로 변환합니다.
    ///
    /// 검증을 통과하지 않은 DTO에 호출되면 `ValidationError`를 반환합니다.
    fn to_model(&self) -> AppResult<Self::Model>;

    /// 원시 입력을 이 DTO의 규칙으로 검증합니다.
    fn validate_payload(data: &Value) -> Result<(), Vec<FieldError>> {
        validate_payload::<Self>(data)
    }
}

/// 원시 입력을 `T`의 필드 목록과 규칙으로 검증합니다.
pub fn validate_payload<T: RequestDto>(data: &Value) -> Result<(), Vec<FieldError>> {
    let Some(object) = data.as_object() else {
        return Err(vec![FieldError::new("body", "body must be a JSON object")]);
    };

    let mut details = Vec::new();
    let mut mistyped: Vec<&str> = Vec::new();

    for spec in T::FIELDS {
        if let Some(value) = object.get(spec.name) {
            if !value.is_null() && !spec.kind.matches(value) {
                details.push(FieldError::new(
                    spec.name,
                    format!("{} must be {}", spec.name, spec.kind.describe()),
                ));
                mistyped.push(spec.name);
            }
        }
    }

    details.extend(
        rule_errors(&T::from_raw(data))
            .into_iter()
            .filter(|detail| !mistyped.contains(&detail.field.as_str())),
    );

    if details.is_empty() {
        return Ok(());
    }

    // 안정 정렬이므로 같은 필드 내 메시지 순서는 유지
    details.sort_by_key(|detail| field_position(T::FIELDS, &detail.field));
    Err(details)
}

/// 이미 구성된 DTO에 규칙 검사만 다시 적용합니다.
pub fn check_rules<T: RequestDto>(dto: &T) -> AppResult<()> {
    let mut details = rule_errors(dto);
    if details.is_empty() {
        return Ok(());
    }
    details.sort_by_key(|detail| field_position(T::FIELDS, &detail.field));
    Err(AppError::ValidationError(details))
}

fn rule_errors<T: RequestDto>(dto: &T) -> Vec<FieldError> {
    match dto.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => collect_field_errors(&errors)
            .into_iter()
            .map(|detail| FieldError {
                field: input_name(T::FIELDS, &detail.field).to_string(),
                ..detail
            })
            .collect(),
    }
}

fn input_name<'a>(fields: &[FieldSpec], key: &'a str) -> &'a str {
    match fields.iter().find(|spec| spec.attr == key || spec.name == key) {
        Some(spec) => spec.name,
        None => key,
    }
}

fn field_position(fields: &[FieldSpec], name: &str) -> usize {
    fields
        .iter()
        .position(|spec| spec.name == name)
        .unwrap_or(fields.len())
}

/// `validator` 에러를 상세 항목 목록으로 변환합니다.
///
/// 필드 이름은 `validator`가 보고한 키 그대로이며,
/// 결과는 필드 이름 순으로 정렬되며, 호출자가 필요하면 선언 순서로 다시 정렬합니다.
pub fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let field = field.to_string();
            let messages = field_errors
                .iter()
                .map(|error| match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
                .collect();
            (field, messages)
        })
        .collect();

    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, messages)| {
            messages
                .into_iter()
                .map(move |message| FieldError::new(field.clone(), message))
        })
        .collect()
}

/// 원시 입력에서 문자열 필드를 복사합니다.
pub fn string_field(data: &Value, name: &str) -> Option<String> {
    data.get(name).and_then(Value::as_str).map(str::to_string)
}

/// 원시 입력에서 숫자 필드를 복사합니다.
pub fn number_field(data: &Value, name: &str) -> Option<f64> {
    data.get(name).and_then(Value::as_f64)
}

/// 검증을 거친 DTO의 필수 값을 꺼냅니다.
pub fn require<T: Clone>(value: &Option<T>, field: &str) -> AppResult<T> {
    value
        .clone()
        .ok_or_else(|| AppError::invalid_field(field, format!("{} is required", field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[derive(Debug, Default, Validate)]
    struct Sample {
        #[validate(required(message = "name is required"))]
        name: Option<String>,
        #[validate(
            required(message = "score is required"),
            range(min = 0.0, max = 10.0, message = "score must be between 0 and 10")
        )]
        score: Option<f64>,
        #[validate(custom(function = "never_valid"))]
        note: Option<String>,
    }

    fn never_valid(_: &str) -> Result<(), ValidationError> {
        Err(ValidationError::new("never"))
    }

    impl RequestDto for Sample {
        const KIND: RequestKind = RequestKind::CreateBook;
        const FIELDS: &'static [FieldSpec] = &[
            FieldSpec::string("name"),
            FieldSpec::number("score"),
            FieldSpec::string("note"),
        ];
        type Model = String;

        fn from_raw(data: &Value) -> Self {
            Self {
                name: string_field(data, "name"),
                score: number_field(data, "score"),
                note: string_field(data, "note"),
            }
        }

        fn to_model(&self) -> AppResult<String> {
            require(&self.name, "name")
        }
    }

    #[test]
    fn test_non_object_payload_reports_body() {
        let details = Sample::validate_payload(&serde_json::json!([1, 2])).unwrap_err();
        assert_eq!(details, vec![FieldError::new("body", "body must be a JSON object")]);
    }

    #[test]
    fn test_mistyped_field_reports_only_type_error() {
        let details =
            Sample::validate_payload(&serde_json::json!({ "name": 42, "score": 3 })).unwrap_err();
        assert_eq!(details, vec![FieldError::new("name", "name must be a string")]);
    }

    #[test]
    fn test_null_counts_as_missing() {
        let details =
            Sample::validate_payload(&serde_json::json!({ "name": null, "score": 1 })).unwrap_err();
        assert_eq!(details, vec![FieldError::new("name", "name is required")]);
    }

    #[test]
    fn test_details_follow_declared_field_order() {
        let details =
            Sample::validate_payload(&serde_json::json!({ "score": 11, "note": "x" })).unwrap_err();
        let fields: Vec<&str> = details.iter().map(|d| d.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "score", "note"]);
    }

    #[test]
    fn test_missing_message_falls_back_to_field_name() {
        let details =
            Sample::validate_payload(&serde_json::json!({ "name": "a", "score": 1, "note": "x" }))
                .unwrap_err();
        assert_eq!(details, vec![FieldError::new("note", "note is invalid")]);
    }

    #[test]
    fn test_require_reports_missing_field() {
        let err = Sample::default().to_model().unwrap_err();
        assert_eq!(err, AppError::invalid_field("name", "name is required"));
    }
}
