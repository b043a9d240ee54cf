//! 요청 본문 추출기

use std::future::ready;

use actix_web::dev::Payload;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, web};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use crate::core::errors::AppError;

/// 최대 요청 본문 크기 (1 MiB)
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// `Content-Type: application/json`인 본문만 받는 JSON 추출기
///
/// `charset` 같은 파라미터는 허용하지만, `text/json`처럼 미디어 타입 자체가 다르면
/// 본문을 읽기 전에 `invalid_content_type`으로 거부합니다.
/// 본문 크기 제한과 역직렬화 에러 처리는 등록된 [`web::JsonConfig`]를 따릅니다.
#[derive(Debug)]
pub struct StrictJson<T>(pub T);

impl<T> StrictJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for StrictJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if !has_json_content_type(req) {
            return Box::pin(ready(Err(AppError::InvalidContentType.into())));
        }

        let body = web::Json::<T>::from_request(req, payload);
        Box::pin(async move { body.await.map(|json| StrictJson(json.into_inner())) })
    }
}

fn has_json_content_type(req: &HttpRequest) -> bool {
    matches!(req.mime_type(), Ok(Some(mime)) if mime.essence_str() == "application/json")
}

/// JSON 본문 설정: 1 MiB 제한, 모든 추출 에러를 [`AppError`]로 변환
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(|err, _req| AppError::from(err).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_content_type_essence_must_be_application_json() {
        let accepted = ["application/json", "application/json; charset=utf-8"];
        for value in accepted {
            let req = TestRequest::default()
                .insert_header(("Content-Type", value))
                .to_http_request();
            assert!(has_json_content_type(&req), "{value} should be accepted");
        }

        let rejected = ["text/json", "text/plain", "application/problem+json", "not a mime"];
        for value in rejected {
            let req = TestRequest::default()
                .insert_header(("Content-Type", value))
                .to_http_request();
            assert!(!has_json_content_type(&req), "{value} should be rejected");
        }

        assert!(!has_json_content_type(&TestRequest::default().to_http_request()));
    }
}
