//! Post payload validation middleware.
//!
//! Runs in front of the post create and replace handlers and rejects bodies
//! that lack a required field or carry a wrongly typed id, before any
//! database access happens.

use actix_web::{
    Error, ResponseError,
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    web,
};
use serde_json::Value;
use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::rc::Rc;

use super::error::AppError;

/// Required string fields of a post body.
const TEXT_FIELDS: [&str; 4] = ["title", "image", "description", "content"];

/// Required integer reference fields of a post body.
const ID_FIELDS: [&str; 2] = ["category_id", "status_id"];

/// Check a raw post body, collecting one message per offending field.
pub fn validate_post_body(body: &[u8]) -> Result<(), Vec<String>> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| vec![format!("body is not valid JSON: {}", e)])?;

    let Some(object) = value.as_object() else {
        return Err(vec!["body must be a JSON object".to_string()]);
    };

    let mut errors = Vec::new();

    for field in TEXT_FIELDS {
        match object.get(field) {
            Some(Value::String(s)) if !s.trim().is_empty() => {}
            None | Some(Value::Null) | Some(Value::String(_)) => {
                errors.push(format!("{} is required", field));
            }
            Some(_) => errors.push(format!("{} must be a string", field)),
        }
    }

    for field in ID_FIELDS {
        match object.get(field) {
            None | Some(Value::Null) => errors.push(format!("{} is required", field)),
            Some(v) => match v.as_i64() {
                Some(id) if id > 0 && id <= i64::from(i32::MAX) => {}
                Some(_) => errors.push(format!("{} must be a positive integer", field)),
                None => errors.push(format!("{} must be an integer", field)),
            },
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Middleware factory validating post bodies. Attached to the create and
/// replace routes only.
pub struct PostValidation;

impl<S, B> Transform<S, ServiceRequest> for PostValidation
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = PostValidationService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(PostValidationService {
            service: Rc::new(service),
        }))
    }
}

pub struct PostValidationService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for PostValidationService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let body = req.extract::<web::Bytes>().await?;

            if let Err(errors) = validate_post_body(&body) {
                tracing::warn!(path = %req.path(), ?errors, "Rejected post payload");
                let response = AppError::Validation(errors).error_response();
                return Ok(req.into_response(response).map_into_right_body());
            }

            // The body was consumed above; hand it back for the handler.
            req.set_payload(Payload::from(body));

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "title": "Cats",
        "image": "https://img.example/cat.png",
        "category_id": 1,
        "description": "About cats",
        "content": "Cats sleep a lot.",
        "status_id": 2
    }"#;

    #[test]
    fn accepts_complete_body() {
        assert!(validate_post_body(VALID.as_bytes()).is_ok());
    }

    #[test]
    fn reports_each_missing_field() {
        let errors = validate_post_body(br#"{"title": "", "image": "x"}"#).unwrap_err();
        assert!(errors.contains(&"title is required".to_string()));
        assert!(errors.contains(&"content is required".to_string()));
        assert!(errors.contains(&"status_id is required".to_string()));
        assert!(!errors.iter().any(|e| e.starts_with("image")));
    }

    #[test]
    fn ids_must_be_integers() {
        let body = VALID.replace("\"category_id\": 1", "\"category_id\": \"1\"");
        let errors = validate_post_body(body.as_bytes()).unwrap_err();
        assert_eq!(errors, vec!["category_id must be an integer".to_string()]);

        let body = VALID.replace("\"status_id\": 2", "\"status_id\": 0");
        let errors = validate_post_body(body.as_bytes()).unwrap_err();
        assert_eq!(errors, vec!["status_id must be a positive integer".to_string()]);
    }

    #[test]
    fn rejects_non_objects() {
        assert!(validate_post_body(b"[1, 2]").is_err());
        assert!(validate_post_body(b"not json").is_err());
    }
}
