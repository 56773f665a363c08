use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::JsonPayloadError,
    Error, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::core::AppError;

/// Middleware that logs every error a handler turns into a response
pub struct ErrorHandler;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorHandlerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let path = req.path().to_string();

        Box::pin(async move {
            let result = service.call(req).await;

            match &result {
                Ok(res) => {
                    if let Some(err) = res.response().error() {
                        if res.status().is_server_error() {
                            tracing::error!(path = %path, status = %res.status(), "Request error: {}", err);
                        } else {
                            tracing::warn!(path = %path, status = %res.status(), "Request rejected: {}", err);
                        }
                    }
                }
                Err(err) => {
                    tracing::error!(path = %path, "Request error: {:?}", err);
                }
            }

            result
        })
    }
}

/// Turn JSON extractor failures into the application's error format
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let app_error = match err {
        JsonPayloadError::ContentType => {
            AppError::validation("Content-Type must be application/json")
        }
        JsonPayloadError::Deserialize(e) => {
            AppError::validation(format!("Invalid request body: {}", e))
        }
        other => AppError::validation(format!("Invalid request body: {}", other)),
    };

    app_error.into()
}
