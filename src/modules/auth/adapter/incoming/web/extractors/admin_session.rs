use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use email_address::EmailAddress;
use std::future::{ready, Ready};

use crate::auth::application::domain::entities::AdminSession;
use crate::shared::api::ApiResponse;

pub const OWNER_EMAIL_HEADER: &str = "X-Owner-Email";

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// Dashboard routes take the token the browser got from login. It is
/// forwarded as-is; the content API decides whether it is valid.
impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        let owner_email = match extract_owner_email(req) {
            Ok(email) => email,
            Err(()) => {
                return ready(Err(create_api_error(ApiResponse::bad_request(
                    "INVALID_OWNER_EMAIL",
                    "X-Owner-Email is not a valid email address",
                ))));
            }
        };

        ready(Ok(AdminSession::new(token, owner_email)))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|s| s.to_string())
}

fn extract_owner_email(req: &HttpRequest) -> Result<Option<String>, ()> {
    let Some(value) = req.headers().get(OWNER_EMAIL_HEADER) else {
        return Ok(None);
    };
    let email = value.to_str().map_err(|_| ())?.trim();
    if email.is_empty() {
        return Ok(None);
    }
    if !EmailAddress::is_valid(email) {
        return Err(());
    }
    Ok(Some(email.to_string()))
}
