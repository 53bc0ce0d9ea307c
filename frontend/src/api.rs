use std::fmt;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::get_api_base_url;
use crate::session::{clear_stored_token, stored_token};

/// Normalized failure of an API call. Every request in the app funnels
/// through this taxonomy so pages only have to match three cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 401: the stored token is missing, invalid or expired.
    Unauthorized,
    /// Any other non-success response, carrying the problem detail the API
    /// sent back.
    Api(String),
    /// The request never completed.
    Network(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Session expired. Please log in again."),
            ApiError::Api(detail) => write!(f, "{detail}"),
            ApiError::Network(detail) => write!(f, "Network error: {detail}"),
        }
    }
}

/// Error body shape the API uses (API Platform problem documents).
#[derive(Debug, Deserialize)]
struct ProblemBody {
    detail: Option<String>,
    title: Option<String>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    pseudo: &'a str,
    email: &'a str,
    password: &'a str,
}

fn url(path: &str) -> String {
    format!("{}{}", get_api_base_url(), path)
}

fn authorized(request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    let request = request.header("Accept", "application/ld+json");
    match stored_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {token}")),
        None => request,
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.status() == 401 {
        // token invalid or expired, drop it so the next load starts clean
        clear_stored_token();
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        let detail = response
            .json::<ProblemBody>()
            .await
            .ok()
            .and_then(|problem| problem.detail.or(problem.title))
            .unwrap_or_else(|| format!("API error ({})", response.status()));
        return Err(ApiError::Api(detail));
    }
    Ok(response)
}

async fn into_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Api(format!("Unexpected response shape: {err}")))
}

/// Authenticated GET returning the decoded JSON body.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = authorized(Request::get(&url(path)))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    into_json(check(response).await?).await
}

/// Authenticated POST returning the decoded JSON body.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = authorized(Request::post(&url(path)))
        .json(body)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    into_json(check(response).await?).await
}

/// Authenticated POST where the response body (if any) is discarded.
pub async fn post_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = authorized(Request::post(&url(path)))
        .json(body)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    check(response).await.map(|_| ())
}

/// Exchanges credentials for a bearer token. Unauthenticated on purpose;
/// a 401 here means bad credentials, not an expired session.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    let response = Request::post(&url("/login"))
        .json(&LoginRequest { email, password })
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Api("Incorrect email or password".to_string()));
    }
    let body: LoginResponse = into_json(response).await?;
    Ok(body.token)
}

/// Creates an account. The caller is expected to follow up with `login`.
pub async fn register(pseudo: &str, email: &str, password: &str) -> Result<(), ApiError> {
    let response = Request::post(&url("/user"))
        .json(&RegisterRequest { pseudo, email, password })
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        let detail = response
            .json::<ProblemBody>()
            .await
            .ok()
            .and_then(|problem| problem.detail.or(problem.title))
            .unwrap_or_else(|| "Registration failed".to_string());
        return Err(ApiError::Api(detail));
    }
    Ok(())
}
