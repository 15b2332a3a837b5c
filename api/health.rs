use smart_card_tunisia_api::models::health::HealthStatus;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    run(handler).await
}

/// Respond to any invocation of `/api/health`.
///
/// The request is never inspected: any method, path, headers, or body yield
/// the same response, a 200 whose body is the fixed JSON text
/// `{"message":"Smart Card Tunisia API is running"}`.
pub async fn handler(_req: Request) -> Result<Response<Body>, Error> {
    let payload = serde_json::to_string(&HealthStatus::running())?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload))?)
}
