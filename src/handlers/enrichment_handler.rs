use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{QuizzesWrapper, TranscriptWrapper, TranslationInputWrapper},
};

#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the quiz generation API."
    }))
}

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(true)
}

#[post("/generate-quizzes")]
pub async fn generate_quizzes(
    state: web::Data<AppState>,
    request: web::Json<TranscriptWrapper>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let response = state.generation_service.generate(request).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/evaluate-quizzes")]
pub async fn evaluate_quizzes(
    state: web::Data<AppState>,
    request: web::Json<QuizzesWrapper>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .evaluation_service
        .evaluate(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/translate-enrichment")]
pub async fn translate_enrichment(
    state: web::Data<AppState>,
    request: web::Json<TranslationInputWrapper>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .translation_service
        .translate(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_root_banner() {
        let app = test::init_service(App::new().service(root)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["message"], "Welcome to the quiz generation API.");
    }

    #[actix_web::test]
    async fn test_health_returns_true() {
        let app = test::init_service(App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: bool = test::call_and_read_body_json(&app, req).await;

        assert!(body);
    }
}
