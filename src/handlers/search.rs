use actix_web::{web, HttpResponse, Result};
use validator::Validate;

use crate::models::{ErrorResponse, SearchRequest, SuggestionsResponse};
use crate::services::SubmitOutcome;
use crate::AppState;

const HOT_SEARCHES: &[&str] = &["AirPods Pro 2", "始祖鸟冲锋衣", "戴森吹风机", "海蓝之谜面霜"];

const DISCLAIMER: &str =
    "* AI 分析基于公开网络信息，仅供参考。购物时请务必再次核实店铺资质（如查看营业执照、官方认证标识等）。";

pub async fn search(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> Result<HttpResponse> {
    // Validate request
    if let Err(e) = req.validate() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::with_details(
            "Invalid request",
            format!("Validation error: {}", e),
        )));
    }

    let outcome = state.controller.submit(&req.query).await;
    if outcome == SubmitOutcome::Superseded {
        tracing::debug!(query = %req.query, "search superseded before it resolved");
        return Ok(HttpResponse::Conflict().json(ErrorResponse::with_details(
            "Search superseded by a newer request",
            req.query.clone(),
        )));
    }

    Ok(HttpResponse::Ok().json(state.controller.render().await))
}

pub async fn current_state(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.controller.render().await))
}

pub async fn suggestions() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(SuggestionsResponse {
        suggestions: HOT_SEARCHES.iter().map(|s| s.to_string()).collect(),
        disclaimer: DISCLAIMER.to_string(),
    }))
}
