use axum::{
    Form,
    extract::{Path, Query, State},
};
use axum_macros::debug_handler;

use std::sync::Arc;

use crate::{
    dto::{NoticeSaveRequest, NoticeUpdateRequest, PageParams},
    error::AppError,
    service::{NoticeService, ServiceError},
    views::{Outcome, View},
};

pub const LIST_PATH: &str = "/notice/list";

pub fn detail_path(id: i64) -> String {
    format!("/notice/detail/{id}")
}

#[debug_handler]
pub async fn create_notice_form() -> Outcome {
    Outcome::View(View::Create {
        error_message: None,
    })
}

#[debug_handler]
pub async fn create_notice(
    State(service): State<Arc<dyn NoticeService>>,
    Form(payload): Form<NoticeSaveRequest>,
) -> Result<Outcome, AppError> {
    let email = payload.email.clone();

    match service.create_notice(payload, &email).await {
        Ok(()) => Ok(Outcome::redirect(LIST_PATH)),
        Err(e @ (ServiceError::AccessDenied(_) | ServiceError::NotFound(_))) => {
            tracing::warn!("notice creation refused for '{}': {}", email, e);
            Ok(Outcome::View(View::Create {
                error_message: Some(e.to_string()),
            }))
        }
        Err(e) => Err(e.into()),
    }
}

#[debug_handler]
pub async fn get_all_notices(
    State(service): State<Arc<dyn NoticeService>>,
    Query(params): Query<PageParams>,
) -> Result<Outcome, AppError> {
    let request = params.resolve()?;
    let notice_list = service.notice_list(request).await?;

    Ok(Outcome::View(View::List { notice_list }))
}

#[debug_handler]
pub async fn get_notice_detail(
    State(service): State<Arc<dyn NoticeService>>,
    Path(id): Path<i64>,
) -> Result<Outcome, AppError> {
    let notice = service.notice_detail(id).await?;

    Ok(Outcome::View(View::Detail { notice }))
}

#[debug_handler]
pub async fn update_notice(
    State(service): State<Arc<dyn NoticeService>>,
    Path(id): Path<i64>,
    Form(payload): Form<NoticeUpdateRequest>,
) -> Result<Outcome, AppError> {
    service.update_notice(id, payload).await?;
    tracing::info!("Notice {} updated", id);

    Ok(Outcome::redirect(detail_path(id)))
}

#[debug_handler]
pub async fn delete_notice(
    State(service): State<Arc<dyn NoticeService>>,
    Path(id): Path<i64>,
) -> Result<Outcome, AppError> {
    service.delete_notice(id).await?;
    tracing::info!("Notice {} deleted", id);

    Ok(Outcome::redirect(LIST_PATH))
}
