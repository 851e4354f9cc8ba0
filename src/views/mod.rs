use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    dto::{NoticeDetail, NoticeListItem, Page},
    error::AppError,
};

#[derive(Template)]
#[template(path = "notice/create.html")]
pub struct CreateTemplate {
    pub error_message: Option<String>,
}

#[derive(Template)]
#[template(path = "notice/list.html")]
pub struct ListTemplate {
    pub notice_list: Page<NoticeListItem>,
}

#[derive(Template)]
#[template(path = "notice/detail.html")]
pub struct DetailTemplate {
    pub notice: NoticeDetail,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub reason: String,
    pub message: String,
}

/// A named view together with the attributes it is rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Create { error_message: Option<String> },
    List { notice_list: Page<NoticeListItem> },
    Detail { notice: NoticeDetail },
}

impl View {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "notice/create",
            Self::List { .. } => "notice/list",
            Self::Detail { .. } => "notice/detail",
        }
    }

    pub fn render(self) -> Result<String, askama::Error> {
        match self {
            Self::Create { error_message } => CreateTemplate { error_message }.render(),
            Self::List { notice_list } => ListTemplate { notice_list }.render(),
            Self::Detail { notice } => DetailTemplate { notice }.render(),
        }
    }
}

/// What a notice route answers with: a view to render or a path to go to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    View(View),
    Redirect(String),
}

impl Outcome {
    pub fn redirect(path: impl Into<String>) -> Self {
        Self::Redirect(path.into())
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(path) => Redirect::to(&path).into_response(),
            Self::View(view) => match view.render() {
                Ok(body) => (StatusCode::OK, Html(body)).into_response(),
                Err(e) => AppError::Render(e).into_response(),
            },
        }
    }
}
