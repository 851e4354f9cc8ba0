use async_trait::async_trait;

use crate::{
    dto::{NoticeDetail, NoticeListItem, NoticeSaveRequest, NoticeUpdateRequest, Page, PageRequest},
    models::Role,
    repository::Repository,
};

use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    AccessDenied(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),
}

/// Everything the notice routes need from the business layer.
///
/// Implementations are shared across concurrent requests behind an `Arc`.
#[async_trait]
pub trait NoticeService: Send + Sync {
    /// Posts a notice on behalf of `author_email`.
    ///
    /// Fails with [`ServiceError::NotFound`] for an unknown author and
    /// [`ServiceError::AccessDenied`] when the author may not post.
    async fn create_notice(
        &self,
        request: NoticeSaveRequest,
        author_email: &str,
    ) -> Result<(), ServiceError>;

    async fn notice_list(
        &self,
        request: PageRequest,
    ) -> Result<Page<NoticeListItem>, ServiceError>;

    async fn notice_detail(&self, id: i64) -> Result<NoticeDetail, ServiceError>;

    async fn update_notice(
        &self,
        id: i64,
        request: NoticeUpdateRequest,
    ) -> Result<(), ServiceError>;

    /// Removing an id that does not exist is not an error.
    async fn delete_notice(&self, id: i64) -> Result<(), ServiceError>;
}

#[derive(Clone)]
pub struct PgNoticeService {
    repo: Arc<tokio::sync::Mutex<Repository>>,
}

impl PgNoticeService {
    pub const fn new(repo: Arc<tokio::sync::Mutex<Repository>>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl NoticeService for PgNoticeService {
    async fn create_notice(
        &self,
        request: NoticeSaveRequest,
        author_email: &str,
    ) -> Result<(), ServiceError> {
        let repo = self.repo.lock().await;

        let author = repo
            .find_author_by_email(author_email)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Author not found: {author_email}")))?;

        if author.role != Role::Admin {
            return Err(ServiceError::AccessDenied(
                "Only administrators can post notices".to_string(),
            ));
        }

        let id = repo
            .create_notice(author.id, request.title, request.contents)
            .await?;
        tracing::info!("Notice {} created by {} <{}>", id, author.name, author.email);

        Ok(())
    }

    async fn notice_list(
        &self,
        request: PageRequest,
    ) -> Result<Page<NoticeListItem>, ServiceError> {
        let repo = self.repo.lock().await;

        let notices = repo.list_notices(&request).await?;
        let total = repo.count_notices().await?;

        Ok(Page::new(
            notices.into_iter().map(NoticeListItem::from).collect(),
            request,
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn notice_detail(&self, id: i64) -> Result<NoticeDetail, ServiceError> {
        self.repo
            .lock()
            .await
            .get_notice(id)
            .await?
            .map(NoticeDetail::from)
            .ok_or_else(|| ServiceError::NotFound(format!("Notice not found: {id}")))
    }

    async fn update_notice(
        &self,
        id: i64,
        request: NoticeUpdateRequest,
    ) -> Result<(), ServiceError> {
        let updated = self
            .repo
            .lock()
            .await
            .update_notice(id, request.title, request.contents)
            .await?;

        if updated {
            Ok(())
        } else {
            Err(ServiceError::NotFound(format!("Notice not found: {id}")))
        }
    }

    async fn delete_notice(&self, id: i64) -> Result<(), ServiceError> {
        let deleted = self.repo.lock().await.delete_notice(id).await?;
        if !deleted {
            tracing::debug!("Notice {} was already absent", id);
        }
        Ok(())
    }
}
