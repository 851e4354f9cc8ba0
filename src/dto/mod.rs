mod page;

pub use page::{
    DEFAULT_PAGE_SIZE, Direction, MAX_PAGE_SIZE, Page, PageParamError, PageParams, PageRequest,
    SortKey,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Notice;

/// Fields missing from the submitted form bind as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeSaveRequest {
    /// Notice title
    pub title: String,
    /// Notice body
    pub contents: String,
    /// Email of the posting author
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeUpdateRequest {
    /// Notice title
    pub title: String,
    /// Notice body
    pub contents: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeDetail {
    pub id: i64,
    pub title: String,
    pub contents: String,
    pub author_email: String,
    pub created_time: DateTime<Utc>,
    pub updated_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeListItem {
    pub id: i64,
    pub title: String,
    pub author_email: String,
    pub created_time: DateTime<Utc>,
}

impl From<Notice> for NoticeDetail {
    fn from(notice: Notice) -> Self {
        Self {
            id: notice.id,
            title: notice.title,
            contents: notice.contents,
            author_email: notice.author_email,
            created_time: notice.created_time,
            updated_time: notice.updated_time,
        }
    }
}

impl From<Notice> for NoticeListItem {
    fn from(notice: Notice) -> Self {
        Self {
            id: notice.id,
            title: notice.title,
            author_email: notice.author_email,
            created_time: notice.created_time,
        }
    }
}
