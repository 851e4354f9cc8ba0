use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    Id,
    Title,
    #[default]
    CreatedTime,
    UpdatedTime,
}

impl SortKey {
    /// Column the key orders by. Only these fixed names ever reach SQL.
    pub const fn column(self) -> &'static str {
        match self {
            Self::Id => "n.id",
            Self::Title => "n.title",
            Self::CreatedTime => "n.created_time",
            Self::UpdatedTime => "n.updated_time",
        }
    }

    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::CreatedTime => "createdTime",
            Self::UpdatedTime => "updatedTime",
        }
    }
}

impl FromStr for SortKey {
    type Err = PageParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "createdTime" => Ok(Self::CreatedTime),
            "updatedTime" => Ok(Self::UpdatedTime),
            other => Err(PageParamError::UnknownSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Asc,
    #[default]
    Desc,
}

impl Direction {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for Direction {
    type Err = PageParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(PageParamError::UnknownDirection(s.to_string()))
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PageParamError {
    #[error("Unknown sort key: '{0}'")]
    UnknownSortKey(String),

    #[error("Unknown sort direction: '{0}'")]
    UnknownDirection(String),
}

/// Raw pagination query parameters, every one optional.
///
/// `page` and `size` stay strings so that blank or malformed values fall
/// back to the defaults instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub size: Option<String>,
    /// Either `key` or `key,direction`
    pub sort: Option<String>,
    pub direction: Option<String>,
}

fn parse_number(value: Option<&str>) -> Option<u32> {
    value.and_then(|v| v.trim().parse::<u32>().ok())
}

impl PageParams {
    /// Fills in the defaults (page 0, size 10, newest first) and validates sorting.
    pub fn resolve(self) -> Result<PageRequest, PageParamError> {
        let size = match parse_number(self.size.as_deref()) {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(size) => size.min(MAX_PAGE_SIZE),
        };

        let (sort, mut direction) = match self.sort.as_deref().map(str::trim) {
            None | Some("") => (SortKey::default(), Direction::default()),
            Some(value) => match value.split_once(',') {
                Some((key, dir)) => (key.parse()?, dir.parse()?),
                None => (value.parse()?, Direction::default()),
            },
        };

        if let Some(dir) = self.direction.as_deref().filter(|d| !d.trim().is_empty()) {
            direction = dir.parse()?;
        }

        Ok(PageRequest {
            page: parse_number(self.page.as_deref()).unwrap_or(0),
            size,
            sort,
            direction,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: SortKey,
    pub direction: Direction,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: SortKey::default(),
            direction: Direction::default(),
        }
    }
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

/// One slice of an ordered result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub sort: SortKey,
    pub direction: Direction,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            number: request.page,
            size: request.size,
            sort: request.sort,
            direction: request.direction,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(u64::from(self.size))
    }

    pub const fn is_first(&self) -> bool {
        self.number == 0
    }

    pub fn is_last(&self) -> bool {
        u64::from(self.number) + 1 >= self.total_pages()
    }

    pub const fn previous_number(&self) -> u32 {
        self.number.saturating_sub(1)
    }

    pub const fn next_number(&self) -> u32 {
        self.number.saturating_add(1)
    }

    /// One-based page number for display.
    pub const fn display_number(&self) -> u64 {
        self.number as u64 + 1
    }
}
