//! Sort and filter options for the video listing.

use crate::error::CoreError;

/// Columns a video listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoSortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
    Duration,
}

impl VideoSortField {
    /// Parse the `sort_by` query value. `None` means the default.
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some("created_at") | Some("createdAt") => Ok(Self::CreatedAt),
            Some("updated_at") | Some("updatedAt") => Ok(Self::UpdatedAt),
            Some("title") => Ok(Self::Title),
            Some("duration") => Ok(Self::Duration),
            Some(other) => Err(CoreError::Validation(format!(
                "Invalid sort field '{other}'. Must be one of: created_at, updated_at, title, duration"
            ))),
        }
    }

    /// Fully-qualified column used in `ORDER BY`.
    pub fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "v.created_at",
            Self::UpdatedAt => "v.updated_at",
            Self::Title => "v.title",
            Self::Duration => "v.duration",
        }
    }
}

/// Sort direction. Only an explicit `asc` sorts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()) {
            Some(s) if s == "asc" => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub fn sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Build the `ORDER BY` clause body. A tie-break on id keeps pages stable.
pub fn order_by(field: VideoSortField, direction: SortDirection) -> String {
    format!("{} {}, v.id {}", field.column(), direction.sql(), direction.sql())
}

/// Escape `%`, `_` and `\` so user text matches literally inside `ILIKE`.
pub fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Turn an optional free-text query into a substring `ILIKE` pattern.
/// Blank input means "no filter".
pub fn contains_pattern(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|q| !q.is_empty())
        .map(|q| format!("%{}%", escape_like(q)))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn sort_field_defaults_to_created_at() {
        assert_eq!(VideoSortField::parse(None).unwrap(), VideoSortField::CreatedAt);
        assert_eq!(VideoSortField::parse(Some("")).unwrap(), VideoSortField::CreatedAt);
    }

    #[test]
    fn sort_field_accepts_camel_case_alias() {
        assert_eq!(
            VideoSortField::parse(Some("createdAt")).unwrap(),
            VideoSortField::CreatedAt
        );
    }

    #[test]
    fn sort_field_rejects_unknown_column() {
        assert_matches!(
            VideoSortField::parse(Some("owner_id; DROP TABLE videos")),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn direction_defaults_to_desc() {
        assert_eq!(SortDirection::parse(None), SortDirection::Desc);
        assert_eq!(SortDirection::parse(Some("sideways")), SortDirection::Desc);
        assert_eq!(SortDirection::parse(Some("ASC")), SortDirection::Asc);
    }

    #[test]
    fn order_by_clause() {
        assert_eq!(
            order_by(VideoSortField::Title, SortDirection::Asc),
            "v.title ASC, v.id ASC"
        );
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("100%_a\\b"), "100\\%\\_a\\\\b");
    }

    #[test]
    fn blank_query_means_no_filter() {
        assert_eq!(contains_pattern(Some("   ")), None);
        assert_eq!(contains_pattern(Some("Rust")), Some("%Rust%".to_string()));
    }
}
