#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared form DTOs for the Tubelens search endpoint.
//!
//! The Yew front-end builds its form controls from these types and field
//! names, so the payload it posts stays in lockstep with the `/search`
//! handler contract. The checkbox wire format follows the HTML default: a
//! checked box posts the literal value `on`, an unchecked box posts nothing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field names posted by the search form.
pub mod fields {
    /// Genre used for AI keyword expansion.
    pub const GENRE: &str = "genre";
    /// Free-text search keywords.
    pub const QUERY: &str = "query";
    /// Result type restriction.
    pub const VIDEO_TYPE: &str = "video_type";
    /// Result ordering.
    pub const ORDER: &str = "order";
    /// Lower bound on publish date.
    pub const PUBLISHED_AFTER: &str = "published_after";
    /// Upper bound on publish date.
    pub const PUBLISHED_BEFORE: &str = "published_before";
    /// Result cap per keyword.
    pub const MAX_RESULTS: &str = "max_results";
    /// Spreadsheet-integration checkbox.
    pub const USE_SHEETS: &str = "use_sheets_integration";
}

/// Value posted by a checked HTML checkbox.
const CHECKBOX_ON: &str = "on";

/// Result cap applied when the form leaves the field untouched.
pub const DEFAULT_MAX_RESULTS: u32 = 20;

/// Where the search results go once the handler has collected them.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExportMode {
    /// Bundle the results into downloadable CSV files.
    #[default]
    CsvDownload,
    /// Write the results to a Google spreadsheet.
    SheetsExport,
}

impl ExportMode {
    /// Whether the spreadsheet path is selected.
    #[must_use]
    pub const fn is_sheets(self) -> bool {
        matches!(self, Self::SheetsExport)
    }

    /// Decode the checkbox field from a posted form.
    ///
    /// Only the literal `on` selects the spreadsheet path; an absent field
    /// (unchecked box) or any other value falls back to CSV download.
    #[must_use]
    pub fn from_form_value(value: Option<&str>) -> Self {
        if value == Some(CHECKBOX_ON) {
            Self::SheetsExport
        } else {
            Self::CsvDownload
        }
    }

    /// Encode the mode as the checkbox field value, `None` when unchecked.
    #[must_use]
    pub const fn form_value(self) -> Option<&'static str> {
        match self {
            Self::CsvDownload => None,
            Self::SheetsExport => Some(CHECKBOX_ON),
        }
    }
}

/// Result type restriction passed through to the video search API.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VideoType {
    /// No restriction.
    #[default]
    Any,
    /// Individual videos.
    Video,
    /// Channels.
    Channel,
    /// Playlists.
    Playlist,
}

impl VideoType {
    /// All supported types in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Any, Self::Video, Self::Channel, Self::Playlist]
    }

    /// Wire value used by the form and the search API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Video => "video",
            Self::Channel => "channel",
            Self::Playlist => "playlist",
        }
    }
}

/// Result ordering passed through to the video search API.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SearchOrder {
    /// Best match first.
    #[default]
    Relevance,
    /// Most recent first.
    Date,
    /// Most viewed first.
    ViewCount,
    /// Highest rated first.
    Rating,
}

impl SearchOrder {
    /// All supported orderings in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Relevance, Self::Date, Self::ViewCount, Self::Rating]
    }

    /// Wire value used by the form and the search API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Date => "date",
            Self::ViewCount => "viewCount",
            Self::Rating => "rating",
        }
    }
}

/// Payload posted by the search form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    /// Genre handed to the AI keyword generator; mutually optional with `query`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Free-text search keywords.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Result type restriction.
    #[serde(default)]
    pub video_type: VideoType,
    /// Result ordering.
    #[serde(default)]
    pub order: SearchOrder,
    /// Lower bound on publish date (RFC 3339 date), when given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_after: Option<String>,
    /// Upper bound on publish date (RFC 3339 date), when given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_before: Option<String>,
    /// Result cap per keyword.
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// Selected output path for the results.
    #[serde(default)]
    pub export: ExportMode,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            genre: None,
            query: None,
            video_type: VideoType::default(),
            order: SearchOrder::default(),
            published_after: None,
            published_before: None,
            max_results: DEFAULT_MAX_RESULTS,
            export: ExportMode::default(),
        }
    }
}

impl SearchRequest {
    /// Check the request for the invariants the handler enforces.
    ///
    /// # Errors
    /// Returns [`SearchRequestError::MissingSearchTerms`] when both `genre`
    /// and `query` are blank, and [`SearchRequestError::InvalidMaxResults`]
    /// when the result cap is zero.
    pub fn validate(&self) -> Result<(), SearchRequestError> {
        let genre = self.genre.as_deref().unwrap_or_default().trim();
        let query = self.query.as_deref().unwrap_or_default().trim();
        if genre.is_empty() && query.is_empty() {
            return Err(SearchRequestError::MissingSearchTerms);
        }
        if self.max_results == 0 {
            return Err(SearchRequestError::InvalidMaxResults {
                value: self.max_results,
            });
        }
        Ok(())
    }
}

const fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

/// Validation failures for a posted search request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchRequestError {
    /// Neither a genre nor search keywords were supplied.
    #[error("a genre or search keyword is required")]
    MissingSearchTerms,
    /// The result cap was zero.
    #[error("max_results must be at least 1")]
    InvalidMaxResults {
        /// Offending cap supplied by the caller.
        value: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_wire_format_round_trips() {
        assert_eq!(
            ExportMode::from_form_value(Some("on")),
            ExportMode::SheetsExport
        );
        assert_eq!(ExportMode::from_form_value(None), ExportMode::CsvDownload);
        assert_eq!(
            ExportMode::from_form_value(Some("true")),
            ExportMode::CsvDownload
        );
        for mode in [ExportMode::CsvDownload, ExportMode::SheetsExport] {
            assert_eq!(ExportMode::from_form_value(mode.form_value()), mode);
        }
    }

    #[test]
    fn export_mode_defaults_to_csv() {
        assert_eq!(ExportMode::default(), ExportMode::CsvDownload);
        assert!(!ExportMode::default().is_sheets());
        assert!(ExportMode::SheetsExport.is_sheets());
    }

    #[test]
    fn order_wire_values_match_the_search_api() {
        assert_eq!(SearchOrder::ViewCount.as_str(), "viewCount");
        assert_eq!(
            serde_json::to_value(SearchOrder::ViewCount).unwrap(),
            serde_json::json!("viewCount")
        );
        for order in SearchOrder::all() {
            assert_eq!(
                serde_json::to_value(order).unwrap(),
                serde_json::json!(order.as_str())
            );
        }
    }

    #[test]
    fn video_type_wire_values_are_stable() {
        for kind in VideoType::all() {
            assert_eq!(
                serde_json::to_value(kind).unwrap(),
                serde_json::json!(kind.as_str())
            );
        }
    }

    #[test]
    fn request_defaults_mirror_the_form() {
        let request = SearchRequest::default();
        assert_eq!(request.max_results, DEFAULT_MAX_RESULTS);
        assert_eq!(request.video_type, VideoType::Any);
        assert_eq!(request.order, SearchOrder::Relevance);
        assert_eq!(request.export, ExportMode::CsvDownload);
    }

    #[test]
    fn validation_requires_genre_or_query() {
        let empty = SearchRequest::default();
        assert_eq!(
            empty.validate(),
            Err(SearchRequestError::MissingSearchTerms)
        );

        let blank = SearchRequest {
            query: Some("   ".to_string()),
            ..SearchRequest::default()
        };
        assert_eq!(
            blank.validate(),
            Err(SearchRequestError::MissingSearchTerms)
        );

        let by_query = SearchRequest {
            query: Some("rust tutorials".to_string()),
            ..SearchRequest::default()
        };
        assert_eq!(by_query.validate(), Ok(()));

        let by_genre = SearchRequest {
            genre: Some("cooking".to_string()),
            ..SearchRequest::default()
        };
        assert_eq!(by_genre.validate(), Ok(()));
    }

    #[test]
    fn validation_rejects_zero_result_cap() {
        let request = SearchRequest {
            query: Some("rust".to_string()),
            max_results: 0,
            ..SearchRequest::default()
        };
        assert_eq!(
            request.validate(),
            Err(SearchRequestError::InvalidMaxResults { value: 0 })
        );
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let request: SearchRequest = serde_json::from_str(r#"{"query":"lofi"}"#).unwrap();
        assert_eq!(request.query.as_deref(), Some("lofi"));
        assert_eq!(request.max_results, DEFAULT_MAX_RESULTS);
        assert_eq!(request.export, ExportMode::CsvDownload);
    }

    #[test]
    fn field_names_match_the_handler_contract() {
        assert_eq!(fields::USE_SHEETS, "use_sheets_integration");
        assert_eq!(fields::MAX_RESULTS, "max_results");
        assert_eq!(fields::PUBLISHED_AFTER, "published_after");
    }
}
