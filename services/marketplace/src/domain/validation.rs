//! Field presence, length, MIME type and size checks applied before any
//! network call.

use std::sync::LazyLock;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use uuid::Uuid;

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
pub const ADVICE_BODY_MAX_CHARS: usize = 2000;
pub const NAME_MAX_CHARS: usize = 100;

const MIB: u64 = 1024 * 1024;

static YOUTUBE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/.+").expect("valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("{field} must be a {expected} file")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("{field} must be at most {max_mib} MB")]
    TooLarge { field: &'static str, max_mib: u64 },
    #[error("{field} must be a YouTube URL")]
    NotYoutube { field: &'static str },
    #[error("provide either a video URL or a video file, not both")]
    AmbiguousVideo,
}

/// Trims `value` and checks it is present and at most `max` characters long.
pub fn required_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing { field });
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(trimmed.to_owned())
}

/// Blank input is treated as absent.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

pub fn youtube_url(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if YOUTUBE_URL.is_match(trimmed) {
        Ok(trimmed.to_owned())
    } else {
        Err(ValidationError::NotYoutube { field })
    }
}

// ── Assets ───────────────────────────────────────────────────────────────────

/// A file received from a multipart form.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: Option<String>,
    pub content_type: String,
    pub bytes: Bytes,
}

impl FileUpload {
    fn extension(&self) -> Option<String> {
        let from_name = self
            .file_name
            .as_deref()
            .and_then(|n| n.rsplit_once('.'))
            .map(|(_, ext)| ext)
            .and_then(usable_extension);
        let from_mime = self
            .content_type
            .split_once('/')
            .map(|(_, sub)| sub.split(';').next().unwrap_or(sub).trim())
            .and_then(usable_extension);
        from_name.or(from_mime)
    }
}

fn usable_extension(ext: &str) -> Option<String> {
    (!ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .then(|| ext.to_ascii_lowercase())
}

/// The three kinds of binary asset the marketplace stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Avatar,
    NutritionDocument,
    WorkoutVideo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssetLimits {
    pub accept: &'static str,
    pub max_bytes: u64,
}

impl AssetKind {
    pub fn limits(self) -> AssetLimits {
        match self {
            Self::Avatar => AssetLimits {
                accept: "image/*",
                max_bytes: 5 * MIB,
            },
            Self::NutritionDocument => AssetLimits {
                accept: "application/pdf",
                max_bytes: 10 * MIB,
            },
            Self::WorkoutVideo => AssetLimits {
                accept: "video/*",
                max_bytes: 100 * MIB,
            },
        }
    }

    fn expected(self) -> &'static str {
        match self {
            Self::Avatar => "image",
            Self::NutritionDocument => "PDF",
            Self::WorkoutVideo => "video",
        }
    }

    fn accepts(self, content_type: &str) -> bool {
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match self.limits().accept.strip_suffix('*') {
            Some(prefix) => mime.starts_with(prefix) && mime.len() > prefix.len(),
            None => mime == self.limits().accept,
        }
    }

    /// Checks presence, MIME type and size ceiling of `file`.
    pub fn check(self, field: &'static str, file: &FileUpload) -> Result<(), ValidationError> {
        if file.bytes.is_empty() {
            return Err(ValidationError::Missing { field });
        }
        if !self.accepts(&file.content_type) {
            return Err(ValidationError::WrongType {
                field,
                expected: self.expected(),
            });
        }
        let limits = self.limits();
        if file.bytes.len() as u64 > limits.max_bytes {
            return Err(ValidationError::TooLarge {
                field,
                max_mib: limits.max_bytes / MIB,
            });
        }
        Ok(())
    }

    /// Unique object name for an upload by `owner` at `at`. A random
    /// suffix separates uploads landing in the same millisecond.
    pub fn object_name(self, owner: Uuid, at: DateTime<Utc>, file: &FileUpload) -> String {
        let millis = at.timestamp_millis();
        let suffix = Uuid::new_v4().simple().to_string();
        let suffix = &suffix[..8];
        match self {
            Self::NutritionDocument => format!("plan-{owner}-{millis}-{suffix}.pdf"),
            Self::WorkoutVideo => {
                let ext = file.extension().unwrap_or_else(|| "mp4".to_owned());
                format!("workout-{owner}-{millis}-{suffix}.{ext}")
            }
            Self::Avatar => {
                let ext = file.extension().unwrap_or_else(|| "png".to_owned());
                format!("{owner}-{millis}-{suffix}.{ext}")
            }
        }
    }
}

/// Recovers the object name from a public URL of `bucket`.
pub fn object_name_in<'a>(url: &'a str, bucket: &str) -> Option<&'a str> {
    let marker = format!("/{bucket}/");
    url.rsplit_once(marker.as_str())
        .map(|(_, name)| name)
        .filter(|name| !name.is_empty())
}
