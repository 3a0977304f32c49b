//! Front-matter parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use super::PostMeta;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_READ_TIME: &str = "5 min read";

/// Accept any YAML scalar as a string; `~` and collections count as absent
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Accept booleans and the usual spellings of them in strings
fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => Some(b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Front-matter data from a post, exactly as written by the author
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub author: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(rename = "readTime", deserialize_with = "lenient_string")]
    pub read_time: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub featured: Option<bool>,

    /// Keys without a dedicated field, in file order
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Values used for fields the author left out
#[derive(Debug, Clone)]
pub struct MetaDefaults {
    pub author: String,
    /// Effective date of undated posts
    pub today: NaiveDate,
}

impl MetaDefaults {
    /// Defaults with today's UTC date
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            today: chrono::Utc::now().date_naive(),
        }
    }
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// Content without a front-matter block, or whose leading `---` block
    /// does not look like YAML, yields the default front-matter and the
    /// content unchanged. A block that looks like YAML but fails to parse
    /// is an error.
    pub fn parse(content: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        let Some(rest) = content.strip_prefix("---") else {
            return Ok((FrontMatter::default(), content));
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        // An empty block closes immediately
        let (yaml_content, remaining) = if let Some(after) = rest.strip_prefix("---") {
            ("", after)
        } else if let Some(end_pos) = rest.find("\n---") {
            (&rest[..end_pos], &rest[end_pos + 4..])
        } else {
            return Ok((FrontMatter::default(), content));
        };
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        if !looks_like_yaml(yaml_content) {
            return Ok((FrontMatter::default(), content));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)?;
        Ok((fm, remaining))
    }

    /// Fill in defaults and produce the listing metadata for `slug`
    pub fn into_meta(self, slug: &str, defaults: &MetaDefaults) -> (PostMeta, IndexMap<String, Value>) {
        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => defaults.today,
            Some(raw) => parse_date_string(raw).unwrap_or_else(|| {
                tracing::warn!("Unrecognized date {:?} in {}, using today", raw, slug);
                defaults.today
            }),
        };

        let meta = PostMeta {
            slug: slug.to_string(),
            title: non_empty(self.title).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            date,
            excerpt: self.excerpt.unwrap_or_default(),
            author: non_empty(self.author).unwrap_or_else(|| defaults.author.clone()),
            category: non_empty(self.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            read_time: non_empty(self.read_time).unwrap_or_else(|| DEFAULT_READ_TIME.to_string()),
            featured: self.featured.unwrap_or(false),
        };

        (meta, self.extra)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Heuristic: at least one line is a plain `key: value` pair.
///
/// Keeps a leading Markdown horizontal rule from being read as metadata.
fn looks_like_yaml(block: &str) -> bool {
    block.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        let Some(colon_pos) = trimmed.find(':') else {
            return false;
        };
        let key = &trimmed[..colon_pos];
        let is_valid_key = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            && !matches!(key, "http" | "https" | "ftp");
        if !is_valid_key {
            return false;
        }
        let after_colon = &trimmed[colon_pos + 1..];
        after_colon.is_empty() || after_colon.starts_with(' ')
    })
}

/// Parse a date string in various formats, keeping the calendar date
pub fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    const DATE_TIME_FORMATS: [&str; 7] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 / ISO 8601 with offset; the author's local date wins
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}
