//! The deprecation announcement record.
//!
//! One `DeprecationRecord` captures one announcement as scraped from a
//! provider's deprecation page, plus the bookkeeping needed to recognize
//! that announcement again on a later run.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::hash;
use crate::legacy;

/// A single model-deprecation announcement.
///
/// Dates are stored as opaque strings exactly as published; nothing is
/// validated at construction. The derived fields (`content_hash`,
/// `scraped_at`) are backfilled whenever they arrive empty, so every
/// construction path yields a fully populated record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct DeprecationRecord {
    /// Vendor identifier (e.g. "OpenAI")
    pub provider: String,

    /// Exact API-facing model name (e.g. "gpt-4-32k-0613")
    pub model_id: String,

    /// Human-readable display name
    pub model_name: String,

    /// ISO date the deprecation was announced
    pub announcement_date: String,

    /// ISO date the model stops working
    pub shutdown_date: String,

    /// Recommended replacements, in announcement order (null when none given)
    pub replacement_models: Option<Vec<String>>,

    /// Full announcement text or surrounding context
    pub deprecation_context: String,

    /// Source URL, with anchor where available
    pub url: String,

    /// 16-hex fingerprint over the identity fields, for change detection
    pub content_hash: String,

    /// RFC 3339 timestamp of the scrape that produced this record
    pub scraped_at: String,
}

impl DeprecationRecord {
    /// Create a record from the required announcement fields.
    ///
    /// Optional fields start empty and can be filled with the `with_*`
    /// builders; the content hash and scrape timestamp are derived here.
    pub fn new(
        provider: impl Into<String>,
        model_id: impl Into<String>,
        model_name: impl Into<String>,
        announcement_date: impl Into<String>,
        shutdown_date: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            model_id: model_id.into(),
            model_name: model_name.into(),
            announcement_date: announcement_date.into(),
            shutdown_date: shutdown_date.into(),
            replacement_models: None,
            deprecation_context: String::new(),
            url: String::new(),
            content_hash: String::new(),
            scraped_at: String::new(),
        }
        .normalized()
    }

    /// Set the recommended replacement models.
    pub fn with_replacements(mut self, models: Vec<String>) -> Self {
        self.replacement_models = Some(models);
        self
    }

    /// Set the announcement context text.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.deprecation_context = context.into();
        self
    }

    /// Set the source URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Override the derived content hash.
    pub fn with_content_hash(mut self, content_hash: impl Into<String>) -> Self {
        self.content_hash = content_hash.into();
        self
    }

    /// Override the derived scrape timestamp.
    pub fn with_scraped_at(mut self, scraped_at: impl Into<String>) -> Self {
        self.scraped_at = scraped_at.into();
        self
    }

    /// Backfill the derived fields. Values already present are kept, so
    /// records restored from storage keep their original hash and
    /// timestamp.
    fn normalized(mut self) -> Self {
        if self.scraped_at.is_empty() {
            self.scraped_at = Utc::now().to_rfc3339();
        }

        if self.content_hash.is_empty() {
            self.content_hash = hash::content_fingerprint(
                &self.provider,
                &self.model_id,
                &self.shutdown_date,
                &self.announcement_date,
            );
        }

        self
    }

    /// Flatten into an ordered key-value map, ready for JSON encoding.
    ///
    /// Always emits all ten fields; `replacement_models` maps to null when
    /// absent.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("provider".to_string(), json!(self.provider));
        map.insert("model_id".to_string(), json!(self.model_id));
        map.insert("model_name".to_string(), json!(self.model_name));
        map.insert(
            "announcement_date".to_string(),
            json!(self.announcement_date),
        );
        map.insert("shutdown_date".to_string(), json!(self.shutdown_date));
        map.insert(
            "replacement_models".to_string(),
            json!(self.replacement_models),
        );
        map.insert(
            "deprecation_context".to_string(),
            json!(self.deprecation_context),
        );
        map.insert("url".to_string(), json!(self.url));
        map.insert("content_hash".to_string(), json!(self.content_hash));
        map.insert("scraped_at".to_string(), json!(self.scraped_at));
        map
    }

    /// Rebuild a record from a key-value map.
    ///
    /// Total over any input: missing or wrongly-typed keys fall back to
    /// empty values and unknown keys are ignored. The retired singular
    /// `replacement_model` field is migrated to the list form, and absent
    /// derived fields are backfilled as in [`DeprecationRecord::new`].
    pub fn from_map(data: &Map<String, Value>) -> Self {
        let replacement_models = data
            .get("replacement_models")
            .and_then(Value::as_array)
            .map(|models| {
                models
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            });

        RawRecord {
            provider: string_field(data, "provider"),
            model_id: string_field(data, "model_id"),
            model_name: string_field(data, "model_name"),
            announcement_date: string_field(data, "announcement_date"),
            shutdown_date: string_field(data, "shutdown_date"),
            replacement_models,
            replacement_model: data
                .get("replacement_model")
                .and_then(Value::as_str)
                .map(str::to_string),
            deprecation_context: string_field(data, "deprecation_context"),
            url: string_field(data, "url"),
            content_hash: string_field(data, "content_hash"),
            scraped_at: string_field(data, "scraped_at"),
        }
        .into()
    }

    /// Whether this record is the same announcement as a previously stored
    /// one: same provider, same model, unchanged content hash.
    ///
    /// Descriptive fields (display name, context, URL) do not participate;
    /// a change to any hashed identity field surfaces as a hash mismatch.
    pub fn matches_previous(&self, other: &DeprecationRecord) -> bool {
        self.provider == other.provider
            && self.model_id == other.model_id
            && self.content_hash == other.content_hash
    }

    /// Lenient parse of the shutdown date.
    ///
    /// Accepts a plain ISO date or an RFC 3339 timestamp; anything else
    /// (including prose like "later this year") is `None`.
    pub fn shutdown_as_date(&self) -> Option<NaiveDate> {
        parse_date(&self.shutdown_date)
    }

    /// Whether the shutdown date has passed (UTC). Missing or unparseable
    /// dates count as not yet shut down.
    pub fn is_past_shutdown(&self) -> bool {
        self.shutdown_as_date()
            .map(|date| date < Utc::now().date_naive())
            .unwrap_or(false)
    }

    /// Signed days from today (UTC) until shutdown; negative once past.
    pub fn days_until_shutdown(&self) -> Option<i64> {
        self.shutdown_as_date()
            .map(|date| (date - Utc::now().date_naive()).num_days())
    }

    /// One-line human-readable summary of the announcement.
    pub fn notice(&self) -> String {
        let mut message = format!(
            "{} ({}) from {} is deprecated",
            self.model_name, self.model_id, self.provider
        );

        if !self.shutdown_date.is_empty() {
            message.push_str(&format!(" and shuts down on {}", self.shutdown_date));
        }

        if let Some(models) = &self.replacement_models {
            if !models.is_empty() {
                message.push_str(&format!(
                    ". Recommended replacements: {}",
                    models.join(", ")
                ));
            }
        }

        message.push('.');
        message
    }
}

/// Wire shape of a record, including the retired singular replacement
/// field. All deserialization funnels through here so legacy migration and
/// derived-field backfill apply regardless of entry point.
#[derive(Deserialize)]
struct RawRecord {
    #[serde(default)]
    provider: String,
    #[serde(default)]
    model_id: String,
    #[serde(default)]
    model_name: String,
    #[serde(default)]
    announcement_date: String,
    #[serde(default)]
    shutdown_date: String,
    #[serde(default)]
    replacement_models: Option<Vec<String>>,
    /// Retired single-string form of `replacement_models`; null in some
    /// old captures
    #[serde(default)]
    replacement_model: Option<String>,
    #[serde(default)]
    deprecation_context: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    content_hash: String,
    #[serde(default)]
    scraped_at: String,
}

impl From<RawRecord> for DeprecationRecord {
    fn from(raw: RawRecord) -> Self {
        // An explicit list always wins over the legacy field.
        let replacement_models = match raw.replacement_models {
            Some(models) => Some(models),
            None => legacy::migrate_replacement(raw.replacement_model.as_deref().unwrap_or("")),
        };

        Self {
            provider: raw.provider,
            model_id: raw.model_id,
            model_name: raw.model_name,
            announcement_date: raw.announcement_date,
            shutdown_date: raw.shutdown_date,
            replacement_models,
            deprecation_context: raw.deprecation_context,
            url: raw.url,
            content_hash: raw.content_hash,
            scraped_at: raw.scraped_at,
        }
        .normalized()
    }
}

fn string_field(data: &Map<String, Value>, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = value.parse::<NaiveDate>() {
        return Some(date);
    }

    if let Ok(timestamp) = value.parse::<DateTime<Utc>>() {
        return Some(timestamp.date_naive());
    }

    None
}
