//! Model deprecation records.
//!
//! Value objects for tracking vendor announcements that an AI model is
//! being retired. Each record captures the announcement itself (provider,
//! model, dates, replacements, context) plus the bookkeeping a scraper
//! needs to recognize the same announcement on a later run: a short
//! content hash over the identity fields and a scrape timestamp.
//!
//! # Features
//!
//! - **Normalized construction**: missing hash and timestamp are derived at
//!   build time, explicit values are kept
//! - **Flat serialization**: ordered key-value maps suitable for JSON
//!   storage
//! - **Legacy migration**: the retired singular `replacement_model` field
//!   is upgraded to the list form on read
//! - **Change detection**: equivalence over `(provider, model_id,
//!   content_hash)`
//!
//! # Example Record
//!
//! ```json
//! {
//!   "provider": "OpenAI",
//!   "model_id": "gpt-4-32k-0613",
//!   "model_name": "GPT-4 32k",
//!   "announcement_date": "2024-01-01",
//!   "shutdown_date": "2025-01-01",
//!   "replacement_models": ["gpt-4-turbo"],
//!   "deprecation_context": "Older GPT-4 checkpoints are being retired.",
//!   "url": "https://platform.openai.com/docs/deprecations#2024-01-01",
//!   "content_hash": "70183dd6388c56b4",
//!   "scraped_at": "2025-01-02T03:04:05+00:00"
//! }
//! ```

pub mod hash;
pub mod legacy;
pub mod record;

pub use record::DeprecationRecord;
