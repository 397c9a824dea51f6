//! Acceptance-test harness for the Hacker News Firebase API.
//!
//! The crate is two small building blocks composed linearly: [`api::HnClient`]
//! performs a single HTTP GET and decodes the JSON body into a typed
//! destination, and [`retry::Retryer`] re-runs any fallible operation up to a
//! bound with linear backoff. The acceptance scenarios under `tests/` are
//! consumers of these two pieces.
//!
//! ```no_run
//! use hn_acceptance::api::{HnClient, StoryListType};
//! use hn_acceptance::retry::Retryer;
//!
//! let client = HnClient::new();
//! let retryer = Retryer::default();
//! let ids = retryer
//!     .run(|| client.fetch_story_ids(StoryListType::Top))
//!     .expect("top stories should be reachable");
//! assert!(!ids.is_empty());
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod retry;

pub use api::{HnClient, StoryListType};
pub use error::FetchError;
pub use models::{Item, ItemType};
pub use retry::{RetryError, Retryer};
