use serde::Deserialize;
use strum_macros::Display;

/// The closed set of item types the Hacker News API serves.
///
/// Deserializing through this enum makes type-set membership a decode-time
/// guarantee: an unknown tag fails to parse instead of slipping through as a
/// free-form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ItemType {
    Story,
    Comment,
    Poll,
    Job,
    Pollopt,
}

/// The subset of the item schema the acceptance scenarios consume.
///
/// Unknown fields in the response are ignored; absent optional fields decode
/// to `None`, and an absent `kids` array decodes to an empty list (the API
/// omits the field entirely when an item has no children).
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Item {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: Option<ItemType>,
    pub title: Option<String>,
    pub text: Option<String>,
    #[serde(default)]
    pub kids: Vec<u64>,
}
