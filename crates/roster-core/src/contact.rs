use serde::{Deserialize, Serialize};

/// A single entry in the contact collection.
///
/// The id is assigned when the contact is created and never changes
/// afterwards, two contacts are the same entity exactly if their ids match.
/// The avatar is carried inline as a URL, either a regular one or a `data:`
/// URL holding a rendered thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}
