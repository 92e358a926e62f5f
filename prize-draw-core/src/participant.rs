use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identity seam for the samplers. All set operations (appointment matching,
/// already-won exclusion) key on the uid; an entry without one sits out
/// prize-targeted draws entirely and can only win through an unconstrained
/// one.
pub trait HasUid {
    fn uid(&self) -> Option<&str>;
}

/// A pool entry. Everything besides `uid` is display data and carried
/// through the draw untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub name: String,
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl HasUid for Participant {
    fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }
}

/// Pins one person to one prize. Several rules may share a `person_uid`
/// (appointed to multiple prizes) or a `prize_id` (multiple appointees);
/// duplicate rules are idempotent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointRule {
    pub prize_id: String,
    pub person_uid: String,
}
