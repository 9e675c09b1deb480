use serde::{Deserialize, Serialize};

/// What happens when the side about to move has no capturing move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PassPolicy {
    /// The game ends as soon as the side to move is blocked, even if the
    /// opponent could still play.
    #[default]
    EndOnFirstBlock,
    /// Tournament rules: a blocked side passes and the opponent moves again.
    /// The game ends only when neither side can move.
    ForcedPass,
}

/// Engine rules, deserializable from the presentation layer's settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Rules {
    pub pass_policy: PassPolicy,
}

impl Rules {
    pub fn forced_pass() -> Self {
        Self {
            pass_policy: PassPolicy::ForcedPass,
        }
    }
}
