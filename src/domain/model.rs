use crate::utils::error::{Result, ScanError};
use serde::{Deserialize, Serialize};

/// A tagged member of an action. `type` is kept verbatim, including any
/// `::` scoping and trailing `*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub inputs: Vec<Field>,
    pub outputs: Vec<Field>,
}

/// The aggregated document. `count` is derived from `actions` on
/// construction and rejected on load if the two disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawManifest")]
pub struct Manifest {
    actions: Vec<Action>,
    count: usize,
}

#[derive(Deserialize)]
struct RawManifest {
    actions: Vec<Action>,
    count: usize,
}

impl TryFrom<RawManifest> for Manifest {
    type Error = ScanError;

    fn try_from(raw: RawManifest) -> Result<Self> {
        if raw.count != raw.actions.len() {
            return Err(ScanError::ValidationError {
                message: format!(
                    "manifest count is {} but it lists {} actions",
                    raw.count,
                    raw.actions.len()
                ),
            });
        }
        Ok(Self::new(raw.actions))
    }
}

impl Manifest {
    pub fn new(actions: Vec<Action>) -> Self {
        let count = actions.len();
        Self { actions, count }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }

    /// Pretty JSON with two-space indentation and fixed key order.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
