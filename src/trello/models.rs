//! Wire models for the Trello REST API.
//!
//! Field names follow the upstream JSON (`idList`, `checkItems`, ...);
//! anything Trello may omit is optional or defaulted so partial
//! representations still deserialize.

use std::fmt;
use std::str::FromStr;

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

/// Trello entity ids are 24 lowercase hex characters.
pub fn is_hex_id(value: &str) -> bool {
    value.len() == 24 && value.bytes().all(|b| b.is_ascii_hexdigit())
}

// =============================================================================
// Position
// =============================================================================

/// Placement of an entity within its parent: `"top"`, `"bottom"`, or a
/// non-negative number. Trello accepts fractional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Position {
    Named(String),
    Numeric(f64),
}

impl Position {
    /// Whether this is a value the upstream API accepts.
    pub fn is_valid(&self) -> bool {
        match self {
            Position::Named(name) => name == "top" || name == "bottom",
            Position::Numeric(value) => value.is_finite() && *value >= 0.0,
        }
    }

    /// Render as the `pos` request parameter.
    pub fn to_query_value(&self) -> String {
        match self {
            Position::Named(name) => name.clone(),
            Position::Numeric(value) if value.fract() == 0.0 => format!("{}", *value as i64),
            Position::Numeric(value) => format!("{value}"),
        }
    }
}

// =============================================================================
// Entities
// =============================================================================

/// A board visible to the authenticated member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub closed: bool,
    pub url: Option<String>,
}

/// A list (column) on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(rename = "idBoard")]
    pub id_board: Option<String>,
    pub pos: Option<f64>,
}

/// A card on a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(rename = "idList")]
    pub id_list: String,
    #[serde(rename = "idBoard")]
    pub id_board: Option<String>,
    pub due: Option<String>,
    #[serde(rename = "dueComplete", default)]
    pub due_complete: bool,
    pub pos: Option<f64>,
    pub url: Option<String>,
}

/// A checklist attached to a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: String,
    pub name: String,
    #[serde(rename = "idCard")]
    pub id_card: Option<String>,
    #[serde(rename = "idBoard")]
    pub id_board: Option<String>,
    pub pos: Option<f64>,
    #[serde(rename = "checkItems", default)]
    pub check_items: Vec<CheckItem>,
}

/// Completion state of a checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckItemState {
    Complete,
    Incomplete,
}

impl CheckItemState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckItemState::Complete => "complete",
            CheckItemState::Incomplete => "incomplete",
        }
    }
}

impl fmt::Display for CheckItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckItemState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complete" => Ok(CheckItemState::Complete),
            "incomplete" => Ok(CheckItemState::Incomplete),
            other => Err(format!(
                "invalid state '{other}', expected 'complete' or 'incomplete'"
            )),
        }
    }
}

/// A single item inside a checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckItem {
    pub id: String,
    pub name: String,
    pub state: CheckItemState,
    #[serde(rename = "idChecklist")]
    pub id_checklist: Option<String>,
    pub due: Option<String>,
    #[serde(rename = "dueReminder")]
    pub due_reminder: Option<f64>,
    #[serde(rename = "idMember")]
    pub id_member: Option<String>,
    pub pos: Option<f64>,
}

/// A comment action created on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentAction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub data: CommentData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentData {
    #[serde(default)]
    pub text: String,
}

// =============================================================================
// Mutation payloads
// =============================================================================

/// Payload for creating a card. Only explicitly-set fields are sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardDraft {
    pub id_list: String,
    pub name: String,
    pub desc: Option<String>,
    pub pos: Option<Position>,
    pub due: Option<String>,
}

impl CardDraft {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("idList", self.id_list.clone()),
            ("name", self.name.trim().to_string()),
        ];
        if let Some(desc) = &self.desc {
            pairs.push(("desc", desc.clone()));
        }
        if let Some(pos) = &self.pos {
            pairs.push(("pos", pos.to_query_value()));
        }
        if let Some(due) = &self.due {
            pairs.push(("due", due.clone()));
        }
        pairs
    }
}

/// Partial update of a list. `None` fields are left untouched upstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPatch {
    pub name: Option<String>,
    pub pos: Option<Position>,
}

impl ListPatch {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", name.trim().to_string()));
        }
        if let Some(pos) = &self.pos {
            pairs.push(("pos", pos.to_query_value()));
        }
        pairs
    }
}

/// Partial update of a card. `None` fields are left untouched upstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardPatch {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub due: Option<String>,
    pub due_complete: Option<bool>,
    pub closed: Option<bool>,
}

impl CardPatch {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", name.trim().to_string()));
        }
        if let Some(desc) = &self.desc {
            pairs.push(("desc", desc.clone()));
        }
        if let Some(due) = &self.due {
            pairs.push(("due", due.clone()));
        }
        if let Some(due_complete) = self.due_complete {
            pairs.push(("dueComplete", due_complete.to_string()));
        }
        if let Some(closed) = self.closed {
            pairs.push(("closed", closed.to_string()));
        }
        pairs
    }
}

/// Payload for creating a checklist item. Absent optional fields are
/// omitted from the request, not defaulted; the name is always sent
/// trimmed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckItemDraft {
    pub name: String,
    pub pos: Option<Position>,
    pub checked: Option<bool>,
    pub due: Option<String>,
    pub due_reminder: Option<f64>,
    pub id_member: Option<String>,
}

impl CheckItemDraft {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("name", self.name.trim().to_string())];
        if let Some(pos) = &self.pos {
            pairs.push(("pos", pos.to_query_value()));
        }
        if let Some(checked) = self.checked {
            pairs.push(("checked", checked.to_string()));
        }
        if let Some(due) = &self.due {
            pairs.push(("due", due.clone()));
        }
        if let Some(due_reminder) = self.due_reminder {
            pairs.push(("dueReminder", format_number(due_reminder)));
        }
        if let Some(id_member) = &self.id_member {
            pairs.push(("idMember", id_member.clone()));
        }
        pairs
    }
}

/// Partial update of a checklist item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckItemPatch {
    pub name: Option<String>,
    pub state: Option<CheckItemState>,
    pub pos: Option<Position>,
    pub due: Option<String>,
    pub due_reminder: Option<f64>,
    pub id_member: Option<String>,
}

impl CheckItemPatch {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", name.trim().to_string()));
        }
        if let Some(state) = self.state {
            pairs.push(("state", state.to_string()));
        }
        if let Some(pos) = &self.pos {
            pairs.push(("pos", pos.to_query_value()));
        }
        if let Some(due) = &self.due {
            pairs.push(("due", due.clone()));
        }
        if let Some(due_reminder) = self.due_reminder {
            pairs.push(("dueReminder", format_number(due_reminder)));
        }
        if let Some(id_member) = &self.id_member {
            pairs.push(("idMember", id_member.clone()));
        }
        pairs
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
