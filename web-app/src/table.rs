//! The member table as a plain structure, before any markup is involved.

use serde::Serialize;
use shared::data::Member;

/// Column labels, in display order.
pub const HEADERS: [&str; 2] = ["Nome", "Função"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberTable {
    pub header: [&'static str; 2],
    pub rows: Vec<MemberRow>,
}

/// One body row. `cells` holds the name followed by the role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRow {
    pub key: i32,
    pub cells: [String; 2],
}

impl MemberTable {
    /// Projects `members` into a header plus one row per member, keeping the input order.
    pub fn new(members: &[Member]) -> Self {
        Self {
            header: HEADERS,
            rows: members.iter().map(MemberRow::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<&[Member]> for MemberTable {
    fn from(value: &[Member]) -> Self {
        Self::new(value)
    }
}

impl From<&Member> for MemberRow {
    fn from(value: &Member) -> Self {
        Self {
            key: value.id,
            cells: [value.name.clone(), value.role.clone()],
        }
    }
}
