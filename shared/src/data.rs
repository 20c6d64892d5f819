use serde::{Deserialize, Serialize};

/// A single entry of the member roster.
///
/// `id` is only used to key rows and is never displayed. It has to be unique
/// within any list that gets rendered, but nothing here checks that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub role: String,
}

impl Member {
    pub fn new(id: i32, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
        }
    }
}

/// The hardcoded roster shown until there is a real place to load members from.
pub fn sample_members() -> Vec<Member> {
    vec![
        Member::new(1, "João", "Líder"),
        Member::new(2, "Maria", "Professor"),
    ]
}
