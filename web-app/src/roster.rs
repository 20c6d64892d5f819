use shared::data::{sample_members, Member};

/// The members served by the app, held in managed state.
pub struct Roster(Vec<Member>);

impl Roster {
    pub fn new(members: Vec<Member>) -> Self {
        Self(members)
    }

    pub fn sample() -> Self {
        Self::new(sample_members())
    }

    pub fn members(&self) -> &[Member] {
        &self.0
    }
}
