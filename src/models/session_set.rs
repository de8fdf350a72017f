use super::session::Session;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_surgery_date;

/// Ordered collection of loaded sessions. Insertion order is the display
/// order until the user moves entries around.
#[derive(Debug, Default)]
pub struct SessionSet {
    sessions: Vec<Session>,
}

impl SessionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter()
    }

    pub fn add(&mut self, session: Session) {
        self.sessions.push(session);
    }

    pub fn extend(&mut self, sessions: impl IntoIterator<Item = Session>) {
        self.sessions.extend(sessions);
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn remove(&mut self, id: &str) -> AppResult<Session> {
        let idx = self.position(id)?;
        Ok(self.sessions.remove(idx))
    }

    pub fn rename(&mut self, id: &str, name: &str) -> AppResult<()> {
        let idx = self.position(id)?;
        self.sessions[idx].custom_name = name.to_string();
        Ok(())
    }

    pub fn set_notes(&mut self, id: &str, notes: &str) -> AppResult<()> {
        let idx = self.position(id)?;
        self.sessions[idx].notes = notes.to_string();
        Ok(())
    }

    /// Move the session at `from` so that it ends up at index `to`.
    /// Out-of-range indices leave the order untouched.
    pub fn move_session(&mut self, from: usize, to: usize) {
        let len = self.sessions.len();
        if from >= len || to >= len || from == to {
            return;
        }
        let s = self.sessions.remove(from);
        self.sessions.insert(to, s);
    }

    /// Sessions ordered by parsed surgery date; undated ones keep their
    /// relative order at the end.
    pub fn chronological(&self, formats: &[String]) -> Vec<&Session> {
        let mut out: Vec<&Session> = self.sessions.iter().collect();
        out.sort_by_key(|s| {
            let date = s
                .summary
                .surgery_date
                .as_deref()
                .and_then(|d| parse_surgery_date(d, formats));
            (date.is_none(), date)
        });
        out
    }

    fn position(&self, id: &str) -> AppResult<usize> {
        self.sessions
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AppError::SessionNotFound(id.to_string()))
    }
}
