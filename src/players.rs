use std::collections::HashMap;
use std::fmt;

use crate::error::{FiggieError, FiggieResult};

/// Stable handle for a participant. Only valid against the `Roster` that
/// issued it: looking up a handle from another round's roster is a contract
/// violation and may panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(u8);

impl PlayerId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The participant set for one round. The bot is always `PlayerId(0)`.
#[derive(Debug, Clone)]
pub struct Roster {
    names: Vec<String>,
    lookup: HashMap<String, PlayerId>,
}

impl Roster {
    pub fn new<S: AsRef<str>>(bot: &str, opponents: &[S]) -> FiggieResult<Roster> {
        let mut roster = Roster {
            names: Vec::with_capacity(opponents.len() + 1),
            lookup: HashMap::new(),
        };
        roster.push(bot)?;
        for name in opponents {
            roster.push(name.as_ref())?;
        }
        Ok(roster)
    }

    fn push(&mut self, name: &str) -> FiggieResult<()> {
        if self.lookup.contains_key(name) {
            return Err(FiggieError::DuplicatePlayer(name.to_string()));
        }
        let id = u8::try_from(self.names.len()).map_err(|_| {
            FiggieError::InvalidConfig("too many players for one round".to_string())
        })?;
        self.lookup.insert(name.to_string(), PlayerId(id));
        self.names.push(name.to_string());
        Ok(())
    }

    pub fn bot(&self) -> PlayerId {
        PlayerId(0)
    }

    pub fn is_bot(&self, id: PlayerId) -> bool {
        id == self.bot()
    }

    pub fn id(&self, name: &str) -> FiggieResult<PlayerId> {
        self.lookup
            .get(name)
            .copied()
            .ok_or_else(|| FiggieError::UnknownPlayer(name.to_string()))
    }

    /// Panics if `id` was issued by a different, larger roster.
    pub fn name(&self, id: PlayerId) -> &str {
        &self.names[id.index()]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.names.len() as u8).map(PlayerId)
    }

    pub fn opponents(&self) -> impl Iterator<Item = PlayerId> {
        self.ids().skip(1)
    }
}
