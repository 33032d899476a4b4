//! Revision - data revision token
//!
//! Totally ordered; a larger revision was published later. Revision 0 is
//! the empty snapshot every store starts from.

use serde::Serialize;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct Revision(u64);

impl Revision {
    pub const INITIAL: Revision = Revision(0);

    #[inline]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }

    #[inline]
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}
