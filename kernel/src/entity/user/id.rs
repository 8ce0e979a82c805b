use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Fromln, AsRefln)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}
