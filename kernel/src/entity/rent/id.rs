use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Fromln, AsRefln)]
pub struct RentId(i64);

impl RentId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}
