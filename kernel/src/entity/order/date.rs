use time::{Date, OffsetDateTime};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct OrderDate(Date);

impl OrderDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    pub fn today() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }
}
