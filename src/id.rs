use std::borrow::Borrow;
use std::fmt;

/// Player identifier.
///
/// Ids are opaque strings supplied by the caller, such as timestamps, so nothing here assumes a
/// format. `PlayerId::new` mints a random one.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Deserialize, serde::Serialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new() -> PlayerId {
        PlayerId(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> PlayerId {
        PlayerId(s.to_owned())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> PlayerId {
        PlayerId(s)
    }
}

impl Borrow<str> for PlayerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
