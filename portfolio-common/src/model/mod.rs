pub mod certification;
pub mod post;

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use std::{fmt::Display, marker::PhantomData, str::FromStr};
use thiserror::Error;

#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Id<Marker>(u32, #[serde(skip)] PhantomData<Marker>);

impl<Marker> Id<Marker> {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value, PhantomData)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl<Marker> Display for Id<Marker> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("Not a numeric id: {0:?}")]
pub struct InvalidIdError(String);

/// Accepts plain ASCII digits only, so `+1` is not another spelling of `1`.
impl<Marker> FromStr for Id<Marker> {
    type Err = InvalidIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(InvalidIdError(s.to_owned()));
        }

        s.parse()
            .map(Id::new)
            .map_err(|_| InvalidIdError(s.to_owned()))
    }
}

/// Deserializes an id from a URL path segment, see [`Id::from_str`].
pub fn deserialize_path_id<'de, D, Marker>(deserializer: D) -> Result<Id<Marker>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer)?
        .parse()
        .map_err(D::Error::custom)
}

impl<Marker> From<u32> for Id<Marker> {
    fn from(value: u32) -> Self {
        Id::new(value)
    }
}

impl<Marker> From<Id<Marker>> for u32 {
    fn from(value: Id<Marker>) -> Self {
        value.get()
    }
}
