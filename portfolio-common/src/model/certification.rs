use serde::{Deserialize, Serialize};

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct Certification {
    pub year: String,
    pub title: String,
    pub issuer: String,
    pub description: String,
}
