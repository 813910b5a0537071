use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    #[must_use]
    pub fn from_is_home(is_home: bool) -> Self {
        if is_home { Side::Home } else { Side::Away }
    }
}
