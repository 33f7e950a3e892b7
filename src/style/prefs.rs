use std::cell::Cell;
use std::rc::Rc;

use crate::foundation::core::Rgba8;

/// Resolved user preferences. Read once per visible session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Preferences {
    #[serde(with = "hex_color")]
    pub background_color: Rgba8,
    #[serde(with = "hex_color")]
    pub highlight_color: Rgba8,
    pub unread_notifications_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            background_color: Rgba8::BLACK,
            highlight_color: Rgba8::RED,
            unread_notifications_enabled: true,
        }
    }
}

/// Where the engine gets its preferences from.
pub trait PreferenceSource {
    fn load(&self) -> Preferences;
}

/// In-memory preference source. Clones share the same values, so a host or
/// test can change them between visible sessions.
#[derive(Clone, Debug, Default)]
pub struct StaticPreferences {
    current: Rc<Cell<Preferences>>,
}

impl StaticPreferences {
    pub fn new(prefs: Preferences) -> Self {
        Self {
            current: Rc::new(Cell::new(prefs)),
        }
    }

    pub fn set(&self, prefs: Preferences) {
        self.current.set(prefs);
    }
}

impl PreferenceSource for StaticPreferences {
    fn load(&self) -> Preferences {
        self.current.get()
    }
}

mod hex_color {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::foundation::core::Rgba8;

    pub(super) fn serialize<S: Serializer>(c: &Rgba8, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&c.to_hex())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Rgba8, D::Error> {
        let s = String::deserialize(d)?;
        Rgba8::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
