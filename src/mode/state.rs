use crate::foundation::error::FaceWarning;

/// Display capabilities reported once by the host's capability query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DisplayCapabilities {
    /// Ambient mode can only show a reduced number of color bits.
    pub low_bit_ambient: bool,
    /// Static bright pixels must be avoided while ambient.
    pub burn_in_protection: bool,
}

/// Power/display mode of the face.
///
/// Capability flags are fixed for the session once reported; `ambient` and
/// `muted` toggle through explicit mode-change events only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeState {
    ambient: bool,
    muted: bool,
    capabilities: DisplayCapabilities,
    capabilities_reported: bool,
}

impl ModeState {
    pub fn ambient(&self) -> bool {
        self.ambient
    }

    pub fn interactive(&self) -> bool {
        !self.ambient
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn low_bit_ambient(&self) -> bool {
        self.capabilities.low_bit_ambient
    }

    pub fn burn_in_protection(&self) -> bool {
        self.capabilities.burn_in_protection
    }

    pub fn capabilities(&self) -> DisplayCapabilities {
        self.capabilities
    }

    /// Record the capability query result.
    ///
    /// The first report wins. Repeating the same flags is a no-op; a differing
    /// report is rejected and the first flags are kept.
    pub fn report_capabilities(&mut self, caps: DisplayCapabilities) -> Result<bool, FaceWarning> {
        if self.capabilities_reported {
            if caps == self.capabilities {
                return Ok(false);
            }
            return Err(FaceWarning::CapabilitiesAlreadyReported);
        }
        self.capabilities = caps;
        self.capabilities_reported = true;
        Ok(true)
    }

    /// Returns `true` when the flag actually changed.
    pub fn set_ambient(&mut self, ambient: bool) -> bool {
        let changed = self.ambient != ambient;
        self.ambient = ambient;
        changed
    }

    /// Returns `true` when the flag actually changed.
    pub fn set_muted(&mut self, muted: bool) -> bool {
        let changed = self.muted != muted;
        self.muted = muted;
        changed
    }

    /// Ambient on hardware that cannot safely show the configured background.
    pub fn forces_black_background(&self) -> bool {
        self.ambient && (self.capabilities.low_bit_ambient || self.capabilities.burn_in_protection)
    }
}
