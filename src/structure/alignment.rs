// Mon Oct 12 2026 - Alex

use serde::Serialize;

/// Power of two byte alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Alignment {
    value: u64,
}

impl Alignment {
    pub const BYTE: Alignment = Alignment { value: 1 };

    pub fn new(value: u64) -> Option<Self> {
        (value > 0 && value.is_power_of_two()).then_some(Self { value })
    }

    pub fn as_u64(&self) -> u64 {
        self.value
    }

    pub fn align(&self, offset: u64) -> u64 {
        (offset + self.value - 1) & !(self.value - 1)
    }

    /// Caps the alignment at `pack` bytes, as `#pragma pack(n)` does.
    pub fn packed(self, pack: Option<Alignment>) -> Self {
        match pack {
            Some(p) if p.value < self.value => p,
            _ => self,
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::BYTE
    }
}
