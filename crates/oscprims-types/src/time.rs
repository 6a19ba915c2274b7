use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Seconds between the NTP epoch (1900-01-01) and the Unix epoch.
pub const NTP_UNIX_OFFSET: u64 = 2_208_988_800;

const FRACTION_SCALE: f64 = 4_294_967_296.0;

/// A 64-bit NTP timestamp: 32-bit seconds since 1900 plus a 32-bit fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct OscTimeTag {
    pub seconds: u32,
    pub fraction: u32,
}

impl OscTimeTag {
    /// The "execute immediately" sentinel.
    pub const IMMEDIATE: OscTimeTag = OscTimeTag {
        seconds: 0,
        fraction: 1,
    };

    pub const fn new(seconds: u32, fraction: u32) -> Self {
        Self { seconds, fraction }
    }

    /// Build from the raw 64-bit wire value.
    pub const fn from_bits(bits: u64) -> Self {
        Self {
            seconds: (bits >> 32) as u32,
            fraction: bits as u32,
        }
    }

    /// The raw 64-bit wire value.
    pub const fn to_bits(self) -> u64 {
        ((self.seconds as u64) << 32) | self.fraction as u64
    }

    pub const fn is_immediate(self) -> bool {
        self.seconds == Self::IMMEDIATE.seconds && self.fraction == Self::IMMEDIATE.fraction
    }

    /// Convert a wall-clock time.
    ///
    /// Returns `None` for times before 1970 or past the end of the 32-bit
    /// NTP era (February 2036).
    pub fn from_system_time(time: SystemTime) -> Option<Self> {
        let since_unix = time.duration_since(UNIX_EPOCH).ok()?;
        let seconds = since_unix.as_secs().checked_add(NTP_UNIX_OFFSET)?;
        let seconds = u32::try_from(seconds).ok()?;
        let fraction = (f64::from(since_unix.subsec_nanos()) / 1e9 * FRACTION_SCALE) as u32;
        Some(Self { seconds, fraction })
    }

    /// Convert to wall-clock time.
    ///
    /// Returns `None` for the immediate sentinel and for instants before the
    /// Unix epoch.
    pub fn to_system_time(self) -> Option<SystemTime> {
        if self.is_immediate() {
            return None;
        }
        let unix_secs = u64::from(self.seconds).checked_sub(NTP_UNIX_OFFSET)?;
        let nanos = (f64::from(self.fraction) / FRACTION_SCALE * 1e9) as u32;
        Some(UNIX_EPOCH + Duration::new(unix_secs, nanos.min(999_999_999)))
    }
}

impl From<u64> for OscTimeTag {
    fn from(bits: u64) -> Self {
        Self::from_bits(bits)
    }
}

impl From<OscTimeTag> for u64 {
    fn from(tag: OscTimeTag) -> Self {
        tag.to_bits()
    }
}

impl std::fmt::Display for OscTimeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_immediate() {
            write!(f, "immediate")
        } else {
            write!(f, "{}.{:08x}", self.seconds, self.fraction)
        }
    }
}
