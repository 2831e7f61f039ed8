//! NTP timestamps as carried by sender/receiver reports.
//!
//! `frac >> 12` is treated as microseconds (2^32 / 10^6 is close to 2^12).

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Sub;

use bit_view::BitView;

const FRAC_SHIFT: u32 = 12;
const MICROS_PER_SEC: u32 = 1_000_000;

/// Equality, ordering and hashing all work at microsecond resolution: the
/// low 12 bits of `frac` do not take part.
#[derive(Clone, Copy, Debug, Default)]
pub struct NtpTimestamp {
    pub secs: u32,
    pub frac: u32,
}

impl NtpTimestamp {
    pub const fn new(secs: u32, frac: u32) -> Self {
        Self { secs, frac }
    }

    /// Expands the middle 32 bits of a timestamp (the LSR/DLSR form).
    pub const fn from_compact(compact: u32) -> Self {
        Self {
            secs: compact >> 16,
            frac: (compact & 0xFFFF) << 16,
        }
    }

    pub const fn to_compact(&self) -> u32 {
        ((self.secs & 0xFFFF) << 16) | (self.frac >> 16)
    }

    pub const fn micros(&self) -> u32 {
        self.frac >> FRAC_SHIFT
    }

    pub fn is_later_than(&self, other: &Self) -> bool {
        self > other
    }

    fn key(&self) -> (u32, u32) {
        (self.secs, self.micros())
    }

    pub fn as_secs_f64(&self) -> f64 {
        (u64::from(MICROS_PER_SEC) * u64::from(self.secs) + u64::from(self.micros())) as f64
            / f64::from(MICROS_PER_SEC)
    }
}

impl Sub for NtpTimestamp {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut micros = self.micros();
        let rhs_micros = rhs.micros();
        let mut secs = self.secs.wrapping_sub(rhs.secs);
        if micros < rhs_micros {
            micros += MICROS_PER_SEC;
            secs = secs.wrapping_sub(1);
        }
        Self {
            secs,
            frac: micros.wrapping_sub(rhs_micros) << FRAC_SHIFT,
        }
    }
}

impl PartialEq for NtpTimestamp {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for NtpTimestamp {}

impl PartialOrd for NtpTimestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NtpTimestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for NtpTimestamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for NtpTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Timestamp:")?;
        writeln!(f, "  secs = {} ({})", self.secs, BitView::from(self.secs))?;
        writeln!(f, "  frac = {} ({})", self.frac, BitView::from(self.frac))
    }
}
