//! Time base definitions
//!
//! Every clock on the HUD is driven from exactly one time base:
//! - SimX1 / SimX10 / SimX100: mission elapsed time, scaled
//! - RealWorld: wall-clock time of the selected city

use std::fmt;

/// Active time source for all planetary clocks
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum TimeBase {
    /// Mission elapsed time at real speed
    #[default]
    SimX1 = 0,
    /// Mission elapsed time, ten times faster
    SimX10 = 1,
    /// Mission elapsed time, a hundred times faster
    SimX100 = 2,
    /// Time of day in the selected city
    RealWorld = 3,
}

impl TimeBase {
    /// All time bases in menu order
    pub const ALL: [TimeBase; 4] = [
        TimeBase::SimX1,
        TimeBase::SimX10,
        TimeBase::SimX100,
        TimeBase::RealWorld,
    ];

    /// Parse from a menu index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position in the mode menu
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Is this a mission elapsed time mode?
    #[inline]
    pub fn is_simulation(self) -> bool {
        !matches!(self, TimeBase::RealWorld)
    }

    /// MET multiplier. RealWorld reports 1, it never scales a projection.
    pub fn scale_factor(self) -> f64 {
        match self {
            TimeBase::SimX1 => 1.0,
            TimeBase::SimX10 => 10.0,
            TimeBase::SimX100 => 100.0,
            TimeBase::RealWorld => 1.0,
        }
    }

    /// Menu item text
    pub fn menu_label(self) -> &'static str {
        match self {
            TimeBase::SimX1 => "SIM x1",
            TimeBase::SimX10 => "SIM x10",
            TimeBase::SimX100 => "SIM x100",
            TimeBase::RealWorld => "REAL WORLD",
        }
    }
}

impl fmt::Display for TimeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.menu_label())
    }
}
