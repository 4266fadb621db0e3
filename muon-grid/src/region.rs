//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Region classification and resolution factors

use std::cmp::Ordering;
use std::fmt;

/// Number of nested regions in a quarter
pub const NREGIONS: u8 = 4;

/// Number of mirrored quarters sharing one layout
pub const NQUARTERS: u8 = 4;

/// Region band of a grid coordinate
///
/// `Outside` sorts below every region, so the band of a point is simply the
/// maximum of its per-axis bands.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Region {
    /// Inside the beam hole, below the first region on both axes.
    Outside,
    /// Region index, 0 (innermost) to 3 (outermost).
    Inside(u8),
}

impl Region {
    /// Classify a quotient `coordinate / grid` on a single axis.
    pub(crate) fn band(quotient: u64) -> Region {
        match quotient {
            0 => Region::Outside,
            1 => Region::Inside(0),
            2..=3 => Region::Inside(1),
            4..=7 => Region::Inside(2),
            _ => Region::Inside(3),
        }
    }

    /// Region index with `Outside` folded onto region 0
    pub fn or_innermost(self) -> u8 {
        match self {
            Region::Outside => 0,
            Region::Inside(nr) => nr,
        }
    }

    pub fn index(self) -> Option<u8> {
        match self {
            Region::Outside => None,
            Region::Inside(nr) => Some(nr),
        }
    }
}

impl PartialOrd for Region {
    fn partial_cmp(&self, other: &Region) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Region {
    fn cmp(&self, other: &Region) -> Ordering {
        match (self, other) {
            (Region::Outside, Region::Outside) => Ordering::Equal,
            (Region::Outside, Region::Inside(_)) => Ordering::Less,
            (Region::Inside(_), Region::Outside) => Ordering::Greater,
            (Region::Inside(a), Region::Inside(b)) => a.cmp(b),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Outside => write!(f, "outside"),
            Region::Inside(nr) => write!(f, "R{}", nr + 1),
        }
    }
}

/// Region to resolution factor table
///
/// A factor gives how many finest-grid units one coordinate step spans in a
/// region. The factors grow with the region index and each one divides the
/// next, so a tile of an outer region covers a whole block of inner tiles.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct RegionScale {
    factors: [u32; NREGIONS as usize],
}

impl Default for RegionScale {
    /// Doubling table: `1 << region`
    fn default() -> RegionScale {
        RegionScale {
            factors: [1, 2, 4, 8],
        }
    }
}

impl RegionScale {
    pub fn new(factors: [u32; NREGIONS as usize]) -> Result<RegionScale, String> {
        if factors[0] == 0 {
            return Err("Resolution factors must be positive".to_string());
        }
        for nr in 1..factors.len() {
            if factors[nr] <= factors[nr - 1] || factors[nr] % factors[nr - 1] != 0 {
                return Err(format!(
                    "Resolution factor of region {} ({}) is not a multiple of region {} ({})",
                    nr,
                    factors[nr],
                    nr - 1,
                    factors[nr - 1]
                ));
            }
        }
        Ok(RegionScale { factors })
    }
    /// Resolution factor of region `nr`. Regions beyond the table use the
    /// outermost factor.
    pub fn rfactor(&self, nr: u8) -> u32 {
        let idx = std::cmp::min(nr, NREGIONS - 1) as usize;
        self.factors[idx]
    }
    pub fn factors(&self) -> [u32; NREGIONS as usize] {
        self.factors
    }
}

/// Resolution factor of region `nr` in the default table
pub fn rfactor(nr: u8) -> u32 {
    RegionScale::default().rfactor(nr)
}

#[test]
fn test_band_order() {
    assert!(Region::Outside < Region::Inside(0));
    assert!(Region::Inside(0) < Region::Inside(3));
    assert_eq!(
        std::cmp::max(Region::Outside, Region::Inside(1)),
        Region::Inside(1)
    );
    assert_eq!(Region::Outside.or_innermost(), 0);
    assert_eq!(Region::Inside(2).index(), Some(2));
    assert_eq!(Region::Inside(2).to_string(), "R3");
}

#[test]
fn test_bands() {
    let bands: Vec<Region> = (0..10).map(Region::band).collect();
    assert_eq!(
        bands,
        vec![
            Region::Outside,
            Region::Inside(0),
            Region::Inside(1),
            Region::Inside(1),
            Region::Inside(2),
            Region::Inside(2),
            Region::Inside(2),
            Region::Inside(2),
            Region::Inside(3),
            Region::Inside(3),
        ]
    );
}

#[test]
fn test_scale() {
    assert_eq!(rfactor(0), 1);
    assert_eq!(rfactor(3), 8);
    assert_eq!(rfactor(7), 8);
    assert_eq!(RegionScale::default().factors(), [1, 2, 4, 8]);

    let scale = RegionScale::new([1, 3, 6, 12]).unwrap();
    assert_eq!(scale.rfactor(1), 3);

    assert_eq!(
        RegionScale::new([0, 2, 4, 8]).err(),
        Some("Resolution factors must be positive".to_string())
    );
    assert_eq!(
        RegionScale::new([1, 2, 3, 6]).err(),
        Some("Resolution factor of region 2 (3) is not a multiple of region 1 (2)".to_string())
    );
    assert!(RegionScale::new([2, 2, 4, 8]).is_err());
}
