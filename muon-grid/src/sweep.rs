//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Fine grid sweeps

use crate::layout::Layout;
use crate::tile::TileId;
use std::convert::TryFrom;

/// Inclusive cell rectangle on the finest common grid
///
/// Bounds may be negative before clamping, e.g. the area left of a tile in
/// the first column.
#[derive(PartialEq, Clone, Debug)]
pub struct FineRect {
    pub minx: i64,
    pub miny: i64,
    pub maxx: i64,
    pub maxy: i64,
}

impl FineRect {
    /// Clamp negative minima to the grid origin
    pub fn clamped(self) -> FineRect {
        FineRect {
            minx: self.minx.max(0),
            miny: self.miny.max(0),
            ..self
        }
    }
}

/// Region leap hysteresis between columns
///
/// When a column ends in another region than it started in, the next column
/// only accepts points of its own head region. This keeps the tile just
/// across a region boundary from being emitted a second time by the
/// neighbouring column.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum LeapState {
    /// Every region is accepted.
    Open,
    /// Only the column head region is accepted.
    Leaped,
}

impl LeapState {
    pub fn accepts(self, region: u8, column_region: u8) -> bool {
        region == column_region || self == LeapState::Open
    }

    /// State for the next column, given the last region visited in this one
    pub fn next_column(self, last_region: u8, column_region: u8) -> LeapState {
        match self {
            LeapState::Leaped => LeapState::Open,
            LeapState::Open if last_region != column_region => LeapState::Leaped,
            LeapState::Open => LeapState::Open,
        }
    }
}

/// Column-by-column sweep over a fine grid rectangle, yielding the valid
/// tiles of the target layout hit on the way.
///
/// Both axes advance by one target tile of the current region, so the sweep
/// is linear in the number of tiles rather than in fine grid cells.
pub struct Sweep<'a> {
    target: &'a Layout,
    fine: Layout,
    rect: FineRect,
    station: u8,
    quarter: u8,
    xratio: u32,
    yratio: u32,
    ix: i64,
    iy: i64,
    column_region: u8,
    last_region: u8,
    leap: LeapState,
    finished: bool,
}

impl<'a> Sweep<'a> {
    /// `rect` must be given in units of `fine`, which must be at least as
    /// fine as `target` on both axes.
    pub fn new(
        target: &'a Layout,
        fine: Layout,
        rect: FineRect,
        station: u8,
        quarter: u8,
    ) -> Sweep<'a> {
        let mut sweep = Sweep {
            target,
            fine,
            xratio: std::cmp::max(fine.xgrid() / target.xgrid().max(1), 1),
            yratio: std::cmp::max(fine.ygrid() / target.ygrid().max(1), 1),
            ix: rect.minx,
            iy: rect.miny,
            rect,
            station,
            quarter,
            column_region: 0,
            last_region: 0,
            leap: LeapState::Open,
            finished: !(target.is_defined() && fine.is_defined()),
        };
        if !sweep.finished {
            sweep.start_column();
        }
        sweep
    }

    /// Coordinates are never negative once the rectangle is clamped.
    fn region_at(&self, ix: i64, iy: i64) -> u8 {
        self.fine.wide_region(ix as u64, iy as u64).or_innermost()
    }

    fn start_column(&mut self) {
        if self.ix > self.rect.maxx {
            self.finished = true;
        } else {
            self.column_region = self.region_at(self.ix, self.rect.miny);
        }
    }

    fn candidate(&self, ix: i64, iy: i64, nr: u8) -> Option<TileId> {
        let rf = u64::from(self.target.rfactor(nr));
        let nx = ix as u64 / rf / u64::from(self.xratio);
        let ny = iy as u64 / rf / u64::from(self.yratio);
        if nx >= 2 * u64::from(self.target.xgrid()) || ny >= 2 * u64::from(self.target.ygrid()) {
            return None;
        }
        let (nx, ny) = (u32::try_from(nx).ok()?, u32::try_from(ny).ok()?);
        let tile = TileId::new(self.station, *self.target, nr, self.quarter, nx, ny);
        if tile.is_valid() {
            Some(tile)
        } else {
            None
        }
    }
}

impl<'a> Iterator for Sweep<'a> {
    type Item = TileId;

    fn next(&mut self) -> Option<TileId> {
        while !self.finished {
            if self.iy > self.rect.maxy {
                self.leap = self.leap.next_column(self.last_region, self.column_region);
                self.iy = self.rect.miny;
                let rf = self.target.rfactor(self.column_region);
                self.ix += i64::from(rf) * i64::from(self.xratio);
                self.start_column();
                continue;
            }
            let (ix, iy) = (self.ix, self.iy);
            let nr = self.region_at(ix, iy);
            self.last_region = nr;
            self.iy += i64::from(self.target.rfactor(nr)) * i64::from(self.yratio);
            if self.leap.accepts(nr, self.column_region) {
                if let Some(tile) = self.candidate(ix, iy, nr) {
                    return Some(tile);
                }
            }
        }
        None
    }
}

#[test]
fn test_leap_state() {
    let state = LeapState::Open;
    assert!(state.accepts(1, 0));
    assert_eq!(state.next_column(0, 0), LeapState::Open);

    let state = state.next_column(1, 0);
    assert_eq!(state, LeapState::Leaped);
    assert!(state.accepts(0, 0));
    assert!(!state.accepts(1, 0));

    // one column of grace only, whatever the column ends in
    assert_eq!(state.next_column(1, 0), LeapState::Open);
    assert_eq!(state.next_column(0, 0), LeapState::Open);
}

#[test]
fn test_sweep_across_region_boundary() {
    let layout = Layout::new(2, 2);
    let rect = FineRect {
        minx: 2,
        miny: 2,
        maxx: 4,
        maxy: 4,
    };
    let cells: Vec<(u8, u32, u32)> = Sweep::new(&layout, layout, rect, 0, 0)
        .map(|t| (t.region(), t.nx(), t.ny()))
        .collect();
    // column x=3 leaps: its region 1 cell (1,2) was already emitted by x=2
    assert_eq!(
        cells,
        vec![
            (0, 2, 2),
            (0, 2, 3),
            (1, 1, 2),
            (0, 3, 2),
            (0, 3, 3),
            (1, 2, 1),
            (1, 2, 2),
        ]
    );
}

#[test]
fn test_empty_sweeps() {
    let layout = Layout::new(2, 2);
    let rect = FineRect {
        minx: -3,
        miny: 2,
        maxx: -1,
        maxy: 3,
    };
    assert_eq!(Sweep::new(&layout, layout, rect.clamped(), 0, 0).count(), 0);

    let undefined = Layout::new(0, 2);
    let rect = FineRect {
        minx: 0,
        miny: 0,
        maxx: 3,
        maxy: 3,
    };
    assert_eq!(Sweep::new(&undefined, layout, rect, 0, 0).count(), 0);

    // dead corner only
    let rect = FineRect {
        minx: 0,
        miny: 0,
        maxx: 1,
        maxy: 1,
    };
    assert_eq!(Sweep::new(&layout, layout, rect, 0, 0).count(), 0);
}
