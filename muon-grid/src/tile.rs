//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile identifiers

use crate::direction::{Horizontal, Vertical};
use crate::layout::Layout;
use crate::region::{NQUARTERS, NREGIONS};
use std::fmt;

/// Identifier of a single grid cell
///
/// Coordinates are local to the owning layout at the resolution of the
/// tile's region. Construction never fails; use [`TileId::is_valid`] to check
/// the result. The default value is an invalid tile of an undefined layout.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash, Default)]
pub struct TileId {
    station: u8,
    layout: Layout,
    region: u8,
    quarter: u8,
    nx: u32,
    ny: u32,
}

impl TileId {
    pub fn new(station: u8, layout: Layout, region: u8, quarter: u8, nx: u32, ny: u32) -> TileId {
        TileId {
            station,
            layout,
            region,
            quarter,
            nx,
            ny,
        }
    }
    pub fn station(&self) -> u8 {
        self.station
    }
    pub fn layout(&self) -> Layout {
        self.layout
    }
    pub fn region(&self) -> u8 {
        self.region
    }
    pub fn quarter(&self) -> u8 {
        self.quarter
    }
    pub fn nx(&self) -> u32 {
        self.nx
    }
    pub fn ny(&self) -> u32 {
        self.ny
    }
    pub fn is_defined(&self) -> bool {
        self.layout.is_defined()
    }
    pub fn is_valid(&self) -> bool {
        self.region < NREGIONS && self.quarter < NQUARTERS && self.layout.is_valid_id(self)
    }

    fn moved(&self, nx: Option<u32>, ny: Option<u32>) -> TileId {
        match (nx, ny) {
            (Some(nx), Some(ny)) => TileId { nx, ny, ..*self },
            _ => TileId::default(),
        }
    }

    /// Next tile along X in the same layout and region. Moving off the
    /// layout area gives an invalid tile.
    pub fn neighbour_x(&self, dir: Horizontal) -> TileId {
        let nx = match dir {
            Horizontal::Left => self.nx.checked_sub(1),
            Horizontal::Center => Some(self.nx),
            Horizontal::Right => self.nx.checked_add(1),
        };
        self.moved(nx, Some(self.ny))
    }

    /// Next tile along Y in the same layout and region
    pub fn neighbour_y(&self, dir: Vertical) -> TileId {
        let ny = match dir {
            Vertical::Down => self.ny.checked_sub(1),
            Vertical::Center => Some(self.ny),
            Vertical::Up => self.ny.checked_add(1),
        };
        self.moved(Some(self.nx), ny)
    }

    /// Tile of `layout` containing this tile
    pub fn container(&self, layout: &Layout) -> TileId {
        layout.contains(self)
    }

    /// Common tile of two overlapping tiles in their finest common layout,
    /// e.g. the pad at the crossing of a horizontal and a vertical strip.
    ///
    /// Returns an invalid tile for different stations or quarters and when
    /// the overlap is not exactly one tile.
    pub fn intercept(&self, other: &TileId) -> TileId {
        if self.station != other.station || self.quarter != other.quarter {
            return TileId::default();
        }
        let fine = self.layout.fine_grid(&other.layout);
        let mine = fine.tiles(self);
        let common: Vec<TileId> = fine
            .tiles(other)
            .into_iter()
            .filter(|tile| mine.contains(tile))
            .collect();
        match common.as_slice() {
            [tile] => *tile,
            _ => TileId::default(),
        }
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S{} Q{} R{} ({},{}) layout {}",
            self.station,
            self.quarter as u32 + 1,
            self.region as u32 + 1,
            self.nx,
            self.ny,
            self.layout
        )
    }
}
