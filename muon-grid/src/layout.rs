//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Nested region layouts

use crate::direction::{Horizontal, Vertical, COMPASS};
use crate::region::{Region, RegionScale, NQUARTERS, NREGIONS};
use crate::sweep::{FineRect, Sweep};
use crate::tile::TileId;
use std::convert::TryFrom;
use std::fmt;

/// Grid layout of a quarter
///
/// A quarter is covered by four nested regions. In its own region, every
/// region is a `2*xgrid` by `2*ygrid` square of cells with the inner
/// `xgrid` by `ygrid` corner left out, because that corner is covered by the
/// next inner region (or the beam hole for region 0). Cell sizes grow from
/// region to region by the factors of the region scale.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash, Default)]
pub struct Layout {
    /// Number of cells along X in the nominal grid, 0 if undefined.
    xgrid: u32,
    /// Number of cells along Y in the nominal grid, 0 if undefined.
    ygrid: u32,
    /// Resolution factor for each region.
    scale: RegionScale,
}

/// Placement of a search area relative to a tile along one axis
#[derive(Clone, Copy)]
enum Side {
    Before,
    Over,
    After,
}

impl From<Horizontal> for Side {
    fn from(dir: Horizontal) -> Side {
        match dir {
            Horizontal::Left => Side::Before,
            Horizontal::Center => Side::Over,
            Horizontal::Right => Side::After,
        }
    }
}

impl From<Vertical> for Side {
    fn from(dir: Vertical) -> Side {
        match dir {
            Vertical::Down => Side::Before,
            Vertical::Center => Side::Over,
            Vertical::Up => Side::After,
        }
    }
}

/// Inclusive fine grid span of a search area next to cell `n`.
/// `width` is the cell width, `depth` the area depth, both in fine units.
fn axis_span(n: u32, width: i64, depth: i64, side: Side) -> (i64, i64) {
    let start = n as i64 * width;
    let end = start + width;
    match side {
        Side::Before => (start - depth, start - 1),
        Side::Over => (start, end - 1),
        Side::After => (end, end + depth - 1),
    }
}

impl Layout {
    /// Layout with the default doubling region scale
    pub fn new(xgrid: u32, ygrid: u32) -> Layout {
        Layout::with_scale(xgrid, ygrid, RegionScale::default())
    }
    pub fn with_scale(xgrid: u32, ygrid: u32, scale: RegionScale) -> Layout {
        Layout {
            xgrid,
            ygrid,
            scale,
        }
    }
    pub fn xgrid(&self) -> u32 {
        self.xgrid
    }
    pub fn ygrid(&self) -> u32 {
        self.ygrid
    }
    pub fn scale(&self) -> RegionScale {
        self.scale
    }
    pub fn is_defined(&self) -> bool {
        self.xgrid > 0 && self.ygrid > 0
    }
    pub fn rfactor(&self, nr: u8) -> u32 {
        self.scale.rfactor(nr)
    }

    /// Region of the grid point `(ix, iy)` given in units of this layout.
    ///
    /// Each axis is classified on its own and the outer band wins, so a
    /// point is only `Outside` if it is outside on both axes.
    pub fn region(&self, ix: u32, iy: u32) -> Region {
        self.wide_region(u64::from(ix), u64::from(iy))
    }

    /// Region of a grid point beyond the `u32` range, as met on fine grids
    pub(crate) fn wide_region(&self, ix: u64, iy: u64) -> Region {
        if !self.is_defined() {
            return Region::Outside;
        }
        let nrx = Region::band(ix / u64::from(self.xgrid));
        let nry = Region::band(iy / u64::from(self.ygrid));
        std::cmp::max(nrx, nry)
    }

    /// Finest common layout of `self` and `other`
    pub fn fine_grid(&self, other: &Layout) -> Layout {
        Layout::with_scale(
            std::cmp::max(self.xgrid, other.xgrid),
            std::cmp::max(self.ygrid, other.ygrid),
            self.scale,
        )
    }

    /// Grid ratio between this layout and the layout of `pad`, at least 1
    fn pad_ratios(&self, pad: &TileId) -> (i64, i64) {
        let playout = pad.layout();
        let xratio = std::cmp::max(self.xgrid / playout.xgrid, 1);
        let yratio = std::cmp::max(self.ygrid / playout.ygrid, 1);
        (xratio as i64, yratio as i64)
    }

    fn accepts(&self, pad: &TileId) -> bool {
        if !self.is_defined() || !pad.layout().is_defined() {
            debug!("Layout {} cannot map tile {}", self, pad);
            return false;
        }
        true
    }

    fn sweep(&self, pad: &TileId, rect: FineRect) -> Vec<TileId> {
        let fine = self.fine_grid(&pad.layout());
        let rect = rect.clamped();
        trace!("Sweeping {:?} of fine grid {} for {}", rect, fine, pad);
        Sweep::new(self, fine, rect, pad.station(), pad.quarter()).collect()
    }

    /// Tiles of this layout overlapping `pad`
    pub fn tiles(&self, pad: &TileId) -> Vec<TileId> {
        self.tiles_in_area(pad, 0, 0)
    }

    /// Tiles of this layout overlapping `pad` extended by a margin.
    ///
    /// `pad` may belong to another layout. The margin is counted in fine grid
    /// cells of the pad's region on each side. Tiles are returned in sweep
    /// order (X outer, Y inner) without removing duplicates.
    pub fn tiles_in_area(&self, pad: &TileId, area_x: u32, area_y: u32) -> Vec<TileId> {
        if !self.accepts(pad) {
            return Vec::new();
        }
        let (xratio, yratio) = self.pad_ratios(pad);
        let rf = self.rfactor(pad.region()) as i64;
        let (area_x, area_y) = (area_x as i64, area_y as i64);

        let maxx = (pad.nx() as i64 + 1) * rf * xratio + area_x * rf - 1;
        let maxy = (pad.ny() as i64 + 1) * rf * yratio + area_y * rf - 1;
        let rect = FineRect {
            minx: maxx - rf * xratio - 2 * area_x * rf + 1,
            miny: maxy - rf * yratio - 2 * area_y * rf + 1,
            maxx,
            maxy,
        };
        self.sweep(pad, rect)
    }

    /// All tiles of all quarters, quarter by quarter
    pub fn all_tiles(&self) -> Vec<TileId> {
        (0..NQUARTERS)
            .flat_map(|iq| self.quarter_tiles(iq))
            .collect()
    }

    /// All tiles of quarter `iq`, region by region
    pub fn quarter_tiles(&self, iq: u8) -> Vec<TileId> {
        (0..NREGIONS)
            .flat_map(|ir| self.region_tiles(iq, ir))
            .collect()
    }

    /// All tiles of region `ir` in quarter `iq`, station 0.
    ///
    /// The tiles are built from the layout area directly and are not checked
    /// against `iq` or `ir`.
    pub fn region_tiles(&self, iq: u8, ir: u8) -> Vec<TileId> {
        if !self.is_defined() {
            return Vec::new();
        }
        let (xg, yg) = (u64::from(self.xgrid), u64::from(self.ygrid));
        let upper = (0..2 * xg).flat_map(move |ix| (yg..2 * yg).map(move |iy| (ix, iy)));
        let lower = (xg..2 * xg).flat_map(move |ix| (0..yg).map(move |iy| (ix, iy)));
        upper
            .chain(lower)
            .filter_map(|(ix, iy)| Some((u32::try_from(ix).ok()?, u32::try_from(iy).ok()?)))
            .map(|(ix, iy)| TileId::new(0, *self, ir, iq, ix, iy))
            .collect()
    }

    /// Tiles overlapping `pad`, expressed in region `pregion` of this layout.
    ///
    /// All tiles overlapping `pad` are assumed to lie in the region of `pad`.
    pub fn tiles_in_region(&self, pad: &TileId, pregion: u8) -> Vec<TileId> {
        if !self.is_defined() || pregion >= NREGIONS {
            return Vec::new();
        }
        let nr = pad.region();
        let tiles = self.tiles(pad);
        if nr == pregion {
            return tiles;
        }
        let (station, quarter) = (pad.station(), pad.quarter());

        if nr < pregion {
            let factor = self.rfactor(pregion) / self.rfactor(nr);
            return tiles
                .iter()
                .map(|t| {
                    TileId::new(
                        station,
                        *self,
                        pregion,
                        quarter,
                        t.nx() / factor,
                        t.ny() / factor,
                    )
                })
                .collect();
        }

        let factor = self.rfactor(nr) / self.rfactor(pregion);
        let mut expanded = Vec::with_capacity((factor * factor) as usize * tiles.len());
        for tile in &tiles {
            let minx = tile.nx() * factor;
            let miny = tile.ny() * factor;
            for ix in 0..factor {
                for iy in 0..factor {
                    expanded.push(TileId::new(
                        station,
                        *self,
                        pregion,
                        quarter,
                        minx + ix,
                        miny + iy,
                    ));
                }
            }
        }
        expanded
    }

    /// Neighbours of `pad` in all eight directions
    pub fn all_neighbours(&self, pad: &TileId) -> Vec<TileId> {
        COMPASS
            .iter()
            .flat_map(|&(dir_x, dir_y)| self.neighbours(pad, dir_x, dir_y))
            .collect()
    }

    /// Direct neighbours of `pad` in one direction.
    ///
    /// When the neighbours lie in an inner region, a diagonal search only
    /// keeps the row and column of tiles touching the corner of `pad`.
    pub fn neighbours(&self, pad: &TileId, dir_x: Horizontal, dir_y: Vertical) -> Vec<TileId> {
        let mut tiles = self.neighbours_with_depth(pad, dir_x, dir_y, 1);
        // nothing to choose from, or neighbours at least as coarse as the pad
        if tiles.len() <= 1 || tiles[0].region() >= pad.region() {
            return tiles;
        }

        let minx = tiles.iter().map(|t| t.nx()).min().unwrap_or(0);
        let maxx = tiles.iter().map(|t| t.nx()).max().unwrap_or(0);
        let miny = tiles.iter().map(|t| t.ny()).min().unwrap_or(0);
        let maxy = tiles.iter().map(|t| t.ny()).max().unwrap_or(0);

        match dir_x {
            Horizontal::Left => tiles.retain(|t| t.nx() == maxx),
            Horizontal::Right => tiles.retain(|t| t.nx() == minx),
            Horizontal::Center => {}
        }
        match dir_y {
            Vertical::Down => tiles.retain(|t| t.ny() == maxy),
            Vertical::Up => tiles.retain(|t| t.ny() == miny),
            Vertical::Center => {}
        }
        tiles
    }

    pub fn neighbours_with_depth(
        &self,
        pad: &TileId,
        dir_x: Horizontal,
        dir_y: Vertical,
        depth: u32,
    ) -> Vec<TileId> {
        self.neighbours_in_area(pad, dir_x, dir_y, depth, depth)
    }

    /// Tiles of this layout touched by the area next to `pad` in the given
    /// direction. Depths are counted like the margin of `tiles_in_area`.
    pub fn neighbours_in_area(
        &self,
        pad: &TileId,
        dir_x: Horizontal,
        dir_y: Vertical,
        depth_x: u32,
        depth_y: u32,
    ) -> Vec<TileId> {
        if !self.accepts(pad) {
            return Vec::new();
        }
        let (xratio, yratio) = self.pad_ratios(pad);
        let rf = self.rfactor(pad.region()) as i64;

        let (minx, maxx) = axis_span(pad.nx(), rf * xratio, depth_x as i64 * rf, dir_x.into());
        let (miny, maxy) = axis_span(pad.ny(), rf * yratio, depth_y as i64 * rf, dir_y.into());
        self.sweep(
            pad,
            FineRect {
                minx,
                miny,
                maxx,
                maxy,
            },
        )
    }

    /// Whether `tile` belongs to this layout and lies in its area
    pub fn is_valid_id(&self, tile: &TileId) -> bool {
        if tile.layout() != *self {
            return false;
        }
        let (nx, ny) = (u64::from(tile.nx()), u64::from(tile.ny()));
        let (xg, yg) = (u64::from(self.xgrid), u64::from(self.ygrid));
        (nx < 2 * xg && ny >= yg && ny < 2 * yg) || (nx >= xg && nx < 2 * xg && ny < yg)
    }

    /// Tile of this layout containing `pad`, or an invalid tile.
    ///
    /// This layout should be at least as coarse as the layout of `pad`.
    pub fn contains(&self, pad: &TileId) -> TileId {
        self.tiles(pad).into_iter().next().unwrap_or_default()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.xgrid, self.ygrid)
    }
}
