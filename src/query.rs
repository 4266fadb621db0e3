//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Layout queries from command line values
//!
//! Quarters and regions are counted from 1 on the command line, like in
//! tile names (`Q1`..`Q4`, `R1`..`R4`).

use crate::config::Layouts;
use muon_grid::{Horizontal, Layout, TileId, Vertical, NQUARTERS, NREGIONS};
use std::str::FromStr;

pub fn parse_value<T: FromStr>(val: &str, name: &str) -> Result<T, String> {
    val.trim()
        .parse::<T>()
        .map_err(|_| format!("Error parsing '{}' as integer value", name))
}

/// Zero based index from a value counted from 1 up to `count`
pub fn parse_index(val: &str, name: &str, count: u8) -> Result<u8, String> {
    let num: u8 = parse_value(val, name)?;
    if num == 0 || num > count {
        return Err(format!("'{}' must be between 1 and {}", name, count));
    }
    Ok(num - 1)
}

/// `N` or `NX,NY`
pub fn parse_pair(val: &str, name: &str) -> Result<(u32, u32), String> {
    let nums = val
        .split(',')
        .map(|v| parse_value::<u32>(v, name))
        .collect::<Result<Vec<u32>, String>>()?;
    match *nums.as_slice() {
        [n] => Ok((n, n)),
        [nx, ny] => Ok((nx, ny)),
        _ => Err(format!("Expected one or two values for '{}'", name)),
    }
}

/// Direction pair like `left,up`
pub fn parse_directions(val: &str) -> Result<(Horizontal, Vertical), String> {
    let dirs: Vec<&str> = val.split(',').map(|v| v.trim()).collect();
    match dirs.as_slice() {
        [dir_x, dir_y] => Ok((dir_x.parse()?, dir_y.parse()?)),
        _ => Err(format!("Expected direction pair X,Y, found '{}'", val)),
    }
}

/// Tile given as `LAYOUT:STATION:QUARTER:REGION:X:Y`
pub fn parse_tile(val: &str, layouts: &Layouts) -> Result<TileId, String> {
    let parts: Vec<&str> = val.split(':').collect();
    if parts.len() != 6 {
        return Err(format!(
            "Expected tile as LAYOUT:STATION:QUARTER:REGION:X:Y, found '{}'",
            val
        ));
    }
    let tile = TileId::new(
        parse_value(parts[1], "station")?,
        layouts.get(parts[0])?,
        parse_index(parts[3], "region", NREGIONS)?,
        parse_index(parts[2], "quarter", NQUARTERS)?,
        parse_value(parts[4], "x")?,
        parse_value(parts[5], "y")?,
    );
    if !tile.is_valid() {
        return Err(format!("Tile {} is outside of its layout", tile));
    }
    Ok(tile)
}

/// Tiles of `layout` covering `pad`, or the layout tiles selected by
/// quarter and region when no pad is given.
pub fn tiles(
    layout: &Layout,
    pad: Option<&TileId>,
    area: (u32, u32),
    quarter: Option<u8>,
    region: Option<u8>,
) -> Vec<TileId> {
    match (pad, quarter, region) {
        (Some(pad), _, Some(region)) => layout.tiles_in_region(pad, region),
        (Some(pad), _, None) => layout.tiles_in_area(pad, area.0, area.1),
        (None, Some(quarter), Some(region)) => layout.region_tiles(quarter, region),
        (None, Some(quarter), None) => layout.quarter_tiles(quarter),
        (None, None, Some(region)) => (0..NQUARTERS)
            .flat_map(|quarter| layout.region_tiles(quarter, region))
            .collect(),
        (None, None, None) => layout.all_tiles(),
    }
}

pub fn neighbours(
    layout: &Layout,
    pad: &TileId,
    dirs: Option<(Horizontal, Vertical)>,
    depth: Option<(u32, u32)>,
) -> Vec<TileId> {
    match (dirs, depth) {
        (None, _) => layout.all_neighbours(pad),
        (Some((dir_x, dir_y)), None) => layout.neighbours(pad, dir_x, dir_y),
        (Some((dir_x, dir_y)), Some((depth_x, depth_y))) => {
            layout.neighbours_in_area(pad, dir_x, dir_y, depth_x, depth_y)
        }
    }
}

/// One tile per line
pub fn format_tiles(tiles: &[TileId]) -> String {
    tiles
        .iter()
        .map(|tile| format!("{}\n", tile))
        .collect()
}
