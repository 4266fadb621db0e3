//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::direction::{Horizontal, Vertical};
use crate::layout::Layout;
use crate::tile::TileId;
use std::collections::BTreeSet;

#[test]
fn test_tile_validity() {
    let layout = Layout::new(2, 2);
    let tile = TileId::new(2, layout, 1, 3, 2, 3);
    assert_eq!(tile.station(), 2);
    assert_eq!(tile.layout(), layout);
    assert_eq!(tile.region(), 1);
    assert_eq!(tile.quarter(), 3);
    assert_eq!((tile.nx(), tile.ny()), (2, 3));
    assert!(tile.is_defined());
    assert!(tile.is_valid());

    assert!(!TileId::new(0, layout, 4, 0, 2, 2).is_valid());
    assert!(!TileId::new(0, layout, 0, 4, 2, 2).is_valid());
    assert!(!TileId::new(0, layout, 0, 0, 1, 1).is_valid());
    assert!(!TileId::new(0, layout, 0, 0, 2, 4).is_valid());

    let sentinel = TileId::default();
    assert!(!sentinel.is_defined());
    assert!(!sentinel.is_valid());
}

#[test]
fn test_tile_neighbour_steps() {
    let layout = Layout::new(2, 2);
    let tile = TileId::new(0, layout, 0, 0, 2, 2);

    let right = tile.neighbour_x(Horizontal::Right);
    assert_eq!(right, TileId::new(0, layout, 0, 0, 3, 2));
    assert!(right.is_valid());
    assert!(!right.neighbour_x(Horizontal::Right).is_valid());
    assert_eq!(tile.neighbour_x(Horizontal::Center), tile);

    // into the dead corner
    assert!(!tile.neighbour_y(Vertical::Down).neighbour_x(Horizontal::Left).is_valid());
    assert_eq!(
        tile.neighbour_y(Vertical::Up),
        TileId::new(0, layout, 0, 0, 2, 3)
    );

    let edge = TileId::new(0, layout, 0, 0, 0, 2);
    assert_eq!(edge.neighbour_x(Horizontal::Left), TileId::default());
    let edge = TileId::new(0, layout, 0, 0, 2, 0);
    assert_eq!(edge.neighbour_y(Vertical::Down), TileId::default());
}

#[test]
fn test_container() {
    let coarse = Layout::new(2, 2);
    let fine = Layout::new(4, 4);
    let tile = TileId::new(0, fine, 0, 0, 5, 5);
    assert_eq!(tile.container(&coarse), TileId::new(0, coarse, 0, 0, 2, 2));
    assert_eq!(tile.container(&fine), tile);
}

#[test]
fn test_intercept() {
    let xstrips = Layout::new(4, 1);
    let ystrips = Layout::new(1, 4);
    let xstrip = TileId::new(1, xstrips, 0, 2, 5, 1);
    let ystrip = TileId::new(1, ystrips, 0, 2, 1, 6);
    assert!(xstrip.is_valid() && ystrip.is_valid());

    let pad = xstrip.intercept(&ystrip);
    assert_eq!(pad, TileId::new(1, Layout::new(4, 4), 0, 2, 5, 6));
    assert_eq!(ystrip.intercept(&xstrip), pad);

    // parallel to the crossing
    let apart = TileId::new(1, ystrips, 0, 2, 0, 4);
    assert_eq!(xstrip.intercept(&apart), TileId::default());

    let other_station = TileId::new(2, ystrips, 0, 2, 1, 6);
    assert_eq!(xstrip.intercept(&other_station), TileId::default());
    let other_quarter = TileId::new(1, ystrips, 0, 1, 1, 6);
    assert_eq!(xstrip.intercept(&other_quarter), TileId::default());

    assert_eq!(xstrip.intercept(&xstrip), xstrip);
}

#[test]
fn test_tile_display() {
    let tile = TileId::new(1, Layout::new(4, 4), 0, 2, 5, 6);
    assert_eq!(tile.to_string(), "S1 Q3 R1 (5,6) layout 4x4");
}

#[test]
fn test_tile_set() {
    let layout = Layout::new(2, 2);
    let pad = TileId::new(0, layout, 0, 0, 3, 2);
    let neighbours = layout.all_neighbours(&pad);
    assert_eq!(neighbours.len(), 8);
    let unique: BTreeSet<TileId> = neighbours.into_iter().collect();
    assert_eq!(unique.len(), 7);
}
