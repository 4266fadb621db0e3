//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::config::{read_config, ApplicationCfg, Config, Layouts};
use crate::query::*;
use muon_grid::{Horizontal, Layout, TileId, Vertical};

fn example_layouts() -> Layouts {
    let config: ApplicationCfg = read_config("src/test/example.toml").unwrap();
    Layouts::from_config(&config).unwrap()
}

#[test]
fn test_parse_values() {
    assert_eq!(parse_value::<u32>(" 12", "x"), Ok(12));
    assert_eq!(
        parse_value::<u32>("-1", "x"),
        Err("Error parsing 'x' as integer value".to_string())
    );

    assert_eq!(parse_index("2", "quarter", 4), Ok(1));
    assert_eq!(
        parse_index("0", "quarter", 4),
        Err("'quarter' must be between 1 and 4".to_string())
    );
    assert!(parse_index("5", "region", 4).is_err());

    assert_eq!(parse_pair("2", "area"), Ok((2, 2)));
    assert_eq!(parse_pair("1,3", "area"), Ok((1, 3)));
    assert_eq!(
        parse_pair("1,2,3", "area"),
        Err("Expected one or two values for 'area'".to_string())
    );
    assert!(parse_pair("a,1", "area").is_err());
}

#[test]
fn test_parse_directions() {
    assert_eq!(
        parse_directions("left, up"),
        Ok((Horizontal::Left, Vertical::Up))
    );
    assert_eq!(
        parse_directions("center,down"),
        Ok((Horizontal::Center, Vertical::Down))
    );
    assert_eq!(
        parse_directions("up,left"),
        Err("Unexpected enum value 'up'".to_string())
    );
    assert_eq!(
        parse_directions("left"),
        Err("Expected direction pair X,Y, found 'left'".to_string())
    );
}

#[test]
fn test_parse_tile() {
    let layouts = example_layouts();
    assert_eq!(
        parse_tile("coarse:1:1:2:2:3", &layouts),
        Ok(TileId::new(1, Layout::new(2, 2), 1, 0, 2, 3))
    );
    assert_eq!(
        parse_tile("coarse:1:1:1:1:1", &layouts),
        Err("Tile S1 Q1 R1 (1,1) layout 2x2 is outside of its layout".to_string())
    );
    assert_eq!(
        parse_tile("wires:1:1:1:2:2", &layouts),
        Err("Unknown layout 'wires'".to_string())
    );
    assert_eq!(
        parse_tile("coarse:1:1", &layouts),
        Err("Expected tile as LAYOUT:STATION:QUARTER:REGION:X:Y, found 'coarse:1:1'".to_string())
    );
    assert!(parse_tile("coarse:1:5:1:2:2", &layouts).is_err());
}

#[test]
fn test_tiles_query() {
    let layouts = example_layouts();
    let coarse = layouts.get("coarse").unwrap();
    let pads = layouts.get("pads").unwrap();

    assert_eq!(tiles(&coarse, None, (0, 0), None, None).len(), 192);
    assert_eq!(tiles(&coarse, None, (0, 0), Some(1), None).len(), 48);
    assert_eq!(tiles(&coarse, None, (0, 0), Some(1), Some(3)).len(), 12);
    let region_tiles = tiles(&coarse, None, (0, 0), None, Some(3));
    assert_eq!(region_tiles.len(), 48);
    assert!(region_tiles.iter().all(|t| t.region() == 3));

    let pad = TileId::new(1, coarse, 0, 0, 2, 2);
    let covered = tiles(&pads, Some(&pad), (0, 0), None, None);
    assert_eq!(covered.len(), 48);
    assert_eq!(covered[0], TileId::new(1, pads, 0, 0, 24, 8));
    assert_eq!(covered[47], TileId::new(1, pads, 0, 0, 35, 11));
    assert!(covered.iter().all(|t| coarse.contains(t) == pad));

    assert_eq!(tiles(&coarse, Some(&pad), (1, 1), None, None).len(), 8);
    assert_eq!(
        tiles(&coarse, Some(&pad), (0, 0), None, Some(2)),
        vec![TileId::new(1, coarse, 2, 0, 0, 0)]
    );
}

#[test]
fn test_neighbours_query() {
    let layouts = example_layouts();
    let coarse = layouts.get("coarse").unwrap();
    let pad = TileId::new(0, coarse, 1, 0, 2, 2);

    assert_eq!(neighbours(&coarse, &pad, None, None).len(), 8);
    assert_eq!(
        neighbours(&coarse, &pad, Some((Horizontal::Left, Vertical::Down)), None),
        vec![TileId::new(0, coarse, 0, 0, 3, 3)]
    );

    let pad = TileId::new(0, coarse, 0, 0, 2, 2);
    assert_eq!(
        neighbours(
            &coarse,
            &pad,
            Some((Horizontal::Right, Vertical::Center)),
            Some((2, 2))
        ),
        vec![
            TileId::new(0, coarse, 0, 0, 3, 2),
            TileId::new(0, coarse, 1, 0, 2, 1)
        ]
    );
}

#[test]
fn test_format_tiles() {
    let layout = Layout::new(2, 2);
    let tiles = vec![
        TileId::new(0, layout, 0, 0, 3, 2),
        TileId::new(0, layout, 1, 0, 2, 1),
    ];
    assert_eq!(
        format_tiles(&tiles),
        "S0 Q1 R1 (3,2) layout 2x2\nS0 Q1 R2 (2,1) layout 2x2\n"
    );
    assert_eq!(format_tiles(&[]), "");
}

#[test]
fn test_region_command() {
    let args = vec![
        "muon_layout",
        "region",
        "-c",
        "src/test/example.toml",
        "--layout",
        "pads",
        "--ix",
        "30",
        "--iy",
        "4",
    ];
    let matches = crate::app().get_matches_from_safe(args).unwrap();
    let (name, sub_m) = matches.subcommand();
    assert_eq!(name, "region");
    assert_eq!(crate::region(sub_m.unwrap()), Ok("R1\n".to_string()));

    let args = vec!["muon_layout", "region", "-c", "f", "--layout", "pads", "--x", "30"];
    assert!(crate::app().get_matches_from_safe(args).is_err());
}
