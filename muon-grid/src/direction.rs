//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Neighbour search directions

use std::str::FromStr;

/// Search direction along X
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Horizontal {
    Left,
    Center,
    Right,
}

/// Search direction along Y
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Vertical {
    Down,
    Center,
    Up,
}

/// The eight compass directions in the order neighbours are collected
pub const COMPASS: [(Horizontal, Vertical); 8] = [
    (Horizontal::Right, Vertical::Down),
    (Horizontal::Right, Vertical::Center),
    (Horizontal::Right, Vertical::Up),
    (Horizontal::Left, Vertical::Down),
    (Horizontal::Left, Vertical::Center),
    (Horizontal::Left, Vertical::Up),
    (Horizontal::Center, Vertical::Up),
    (Horizontal::Center, Vertical::Down),
];

impl FromStr for Horizontal {
    type Err = String;
    fn from_str(val: &str) -> Result<Horizontal, String> {
        match val.to_lowercase().as_str() {
            "left" => Ok(Horizontal::Left),
            "center" => Ok(Horizontal::Center),
            "right" => Ok(Horizontal::Right),
            _ => Err(format!("Unexpected enum value '{}'", val)),
        }
    }
}

impl FromStr for Vertical {
    type Err = String;
    fn from_str(val: &str) -> Result<Vertical, String> {
        match val.to_lowercase().as_str() {
            "down" => Ok(Vertical::Down),
            "center" => Ok(Vertical::Center),
            "up" => Ok(Vertical::Up),
            _ => Err(format!("Unexpected enum value '{}'", val)),
        }
    }
}

#[test]
fn test_parse_directions() {
    assert_eq!("Right".parse::<Horizontal>(), Ok(Horizontal::Right));
    assert_eq!("center".parse::<Vertical>(), Ok(Vertical::Center));
    assert_eq!(
        "north".parse::<Vertical>(),
        Err("Unexpected enum value 'north'".to_string())
    );
    assert!(!COMPASS.contains(&(Horizontal::Center, Vertical::Center)));
}
