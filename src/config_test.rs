//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::config::{parse_config, read_config, ApplicationCfg, Config, Layouts};
use muon_grid::{Layout, RegionScale};

#[test]
fn test_load_config() {
    let config = read_config("src/test/example.toml");
    println!("{:#?}", config);
    let config: ApplicationCfg = config.expect("load_config returned Err");
    assert_eq!(config.layouts.len(), 4);
    assert_eq!(config.layouts[0].name, "pads");
    assert_eq!(config.scale.as_ref().map(|s| s.factors.len()), Some(4));

    let layouts = Layouts::from_config(&config).unwrap();
    assert_eq!(layouts.names(), vec!["coarse", "pads", "xstrips", "ystrips"]);
    assert_eq!(layouts.get("pads"), Ok(Layout::new(24, 8)));
    assert_eq!(
        layouts.get("wires"),
        Err("Unknown layout 'wires'".to_string())
    );
}

#[test]
fn test_parse_error() {
    let config: Result<ApplicationCfg, _> = read_config("src/main.rs");
    assert!(config.err().unwrap().starts_with("src/main.rs - "));

    let config: Result<ApplicationCfg, _> = read_config("wrongfile");
    assert_eq!("Could not find config file!", config.err().unwrap());

    let toml = r#"
        [[layout]]
        name = "pads"
        xgrid = 24
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "");
    assert!(config.err().unwrap().contains("missing field `ygrid`"));
}

#[test]
fn test_gen_config() {
    let toml = Layouts::gen_config();
    let config: ApplicationCfg = parse_config(toml, "").unwrap();
    let layouts = Layouts::from_config(&config).unwrap();
    assert_eq!(layouts.names(), vec!["pads", "xstrips", "ystrips"]);
    assert_eq!(layouts.get("xstrips"), Ok(Layout::new(48, 1)));
}

#[test]
fn test_custom_scale() {
    let toml = r#"
        [scale]
        factors = [1, 3, 6, 12]

        [[layout]]
        name = "pads"
        xgrid = 4
        ygrid = 2
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    let layout = Layouts::from_config(&config).unwrap().get("pads").unwrap();
    assert_eq!(layout.rfactor(1), 3);
    assert_eq!(
        layout,
        Layout::with_scale(4, 2, RegionScale::new([1, 3, 6, 12]).unwrap())
    );
}

#[test]
fn test_invalid_layouts() {
    let layouts = |toml: &str| -> Result<Layouts, String> {
        let config: ApplicationCfg = parse_config(toml.to_string(), "")?;
        Layouts::from_config(&config)
    };

    assert_eq!(
        layouts(
            r#"
            [[layout]]
            name = "pads"
            xgrid = 0
            ygrid = 8
            "#
        )
        .err(),
        Some("Layout 'pads' needs positive xgrid and ygrid".to_string())
    );
    assert_eq!(
        layouts(
            r#"
            [[layout]]
            name = "pads"
            xgrid = 4
            ygrid = 8

            [[layout]]
            name = "pads"
            xgrid = 8
            ygrid = 8
            "#
        )
        .err(),
        Some("Duplicate layout 'pads'".to_string())
    );
    assert_eq!(
        layouts("layout = []").err(),
        Some("No layout defined".to_string())
    );
    assert_eq!(
        layouts(
            r#"
            layout = []
            [scale]
            factors = [1, 2, 4]
            "#
        )
        .err(),
        Some("Expected 4 resolution factors, found 3".to_string())
    );
    assert!(layouts(
        r#"
        layout = []
        [scale]
        factors = [1, 2, 5, 10]
        "#
    )
    .is_err());
}
