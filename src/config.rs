//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use muon_grid::{Layout, RegionScale, NREGIONS};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::prelude::*;
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub scale: Option<ScaleCfg>,
    #[serde(rename = "layout")]
    pub layouts: Vec<LayoutCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ScaleCfg {
    /// Resolution factor for each region, innermost region first.
    /// Each factor must be a multiple of the previous one.
    pub factors: Vec<u32>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct LayoutCfg {
    pub name: String,
    /// Number of cells along X and Y in the nominal grid of a quarter
    pub xgrid: u32,
    pub ygrid: u32,
}

/// Named layouts sharing one region scale
#[derive(Clone, Debug)]
pub struct Layouts {
    layouts: BTreeMap<String, Layout>,
}

impl Layouts {
    pub fn get(&self, name: &str) -> Result<Layout, String> {
        self.layouts
            .get(name)
            .copied()
            .ok_or_else(|| format!("Unknown layout '{}'", name))
    }
    pub fn names(&self) -> Vec<&str> {
        self.layouts.keys().map(|name| name.as_str()).collect()
    }
}

impl<'a> Config<'a, ScaleCfg> for RegionScale {
    fn from_config(scale_cfg: &ScaleCfg) -> Result<Self, String> {
        match *scale_cfg.factors.as_slice() {
            [r1, r2, r3, r4] => RegionScale::new([r1, r2, r3, r4]),
            _ => Err(format!(
                "Expected {} resolution factors, found {}",
                NREGIONS,
                scale_cfg.factors.len()
            )),
        }
    }
    fn gen_config() -> String {
        let toml = r#"
# Resolution factors, innermost region first
[scale]
factors = [1, 2, 4, 8]
"#;
        toml.to_string()
    }
}

impl<'a> Config<'a, LayoutCfg> for Layout {
    fn from_config(layout_cfg: &LayoutCfg) -> Result<Self, String> {
        if layout_cfg.xgrid == 0 || layout_cfg.ygrid == 0 {
            return Err(format!(
                "Layout '{}' needs positive xgrid and ygrid",
                layout_cfg.name
            ));
        }
        Ok(Layout::new(layout_cfg.xgrid, layout_cfg.ygrid))
    }
    fn gen_config() -> String {
        let toml = r#"
[[layout]]
name = "pads"
xgrid = 24
ygrid = 8
"#;
        toml.to_string()
    }
}

impl<'a> Config<'a, ApplicationCfg> for Layouts {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let scale = match config.scale {
            Some(ref scale_cfg) => RegionScale::from_config(scale_cfg)?,
            None => RegionScale::default(),
        };
        let mut layouts = BTreeMap::new();
        for layout_cfg in &config.layouts {
            let layout = Layout::from_config(layout_cfg)?;
            let layout = Layout::with_scale(layout.xgrid(), layout.ygrid(), scale);
            if layouts.insert(layout_cfg.name.clone(), layout).is_some() {
                return Err(format!("Duplicate layout '{}'", layout_cfg.name));
            }
        }
        if layouts.is_empty() {
            return Err("No layout defined".to_string());
        }
        info!("{} layouts loaded", layouts.len());
        Ok(Layouts { layouts })
    }
    fn gen_config() -> String {
        let mut config = String::new();
        config.push_str(&RegionScale::gen_config());
        config.push_str(&Layout::gen_config());
        config.push_str(
            r#"
[[layout]]
name = "xstrips"
xgrid = 48
ygrid = 1

[[layout]]
name = "ystrips"
xgrid = 2
ygrid = 8
"#,
        );
        config
    }
}

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    config_toml
        .parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
