//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod config;
mod query;
#[cfg(test)]
mod config_test;
#[cfg(test)]
mod query_test;

use crate::config::{read_config, ApplicationCfg, Config, Layouts};
use clap::{App, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use muon_grid::{NQUARTERS, NREGIONS};
use std::env;
use std::io::Write;
use std::process;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        let timestamp = time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            timestamp,
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = match (args.value_of("loglevel"), rust_log_env.as_ref()) {
        (None, Ok(rust_log)) => rust_log.as_str(),
        (loglevel, _) => loglevel.unwrap_or("warn"),
    };
    builder.parse_filters(rust_log);

    builder.init();
}

fn layouts_from_args(args: &ArgMatches<'_>) -> Result<Layouts, String> {
    let path = args
        .value_of("config")
        .ok_or_else(|| "Missing configuration file".to_string())?;
    let config: ApplicationCfg = read_config(path)?;
    let layouts = Layouts::from_config(&config)?;
    debug!("Layouts in {}: {}", path, layouts.names().join(", "));
    Ok(layouts)
}

fn region(args: &ArgMatches<'_>) -> Result<String, String> {
    let layouts = layouts_from_args(args)?;
    let layout = layouts.get(args.value_of("layout").unwrap_or_default())?;
    let ix = query::parse_value(args.value_of("ix").unwrap_or_default(), "ix")?;
    let iy = query::parse_value(args.value_of("iy").unwrap_or_default(), "iy")?;
    Ok(format!("{}\n", layout.region(ix, iy)))
}

fn tiles(args: &ArgMatches<'_>) -> Result<String, String> {
    let layouts = layouts_from_args(args)?;
    let layout = layouts.get(args.value_of("layout").unwrap_or_default())?;
    let pad = args
        .value_of("tile")
        .map(|val| query::parse_tile(val, &layouts))
        .transpose()?;
    let area = args
        .value_of("area")
        .map_or(Ok((0, 0)), |val| query::parse_pair(val, "area"))?;
    let quarter = args
        .value_of("quarter")
        .map(|val| query::parse_index(val, "quarter", NQUARTERS))
        .transpose()?;
    let region = args
        .value_of("region")
        .map(|val| query::parse_index(val, "region", NREGIONS))
        .transpose()?;
    let tiles = query::tiles(&layout, pad.as_ref(), area, quarter, region);
    info!("{} tiles found in layout {}", tiles.len(), layout);
    Ok(query::format_tiles(&tiles))
}

fn neighbours(args: &ArgMatches<'_>) -> Result<String, String> {
    let layouts = layouts_from_args(args)?;
    let layout = layouts.get(args.value_of("layout").unwrap_or_default())?;
    let pad = query::parse_tile(args.value_of("tile").unwrap_or_default(), &layouts)?;
    let dirs = args
        .value_of("dir")
        .map(query::parse_directions)
        .transpose()?;
    let depth = args
        .value_of("depth")
        .map(|val| query::parse_pair(val, "depth"))
        .transpose()?;
    let tiles = query::neighbours(&layout, &pad, dirs, depth);
    info!("{} neighbours of {} found", tiles.len(), pad);
    Ok(query::format_tiles(&tiles))
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("muon_layout")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("tile calculations on nested region layouts of muon detector quarters")
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("--loglevel=[error|warn|info|debug|trace] 'Log level (Default: warn)'")
                        .about("Generate configuration template"))
        .subcommand(SubCommand::with_name("region")
                        .args_from_usage("-c, --config=<FILE> 'Load layouts from config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: warn)'
                                              --layout=<NAME> 'Layout name'
                                              --ix=<IX> 'X coordinate in grid units'
                                              --iy=<IY> 'Y coordinate in grid units'")
                        .about("Region of a grid point"))
        .subcommand(SubCommand::with_name("tiles")
                        .args_from_usage("-c, --config=<FILE> 'Load layouts from config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: warn)'
                                              --layout=<NAME> 'Layout name'
                                              --tile=[TILE] 'Covered tile as LAYOUT:STATION:QUARTER:REGION:X:Y'
                                              --area=[AX,AY] 'Margin around tile'
                                              --quarter=[1-4] 'Quarter of layout tiles'
                                              --region=[1-4] 'Region of layout tiles or region to express tile in'")
                        .about("Tiles of a layout covering a tile"))
        .subcommand(SubCommand::with_name("neighbours")
                        .args_from_usage("-c, --config=<FILE> 'Load layouts from config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: warn)'
                                              --layout=<NAME> 'Layout name'
                                              --tile=<TILE> 'Tile as LAYOUT:STATION:QUARTER:REGION:X:Y'
                                              --dir=[X,Y] 'Direction left|center|right,down|center|up (Default: all)'
                                              --depth=[DX,DY] 'Search depth'")
                        .about("Neighbours of a tile"))
}

fn main() {
    dotenv().ok();
    let mut app = app();
    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => {
            let result = match matches.subcommand() {
                ("genconfig", Some(sub_m)) => {
                    init_logger(sub_m);
                    Ok(Layouts::gen_config())
                }
                ("region", Some(sub_m)) => {
                    init_logger(sub_m);
                    region(sub_m)
                }
                ("tiles", Some(sub_m)) => {
                    init_logger(sub_m);
                    tiles(sub_m)
                }
                ("neighbours", Some(sub_m)) => {
                    init_logger(sub_m);
                    neighbours(sub_m)
                }
                _ => {
                    let _ = app.print_help();
                    Ok("\n".to_string())
                }
            };
            match result {
                Ok(output) => print!("{}", output),
                Err(e) => {
                    error!("{}", e);
                    eprintln!("{}", e);
                    process::exit(1);
                }
            }
        }
    }
}
