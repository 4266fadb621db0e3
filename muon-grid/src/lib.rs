//! A library for nested region tile layouts of a detector quarter
//!
//! ## Regions
//!
//! A layout splits each of the four detector quarters into four nested
//! regions. Region 0 surrounds the beam hole, every further region doubles
//! the cell size.
//!
//! ```rust
//! use muon_grid::{Layout, Region};
//!
//! let layout = Layout::new(2, 2);
//! assert_eq!(layout.region(2, 2), Region::Inside(0));
//! assert_eq!(layout.region(4, 2), Region::Inside(1));
//! assert_eq!(layout.region(0, 0), Region::Outside);
//! ```
//!
//! ## Mapping tiles between layouts
//!
//! ```rust
//! use muon_grid::{Layout, TileId};
//!
//! let coarse = Layout::new(2, 2);
//! let fine = Layout::new(4, 4);
//! let pad = TileId::new(0, coarse, 0, 0, 2, 2);
//! let cells: Vec<(u32, u32)> = fine
//!     .tiles(&pad)
//!     .iter()
//!     .map(|tile| (tile.nx(), tile.ny()))
//!     .collect();
//! assert_eq!(cells, vec![(4, 4), (4, 5), (5, 4), (5, 5)]);
//! assert_eq!(coarse.contains(&fine.tiles(&pad)[3]), pad);
//! ```
//!
//! ## Neighbours
//!
//! ```rust
//! use muon_grid::{Horizontal, Layout, TileId, Vertical};
//!
//! let layout = Layout::new(2, 2);
//! let pad = TileId::new(0, layout, 1, 0, 2, 2);
//! // the corner neighbour lies in the finer region 0
//! assert_eq!(
//!     layout.neighbours(&pad, Horizontal::Left, Vertical::Down),
//!     vec![TileId::new(0, layout, 0, 0, 3, 3)]
//! );
//! assert_eq!(layout.all_neighbours(&pad).len(), 8);
//! ```

#[macro_use]
extern crate log;

mod direction;
mod layout;
mod region;
mod sweep;
mod tile;
#[cfg(test)]
mod tile_test;

pub use direction::{Horizontal, Vertical, COMPASS};
pub use layout::Layout;
pub use region::{rfactor, Region, RegionScale, NQUARTERS, NREGIONS};
pub use sweep::{FineRect, LeapState, Sweep};
pub use tile::TileId;
