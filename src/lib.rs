//! visprog
//!
//! Interactive command-line data entry for quick charts. Pairs with the
//! `visprog` CLI.
//!
//! ### Features
//! - Validated terminal input: bounded numbers (clamped) and indexed menus (re-prompted)
//! - Labeled data series collection with count limits
//! - Line plots, bar graphs, pie charts, and grouped bar charts as SVG or PNG
//! - A quarterly sales report with a locale-aware summary
//!
//! ### Example
//! ```no_run
//! use visprog::prompt::{Bounds, Console};
//! use visprog::style::Marker;
//!
//! let mut console = Console::stdio();
//! let width: f64 = console.read_number("Bar width: ", Some(0.5), Bounds::between(0.1, 1.0))?;
//! let marker = console.select(&Marker::menu()?, "Choose marker (1-3): ", None)?;
//! println!("{width} {}", marker.symbol());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod collect;
pub mod config;
pub mod models;
pub mod prompt;
pub mod sales;
pub mod studio;
pub mod style;
pub mod viz;

pub use config::{ImageFormat, RenderConfig};
pub use models::{DataEntry, DataSeries};
pub use prompt::{Console, PromptError};
