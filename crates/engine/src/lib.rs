//! Simulation engine - drives generations on a display.
//!
//! Glue between the pure core and the outside world:
//!
//! - [`setup`]: builds the first generation from a [`SeedSpec`]
//! - [`driver`]: the render / step / pause loop
//! - [`pacer`]: how the loop waits between generations
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use tui_life_core::SimpleRng;
//! use tui_life_engine::{Driver, DriverConfig, InstantPacer, SeedSpec};
//! use tui_life_term::PlainDisplay;
//!
//! let seed = SeedSpec::default().build(&mut SimpleRng::new(1)).unwrap();
//! let config = DriverConfig { iterations: 3, delay: Duration::ZERO, ..Default::default() };
//!
//! let mut driver = Driver::new(seed, config);
//! let mut display = PlainDisplay::new(Vec::new());
//! let summary = driver.run(&mut display, &mut InstantPacer).unwrap();
//! assert_eq!(summary.frames, 3);
//! assert_eq!(summary.generation, 3);
//! ```

pub mod driver;
pub mod pacer;
pub mod setup;

pub use tui_life_core as core;
pub use tui_life_term as term;
pub use tui_life_types as types;

pub use driver::{Driver, DriverConfig, RunSummary};
pub use pacer::{scaled_delay, Control, InstantPacer, Pacer, SleepPacer};
pub use setup::SeedSpec;
