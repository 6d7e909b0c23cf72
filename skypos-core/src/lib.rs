//! Angle handling for positional astronomy.
//!
//! `skypos-core` provides the value types the rest of the workspace is built on:
//! an [`Angle`] that carries both a degree/arcminute/arcsecond and an
//! hour/minute/second view of the same quantity, sexagesimal parsing and
//! formatting, and the [`SkyError`] type raised when an input cannot describe
//! a valid angle.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`], [`Subdivisions`], parsing, formatting, reduction |
//! | [`constants`] | Unit conversions and epoch constants |
//! | [`errors`] | [`SkyError`] and [`SkyResult`] |
//!
//! # Example
//!
//! ```
//! use skypos_core::{Angle, AngleKind};
//!
//! let ra = Angle::from_subdivisions(AngleKind::Hour, 5, 56, 19.0)?;
//! assert_eq!(ra.degree(), 89);
//! assert!((ra.degrees() - 89.079166666).abs() < 1e-8);
//! # Ok::<(), skypos_core::SkyError>(())
//! ```

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;

pub use angle::{Angle, AngleKind, Subdivisions};
pub use errors::{InvalidInputKind, SkyError, SkyResult};
