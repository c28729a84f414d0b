//! Conversion helpers shared by the criteria.
//!
//! Everything here is a pure function or a static table: unit factors for
//! distance and mass, the RGB/HSL transform, time unit lengths, and the
//! number/text rules the criteria follow when reading and writing numbers.

pub mod color;
pub mod number;
pub mod time;
pub mod units;
