//! Domain modules (vertical slices): types, wire types, conversions, clients.

pub mod position;
pub mod trade;
