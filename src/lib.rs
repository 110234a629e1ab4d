//! labcal: turn a RiskAssess lab-schedule export into a CSV that a
//! calendar application can import.

pub mod cli;
pub mod convert;
pub mod export;
pub mod init;
pub mod io;
pub mod model;
pub mod schedule;
pub mod select;
