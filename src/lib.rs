#![forbid(unsafe_code)]

//! Typed builders for Radiance command lines.
//!
//! Each Radiance tool gets a command type coupling a typed option
//! collection, tool-specific file arguments, an optional output redirection
//! target, and an optional downstream piped command. Commands validate their
//! cross-field rules lazily and render to a single shell-executable line.

pub mod command;
pub mod dctimestep;
pub mod error;
pub mod gendaylit;
pub mod oconv;
pub mod options;
pub mod paths;
pub mod pinterp;
pub mod rfluxmtx;
pub mod rmtxop;
pub mod run;
pub mod trace;

pub use command::{CommandChain, RadianceCommand};
pub use dctimestep::Dctimestep;
pub use error::{RadianceError, RadianceResult};
pub use gendaylit::Gendaylit;
pub use oconv::Oconv;
pub use options::{OptionCollection, UnknownFlagPolicy};
pub use pinterp::Pinterp;
pub use rfluxmtx::Rfluxmtx;
pub use rmtxop::{Coefficients, MatrixOperand, Operator, Rmtxop};
pub use run::run_command;
pub use trace::{Rcontrib, Rtrace, Trace, TraceSchema};
