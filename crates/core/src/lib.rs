//! Text, number and path transformations behind the `multitool` subcommands
//!
//! Nothing in here touches the filesystem or the terminal. The binary reads
//! files, walks directories and prints; this crate only turns already-loaded
//! data into results, so every function can be tested with plain values.
//!
//! - [`wordfreq`]: tokenize text and rank tokens by count
//! - [`fibonacci`]: the first N Fibonacci numbers as `u128`
//! - [`numeric`]: signed decimal scanning for numeric arguments
//! - [`json`]: flatten a `serde_json::Value` into `path: value` leaves
//! - [`pipeline`]: chains of capitalize / reverse / exclaim
//! - [`finder`]: extension matching and error policy for directory walks
//!
//! # Example Usage
//!
//! ```rust
//! use multitool_core::pipeline::Pipeline;
//!
//! let output = Pipeline::default().run("hello world");
//! assert_eq!(output, "dlroW olleH!!!");
//! ```

pub mod fibonacci;
pub mod finder;
pub mod json;
pub mod numeric;
pub mod pipeline;
pub mod wordfreq;
