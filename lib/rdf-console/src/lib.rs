#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]

pub mod capability {
    pub use rdf_console_capability::*;
}

pub mod results {
    pub use rdf_console_results::*;
}

pub use capability::{Capability, CapabilityAction, CapabilityActionSet, CapabilityTopic};
pub use results::{QueryResults, QuerySolution, QuerySolutions, ResultsFormat, Term};
