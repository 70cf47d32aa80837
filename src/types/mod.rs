//! HTTP surface types
//!
//! Request and response bodies used by the API server and the CLI output.

pub mod request;
pub mod response;

pub use request::LiveStreamsParams;
pub use response::{
    ContactResponse, DecisionOutcome, DecisionResponse, ErrorResponse, GamesResponse, PingResponse,
};
