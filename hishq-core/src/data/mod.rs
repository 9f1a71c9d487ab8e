//! Provider access and response decoding.

pub mod decode;
pub mod provider;
pub mod sohu;

pub use decode::{decode, DecodedResponse};
pub use provider::{QuoteError, QuoteProvider};
pub use sohu::SohuHisHq;
