//! checkform Types - Core types for the verification questionnaire
//!
//! A questionnaire is an ordered list of yes/no check items fetched from a
//! remote Check Item Source. Answers flow back to the same source as
//! minimal result records.
//!
//! ## Key Concepts
//!
//! - **CheckItem**: One verification question with a display priority
//! - **Answer**: A yes/no response to a check item
//! - **CheckResult**: The submission record for one answered, enabled item

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod answer;
pub mod ids;
pub mod item;
pub mod result;

pub use answer::{Answer, ParseAnswerError};
pub use ids::CheckId;
pub use item::CheckItem;
pub use result::CheckResult;
