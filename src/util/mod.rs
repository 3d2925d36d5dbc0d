//! Cross-cutting helpers isolating browser and credential concerns.

pub mod claims;
pub mod guard;
pub mod storage;
