//! The four-step try-on wizard.

pub(crate) mod job;
pub(crate) mod machine;
pub(crate) mod measurements;
pub(crate) mod state;
