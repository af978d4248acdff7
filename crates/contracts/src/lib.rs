//! Wire contracts and client-side state machines of the badge admin UI.
//!
//! Everything here is platform neutral so it can be tested natively; the
//! `frontend` crate renders it and runs the effects.

pub mod domain;
pub mod shared;
