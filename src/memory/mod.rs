//! Node storage for linked containers
//!
//! The tree and the list never allocate nodes individually. They obtain
//! slots from a [`NodeArena`] and link nodes by [`SlotId`].

pub mod arena;

pub use arena::{ArenaStats, NodeArena, SlotId, MAX_SLOTS, NIL, NO_OWNER};
