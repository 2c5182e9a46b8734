//! Parlor Store Library
//!
//! Persistence and authentication core for the Parlor single-room chat:
//! a durable credential store and an append-only message log, each backed
//! by a flat header-first CSV table. The presentation layer drives both
//! through [`store::ChatStore`] and owns all session state itself.

pub mod password;
pub mod paths;
pub mod store;
