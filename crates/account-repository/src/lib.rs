//! # Account Repository
//!
//! User store abstraction for the account API.
//!
//! ```text
//! Service
//!   ↓  Arc<S: UserStore>   (store interface)
//! MemoryUserStore           (HashMap behind one RwLock)
//! ```
//!
//! The store is owned exclusively by the account service; no other
//! component reads or writes it. Swapping in a persistent implementation
//! only requires another `UserStore` impl.

pub mod memory;
pub mod traits;

pub use memory::*;
pub use traits::*;
