//! Session state
//!
//! Each user session owns a [`SessionState`]: the page it is on, the selected
//! indicator and the last forecast produced for it. State is passed
//! explicitly; [`SessionStore`] maps session ids to states for hosts serving
//! several sessions from one process.

pub mod page;
pub mod state;
pub mod store;

pub use page::Page;
pub use state::SessionState;
pub use store::{SessionHandle, SessionStore};
