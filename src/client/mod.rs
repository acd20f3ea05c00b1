//! Framework-independent client core: session state, route guarding and the
//! timed quiz attempt engine. A UI embeds these and supplies only rendering.

pub mod api;
pub mod attempt;
pub mod routing;
pub mod session;

pub use api::ApiClient;
pub use attempt::{AttemptEngine, AttemptResult, AttemptSubmitter, QUIZ_SESSION_SECONDS};
pub use routing::{decide, root_redirect, RootRedirect, RouteAccess};
pub use session::{MemoryStore, Session, SessionStore};
