// Cliniq domain logic: who is logged in, what they may see, and how fetched
// collections become view models. No I/O lives here: the guard reads
// through the SessionStore trait and the reducers are pure functions, so
// everything is testable without a backend.

pub mod dashboard;
pub mod dispatch;
pub mod guard;
pub mod store;
pub mod validate;

pub use dashboard::*;
pub use dispatch::*;
pub use guard::*;
pub use store::*;
pub use validate::*;
