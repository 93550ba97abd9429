//! Page interaction layer.
//!
//! `App` owns every piece of mutable page state. The runtime feeds it
//! [`Message`]s one at a time, in arrival order, and performs the returned
//! [`Effect`]s; handlers never touch the outside world themselves.

mod messages;
mod state;
mod update;

pub use messages::Message;
pub use state::App;
pub use update::Effect;
