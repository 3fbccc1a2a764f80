//! Output for commands.
//!
//! Handlers are created in `main` and passed down explicitly; nothing here is
//! global.
//!
//! ## Streams
//!
//! - stdout: data for other programs. The table for `gitz list`, preview
//!   text, and the `cd:<path>` directive read by the shell wrapper:
//!
//! ```bash
//! gz() {
//!     local out
//!     out="$(gitz "$@")" || return
//!     case "$out" in cd:*) cd "${out#cd:}" ;; esac
//! }
//! ```
//!
//! - stderr: messages for the user, progress and logs.

mod stream;
mod traits;

pub use stream::StreamOutput;
pub use traits::OutputHandler;
