//! The three release operations: create, upload, delete.
//!
//! Each is a free async function over the [`ReleaseApi`](crate::github::ReleaseApi)
//! seam, so the CLI drives them with the real client and the unit tests drive
//! them with a recording double. One invocation runs one operation to
//! completion; remote calls are issued strictly in sequence.

mod create;
mod delete;
mod upload;

pub use create::create_release;
pub use delete::delete_release;
pub use upload::upload_asset;
