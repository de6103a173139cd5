//! Session token handling for the dashboard

mod navigator;
mod session;
mod storage;

pub use navigator::*;
pub use session::*;
pub use storage::*;
