#![deny(warnings)]
pub mod model;
pub mod rules;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "chopsticks"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
