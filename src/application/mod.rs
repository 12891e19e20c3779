pub mod adventure;
pub mod agent;
pub mod client;
pub mod tooling;
