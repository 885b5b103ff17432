pub mod demo_source;
pub mod h2h;
pub mod report;
pub mod source;
pub mod stats;
pub mod teams;
