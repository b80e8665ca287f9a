pub mod loader;
pub mod output;
pub mod record;
pub mod report;
