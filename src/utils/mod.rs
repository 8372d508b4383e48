pub mod logger;
pub mod semver;
