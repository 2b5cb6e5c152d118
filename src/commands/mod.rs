// Command handlers module
pub mod capitalize;
pub mod check_version;
pub mod confirm;
pub mod dpkg_version;
pub mod loading;
pub mod ls;
pub mod pick;
pub mod read;
pub mod strip;
pub mod truncate;
pub mod write;

// Re-exports for cleaner imports
pub use capitalize::execute as capitalize;
pub use check_version::execute as check_version;
pub use confirm::execute as confirm;
pub use dpkg_version::execute as dpkg_version;
pub use loading::execute as loading;
pub use ls::execute as ls;
pub use pick::execute as pick;
pub use read::execute as read;
pub use strip::execute as strip;
pub use truncate::execute as truncate;
pub use write::execute as write;
