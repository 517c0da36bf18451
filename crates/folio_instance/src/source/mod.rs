#[cfg(target_os = "android")]
mod android;
mod file;
#[cfg(not(target_os = "android"))]
mod machine;

#[cfg(target_os = "android")]
pub use android::machine;
pub use file::{persisted, random};
#[cfg(not(target_os = "android"))]
pub use machine::machine;
