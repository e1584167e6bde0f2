//! Built-in environment checks.
//!
//! Each check lives in its own module and implements
//! [`Check`](crate::verifier::Check). [`builtin_registry`] lists them
//! in the order they run and appear in the summary.

pub mod android_sdk;
pub mod appium;
pub mod doctor;
pub mod emulator;
pub mod gradle;
pub mod java;
pub mod node;
pub mod server;

pub use android_sdk::AndroidSdkCheck;
pub use appium::AppiumCheck;
pub use doctor::AppiumDoctorCheck;
pub use emulator::{parse_avd_list, EmulatorCheck};
pub use gradle::GradleCheck;
pub use java::JavaCheck;
pub use node::NodeCheck;
pub use server::ServerStartupCheck;

use crate::verifier::CheckRegistry;

/// All built-in checks in run order.
pub fn builtin_registry() -> CheckRegistry {
    CheckRegistry::new()
        .with(Box::new(JavaCheck))
        .with(Box::new(NodeCheck))
        .with(Box::new(GradleCheck))
        .with(Box::new(AndroidSdkCheck))
        .with(Box::new(AppiumCheck))
        .with(Box::new(EmulatorCheck))
        .with(Box::new(AppiumDoctorCheck))
        .with(Box::new(ServerStartupCheck))
}
