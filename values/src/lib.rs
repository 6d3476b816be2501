#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Value containers that layer, override, and smooth game-facing values.

mod layered;
mod spring;

pub use layered::{LayerHandle, LayeredValue};
pub use spring::{
    Spring, SpringF32, SpringVec3, DEFAULT_DAMPING, DEFAULT_STIFFNESS, MAX_STEP_SECONDS,
};
