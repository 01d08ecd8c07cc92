//! Runtime module — process lifecycle: logging init and boot.

pub mod boot;
