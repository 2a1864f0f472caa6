pub mod catalog;
pub mod certificate;
pub mod content;
pub mod quiz;
pub mod self_check;
