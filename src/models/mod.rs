//! Data models for LabTrack entities

pub mod device;
pub mod enums;
pub mod history;
pub mod inquiry;
pub mod manufacturer;
pub mod project;
pub mod tag;
pub mod user;

pub use enums::{DeviceStatus, HistoryChange, InquiryStatus, ProjectStatus, UserRole};
