//! Algorithm implementations for clinical mobility assessment
//!
//! This module contains the pose normalizer, the disease profile registry,
//! the fall-risk scorer and the gait-speed normative comparator. Each is an
//! independent pure transform over data fixed at process start.

pub mod fall_risk;
pub mod normative;
pub mod pose;
pub mod profiles;
