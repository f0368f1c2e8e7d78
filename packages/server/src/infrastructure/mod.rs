//! Infrastructure layer: concrete implementations of the domain seams and the
//! HTTP DTOs.

pub mod dto;
pub mod message_pusher;
pub mod repository;
