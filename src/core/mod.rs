//! Core samples - one module per design principle, no shared state between them.

/// Smart device capabilities (interface segregation)
pub mod device;
/// Media playback substitutability (Liskov substitution)
pub mod media;
/// Notification dispatch over injected senders (dependency inversion)
pub mod notification;
/// User registration, merged and split (single responsibility)
pub mod registration;
/// Shipping cost strategies (open/closed)
pub mod shipping;
