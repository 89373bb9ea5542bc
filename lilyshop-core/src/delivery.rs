//! Driver delivery run
//!
//! A flat list of stops with a one-way `Ready -> Delivered` transition.
//! The slide-to-confirm gesture is presentation; confirming a stop is the
//! only state change the core owns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery state of a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StopStatus {
    #[default]
    Ready,
    Delivered,
}

impl StopStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Delivered => "delivered",
        }
    }
}

impl fmt::Display for StopStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stop on the driver's run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryStop {
    pub id: String,
    pub recipient: String,
    pub address: String,
    pub phone: String,
    /// Driver-facing notes: gate codes, call-ahead requests, pets
    pub instructions: String,
    pub zone: String,
    pub status: StopStatus,
    pub bouquet: String,
}

/// The day's delivery run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DeliveryRun {
    stops: Vec<DeliveryStop>,
}

impl DeliveryRun {
    #[must_use]
    pub fn new(stops: Vec<DeliveryStop>) -> Self {
        Self { stops }
    }

    #[must_use]
    pub fn stops(&self) -> &[DeliveryStop] {
        &self.stops
    }

    #[must_use]
    pub fn find(&self, stop_id: &str) -> Option<&DeliveryStop> {
        self.stops.iter().find(|s| s.id == stop_id)
    }

    /// Stops still waiting to go out.
    #[must_use]
    pub fn pending(&self) -> Vec<&DeliveryStop> {
        self.stops
            .iter()
            .filter(|s| s.status == StopStatus::Ready)
            .collect()
    }

    /// Stops already confirmed delivered.
    #[must_use]
    pub fn completed(&self) -> Vec<&DeliveryStop> {
        self.stops
            .iter()
            .filter(|s| s.status == StopStatus::Delivered)
            .collect()
    }

    /// Confirm a delivery. One-way: a delivered stop stays delivered.
    /// Unknown IDs are a silent no-op. Returns whether anything changed.
    pub fn mark_delivered(&mut self, stop_id: &str) -> bool {
        match self.stops.iter_mut().find(|s| s.id == stop_id) {
            Some(stop) if stop.status == StopStatus::Ready => {
                stop.status = StopStatus::Delivered;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::demo_delivery_stops;

    #[test]
    fn run_starts_with_everything_pending() {
        let run = DeliveryRun::new(demo_delivery_stops());
        assert_eq!(run.pending().len(), 4);
        assert!(run.completed().is_empty());
    }

    #[test]
    fn mark_delivered_is_one_way() {
        let mut run = DeliveryRun::new(demo_delivery_stops());
        assert!(run.mark_delivered("ORD-2025-002"));
        assert!(!run.mark_delivered("ORD-2025-002"));
        assert_eq!(run.find("ORD-2025-002").unwrap().status, StopStatus::Delivered);
        assert_eq!(run.pending().len(), 3);
        assert_eq!(run.completed().len(), 1);
    }

    #[test]
    fn unknown_stop_is_a_no_op() {
        let mut run = DeliveryRun::new(demo_delivery_stops());
        assert!(!run.mark_delivered("ORD-0000-000"));
        assert_eq!(run.pending().len(), 4);
    }
}
