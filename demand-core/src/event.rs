//! Local-event demand impact estimation.
//!
//! Each event type carries a linear coefficient and a fixed expected
//! duration: multiplier = 1.0 + score x coefficient.

use serde::Serialize;

use crate::error::{require_finite, CoreError, CoreResult};
use crate::thresholds::{
    CONCERT_COEFFICIENT, CONFERENCE_COEFFICIENT, FESTIVAL_COEFFICIENT, SPORTS_COEFFICIENT,
};
use crate::types::EventType;

/// Estimated demand impact of one regional event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventImpact {
    pub multiplier: f64,
    pub rationale: String,
    pub expected_duration: &'static str,
}

impl EventType {
    /// Demand coefficient applied per event-score point.
    pub fn coefficient(self) -> f64 {
        match self {
            EventType::Festival => FESTIVAL_COEFFICIENT,
            EventType::Conference => CONFERENCE_COEFFICIENT,
            EventType::Sports => SPORTS_COEFFICIENT,
            EventType::Concert => CONCERT_COEFFICIENT,
        }
    }

    /// How long the demand lift typically lasts.
    pub fn duration_label(self) -> &'static str {
        match self {
            EventType::Festival => "1-2 weeks",
            EventType::Conference => "3-5 days",
            EventType::Sports => "1 week",
            EventType::Concert => "2-3 days",
        }
    }
}

/// Estimate the demand multiplier for an event in a region.
pub fn estimate(event_score: f64, event_type: EventType, region: &str) -> CoreResult<EventImpact> {
    let score = require_finite("event_score", event_score)?;
    if !(0.0..=10.0).contains(&score) {
        return Err(CoreError::invalid_input(
            "event_score",
            format!("must be within 0-10, got {}", score),
        ));
    }

    let multiplier = 1.0 + score * event_type.coefficient();
    let rationale = match event_type {
        EventType::Festival => format!("{} festival surge expected", region),
        EventType::Conference => format!("Professional conference in {}", region),
        EventType::Sports => format!("Major sporting event impact in {}", region),
        EventType::Concert => format!("Concert series driving local demand in {}", region),
    };

    Ok(EventImpact {
        multiplier,
        rationale,
        expected_duration: event_type.duration_label(),
    })
}

/// Expected impact of an event as a percentage lift over base demand.
pub fn expected_impact_pct(impact: &EventImpact) -> f64 {
    (impact.multiplier - 1.0) * 100.0
}
