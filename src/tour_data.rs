// src/tour_data.rs
use serde::{Deserialize, Serialize};

/// A point in normalized viewport-percentage space, `x, y ∈ [0, 100]`.
///
/// Coordinates are anchored against the viewer *container's* box, never the
/// transformed panorama surface, so markers stay on the glass while the
/// image moves beneath them. Sphere-style pitch/yaw coordinates are not
/// supported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Advisory check only: out-of-range positions render outside the
    /// visible viewport, they are never rejected.
    pub fn in_viewport(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

/// A clickable marker overlaid on the panorama, immutable for the duration
/// of a viewer mount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub id: String,
    pub position: Position,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// One explorable panorama with its markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub hotspots: Vec<Hotspot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: u32,
    pub year: i32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub text: String,
    pub options: Vec<QuizOption>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl QuizQuestion {
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.is_correct)
    }
}

/// Positions timeline nodes proportionally between the first and last year.
/// A single-year (zero-range) timeline centers its node.
pub fn timeline_percent(year: i32, min_year: i32, max_year: i32) -> f64 {
    let range = max_year - min_year;
    if range <= 0 {
        return 50.0;
    }
    f64::from(year - min_year) / f64::from(range) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_viewport_check() {
        assert!(Position::new(0.0, 100.0).in_viewport());
        assert!(Position::new(50.0, 50.0).in_viewport());
        assert!(!Position::new(-3.0, 50.0).in_viewport());
        assert!(!Position::new(50.0, 120.0).in_viewport());
    }

    #[test]
    fn hotspot_optional_fields_default() {
        let hotspot: Hotspot = serde_json::from_str(
            r#"{
                "id": "h1",
                "position": {"x": 35.0, "y": 45.0},
                "title": "Главный вход",
                "description": "Исторический вход в главный корпус"
            }"#,
        )
        .unwrap();
        assert_eq!(hotspot.id, "h1");
        assert_eq!(hotspot.position, Position::new(35.0, 45.0));
        assert!(hotspot.image.is_none());
        assert!(hotspot.link.is_none());
    }

    #[test]
    fn correct_option_lookup() {
        let question = QuizQuestion {
            id: 1,
            text: "?".into(),
            options: vec![
                QuizOption { id: "a".into(), text: "1886".into(), is_correct: true },
                QuizOption { id: "b".into(), text: "1895".into(), is_correct: false },
            ],
            explanation: None,
        };
        assert_eq!(question.correct_option().unwrap().id, "a");
    }

    #[test]
    fn timeline_positions_are_proportional() {
        assert_eq!(timeline_percent(1886, 1886, 2021), 0.0);
        assert_eq!(timeline_percent(2021, 1886, 2021), 100.0);
        let mid = timeline_percent(1953, 1886, 2021);
        assert!(mid > 49.0 && mid < 51.0);
        // Degenerate single-event timeline centers the node.
        assert_eq!(timeline_percent(1900, 1900, 1900), 50.0);
    }
}
