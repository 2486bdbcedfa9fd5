use serde::{Deserialize, Serialize};

/// A monitored spot in the home
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Kitchen,
    LivingRoom,
    Hallway,
    UtilityRoom,
}

impl Location {
    /// All locations in display order
    pub const ALL: [Location; 4] = [
        Location::Kitchen,
        Location::LivingRoom,
        Location::Hallway,
        Location::UtilityRoom,
    ];

    /// Korean display label
    pub fn label(self) -> &'static str {
        match self {
            Location::Kitchen => "주방",
            Location::LivingRoom => "거실",
            Location::Hallway => "복도",
            Location::UtilityRoom => "다용도실",
        }
    }
}

/// Number of detections attributed to one location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCount {
    pub location: Location,
    pub count: u32,
}

impl LocationCount {
    pub fn new(location: Location, count: u32) -> Self {
        Self { location, count }
    }
}

/// Total count plus the per-location breakdown shown on a record page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    /// Total detections
    pub total: u32,

    /// Per-location detections, in display order
    pub by_location: Vec<LocationCount>,
}

impl RecordSummary {
    /// Build a summary from counts given in `Location::ALL` order
    pub fn from_counts(total: u32, counts: [u32; 4]) -> Self {
        Self {
            total,
            by_location: Location::ALL
                .iter()
                .zip(counts)
                .map(|(&location, count)| LocationCount::new(location, count))
                .collect(),
        }
    }
}

/// Summary backing the anomalous behavior page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalousRecord {
    pub summary: RecordSummary,
}

impl AnomalousRecord {
    /// Placeholder values until a real detection source is wired in
    pub fn placeholder() -> Self {
        Self {
            summary: RecordSummary::from_counts(9, [5, 3, 1, 0]),
        }
    }
}

/// Summary backing the dangerous behavior page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DangerousRecord {
    pub summary: RecordSummary,

    /// Free-text descriptions of detected incidents
    pub incidents: Vec<String>,
}

impl DangerousRecord {
    /// Placeholder values until a real detection source is wired in
    pub fn placeholder() -> Self {
        Self {
            summary: RecordSummary::from_counts(2, [2, 0, 0, 0]),
            incidents: vec![
                "가스불 끄지 않음".to_string(),
                "현관문 닫지 않음".to_string(),
            ],
        }
    }
}

/// Everything a server instance renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Records {
    pub anomalous: AnomalousRecord,
    pub dangerous: DangerousRecord,
}

impl Records {
    pub fn placeholder() -> Self {
        Self {
            anomalous: AnomalousRecord::placeholder(),
            dangerous: DangerousRecord::placeholder(),
        }
    }
}

impl Default for Records {
    fn default() -> Self {
        Self::placeholder()
    }
}
