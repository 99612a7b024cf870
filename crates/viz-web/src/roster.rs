//! Built-in demo roster standing in for the external data pipeline.
//!
//! The shipped data set pairs F1 driver codes with team colors and five
//! telemetry-derived scalars per driver. The host normally streams these in;
//! here a fixed roster is paged through in windows of three, and the
//! director's shot-expiry side effect advances the window cyclically.

use viz_core::SubjectInfo;

pub const WINDOW_SIZE: usize = 3;

struct DriverEntry {
    code: &'static str,
    color: [f32; 3],
    emotions: [f32; 5],
}

// Team palette from the data generator; emotions are representative
// mid-race values in the designed [0, 1] range.
const ROSTER: &[DriverEntry] = &[
    DriverEntry {
        code: "VER",
        color: [0.024, 0.0, 0.937],
        emotions: [0.82, 0.71, 0.35, 0.88, 0.64],
    },
    DriverEntry {
        code: "HAM",
        color: [0.0, 0.824, 0.745],
        emotions: [0.74, 0.83, 0.28, 0.91, 0.52],
    },
    DriverEntry {
        code: "LEC",
        color: [0.863, 0.0, 0.0],
        emotions: [0.69, 0.58, 0.47, 0.76, 0.71],
    },
    DriverEntry {
        code: "NOR",
        color: [1.0, 0.529, 0.0],
        emotions: [0.61, 0.66, 0.31, 0.72, 0.77],
    },
    DriverEntry {
        code: "ALO",
        color: [0.0, 0.565, 1.0],
        emotions: [0.77, 0.79, 0.42, 0.85, 0.48],
    },
    DriverEntry {
        code: "GAS",
        color: [0.169, 0.271, 0.384],
        emotions: [0.55, 0.51, 0.52, 0.63, 0.58],
    },
    DriverEntry {
        code: "PER",
        color: [0.024, 0.0, 0.937],
        emotions: [0.58, 0.62, 0.44, 0.69, 0.49],
    },
    DriverEntry {
        code: "SAI",
        color: [0.863, 0.0, 0.0],
        emotions: [0.63, 0.6, 0.38, 0.74, 0.56],
    },
    DriverEntry {
        code: "VET",
        color: [0.0, 0.435, 0.384],
        emotions: [0.52, 0.73, 0.33, 0.81, 0.41],
    },
];

pub struct Roster {
    window_start: usize,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    pub fn new() -> Self {
        Self { window_start: 0 }
    }

    /// Current display window, ranks assigned by position within it.
    pub fn window(&self) -> Vec<SubjectInfo> {
        (0..WINDOW_SIZE.min(ROSTER.len()))
            .map(|k| {
                let entry = &ROSTER[(self.window_start + k) % ROSTER.len()];
                SubjectInfo {
                    id: entry.code.to_string(),
                    rank: k,
                    color: entry.color,
                    emotions: entry.emotions,
                }
            })
            .collect()
    }

    /// Move to the next window in cyclic order and return it.
    pub fn advance(&mut self) -> Vec<SubjectInfo> {
        self.window_start = (self.window_start + WINDOW_SIZE) % ROSTER.len();
        self.window()
    }

    /// Move to the previous window in cyclic order and return it.
    pub fn previous(&mut self) -> Vec<SubjectInfo> {
        self.window_start = (self.window_start + ROSTER.len() - WINDOW_SIZE) % ROSTER.len();
        self.window()
    }
}
