use hoopshot_shared::snapshot::ScoreboardWire;

/// Final outcome of one shot. Emitted at most once per launch: either the
/// ball passes cleanly through the target rim, or it comes to rest without
/// having done so.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotOutcome {
    Made,
    Missed,
}

impl ShotOutcome {
    /// HUD message for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            ShotOutcome::Made => "SHOT MADE!",
            ShotOutcome::Missed => "MISSED SHOT",
        }
    }
}

/// Points, attempts, and makes for the session.
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoreboard {
    pub score: u32,
    pub attempts: u32,
    pub makes: u32,
}

impl Scoreboard {
    /// One per launch, independent of outcome.
    pub fn record_attempt(&mut self) {
        self.attempts += 1;
    }

    /// A made basket is worth two points.
    pub fn record_make(&mut self) {
        self.makes += 1;
        self.score += 2;
    }

    /// makes / attempts as a percentage; 0 with no attempts.
    pub fn accuracy(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.makes as f64 / self.attempts as f64 * 100.0
        }
    }

    pub fn to_wire(&self) -> ScoreboardWire {
        ScoreboardWire {
            score: self.score,
            attempts: self.attempts,
            makes: self.makes,
            accuracy: self.accuracy(),
        }
    }
}
