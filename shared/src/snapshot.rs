use serde::{Deserialize, Serialize};

/// Read-only view of one simulation tick, produced by the core and consumed
/// by rendering/HUD code. Nothing in here can mutate the simulation.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSnapshot {
    pub ball_pos: [f64; 3],
    /// Visual roll angles around the x and z axes (radians)
    pub ball_roll: [f64; 2],
    pub airborne: bool,
    /// Shot power, 0..=100
    pub power: u32,
    pub scoreboard: ScoreboardWire,
    /// Predicted shot arc; empty while airborne
    pub preview: Vec<[f64; 3]>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardWire {
    pub score: u32,
    pub attempts: u32,
    pub makes: u32,
    /// makes / attempts * 100, or 0 with no attempts
    pub accuracy: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_roundtrips_through_json() {
        let snap = FrameSnapshot {
            ball_pos: [1.0, 0.4, -2.5],
            ball_roll: [0.3, -0.1],
            airborne: false,
            power: 55,
            scoreboard: ScoreboardWire {
                score: 4,
                attempts: 5,
                makes: 2,
                accuracy: 40.0,
            },
            preview: vec![[0.0, 0.4, 0.0], [0.1, 0.5, 0.0]],
        };

        let json = serde_json::to_string(&snap).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ball_pos, snap.ball_pos);
        assert_eq!(back.power, 55);
        assert_eq!(back.preview.len(), 2);
        assert_eq!(back.scoreboard.makes, 2);
    }

    #[test]
    fn snapshot_uses_camel_case_keys() {
        let snap = FrameSnapshot {
            ball_pos: [0.0; 3],
            ball_roll: [0.0; 2],
            airborne: true,
            power: 50,
            scoreboard: ScoreboardWire {
                score: 0,
                attempts: 0,
                makes: 0,
                accuracy: 0.0,
            },
            preview: vec![],
        };
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"ballPos\""));
        assert!(json.contains("\"ballRoll\""));
    }
}
