//! Worker message protocol
//!
//! Commands flow in, responses flow out. On the wire both are JSON objects
//! tagged by `type`:
//!
//! ```json
//! {"type":"initialize","bodies":[{"position":[0,10,0],"velocity":[0,0,0],"radius":1}]}
//! {"type":"spawn","position":[0,10,0],"velocity":[0,0,0],"radius":1}
//! {"type":"advance","dt":1.0}
//! {"type":"impulse"}
//! {"type":"reset","baselineCount":35}
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{BodyInit, KernelError, SolverParams};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    /// Replace every body.
    Initialize { bodies: Vec<BodyInit> },
    /// Append one body.
    Spawn(BodyInit),
    /// Run one tick; `dt` falls back to the configured default.
    Advance {
        #[serde(default)]
        dt: Option<f32>,
    },
    /// Random outward kick on every body.
    Impulse,
    /// Truncate to the baseline count and respawn survivors.
    Reset {
        #[serde(rename = "baselineCount", alias = "baseline_count")]
        baseline_count: u32,
    },
    Configure { params: SolverParams },
    BodyCount,
}

impl Command {
    pub fn from_json(json: &str) -> Result<Self, KernelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Initialize { .. } => "initialize",
            Command::Spawn(_) => "spawn",
            Command::Advance { .. } => "advance",
            Command::Impulse => "impulse",
            Command::Reset { .. } => "reset",
            Command::Configure { .. } => "configure",
            Command::BodyCount => "bodyCount",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum Response {
    Ack,
    /// `3 * n` floats, one triple per body in store order.
    Positions(Vec<f32>),
    BodyCount(u32),
}

impl Response {
    pub fn into_positions(self) -> Option<Vec<f32>> {
        match self {
            Response::Positions(p) => Some(p),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command_shape() {
        let init = Command::from_json(
            r#"{"type":"initialize","bodies":[{"position":[0,10,0],"velocity":[0,0,0],"radius":1}]}"#,
        )
        .unwrap();
        match init {
            Command::Initialize { bodies } => {
                assert_eq!(bodies.len(), 1);
                assert_eq!(bodies[0].position, [0.0, 10.0, 0.0]);
            }
            other => panic!("unexpected {:?}", other),
        }

        let spawn =
            Command::from_json(r#"{"type":"spawn","position":[1,2,3],"velocity":[0,1,0],"radius":0.5}"#)
                .unwrap();
        assert_eq!(spawn, Command::Spawn(BodyInit::new([1.0, 2.0, 3.0], [0.0, 1.0, 0.0], 0.5)));

        assert_eq!(
            Command::from_json(r#"{"type":"advance"}"#).unwrap(),
            Command::Advance { dt: None }
        );
        assert_eq!(
            Command::from_json(r#"{"type":"advance","dt":0.5}"#).unwrap(),
            Command::Advance { dt: Some(0.5) }
        );
        assert_eq!(Command::from_json(r#"{"type":"impulse"}"#).unwrap(), Command::Impulse);
        assert_eq!(
            Command::from_json(r#"{"type":"reset","baselineCount":35}"#).unwrap(),
            Command::Reset { baseline_count: 35 }
        );
        assert_eq!(
            Command::from_json(r#"{"type":"bodyCount"}"#).unwrap(),
            Command::BodyCount
        );
    }

    #[test]
    fn configure_accepts_partial_params() {
        let cmd = Command::from_json(r#"{"type":"configure","params":{"iterations":2}}"#).unwrap();
        match cmd {
            Command::Configure { params } => {
                assert_eq!(params.iterations, 2);
                assert_eq!(params.substeps, SolverParams::default().substeps);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn malformed_and_unknown_commands_are_invalid() {
        for bad in [
            "",
            "{}",
            r#"{"type":"teleport"}"#,
            r#"{"type":"reset"}"#,
            r#"{"type":"spawn","position":[0,0],"radius":1}"#,
        ] {
            match Command::from_json(bad) {
                Err(KernelError::InvalidCommand(_)) => {}
                other => panic!("{:?} parsed as {:?}", bad, other),
            }
        }
    }

    #[test]
    fn round_trips_through_json() {
        let cmd = Command::Reset { baseline_count: 12 };
        assert!(cmd.to_json().contains("baselineCount"));
        assert_eq!(Command::from_json(&cmd.to_json()).unwrap(), cmd);
        assert_eq!(cmd.kind(), "reset");

        let resp = Response::Positions(vec![1.0, 2.0, 3.0]);
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(serde_json::from_str::<Response>(&json).unwrap(), resp);
        assert_eq!(resp.into_positions(), Some(vec![1.0, 2.0, 3.0]));
        assert_eq!(Response::Ack.into_positions(), None);
    }
}
