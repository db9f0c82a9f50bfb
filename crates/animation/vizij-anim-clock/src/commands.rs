//! Serializable playback commands.
//!
//! Adapters (web/Bevy/scripting) that receive control messages as data build
//! these and pass them to [`AnimInterface::apply`](crate::AnimInterface::apply).
//! Omitted window endpoints take the same defaults as the direct calls.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PlaybackCommand {
    Play {
        #[serde(default)]
        from: Option<f64>,
        #[serde(default)]
        to: Option<f64>,
    },
    Loop {
        restart: bool,
        #[serde(default)]
        from: Option<f64>,
        #[serde(default)]
        to: Option<f64>,
    },
    Pingpong {
        restart: bool,
        #[serde(default)]
        from: Option<f64>,
        #[serde(default)]
        to: Option<f64>,
    },
    Pose {
        frame: f64,
    },
    Stop,
    SetPlayRate {
        rate: f64,
    },
    SetFrameRate {
        rate: f64,
    },
    SetNumFrames {
        num_frames: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_json_with_optional_window() {
        let cmds: Vec<PlaybackCommand> = serde_json::from_str(
            r#"[
                { "cmd": "loop", "restart": true },
                { "cmd": "play", "from": 2, "to": 5 },
                { "cmd": "stop" },
                { "cmd": "set_play_rate", "rate": -0.5 }
            ]"#,
        )
        .unwrap();
        assert_eq!(
            cmds,
            vec![
                PlaybackCommand::Loop {
                    restart: true,
                    from: None,
                    to: None
                },
                PlaybackCommand::Play {
                    from: Some(2.0),
                    to: Some(5.0)
                },
                PlaybackCommand::Stop,
                PlaybackCommand::SetPlayRate { rate: -0.5 },
            ]
        );
    }
}
