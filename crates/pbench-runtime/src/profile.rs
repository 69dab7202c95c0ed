//! Run profile: output and clock options loaded from TOML
//!
//! A profile never changes the simulation itself. It only selects how the
//! run is timed and how the report is printed:
//!
//! ```toml
//! print_frames = true
//! format = "json"
//! fixed_frame_dt = 0.015625
//! fixed_render_dt = 0.00390625
//! quiet = false
//! frames_out = "frames.dat"
//! ```

use crate::clock::{FrameClock, SyntheticClock, WallClock};
use pbench_core::{BenchError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(BenchError::ProfileError(format!(
                "unknown output format '{s}'; valid values: text, json"
            ))),
        }
    }
}

/// Options for one benchmark run
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunProfile {
    /// Append every sampled frame rate to the report
    pub print_frames: bool,
    pub format: OutputFormat,
    /// Replace the wall clock with fixed-length frames of this many seconds
    pub fixed_frame_dt: Option<f64>,
    /// Render share of each fixed-length frame; defaults to a quarter
    pub fixed_render_dt: Option<f64>,
    /// Suppress progress diagnostics on stderr
    pub quiet: bool,
    /// Also save the sampled frame rates to this file, for `pbench graph`
    pub frames_out: Option<PathBuf>,
}

impl RunProfile {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let profile: RunProfile = toml::from_str(source)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fixed_render_dt.is_some() && self.fixed_frame_dt.is_none() {
            return Err(BenchError::ProfileError(
                "fixed_render_dt requires fixed_frame_dt".into(),
            ));
        }
        if self.fixed_frame_dt.is_some() {
            self.synthetic_clock()?;
        }
        Ok(())
    }

    fn synthetic_clock(&self) -> Result<Option<SyntheticClock>> {
        match self.fixed_frame_dt {
            Some(frame_dt) => {
                let render_dt = self.fixed_render_dt.unwrap_or(frame_dt / 4.0);
                SyntheticClock::new(frame_dt, render_dt).map(Some)
            }
            None => Ok(None),
        }
    }

    /// The clock this profile asks for
    pub fn clock(&self) -> Result<Box<dyn FrameClock>> {
        let clock: Box<dyn FrameClock> = match self.synthetic_clock()? {
            Some(clock) => Box::new(clock),
            None => Box::new(WallClock::new()),
        };
        Ok(clock)
    }

    pub fn is_deterministic(&self) -> bool {
        self.fixed_frame_dt.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FrameMark;

    #[test]
    fn empty_profile_is_default() {
        let profile = RunProfile::from_toml_str("").unwrap();
        assert_eq!(profile, RunProfile::default());
        assert_eq!(profile.format, OutputFormat::Text);
        assert!(!profile.is_deterministic());
    }

    #[test]
    fn parse_full_profile() {
        let toml_str = r#"
print_frames = true
format = "json"
fixed_frame_dt = 0.015625
fixed_render_dt = 0.00390625
quiet = true
frames_out = "out/frames.dat"
"#;
        let profile = RunProfile::from_toml_str(toml_str).unwrap();
        assert!(profile.print_frames);
        assert_eq!(profile.format, OutputFormat::Json);
        assert_eq!(profile.fixed_frame_dt, Some(0.015625));
        assert!(profile.quiet);
        assert_eq!(profile.frames_out, Some(PathBuf::from("out/frames.dat")));

        let mut clock = profile.clock().unwrap();
        let start = clock.mark(FrameMark::FrameStart);
        let render_start = clock.mark(FrameMark::RenderStart);
        let render_end = clock.mark(FrameMark::RenderEnd);
        let end = clock.mark(FrameMark::FrameEnd);
        assert_eq!(end - start, 0.015625);
        assert_eq!(render_end - render_start, 0.00390625);
    }

    #[test]
    fn render_share_defaults_to_quarter() {
        let profile = RunProfile {
            fixed_frame_dt: Some(0.02),
            ..RunProfile::default()
        };
        let clock = profile.synthetic_clock().unwrap().unwrap();
        assert!((clock.render_dt() - 0.005).abs() < 1e-12);
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = RunProfile::from_toml_str("spawn_rate = 10").unwrap_err();
        assert!(matches!(err, BenchError::TomlParseError(_)));
    }

    #[test]
    fn render_without_frame_rejected() {
        let err = RunProfile::from_toml_str("fixed_render_dt = 0.01").unwrap_err();
        assert!(matches!(err, BenchError::ProfileError(_)));
    }

    #[test]
    fn bad_durations_rejected() {
        assert!(RunProfile::from_toml_str("fixed_frame_dt = -1.0").is_err());
        assert!(RunProfile::from_toml_str("fixed_frame_dt = 0.01\nfixed_render_dt = 0.5").is_err());
    }

    #[test]
    fn format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = RunProfile::load(Path::new("/nonexistent/pbench-profile.toml")).unwrap_err();
        assert!(matches!(err, BenchError::IoError(_)));
    }
}
