use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{MotionError, MotionResult};

use super::config_validation::validate_timeline_rows_config;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineRowsConfig {
    /// How long a row keeps its leaving style before it is hidden.
    pub leave_duration_ms: f64,
    /// Offset of the drawn line against the layout; its magnitude is
    /// subtracted from the filled length.
    pub line_nudge_px: f64,
}

impl Default for TimelineRowsConfig {
    fn default() -> Self {
        Self {
            leave_duration_ms: 620.0,
            line_nudge_px: 0.0,
        }
    }
}

/// Visibility of one timeline row, mirrored by the `in-view` / `leaving`
/// classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RowPhase {
    Hidden,
    InView,
    /// Still in view, playing its exit until `until_ms`.
    Leaving { until_ms: f64 },
}

impl RowPhase {
    #[must_use]
    pub fn is_in_view(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    #[must_use]
    pub fn is_leaving(self) -> bool {
        matches!(self, Self::Leaving { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TimelineRow {
    dot_center_px: f64,
    phase: RowPhase,
}

/// Shows timeline rows as the progress line reaches their dots and hides
/// them once it retracts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimelineRows {
    config: TimelineRowsConfig,
    rows: IndexMap<String, TimelineRow>,
}

impl TimelineRows {
    pub fn new(config: TimelineRowsConfig) -> MotionResult<Self> {
        validate_timeline_rows_config(config)?;
        Ok(Self {
            config,
            rows: IndexMap::new(),
        })
    }

    /// Registers a row by the centre of its dot, measured from the top of the
    /// timeline. Re-registering updates the position and keeps the phase.
    pub fn register(&mut self, id: impl Into<String>, dot_center_px: f64) -> MotionResult<()> {
        let id = id.into();
        if id.is_empty() {
            return Err(MotionError::InvalidConfig(
                "timeline row id must not be empty".to_owned(),
            ));
        }
        if !dot_center_px.is_finite() {
            return Err(MotionError::InvalidGeometry {
                top: dot_center_px,
                height: 0.0,
            });
        }
        self.rows
            .entry(id)
            .and_modify(|row| row.dot_center_px = dot_center_px)
            .or_insert(TimelineRow {
                dot_center_px,
                phase: RowPhase::Hidden,
            });
        Ok(())
    }

    #[must_use]
    pub fn phase(&self, id: &str) -> Option<RowPhase> {
        self.rows.get(id).map(|row| row.phase)
    }

    #[must_use]
    pub fn in_view_ids(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|(_, row)| row.phase.is_in_view())
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Length of line actually drawn for a displayed progress.
    #[must_use]
    pub fn visible_fill(&self, displayed: f64, timeline_height: f64) -> f64 {
        (displayed * timeline_height - self.config.line_nudge_px.abs()).max(0.0)
    }

    /// Applies a displayed progress; returns how many rows changed phase.
    ///
    /// A row already leaving is left alone until `poll` hides it.
    pub fn update(&mut self, displayed: f64, timeline_height: f64, now_ms: f64) -> usize {
        if self.rows.is_empty() || !timeline_height.is_finite() || timeline_height <= 0.0 {
            return 0;
        }
        let fill = self.visible_fill(displayed, timeline_height);
        let leave_until = now_ms + self.config.leave_duration_ms;
        let mut changed = 0;
        for (id, row) in &mut self.rows {
            match row.phase {
                RowPhase::Hidden if row.dot_center_px <= fill => {
                    row.phase = RowPhase::InView;
                    trace!(row = %id, fill, "timeline row entered");
                    changed += 1;
                }
                RowPhase::InView if row.dot_center_px > fill => {
                    row.phase = RowPhase::Leaving {
                        until_ms: leave_until,
                    };
                    trace!(row = %id, fill, "timeline row leaving");
                    changed += 1;
                }
                _ => {}
            }
        }
        changed
    }

    /// Hides rows whose exit finished; returns how many were hidden.
    pub fn poll(&mut self, now_ms: f64) -> usize {
        let mut hidden = 0;
        for row in self.rows.values_mut() {
            if let RowPhase::Leaving { until_ms } = row.phase {
                if now_ms >= until_ms {
                    row.phase = RowPhase::Hidden;
                    hidden += 1;
                }
            }
        }
        hidden
    }

    /// Hides every row at once, for a clean re-entry into the timeline.
    pub fn reset(&mut self) {
        let mut cleared = 0;
        for row in self.rows.values_mut() {
            if row.phase.is_in_view() {
                cleared += 1;
            }
            row.phase = RowPhase::Hidden;
        }
        if cleared > 0 {
            debug!(cleared, "timeline rows reset");
        }
    }
}
