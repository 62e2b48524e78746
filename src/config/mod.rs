//! Read-only configuration snapshot.
//!
//! Values arrive already parsed; nothing here touches files. Rule
//! predicates never consult this snapshot, callers pass the relevant
//! team color explicitly.

mod diagnostic;

pub use diagnostic::ConfigDiagnostic;

use crate::core::{TeamColor, TeamSide, MAX_ROBOTS};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub soccer: SoccerConfig,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommonConfig {
    pub our_color: TeamColor,
}

/// Hardware capabilities of one robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotPhysicalStatus {
    pub has_dribbler: bool,
    pub has_direct_kick: bool,
    pub has_chip_kick: bool,
    pub is_3d_printed: bool,
}

impl Default for RobotPhysicalStatus {
    fn default() -> Self {
        Self {
            has_dribbler: true,
            has_direct_kick: true,
            has_chip_kick: true,
            is_3d_printed: false,
        }
    }
}

/// One parsed row of the robot capability table.
///
/// Flags left out of a row are read as `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotStatusEntry {
    pub id: Option<i32>,
    #[serde(default)]
    pub has_dribbler: Option<bool>,
    #[serde(default)]
    pub has_direct_kick: Option<bool>,
    #[serde(default)]
    pub has_chip_kick: Option<bool>,
    #[serde(default)]
    pub is_3d_printed: Option<bool>,
}

impl From<&RobotStatusEntry> for RobotPhysicalStatus {
    fn from(entry: &RobotStatusEntry) -> Self {
        Self {
            has_dribbler: entry.has_dribbler.unwrap_or(false),
            has_direct_kick: entry.has_direct_kick.unwrap_or(false),
            has_chip_kick: entry.has_chip_kick.unwrap_or(false),
            is_3d_printed: entry.is_3d_printed.unwrap_or(false),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoccerConfig {
    pub our_side: TeamSide,
    /// One-touch damping factor.
    pub one_touch_beta: f32,
    /// One-touch reflect factor.
    pub one_touch_gamma: f32,
    pub one_touch_shoot_k: f32,
    pub mark_in_stop: bool,
    /// Indexed by robot id.
    pub robot_physical_status: [RobotPhysicalStatus; MAX_ROBOTS],
}

impl Default for SoccerConfig {
    fn default() -> Self {
        Self {
            our_side: TeamSide::Left,
            one_touch_beta: 0.4,
            one_touch_gamma: 0.14,
            one_touch_shoot_k: 4000.0,
            mark_in_stop: false,
            robot_physical_status: [RobotPhysicalStatus::default(); MAX_ROBOTS],
        }
    }
}

impl SoccerConfig {
    /// Apply a robot capability table, collecting every mistake in it.
    ///
    /// Entries are expected in id order. An entry whose id disagrees with
    /// its position is still applied at its id; entries without an id or
    /// with an id outside the table are skipped. Each mistake is logged
    /// and returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use matchstate::config::{ConfigDiagnostic, RobotStatusEntry, SoccerConfig};
    ///
    /// let entries = [
    ///     RobotStatusEntry { id: Some(0), has_dribbler: Some(true), ..Default::default() },
    ///     RobotStatusEntry { id: Some(3), has_chip_kick: Some(true), ..Default::default() },
    /// ];
    ///
    /// let (config, diagnostics) = SoccerConfig::default().with_robot_table(&entries);
    /// assert!(config.robot_physical_status[3].has_chip_kick);
    /// assert!(!config.robot_physical_status[3].has_dribbler);
    /// assert_eq!(diagnostics, vec![ConfigDiagnostic::OutOfOrder { position: 1, id: 3 }]);
    /// ```
    pub fn with_robot_table(&self, entries: &[RobotStatusEntry]) -> (SoccerConfig, Vec<ConfigDiagnostic>) {
        let mut config = self.clone();

        let checks: Vec<Validation<(), NonEmptyVec<ConfigDiagnostic>>> = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                let check = check_entry(position, entry);
                if let Some(slot) = target_slot(entry) {
                    config.robot_physical_status[slot] = RobotPhysicalStatus::from(entry);
                }
                check
            })
            .collect();

        let diagnostics = match Validation::all_vec(checks) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        };

        for diagnostic in &diagnostics {
            tracing::warn!(position = diagnostic.position(), "{}", diagnostic);
        }

        (config, diagnostics)
    }
}

fn target_slot(entry: &RobotStatusEntry) -> Option<usize> {
    entry
        .id
        .and_then(|id| usize::try_from(id).ok())
        .filter(|id| *id < MAX_ROBOTS)
}

fn check_entry(position: usize, entry: &RobotStatusEntry) -> Validation<(), NonEmptyVec<ConfigDiagnostic>> {
    let diagnostic = match entry.id {
        None => Some(ConfigDiagnostic::MissingId { position }),
        Some(id) if target_slot(entry).is_none() => Some(ConfigDiagnostic::OutOfRange { position, id }),
        Some(id) if usize::try_from(id).ok() != Some(position) => {
            Some(ConfigDiagnostic::OutOfOrder { position, id })
        }
        Some(_) => None,
    };

    match diagnostic {
        Some(diagnostic) => Validation::fail(diagnostic),
        None => Validation::success(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: Option<i32>) -> RobotStatusEntry {
        RobotStatusEntry {
            id,
            has_dribbler: Some(true),
            has_direct_kick: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.common.our_color, TeamColor::Blue);
        assert_eq!(config.soccer.our_side, TeamSide::Left);
        assert_eq!(config.soccer.one_touch_beta, 0.4);
        assert_eq!(config.soccer.one_touch_gamma, 0.14);
        assert_eq!(config.soccer.one_touch_shoot_k, 4000.0);
        assert!(!config.soccer.mark_in_stop);
        assert!(config
            .soccer
            .robot_physical_status
            .iter()
            .all(|r| r.has_dribbler && r.has_direct_kick && r.has_chip_kick && !r.is_3d_printed));
    }

    #[test]
    fn ordered_table_has_no_diagnostics() {
        let entries: Vec<_> = (0..4).map(|i| entry(Some(i))).collect();
        let (config, diagnostics) = SoccerConfig::default().with_robot_table(&entries);

        assert!(diagnostics.is_empty());
        for status in &config.robot_physical_status[..4] {
            assert!(status.has_dribbler);
            assert!(!status.has_chip_kick);
        }
        assert!(config.robot_physical_status[4].has_chip_kick);
    }

    #[test]
    fn every_mistake_is_reported() {
        let entries = [entry(Some(0)), entry(None), entry(Some(5)), entry(Some(40)), entry(Some(-2))];
        let (config, diagnostics) = SoccerConfig::default().with_robot_table(&entries);

        assert_eq!(
            diagnostics,
            vec![
                ConfigDiagnostic::MissingId { position: 1 },
                ConfigDiagnostic::OutOfOrder { position: 2, id: 5 },
                ConfigDiagnostic::OutOfRange { position: 3, id: 40 },
                ConfigDiagnostic::OutOfRange { position: 4, id: -2 },
            ]
        );
        // Out-of-order rows still land at their declared id.
        assert!(!config.robot_physical_status[5].has_chip_kick);
        assert!(config.robot_physical_status[1].has_chip_kick);
    }

    #[test]
    fn base_config_is_untouched() {
        let base = SoccerConfig::default();
        let (_, _) = base.with_robot_table(&[entry(Some(0))]);
        assert!(base.robot_physical_status[0].has_chip_kick);
    }

    #[test]
    fn config_reads_from_json_with_defaults() {
        let config: Config = serde_json::from_str(
            r#"{ "common": { "our_color": 0 }, "soccer": { "mark_in_stop": true } }"#,
        )
        .unwrap();

        assert_eq!(config.common.our_color, TeamColor::Yellow);
        assert!(config.soccer.mark_in_stop);
        assert_eq!(config.soccer.one_touch_beta, 0.4);
    }

    #[test]
    fn diagnostics_render() {
        let diagnostic = ConfigDiagnostic::OutOfOrder { position: 2, id: 5 };
        assert_eq!(diagnostic.to_string(), "robot entry #2 has id 5, expected 2");
        assert_eq!(diagnostic.position(), 2);
    }
}
