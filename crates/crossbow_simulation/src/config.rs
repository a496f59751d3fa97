//! Параметры арбалета (tick-based тайминги, звук, баллистика)
//!
//! Значения по умолчанию = vanilla. Хост может загрузить свои из RON:
//!
//! ```rust
//! use crossbow_simulation::CrossbowConfig;
//!
//! let config = CrossbowConfig::from_ron("(launch_power: 3.15)").unwrap();
//! assert_eq!(config.launch_power, 3.15);
//! assert_eq!(config.base_charge_ticks, 25); // остальное: default
//! ```

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossbowConfig {
    /// Время зарядки без QuickCharge (тики)
    pub base_charge_ticks: u32,
    /// На сколько тиков сокращает зарядку каждый уровень QuickCharge
    pub quick_charge_step_ticks: u32,
    /// Хвост после зарядки, входит в use duration (тики)
    pub use_epilogue_ticks: u32,

    /// Progress, с которого играет start cue
    pub start_cue_progress: f64,
    /// Progress, с которого играет mid-load cue (только без QuickCharge)
    pub mid_cue_progress: f64,
    pub charge_cue_volume: f32,
    pub charge_cue_pitch: f32,

    pub shoot_volume: f32,
    pub shoot_pitch: f32,

    /// Сила выстрела (множитель скорости)
    pub launch_power: f32,
    /// Разброс (масштаб gaussian jitter)
    pub launch_spread: f32,
    /// Насколько ниже глаз появляется снаряд
    pub launch_drop: f32,
    /// Шаг веера multishot (градусы)
    pub multishot_yaw_step: f32,
}

impl Default for CrossbowConfig {
    fn default() -> Self {
        Self {
            base_charge_ticks: 25,
            quick_charge_step_ticks: 5,
            use_epilogue_ticks: 3,
            start_cue_progress: 0.2,
            mid_cue_progress: 0.5,
            charge_cue_volume: 0.5,
            charge_cue_pitch: 1.0,
            shoot_volume: 1.0,
            shoot_pitch: 1.0,
            launch_power: 3.0,
            launch_spread: 0.1,
            launch_drop: 0.1,
            multishot_yaw_step: 10.0,
        }
    }
}

impl CrossbowConfig {
    /// Parse RON (недостающие поля = default)
    pub fn from_ron(source: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(source)
    }

    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_vanilla() {
        let config = CrossbowConfig::default();
        assert_eq!(config.base_charge_ticks, 25);
        assert_eq!(config.quick_charge_step_ticks, 5);
        assert_eq!(config.use_epilogue_ticks, 3);
        assert_eq!(config.start_cue_progress, 0.2);
        assert_eq!(config.mid_cue_progress, 0.5);
        assert_eq!(config.launch_power, 3.0);
        assert_eq!(config.launch_drop, 0.1);
        assert_eq!(config.multishot_yaw_step, 10.0);
    }

    #[test]
    fn test_partial_ron_falls_back_to_defaults() {
        let config = CrossbowConfig::from_ron("(base_charge_ticks: 40, multishot_yaw_step: 15.0)")
            .expect("valid RON");

        assert_eq!(config.base_charge_ticks, 40);
        assert_eq!(config.multishot_yaw_step, 15.0);
        assert_eq!(config.use_epilogue_ticks, 3);
    }

    #[test]
    fn test_ron_round_trip() {
        let config = CrossbowConfig {
            launch_spread: 1.0,
            ..CrossbowConfig::default()
        };

        let text = config.to_ron().expect("serializable");
        assert_eq!(CrossbowConfig::from_ron(&text).expect("parsable"), config);
    }

    #[test]
    fn test_invalid_ron_is_error() {
        assert!(CrossbowConfig::from_ron("(base_charge_ticks: \"many\")").is_err());
    }
}
