//! Базовые компоненты стрелка: Shooter, GameMode, ShooterPose, ShooterMotion

use bevy::prelude::*;

use crate::components::{Inventory, ItemUseState};

/// Стрелок (игрок или NPC с арбалетом)
///
/// Автоматически добавляет Inventory, ItemUseState, ShooterPose, ShooterMotion через Required Components.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
#[require(Inventory, ItemUseState, ShooterPose, ShooterMotion)]
pub struct Shooter {
    pub game_mode: GameMode,
}

impl Shooter {
    pub fn new(game_mode: GameMode) -> Self {
        Self { game_mode }
    }
}

/// Режим игры стрелка
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
pub enum GameMode {
    #[default]
    Survival,
    /// Privileged mode: бесконечные боеприпасы, без расхода инвентаря
    Creative,
    Adventure,
    Spectator,
}

impl GameMode {
    pub fn has_unlimited_ammo(self) -> bool {
        matches!(self, GameMode::Creative)
    }
}

/// Поза стрелка (authoritative, обновляется хостом)
///
/// Углы в градусах: yaw 0 смотрит в +Z, положительный pitch смотрит вниз.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ShooterPose {
    /// Позиция ног
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub eye_height: f32,
}

impl Default for ShooterPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            eye_height: 1.62, // Высота глаз игрока
        }
    }
}

impl ShooterPose {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
            ..default()
        }
    }

    /// Единичный вектор взгляда (из yaw/pitch)
    pub fn look_direction(&self) -> Vec3 {
        direction_from_rotation(self.yaw, self.pitch)
    }

    pub fn eye_position(&self) -> Vec3 {
        self.position + Vec3::Y * self.eye_height
    }
}

/// Направление из yaw/pitch (градусы), уже нормализовано
pub fn direction_from_rotation(yaw: f32, pitch: f32) -> Vec3 {
    let yaw = yaw.to_radians();
    let pitch = pitch.to_radians();

    Vec3::new(
        -yaw.sin() * pitch.cos(),
        -pitch.sin(),
        yaw.cos() * pitch.cos(),
    )
}

/// Движение стрелка (velocity в блоках за тик)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ShooterMotion {
    pub velocity: Vec3,
    pub on_ground: bool,
}

impl Default for ShooterMotion {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            on_ground: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_creative_has_unlimited_ammo() {
        assert!(GameMode::Creative.has_unlimited_ammo());
        assert!(!GameMode::Survival.has_unlimited_ammo());
        assert!(!GameMode::Adventure.has_unlimited_ammo());
        assert!(!GameMode::Spectator.has_unlimited_ammo());
    }

    #[test]
    fn test_look_direction_axes() {
        let forward = ShooterPose::new(Vec3::ZERO, 0.0, 0.0).look_direction();
        assert!((forward - Vec3::Z).length() < 1e-5);

        // yaw 90 → смотрит в -X
        let west = ShooterPose::new(Vec3::ZERO, 90.0, 0.0).look_direction();
        assert!((west - Vec3::NEG_X).length() < 1e-5);

        // pitch 90 → смотрит вниз
        let down = ShooterPose::new(Vec3::ZERO, 0.0, 90.0).look_direction();
        assert!((down - Vec3::NEG_Y).length() < 1e-5);
    }

    #[test]
    fn test_eye_position() {
        let pose = ShooterPose::new(Vec3::new(1.0, 64.0, -3.0), 0.0, 0.0);
        let eye = pose.eye_position();
        assert!((eye - Vec3::new(1.0, 65.62, -3.0)).length() < 1e-4);
    }
}
