//! UseSession: transient состояние попытки зарядки (per entity)
//!
//! Флаги (все one-shot):
//! - `start_sound_played` / `mid_load_sound_played`: cue играют максимум раз за сессию
//! - `just_finished_loading`: только что зарядили; выстрел заблокирован до отпускания
//! - `just_shot`: только что выстрелили; следующий Begin обнуляет устаревший заряд
//!
//! Не сохраняется между reconnect/save: живёт только в `CrossbowSessions`.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::components::Hand;
use crate::config::CrossbowConfig;
use crate::crossbow::charge::{mid_load_cue, start_cue};
use crate::crossbow::sound::SoundCue;

/// Фаза попытки (диагностика; поведение определяют флаги)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum ChargePhase {
    #[default]
    Idle,
    Charging,
    Charged,
    /// Отпустили до окончания зарядки
    Cancelled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UseSession {
    pub phase: ChargePhase,
    pub hand: Option<Hand>,
    pub start_sound_played: bool,
    pub mid_load_sound_played: bool,
    pub just_finished_loading: bool,
    pub just_shot: bool,
}

impl UseSession {
    /// Сброс звуковых флагов (cancel или успешный finish)
    pub fn reset_charge_sounds(&mut self) {
        self.start_sound_played = false;
        self.mid_load_sound_played = false;
    }

    /// Cue, которые надо проиграть на данном progress (каждый: максимум раз за сессию)
    pub fn take_charge_cues(
        &mut self,
        progress: f64,
        quick_charge: u8,
        config: &CrossbowConfig,
    ) -> Vec<SoundCue> {
        let mut cues = Vec::new();

        if progress >= config.start_cue_progress && !self.start_sound_played {
            cues.push(start_cue(quick_charge));
            self.start_sound_played = true;
        }

        if progress >= config.mid_cue_progress && !self.mid_load_sound_played {
            if let Some(cue) = mid_load_cue(quick_charge) {
                cues.push(cue);
                self.mid_load_sound_played = true;
            }
        }

        cues
    }
}

/// Сессии всех стрелков (lookup по Entity)
#[derive(Resource, Debug, Default)]
pub struct CrossbowSessions {
    sessions: HashMap<Entity, UseSession>,
}

impl CrossbowSessions {
    pub fn get(&self, entity: Entity) -> Option<&UseSession> {
        self.sessions.get(&entity)
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut UseSession> {
        self.sessions.get_mut(&entity)
    }

    /// Сессия стрелка (создаётся при первом обращении)
    pub fn entry(&mut self, entity: Entity) -> &mut UseSession {
        self.sessions.entry(entity).or_default()
    }

    pub fn remove(&mut self, entity: Entity) -> Option<UseSession> {
        self.sessions.remove(&entity)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.sessions.contains_key(&entity)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
