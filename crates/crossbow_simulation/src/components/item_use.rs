//! ItemUseState: активное использование предмета (удержание ПКМ)
//!
//! Хост продвигает `elapsed_ticks` каждый тик и шлёт `ItemUseEvent::Finish`,
//! когда истёк `duration`. Арбалет стартует запись при принятом Begin
//! и обрывает её при выстреле.

use bevy::prelude::*;

use crate::components::Hand;

#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUseState {
    pub active: Option<ActiveItemUse>,
}

/// Текущее использование предмета
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveItemUse {
    pub hand: Hand,
    /// Сколько тиков предмет уже удерживается
    pub elapsed_ticks: u32,
    /// Длительность использования (None = пока не отпустят)
    pub duration: Option<u32>,
}

impl ItemUseState {
    pub fn start(&mut self, hand: Hand, duration: Option<u32>) {
        self.active = Some(ActiveItemUse {
            hand,
            elapsed_ticks: 0,
            duration,
        });
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_hand(&self) -> Option<Hand> {
        self.active.map(|a| a.hand)
    }

    /// Продвинуть на один тик (вызывается хостом).
    /// Возвращает true в тот тик, когда duration истёк.
    pub fn advance(&mut self) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        active.elapsed_ticks += 1;
        active.duration.is_some_and(|d| active.elapsed_ticks == d)
    }
}
