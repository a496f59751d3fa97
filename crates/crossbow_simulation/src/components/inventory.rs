//! Inventory компонент
//!
//! # Layout слотов
//! - 0..9  : hotbar (main hand = `held_slot`)
//! - 9..36 : основной инвентарь
//! - 36..40: броня
//! - 40    : off hand
//!
//! Руки: это просто view на слоты. Положить предмет в руку = заменить слот целиком.

use bevy::prelude::*;

use crate::item_system::{ItemStack, Material};

pub const INVENTORY_SIZE: usize = 41;
pub const OFF_HAND_SLOT: usize = 40;

/// Рука, в которой держится предмет
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
pub enum Hand {
    #[default]
    Main,
    Off,
}

impl Hand {
    pub fn equipment_slot(self) -> EquipmentSlot {
        match self {
            Hand::Main => EquipmentSlot::MainHand,
            Hand::Off => EquipmentSlot::OffHand,
        }
    }
}

/// Слот экипировки (адресат износа)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum EquipmentSlot {
    MainHand,
    OffHand,
}

/// Инвентарь стрелка (пустой слот = None)
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Inventory {
    slots: Vec<Option<ItemStack>>,
    /// Hotbar слот основной руки (0-8)
    pub held_slot: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            slots: vec![None; INVENTORY_SIZE],
            held_slot: 0,
        }
    }
}

impl Inventory {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Builder: положить stack в слот
    pub fn with_item(mut self, slot: usize, stack: ItemStack) -> Self {
        self.set_item(slot, Some(stack));
        self
    }

    pub fn get_item(&self, slot: usize) -> Option<&ItemStack> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Заменить слот целиком. Stack с amount 0 превращается в пустой слот.
    pub fn set_item(&mut self, slot: usize, stack: Option<ItemStack>) {
        let Some(target) = self.slots.get_mut(slot) else {
            crate::log_error(&format!("Inventory slot {} out of range", slot));
            return;
        };

        *target = stack.filter(|s| s.amount > 0);
    }

    pub fn hand_slot(&self, hand: Hand) -> usize {
        match hand {
            Hand::Main => self.held_slot,
            Hand::Off => OFF_HAND_SLOT,
        }
    }

    pub fn item_in_hand(&self, hand: Hand) -> Option<&ItemStack> {
        self.get_item(self.hand_slot(hand))
    }

    pub fn set_item_in_hand(&mut self, hand: Hand, stack: ItemStack) {
        let slot = self.hand_slot(hand);
        self.set_item(slot, Some(stack));
    }

    pub fn is_holding(&self, hand: Hand, material: Material) -> bool {
        self.item_in_hand(hand).is_some_and(|s| s.is(material))
    }

    /// Уменьшить stack в слоте на `count` (slot пустеет на нуле)
    pub fn decrement(&mut self, slot: usize, count: u8) {
        let Some(stack) = self.get_item(slot) else {
            return;
        };

        let remaining = stack.amount.saturating_sub(count);
        let replacement = stack.with_amount(remaining);
        self.set_item(slot, Some(replacement));
    }

    /// Итератор по непустым слотам (slot index, stack) в порядке индексов
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ItemStack)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, stack)| stack.as_ref().map(|s| (slot, s)))
    }
}
