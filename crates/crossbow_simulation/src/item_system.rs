//! Item System: предметы как значения
//!
//! # Архитектура
//!
//! **ItemStack**: immutable value (material + amount + data components):
//! - Хранится в `Inventory` slots
//! - Изменения только через replacement (`with_amount`, `with_charged_projectiles`)
//! - Никаких in-place правок: кто хочет поменять предмет, кладёт новый stack в слот
//!
//! **Enchantments**: data component, есть у КАЖДОГО stack (пустой по умолчанию).
//! Хост всегда прикрепляет этот компонент, поэтому он не `Option`.
//!
//! **charged_projectiles**: загруженные в арбалет снаряды (persisted item data):
//! - пусто → арбалет не заряжен
//! - N = 1 + 2×multishot → заряжен
//!
//! # Пример
//!
//! ```rust
//! use crossbow_simulation::item_system::{Enchantment, ItemStack, Material};
//!
//! let crossbow = ItemStack::of(Material::Crossbow)
//!     .with_enchantment(Enchantment::Multishot, 1);
//! assert!(!crossbow.is_charged());
//!
//! let loaded = crossbow.with_charged_projectiles(vec![ItemStack::of(Material::Arrow)]);
//! assert!(loaded.is_charged());
//! assert!(!crossbow.is_charged()); // оригинал не тронут
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Material
// ============================================================================

/// Материал предмета (закрытый набор: только то, что нужно симуляции)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Crossbow,
    Bow,
    Arrow,
    SpectralArrow,
    TippedArrow,
    FireworkRocket,
    /// Инертный предмет-заглушка (см. `PLACEHOLDER_MATERIAL`)
    Pumpkin,
}

/// Материал, который подставляется вместо арбалета при несогласованной загрузке
pub const PLACEHOLDER_MATERIAL: Material = Material::Pumpkin;

impl Material {
    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Crossbow => "crossbow",
            Material::Bow => "bow",
            Material::Arrow => "arrow",
            Material::SpectralArrow => "spectral_arrow",
            Material::TippedArrow => "tipped_arrow",
            Material::FireworkRocket => "firework_rocket",
            Material::Pumpkin => "pumpkin",
        }
    }
}

// ============================================================================
// Enchantments
// ============================================================================

/// Модификаторы, которые читает арбалет
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Enchantment {
    QuickCharge,
    Multishot,
    Piercing,
}

/// Enchantments data component (levels, 0 = нет модификатора)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enchantments {
    pub quick_charge: u8,
    pub multishot: u8,
    pub piercing: u8,
}

impl Enchantments {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn level(&self, enchantment: Enchantment) -> u8 {
        match enchantment {
            Enchantment::QuickCharge => self.quick_charge,
            Enchantment::Multishot => self.multishot,
            Enchantment::Piercing => self.piercing,
        }
    }

    pub fn with(mut self, enchantment: Enchantment, level: u8) -> Self {
        match enchantment {
            Enchantment::QuickCharge => self.quick_charge = level,
            Enchantment::Multishot => self.multishot = level,
            Enchantment::Piercing => self.piercing = level,
        }
        self
    }
}

// ============================================================================
// ItemStack
// ============================================================================

/// Stack предметов (value type, copy-on-write)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub material: Material,
    pub amount: u8,
    #[serde(default)]
    pub enchantments: Enchantments,
    /// Загруженные снаряды (только у арбалета)
    #[serde(default)]
    pub charged_projectiles: Vec<ItemStack>,
}

impl ItemStack {
    pub fn of(material: Material) -> Self {
        Self::new(material, 1)
    }

    pub fn new(material: Material, amount: u8) -> Self {
        Self {
            material,
            amount,
            enchantments: Enchantments::none(),
            charged_projectiles: Vec::new(),
        }
    }

    pub fn is(&self, material: Material) -> bool {
        self.material == material
    }

    pub fn with_amount(&self, amount: u8) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }

    pub fn with_enchantment(&self, enchantment: Enchantment, level: u8) -> Self {
        Self {
            enchantments: self.enchantments.with(enchantment, level),
            ..self.clone()
        }
    }

    /// Modifier query (level 0 если модификатора нет)
    pub fn enchantment_level(&self, enchantment: Enchantment) -> u8 {
        self.enchantments.level(enchantment)
    }

    /// Новый stack с заменённым списком снарядов (атомарная замена целиком)
    pub fn with_charged_projectiles(&self, projectiles: Vec<ItemStack>) -> Self {
        Self {
            charged_projectiles: projectiles,
            ..self.clone()
        }
    }

    /// Инвариант: charged ⇔ список снарядов не пуст
    pub fn is_charged(&self) -> bool {
        !self.charged_projectiles.is_empty()
    }

    pub fn contains_charged(&self, material: Material) -> bool {
        self.charged_projectiles.iter().any(|p| p.material == material)
    }
}
