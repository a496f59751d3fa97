//! Боеприпасы: поиск (selector) и загрузка в арбалет (loader)
//!
//! # Поиск
//! 1. Off hand, затем main hand: любой снаряд арбалета (стрелы, фейерверк)
//! 2. Инвентарь по порядку слотов: только стрелы
//! 3. Ничего нет + Creative → синтетическая стрела без слота (без расхода)
//!
//! # Загрузка
//! [selected] + 2×multishot копий → атомарно в `charged_projectiles`.
//! Из слота списывается ровно 1 (кроме Creative и синтетики).

use crate::components::{GameMode, Hand, Inventory};
use crate::item_system::{Enchantment, ItemStack, Material, PLACEHOLDER_MATERIAL};
use crate::logger::{log, log_warning};

// ============================================================================
// AmmoKind
// ============================================================================

/// Тип боеприпаса (закрытый набор → стратегия создания снаряда)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmmoKind {
    /// Arrow + TippedArrow
    Arrow,
    SpectralArrow,
    Firework,
}

impl AmmoKind {
    pub fn of(material: Material) -> Option<Self> {
        match material {
            Material::Arrow | Material::TippedArrow => Some(AmmoKind::Arrow),
            Material::SpectralArrow => Some(AmmoKind::SpectralArrow),
            Material::FireworkRocket => Some(AmmoKind::Firework),
            _ => None,
        }
    }

    pub fn is_arrow(self) -> bool {
        matches!(self, AmmoKind::Arrow | AmmoKind::SpectralArrow)
    }

    /// Износ арбалета за один снаряд
    pub fn wear_cost(self) -> u32 {
        match self {
            AmmoKind::Firework => 3,
            AmmoKind::Arrow | AmmoKind::SpectralArrow => 1,
        }
    }
}

/// Стрела, которую получает Creative, когда боеприпасов нет
pub fn default_arrow() -> ItemStack {
    ItemStack::of(Material::Arrow)
}

// ============================================================================
// Selection
// ============================================================================

/// Откуда взят боеприпас
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileSource {
    Slot(usize),
    /// Синтетический (Creative): списывать нечего
    Unlimited,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileSelection {
    pub stack: ItemStack,
    pub source: ProjectileSource,
}

/// Ammunition resolution: stack + слот или None
pub fn find_crossbow_projectile(inventory: &Inventory) -> Option<ProjectileSelection> {
    let held = [Hand::Off, Hand::Main].into_iter().find_map(|hand| {
        let stack = inventory.item_in_hand(hand)?;
        AmmoKind::of(stack.material)?;
        Some(ProjectileSelection {
            stack: stack.clone(),
            source: ProjectileSource::Slot(inventory.hand_slot(hand)),
        })
    });

    held.or_else(|| {
        inventory
            .iter()
            .find(|(_, stack)| AmmoKind::of(stack.material).is_some_and(AmmoKind::is_arrow))
            .map(|(slot, stack)| ProjectileSelection {
                stack: stack.clone(),
                source: ProjectileSource::Slot(slot),
            })
    })
}

/// Selector с учётом режима: Creative без боеприпасов получает синтетическую стрелу
pub fn select_projectile(inventory: &Inventory, game_mode: GameMode) -> Option<ProjectileSelection> {
    match find_crossbow_projectile(inventory) {
        Some(selection) => Some(selection),
        None if game_mode.has_unlimited_ammo() => Some(ProjectileSelection {
            stack: default_arrow(),
            source: ProjectileSource::Unlimited,
        }),
        None => None,
    }
}

/// Можно ли вообще начать зарядку
pub fn can_begin_charging(inventory: &Inventory, game_mode: GameMode) -> bool {
    select_projectile(inventory, game_mode).is_some()
}

// ============================================================================
// Loading
// ============================================================================

/// Результат загрузки
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Заряженный арбалет
    Loaded(ItemStack),
    /// Выбор не разрешился (не должно случаться) → инертная заглушка вместо арбалета
    Placeholder(ItemStack),
}

impl LoadOutcome {
    pub fn into_stack(self) -> ItemStack {
        match self {
            LoadOutcome::Loaded(stack) | LoadOutcome::Placeholder(stack) => stack,
        }
    }
}

/// Список снарядов: 1 + 2×multishot копий выбранного stack
pub fn build_projectile_list(selected: &ItemStack, multishot: u8) -> Vec<ItemStack> {
    let count = 1 + 2 * usize::from(multishot);
    vec![selected.clone(); count]
}

/// ProjectileLoader: собрать список, заменить его в арбалете, списать 1 боеприпас
pub fn load_projectiles(
    inventory: &mut Inventory,
    game_mode: GameMode,
    weapon: &ItemStack,
) -> LoadOutcome {
    let Some(selection) = select_projectile(inventory, game_mode) else {
        log_warning(&format!(
            "⚠️ Crossbow finished loading without resolvable ammunition (mode {:?}) → placeholder",
            game_mode
        ));
        return LoadOutcome::Placeholder(ItemStack::of(PLACEHOLDER_MATERIAL));
    };

    let multishot = weapon.enchantment_level(Enchantment::Multishot);
    let projectiles = build_projectile_list(&selection.stack, multishot);
    let count = projectiles.len();
    let charged = weapon.with_charged_projectiles(projectiles);

    if !game_mode.has_unlimited_ammo() {
        if let ProjectileSource::Slot(slot) = selection.source {
            inventory.decrement(slot, 1);
        }
    }

    log(&format!(
        "🏹 Crossbow loaded: {} × {} (source {:?})",
        count,
        selection.stack.material.as_str(),
        selection.source,
    ));

    LoadOutcome::Loaded(charged)
}
