//! ECS Components стрелка
//!
//! Организация по доменам:
//! - actor: стрелок (Shooter, GameMode, ShooterPose, ShooterMotion)
//! - inventory: слоты и руки (Inventory, Hand, EquipmentSlot)
//! - item_use: активное использование предмета (ItemUseState)

pub mod actor;
pub mod inventory;
pub mod item_use;

// Re-exports для удобного импорта
pub use actor::*;
pub use inventory::*;
pub use item_use::*;
