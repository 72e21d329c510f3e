//! Companion state shared by every node of the companion tree.
//!
//! The tree receives this context on each tick. Side effects that the game
//! would route to its audio system or message bus are queued as
//! [`CompanionEvent`]s and drained by the owner after the tick.

use glam::Vec3;

use crate::config::CompanionConfig;
use crate::timer::CountupTimer;

/// The companion's current order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Dormant until woken, then rises into view.
    #[default]
    Intro,
    FollowPlayer,
    /// Fetch a health pack from the nearest healing station.
    Fetch,
    /// Hover in place and shoot at enemies.
    Turret,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sound {
    Introduction,
    Shoot,
    TurretActivated,
    Healing1,
    Healing2,
    /// One of the idle voice lines.
    Chatter(u8),
}

/// Things that happened during a frame.
#[derive(Clone, Debug, PartialEq)]
pub enum CompanionEvent {
    OrderChanged { from: Order, to: Order },
    ProjectileFired { origin: Vec3, direction: Vec3 },
    TurretDeployed { at: Vec3 },
    TurretFinished,
    /// The turret cooldown has elapsed; a new turret order is accepted.
    TurretReady,
    PlayerHealed,
    /// The heal cooldown has elapsed.
    HealReady,
    PlaySound(Sound),
}

/// Number of idle voice lines.
pub const CHATTER_LINES: u8 = 24;

/// Companion state shared by every node of the tree, passed to each tick.
pub struct CompanionContext {
    pub config: CompanionConfig,
    order: Order,

    pub position: Vec3,
    pub player_position: Vec3,
    pub healing_station: Vec3,
    pub enemy_position: Vec3,
    pub target_position: Vec3,
    pub turret_position: Option<Vec3>,
    pub intro_position: Option<Vec3>,

    pub turret_timer: CountupTimer,
    pub shoot_timer: CountupTimer,
    pub turret_cooldown: CountupTimer,
    pub heal_cooldown: CountupTimer,
    pub conversation_timer: CountupTimer,

    pub has_picked_up: bool,
    pub no_shooting: bool,
    pub sees_enemy: bool,
    pub has_woken_up: bool,
    pub has_sent_cooldown_msg: bool,
    pub has_healing_cooldown: bool,
    pub every_other_healing: bool,

    chatter_seed: u32,
    events: Vec<CompanionEvent>,
}

impl CompanionContext {
    pub fn new(config: CompanionConfig, position: Vec3) -> Self {
        Self {
            turret_timer: CountupTimer::new(config.turret_duration),
            shoot_timer: CountupTimer::ready(config.shoot_cooldown),
            turret_cooldown: CountupTimer::ready(config.turret_cooldown),
            heal_cooldown: CountupTimer::new(config.heal_cooldown),
            conversation_timer: CountupTimer::new(config.conversation_interval),
            config,
            order: Order::Intro,
            position,
            player_position: Vec3::ZERO,
            healing_station: Vec3::ZERO,
            enemy_position: Vec3::ZERO,
            target_position: position,
            turret_position: None,
            intro_position: None,
            has_picked_up: false,
            no_shooting: false,
            sees_enemy: false,
            has_woken_up: false,
            has_sent_cooldown_msg: true,
            has_healing_cooldown: true,
            every_other_healing: false,
            chatter_seed: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Changes the order, queueing an [`CompanionEvent::OrderChanged`] when it differs.
    pub fn set_order(&mut self, order: Order) {
        if self.order != order {
            tracing::debug!(from = ?self.order, to = ?order, "companion order changed");
            self.events.push(CompanionEvent::OrderChanged {
                from: self.order,
                to: order,
            });
            self.order = order;
        }
    }

    pub fn emit(&mut self, event: CompanionEvent) {
        self.events.push(event);
    }

    pub fn play(&mut self, sound: Sound) {
        self.emit(CompanionEvent::PlaySound(sound));
    }

    pub fn drain_events(&mut self) -> Vec<CompanionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advances every timer by one frame.
    pub fn update_timers(&mut self, delta: f32) {
        self.turret_timer.update(delta);
        self.turret_cooldown.update(delta);
        self.shoot_timer.update(delta);
        self.heal_cooldown.update(delta);
        self.conversation_timer.update(delta);
    }

    /// Picks the next idle voice line.
    ///
    /// A fixed-stride walk over the lines keeps runs reproducible while
    /// avoiding immediate repeats.
    pub fn next_chatter_line(&mut self) -> u8 {
        self.chatter_seed = (self.chatter_seed + 7) % u32::from(CHATTER_LINES);
        self.chatter_seed as u8
    }

    /// Point `ray_length` units above `base`.
    pub fn hover_above(&self, base: Vec3) -> Vec3 {
        base + Vec3::Y * self.config.ray_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_order_emits_only_on_change() {
        let mut ctx = CompanionContext::new(CompanionConfig::default(), Vec3::ZERO);

        ctx.set_order(Order::Intro);
        assert!(ctx.drain_events().is_empty());

        ctx.set_order(Order::FollowPlayer);
        assert_eq!(
            ctx.drain_events(),
            vec![CompanionEvent::OrderChanged {
                from: Order::Intro,
                to: Order::FollowPlayer,
            }]
        );
    }

    #[test]
    fn chatter_visits_every_line() {
        let mut ctx = CompanionContext::new(CompanionConfig::default(), Vec3::ZERO);
        let mut seen: Vec<u8> = (0..CHATTER_LINES).map(|_| ctx.next_chatter_line()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), CHATTER_LINES as usize);
    }
}
