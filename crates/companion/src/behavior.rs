//! The companion controller: owns the tree and its context and advances both
//! once per frame.

use behaviour_tree::{BehaviourTree, Builder, Selector, Status};
use glam::Vec3;

use crate::config::CompanionConfig;
use crate::context::{CompanionContext, CompanionEvent, Order, Sound};
use crate::nodes::{
    DropOff, Fetch, FollowPlayer, HaveNoOrder, HaveOrder, Intro, PickUp, ShootEnemy, Turret,
};

/// What the rest of the game knows about the world this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldView {
    pub player_position: Vec3,
    pub healing_station: Vec3,
    /// Position of the enemy the companion can currently see, if any.
    pub visible_enemy: Option<Vec3>,
}

pub struct CompanionBehavior {
    tree: BehaviourTree<CompanionContext>,
    context: CompanionContext,
}

impl CompanionBehavior {
    pub fn new(config: CompanionConfig, spawn: Vec3) -> Self {
        Self {
            tree: Self::build_tree(),
            context: CompanionContext::new(config, spawn),
        }
    }

    #[rustfmt::skip]
    fn build_tree() -> BehaviourTree<CompanionContext> {
        Builder::<CompanionContext>::new()
            .composite(Selector::new())
                .composite(HaveNoOrder::default())
                    .leaf(Intro)
                    .composite(FollowPlayer::default())
                        .leaf(ShootEnemy)
                    .end()
                .end()
                .composite(HaveOrder::default())
                    .composite(Fetch::default())
                        .leaf(PickUp)
                        .leaf(DropOff)
                    .end()
                    .composite(Turret::default())
                        .leaf(ShootEnemy)
                    .end()
                .end()
            .end()
            .build()
    }

    pub fn context(&self) -> &CompanionContext {
        &self.context
    }

    #[inline]
    pub fn order(&self) -> Order {
        self.context.order()
    }

    pub fn position(&self) -> Vec3 {
        self.context.position
    }

    /// Feeds this frame's world state into the context.
    pub fn observe(&mut self, world: WorldView) {
        self.context.player_position = world.player_position;
        self.context.healing_station = world.healing_station;
        self.context.sees_enemy = world.visible_enemy.is_some();
        if let Some(enemy) = world.visible_enemy {
            self.context.enemy_position = enemy;
        }
    }

    /// Lets the intro start.
    pub fn wake_up(&mut self) {
        self.context.has_woken_up = true;
    }

    pub fn toggle_shooting(&mut self) {
        self.context.no_shooting = !self.context.no_shooting;
    }

    /// Orders a health pack. Only accepted while following the player.
    pub fn request_fetch(&mut self) -> bool {
        self.request(Order::Fetch)
    }

    /// Orders a turret. Only accepted while following the player.
    pub fn request_turret(&mut self) -> bool {
        self.request(Order::Turret)
    }

    fn request(&mut self, order: Order) -> bool {
        if self.context.order() != Order::FollowPlayer {
            tracing::debug!(?order, current = ?self.context.order(), "order rejected");
            return false;
        }
        self.context.set_order(order);
        true
    }

    /// Runs one frame: ticks the tree, advances timers and moves the
    /// companion. Returns the position it is heading to.
    pub fn update(&mut self, delta: f32) -> Vec3 {
        let status = self.tree.tick(&mut self.context);
        tracing::trace!(?status, order = ?self.context.order(), "companion ticked");

        self.context.update_timers(delta);

        if self.context.turret_cooldown.reached_threshold() && !self.context.has_sent_cooldown_msg {
            self.context.emit(CompanionEvent::TurretReady);
            self.context.has_sent_cooldown_msg = true;
        }

        if self.context.heal_cooldown.reached_threshold() && self.context.has_healing_cooldown {
            self.context.emit(CompanionEvent::HealReady);
            self.context.has_healing_cooldown = false;
        }

        if self.context.conversation_timer.reached_threshold() {
            let line = self.context.next_chatter_line();
            self.context.play(Sound::Chatter(line));
            self.context.conversation_timer.reset();
        }

        self.steer(delta);
        self.context.target_position
    }

    /// Status of the last tree tick.
    pub fn status(&self) -> Status {
        self.tree.status()
    }

    pub fn drain_events(&mut self) -> Vec<CompanionEvent> {
        self.context.drain_events()
    }

    fn steer(&mut self, delta: f32) {
        let to_target = self.context.target_position - self.context.position;
        let step = self.context.config.move_speed * delta;
        let distance = to_target.length();

        self.context.position = if distance <= step {
            self.context.target_position
        } else {
            self.context.position + to_target.normalize_or_zero() * step
        };
    }
}
