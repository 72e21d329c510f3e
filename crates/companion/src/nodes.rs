//! Companion behaviour nodes.
//!
//! The order-driven composites below pick which of their children to tick
//! from the current [`Order`] rather than walking them in sequence, so they
//! implement their own `update` on top of a plain [`Composite`].

use behaviour_tree::{Behavior, Composite, CompositeBehavior, Status};

use crate::context::{CompanionContext, CompanionEvent, Order, Sound};

/// Implements [`CompositeBehavior`] for a struct with a `children` field.
macro_rules! impl_composite {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CompositeBehavior<CompanionContext> for $ty {
                fn composite(&self) -> &Composite<CompanionContext> {
                    &self.children
                }

                fn composite_mut(&mut self) -> &mut Composite<CompanionContext> {
                    &mut self.children
                }
            }
        )*
    };
}

impl_composite!(HaveNoOrder, HaveOrder, FollowPlayer, Fetch, Turret);

/// Runs while the companion has no explicit order: the intro, then following.
///
/// Fails as soon as a Fetch or Turret order is active. Otherwise ticks every
/// child and reports `Running` if any of them is still running.
#[derive(Default)]
pub struct HaveNoOrder {
    children: Composite<CompanionContext>,
}

impl Behavior<CompanionContext> for HaveNoOrder {
    fn update(&mut self, ctx: &mut CompanionContext) -> Status {
        if matches!(ctx.order(), Order::Fetch | Order::Turret) {
            return Status::Failure;
        }

        let mut running = false;
        for child in self.children.children_mut() {
            running |= child.tick(ctx).is_running();
        }

        if running {
            Status::Running
        } else {
            Status::Success
        }
    }

    fn reset(&mut self) {
        self.children.reset();
    }
}

/// Carries out an explicit order. Children: `[Fetch, Turret]`.
///
/// Fails once the order has been handed back to following the player.
#[derive(Default)]
pub struct HaveOrder {
    children: Composite<CompanionContext>,
}

impl HaveOrder {
    const FETCH: usize = 0;
    const TURRET: usize = 1;
}

impl Behavior<CompanionContext> for HaveOrder {
    fn update(&mut self, ctx: &mut CompanionContext) -> Status {
        let branch = match ctx.order() {
            Order::Fetch => Some(Self::FETCH),
            Order::Turret => Some(Self::TURRET),
            Order::Intro | Order::FollowPlayer => None,
        };
        if let Some(child) = branch.and_then(|index| self.children.child_mut(index)) {
            child.tick(ctx);
        }

        if ctx.order() == Order::FollowPlayer {
            Status::Failure
        } else {
            Status::Success
        }
    }

    fn reset(&mut self) {
        self.children.reset();
    }
}

/// Keeps the player as the movement target and ticks its children
/// (the opportunistic shooter) every frame. Never finishes on its own.
#[derive(Default)]
pub struct FollowPlayer {
    children: Composite<CompanionContext>,
}

impl Behavior<CompanionContext> for FollowPlayer {
    fn update(&mut self, ctx: &mut CompanionContext) -> Status {
        if ctx.order() != Order::FollowPlayer {
            return Status::Failure;
        }

        for child in self.children.children_mut() {
            child.tick(ctx);
        }

        ctx.target_position = ctx.player_position;
        Status::Running
    }

    fn reset(&mut self) {
        self.children.reset();
    }
}

/// Fetches a health pack. Children: `[PickUp, DropOff]`.
///
/// Ticks the pick-up until the pack is carried, then the drop-off. The drop-off
/// ends the order itself, so this node always reports `Running`.
#[derive(Default)]
pub struct Fetch {
    children: Composite<CompanionContext>,
}

impl Behavior<CompanionContext> for Fetch {
    fn update(&mut self, ctx: &mut CompanionContext) -> Status {
        let step = usize::from(ctx.has_picked_up);
        if let Some(child) = self.children.child_mut(step) {
            child.tick(ctx);
        }
        Status::Running
    }

    fn reset(&mut self) {
        self.children.reset();
    }
}

/// Hovers above the spot the player stood on and shoots from there until the
/// turret duration runs out. Children: `[ShootEnemy]`.
#[derive(Default)]
pub struct Turret {
    children: Composite<CompanionContext>,
}

impl Behavior<CompanionContext> for Turret {
    fn update(&mut self, ctx: &mut CompanionContext) -> Status {
        if !ctx.turret_cooldown.reached_threshold() {
            ctx.set_order(Order::FollowPlayer);
            return Status::Failure;
        }

        let anchor = match ctx.turret_position {
            Some(anchor) => anchor,
            None => {
                let anchor = ctx.hover_above(ctx.player_position);
                ctx.turret_position = Some(anchor);
                ctx.turret_timer.reset();
                ctx.emit(CompanionEvent::TurretDeployed { at: anchor });
                ctx.play(Sound::TurretActivated);
                anchor
            }
        };

        if ctx.turret_timer.reached_threshold() {
            ctx.set_order(Order::FollowPlayer);
            ctx.turret_position = None;
            ctx.turret_cooldown.reset();
            ctx.has_sent_cooldown_msg = false;
            ctx.emit(CompanionEvent::TurretFinished);
            return Status::Success;
        }

        if let Some(shooter) = self.children.child_mut(0) {
            shooter.tick(ctx);
        }

        ctx.set_order(Order::Turret);
        ctx.target_position = anchor;
        Status::Running
    }

    fn reset(&mut self) {
        self.children.reset();
    }
}

/// Flies to the healing station until close enough to take a health pack.
pub struct PickUp;

impl Behavior<CompanionContext> for PickUp {
    fn update(&mut self, ctx: &mut CompanionContext) -> Status {
        let station = ctx.hover_above(ctx.healing_station);

        if ctx.position.distance(station) < ctx.config.pickup_distance {
            ctx.has_picked_up = true;
            return Status::Success;
        }

        ctx.set_order(Order::Fetch);
        ctx.target_position = station;
        Status::Running
    }
}

/// Brings the carried health pack to the player and heals them.
pub struct DropOff;

impl Behavior<CompanionContext> for DropOff {
    fn update(&mut self, ctx: &mut CompanionContext) -> Status {
        let drop_point = ctx.hover_above(ctx.player_position);

        if ctx.position.distance(drop_point) >= ctx.config.drop_distance {
            ctx.set_order(Order::Fetch);
            ctx.target_position = drop_point;
            return Status::Running;
        }

        ctx.emit(CompanionEvent::PlayerHealed);

        // Alternate between the two healing lines.
        ctx.every_other_healing = !ctx.every_other_healing;
        ctx.play(if ctx.every_other_healing {
            Sound::Healing1
        } else {
            Sound::Healing2
        });

        ctx.has_healing_cooldown = true;
        ctx.heal_cooldown.reset();
        ctx.has_picked_up = false;
        ctx.set_order(Order::FollowPlayer);
        Status::Success
    }
}

/// Fires one projectile at the visible enemy when the shot cooldown allows.
///
/// Waits (`Running`) while shooting is disabled, on cooldown, or no enemy is
/// in sight.
pub struct ShootEnemy;

impl Behavior<CompanionContext> for ShootEnemy {
    fn update(&mut self, ctx: &mut CompanionContext) -> Status {
        if !ctx.shoot_timer.reached_threshold() || ctx.no_shooting || !ctx.sees_enemy {
            return Status::Running;
        }

        ctx.shoot_timer.reset();

        let origin = ctx.position;
        let direction = (ctx.enemy_position - origin).normalize_or_zero();
        ctx.emit(CompanionEvent::ProjectileFired { origin, direction });
        ctx.play(Sound::Shoot);
        Status::Success
    }
}

/// Rises above the spawn point once the companion has been woken up.
///
/// Fails while dormant or once the companion is already following.
pub struct Intro;

impl Behavior<CompanionContext> for Intro {
    fn update(&mut self, ctx: &mut CompanionContext) -> Status {
        if ctx.order() == Order::FollowPlayer || !ctx.has_woken_up {
            return Status::Failure;
        }

        let destination = match ctx.intro_position {
            Some(destination) => destination,
            None => {
                let destination = ctx.position + glam::Vec3::Y * ctx.config.intro_height_offset;
                ctx.intro_position = Some(destination);
                ctx.play(Sound::Introduction);
                destination
            }
        };

        let remaining = destination.distance(ctx.position);
        if remaining <= ctx.config.intro_completion_distance {
            ctx.set_order(Order::FollowPlayer);
            Status::Success
        } else {
            ctx.target_position = destination;
            Status::Running
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompanionConfig;
    use behaviour_tree::Node;
    use glam::Vec3;

    fn context() -> CompanionContext {
        CompanionContext::new(CompanionConfig::default(), Vec3::ZERO)
    }

    #[test]
    fn intro_waits_until_woken() {
        let mut ctx = context();
        let mut intro = Node::new(Intro);

        assert_eq!(intro.tick(&mut ctx), Status::Failure);
        assert!(ctx.intro_position.is_none());

        ctx.has_woken_up = true;
        assert_eq!(intro.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.target_position, Vec3::new(0.0, 130.0, 0.0));
        assert_eq!(
            ctx.drain_events(),
            vec![CompanionEvent::PlaySound(Sound::Introduction)]
        );
    }

    #[test]
    fn intro_finishes_near_destination() {
        let mut ctx = context();
        ctx.has_woken_up = true;
        let mut intro = Node::new(Intro);
        intro.tick(&mut ctx);

        ctx.position = Vec3::new(0.0, 120.0, 0.0);
        assert_eq!(intro.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.order(), Order::FollowPlayer);
    }

    #[test]
    fn intro_finishes_on_arrival() {
        let mut ctx = context();
        ctx.has_woken_up = true;
        let mut intro = Node::new(Intro);
        intro.tick(&mut ctx);

        ctx.position = ctx.target_position;
        assert_eq!(intro.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.order(), Order::FollowPlayer);
    }

    #[test]
    fn shoot_waits_without_enemy() {
        let mut ctx = context();
        let mut shoot = Node::new(ShootEnemy);

        assert_eq!(shoot.tick(&mut ctx), Status::Running);

        ctx.sees_enemy = true;
        ctx.enemy_position = Vec3::new(10.0, 0.0, 0.0);
        assert_eq!(shoot.tick(&mut ctx), Status::Success);
        assert!(ctx.drain_events().contains(&CompanionEvent::ProjectileFired {
            origin: Vec3::ZERO,
            direction: Vec3::X,
        }));

        // Cooldown restarted.
        assert_eq!(shoot.tick(&mut ctx), Status::Running);
    }

    #[test]
    fn turret_fails_on_cooldown() {
        let mut ctx = context();
        ctx.set_order(Order::Turret);
        ctx.turret_cooldown.reset();

        let mut turret = Node::new(Turret::default());
        assert_eq!(turret.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.order(), Order::FollowPlayer);
    }

    #[test]
    fn pick_up_then_drop_off() {
        let mut ctx = context();
        ctx.healing_station = Vec3::new(1000.0, 0.0, 0.0);
        ctx.player_position = Vec3::new(-1000.0, 0.0, 0.0);

        let mut pick_up = Node::new(PickUp);
        assert_eq!(pick_up.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.target_position, Vec3::new(1000.0, 200.0, 0.0));

        ctx.position = ctx.target_position;
        assert_eq!(pick_up.tick(&mut ctx), Status::Success);
        assert!(ctx.has_picked_up);

        let mut drop_off = Node::new(DropOff);
        assert_eq!(drop_off.tick(&mut ctx), Status::Running);
        ctx.position = ctx.target_position;
        assert_eq!(drop_off.tick(&mut ctx), Status::Success);
        assert!(!ctx.has_picked_up);
        assert_eq!(ctx.order(), Order::FollowPlayer);
        assert!(ctx.drain_events().contains(&CompanionEvent::PlayerHealed));
    }
}
