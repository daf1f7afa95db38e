//! Wolf behaviour: attack with a pack bonus, rest to recover stamina.

use crate::{
    entity::{Action, Traits},
    event::BattleEvent,
    geometry::distance,
    rules::{
        ALLY_RANGE, MAX_STAMINA, WOLF_ATTACK_RANGE, WOLF_ATTACK_STAMINA_COST, WOLF_PACK_BONUS,
        WOLF_REST_STAMINA,
    },
    state::SimState,
};

impl SimState {
    /// Attack `target_id` with the wolf `wolf_id`.
    ///
    /// Returns `None` without touching anything when either animal is
    /// dead or unknown, the attacker is not a wolf, or it has less than
    /// `WOLF_ATTACK_STAMINA_COST` stamina. A target beyond
    /// `WOLF_ATTACK_RANGE` yields `AttackOutOfRange` and costs nothing.
    pub fn wolf_attack(&mut self, wolf_id: &str, target_id: &str) -> Option<BattleEvent> {
        let wolf = self.slot_of(wolf_id)?;
        let target = self.slot_of(target_id)?;
        self.attack_slot(wolf, target)
    }

    pub(crate) fn attack_slot(&mut self, wolf: usize, target: usize) -> Option<BattleEvent> {
        if wolf == target {
            return None;
        }
        let attacker = self.slot(wolf);
        let victim = self.slot(target);
        let Traits::Wolf(traits) = &attacker.traits else {
            return None;
        };
        if !attacker.is_alive() || !victim.is_alive() || traits.stamina < WOLF_ATTACK_STAMINA_COST {
            return None;
        }

        if distance(attacker.position, victim.position) > WOLF_ATTACK_RANGE {
            return Some(BattleEvent::AttackOutOfRange { wolf_id: attacker.id.clone() });
        }

        let pack = self.nearby_ally_slots(wolf, ALLY_RANGE).len() as u32;
        let damage = traits.attack_power + WOLF_PACK_BONUS * pack;

        let victim = self.slot_mut(target);
        victim.take_damage(damage);
        let (target_kind, target_id, target_health) =
            (victim.kind(), victim.id.clone(), victim.health());

        let attacker = self.slot_mut(wolf);
        if let Some(w) = attacker.wolf_traits_mut() {
            w.stamina -= WOLF_ATTACK_STAMINA_COST;
        }
        attacker.last_action = Some(Action::Attack);

        log::debug!(
            "wolf {} hit {target_kind} {target_id} for {damage} (pack={pack}), target health {target_health}",
            attacker.id
        );
        if target_health == 0 {
            log::debug!("{target_kind} {target_id} died");
        }

        Some(BattleEvent::Attacked {
            wolf_id: attacker.id.clone(),
            target_kind,
            target_id,
            damage,
            target_health,
        })
    }

    /// Recover stamina. Always succeeds for a wolf.
    pub fn wolf_rest(&mut self, wolf_id: &str) -> Option<BattleEvent> {
        let slot = self.slot_of(wolf_id)?;
        self.wolf_rest_slot(slot)
    }

    pub(crate) fn wolf_rest_slot(&mut self, slot: usize) -> Option<BattleEvent> {
        let wolf = self.slot_mut(slot);
        let traits = wolf.wolf_traits_mut()?;
        traits.stamina = (traits.stamina + WOLF_REST_STAMINA).min(MAX_STAMINA);
        let stamina = traits.stamina;
        wolf.last_action = Some(Action::Rest);
        Some(BattleEvent::WolfRested { wolf_id: wolf.id.clone(), stamina })
    }
}
