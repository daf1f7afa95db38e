//! Win detection and batch running.

use pack_hunt_core::{
    engine::BattleEngine, entity::AnimalKind, geometry::Position, outcome::GameOutcome,
};

fn spawn_all(engine: &mut BattleEngine, kind: AnimalKind, cells: &[(i32, i32)]) -> Vec<String> {
    cells
        .iter()
        .map(|&(x, y)| engine.spawn(kind, Position::new(x, y)).unwrap())
        .collect()
}

fn kill(engine: &mut BattleEngine, ids: &[String]) {
    for id in ids {
        engine.state.entity_mut(id).unwrap().take_damage(100);
    }
}

#[test]
fn both_sides_alive_is_ongoing() {
    let mut engine = BattleEngine::new(1);
    spawn_all(&mut engine, AnimalKind::Wolf, &[(0, 0)]);
    spawn_all(&mut engine, AnimalKind::Sheep, &[(5, 5)]);
    assert_eq!(engine.check_game_over(), GameOutcome::Ongoing);
    assert!(!engine.check_game_over().is_over());
}

#[test]
fn sheep_win_when_every_wolf_is_dead() {
    let mut engine = BattleEngine::new(2);
    let wolves = spawn_all(&mut engine, AnimalKind::Wolf, &[(0, 0), (1, 1)]);
    let sheep = spawn_all(&mut engine, AnimalKind::Sheep, &[(5, 5), (6, 6), (7, 7)]);
    kill(&mut engine, &wolves);
    assert_eq!(engine.check_game_over(), GameOutcome::SheepWin);

    // Sheep losses do not matter as long as one is standing.
    kill(&mut engine, &sheep[..2]);
    assert_eq!(engine.check_game_over(), GameOutcome::SheepWin);
    assert_eq!(engine.check_game_over().to_string(), "Sheep Win!");
}

#[test]
fn wolves_win_when_every_sheep_is_dead() {
    let mut engine = BattleEngine::new(3);
    spawn_all(&mut engine, AnimalKind::Wolf, &[(0, 0)]);
    let sheep = spawn_all(&mut engine, AnimalKind::Sheep, &[(5, 5), (6, 6)]);
    kill(&mut engine, &sheep);
    assert_eq!(engine.check_game_over(), GameOutcome::WolvesWin);
    assert_eq!(engine.status().outcome, GameOutcome::WolvesWin);
}

#[test]
fn nobody_left_is_a_draw() {
    let empty = BattleEngine::new(4);
    assert_eq!(empty.check_game_over(), GameOutcome::Draw);

    let mut engine = BattleEngine::new(4);
    let all = spawn_all(&mut engine, AnimalKind::Wolf, &[(0, 0)]);
    let sheep = spawn_all(&mut engine, AnimalKind::Sheep, &[(5, 5)]);
    kill(&mut engine, &all);
    kill(&mut engine, &sheep);
    assert_eq!(engine.check_game_over(), GameOutcome::Draw);
}

#[test]
fn run_rounds_stops_once_the_battle_is_decided() {
    let mut engine = BattleEngine::new(5);
    // A sheep trapped in the corner by three wolves: every bite carries
    // a two-wolf pack bonus (30 damage), so it falls in the second round.
    let sheep = spawn_all(&mut engine, AnimalKind::Sheep, &[(0, 0)]);
    spawn_all(&mut engine, AnimalKind::Wolf, &[(1, 0), (0, 1), (1, 1)]);

    let outcome = engine.run_rounds(10);

    assert_eq!(outcome, GameOutcome::WolvesWin);
    assert!(!engine.state.entity(&sheep[0]).unwrap().is_alive());
    assert_eq!(engine.state.round, 3);
    assert_eq!(engine.state.battle_log().len(), 2);
}

#[test]
fn run_rounds_does_nothing_after_the_end() {
    let mut engine = BattleEngine::new(6);
    spawn_all(&mut engine, AnimalKind::Sheep, &[(3, 3)]);
    assert_eq!(engine.run_rounds(5), GameOutcome::SheepWin);
    assert_eq!(engine.state.round, 1);
    assert!(engine.state.battle_log().is_empty());
}
