//! End-to-end encounter tests: content catalog + core engine + runtime.

use skirmish_content::{ConfigLoader, GearCatalog, GearLoader};
use skirmish_core::{Action, EncounterState, EntityId, EntityState, Equipment};
use skirmish_runtime::{
    AttackHeroProvider, EncounterOutcome, GameEvent, Runtime, RuntimeError, ScriptedProvider,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn armed_hero() -> EntityState {
    EntityState::hero(
        100,
        Equipment::builder().with(GearCatalog::WAR_AXE).build(),
    )
}

fn clawed_monster(id: u32) -> EntityState {
    EntityState::monster(
        EntityId(id),
        40,
        Equipment::builder().with(GearCatalog::RUSTY_CLAWS).build(),
    )
}

fn state_with(entities: Vec<EntityState>) -> EncounterState {
    let mut state = EncounterState::new();
    for entity in entities {
        state.spawn(entity).unwrap();
    }
    state
}

#[tokio::test]
async fn hero_defeats_two_monsters() {
    init_tracing();

    let hero_script = ScriptedProvider::new([
        Action::attack(EntityId::HERO, EntityId(1)),
        Action::attack(EntityId::HERO, EntityId(1)),
        Action::attack(EntityId::HERO, EntityId(1)),
        Action::attack(EntityId::HERO, EntityId(2)),
        Action::attack(EntityId::HERO, EntityId(2)),
        Action::attack(EntityId::HERO, EntityId(2)),
    ]);

    let mut runtime = Runtime::builder()
        .state(state_with(vec![
            armed_hero(),
            clawed_monster(1),
            clawed_monster(2),
        ]))
        .hero_provider(hero_script)
        .monster_provider(AttackHeroProvider)
        .build();

    let outcome = runtime.run_to_completion(50).await.unwrap();
    assert_eq!(outcome, EncounterOutcome::HeroVictory);

    // War axe (18) needs three blows per 40-vitality monster; rusty claws
    // (7) land seven times on the hero before the second monster falls.
    let hero = runtime.state().hero().unwrap();
    assert_eq!(hero.vitality.current(), 51);
    assert!(!runtime.state().entity(EntityId(1)).unwrap().is_alive());
    assert!(!runtime.state().entity(EntityId(2)).unwrap().is_alive());
}

#[tokio::test]
async fn hero_escapes_before_contact() {
    init_tracing();

    let mut runtime = Runtime::builder()
        .state(state_with(vec![armed_hero(), clawed_monster(1)]))
        .hero_provider(ScriptedProvider::new([Action::escape(EntityId::HERO)]))
        .monster_provider(AttackHeroProvider)
        .build();

    let outcome = runtime.run_to_completion(10).await.unwrap();
    assert_eq!(outcome, EncounterOutcome::HeroEscaped);

    // The monster never got a turn.
    assert_eq!(
        runtime
            .state()
            .entity(EntityId(1))
            .unwrap()
            .vitality
            .current(),
        40
    );
}

#[tokio::test]
async fn unarmed_hero_wastes_turns_and_falls() {
    init_tracing();

    let futile = std::iter::repeat(Action::attack(EntityId::HERO, EntityId(1))).take(20);

    let mut runtime = Runtime::builder()
        .state(state_with(vec![
            EntityState::hero(100, Equipment::empty()),
            clawed_monster(1),
        ]))
        .hero_provider(ScriptedProvider::new(futile))
        .monster_provider(AttackHeroProvider)
        .build();

    let outcome = runtime.run_to_completion(100).await.unwrap();
    assert_eq!(outcome, EncounterOutcome::HeroDefeated);

    // The unarmed hero never scratched the monster.
    assert_eq!(
        runtime
            .state()
            .entity(EntityId(1))
            .unwrap()
            .vitality
            .current(),
        40
    );
}

#[tokio::test]
async fn events_trace_the_whole_encounter() {
    init_tracing();

    let mut runtime = Runtime::builder()
        .state(state_with(vec![armed_hero(), clawed_monster(1)]))
        .hero_provider(ScriptedProvider::new(
            std::iter::repeat(Action::attack(EntityId::HERO, EntityId(1))).take(3),
        ))
        .monster_provider(AttackHeroProvider)
        .build();
    let mut events = runtime.subscribe_events();

    let outcome = runtime.run_to_completion(20).await.unwrap();
    assert_eq!(outcome, EncounterOutcome::HeroVictory);

    let mut received = Vec::new();
    while let Ok(event) = events.try_recv() {
        received.push(event);
    }

    assert!(received.iter().any(|event| matches!(
        event,
        GameEvent::AttackLanded { actor, target, .. }
            if *actor == EntityId::HERO && *target == EntityId(1)
    )));
    assert!(received.contains(&GameEvent::EntityDefeated {
        entity: EntityId(1)
    }));
    assert!(received.contains(&GameEvent::EncounterOver {
        outcome: EncounterOutcome::HeroVictory
    }));
}

#[tokio::test]
async fn loaded_catalog_drives_an_encounter() {
    init_tracing();

    let catalog = GearLoader::parse(
        r#"(
            gear: [
                (handle: (1), kind: Weapon((power: 40))),
                (handle: (2), kind: Trinket),
            ],
        )"#,
    )
    .unwrap();

    let hero = EntityState::hero(
        100,
        Equipment::builder()
            .with(skirmish_core::GearHandle(1))
            .with(skirmish_core::GearHandle(2))
            .build(),
    );

    let mut runtime = Runtime::builder()
        .state(state_with(vec![
            hero,
            EntityState::monster(EntityId(1), 40, Equipment::empty()),
        ]))
        .gear(catalog)
        .hero_provider(ScriptedProvider::new([Action::attack(
            EntityId::HERO,
            EntityId(1),
        )]))
        .monster_provider(AttackHeroProvider)
        .build();

    // One 40-power blow fells the 40-vitality monster.
    let outcome = runtime.run_to_completion(5).await.unwrap();
    assert_eq!(outcome, EncounterOutcome::HeroVictory);
}

#[tokio::test]
async fn loaded_config_sets_roster_vitality() {
    init_tracing();

    let config = ConfigLoader::parse("hero_vitality = 21\nmonster_vitality = 36\n").unwrap();

    let mut runtime = Runtime::builder()
        .state(state_with(vec![
            EntityState::hero_from(
                &config,
                Equipment::builder().with(GearCatalog::WAR_AXE).build(),
            ),
            EntityState::monster_from(
                &config,
                EntityId(1),
                Equipment::builder().with(GearCatalog::RUSTY_CLAWS).build(),
            ),
        ]))
        .hero_provider(ScriptedProvider::new(
            std::iter::repeat(Action::attack(EntityId::HERO, EntityId(1))).take(2),
        ))
        .monster_provider(AttackHeroProvider)
        .build();

    // Two war-axe blows (18) fell the 36-vitality monster; the hero eats
    // one claw swipe (7) from its configured 21 vitality in between.
    let outcome = runtime.run_to_completion(10).await.unwrap();
    assert_eq!(outcome, EncounterOutcome::HeroVictory);
    assert_eq!(runtime.state().hero().unwrap().vitality.current(), 14);
}

#[tokio::test]
async fn stepping_without_a_hero_errors() {
    init_tracing();

    // An empty roster is a wiring mistake, not an encounter; step() must
    // surface it as a typed error instead of asserting.
    let mut runtime = Runtime::builder().build();
    assert_eq!(runtime.outcome(), None);
    assert!(matches!(
        runtime.step().await,
        Err(RuntimeError::MissingHero)
    ));

    // Monsters without a hero are rejected the same way.
    let mut runtime = Runtime::builder()
        .state(state_with(vec![clawed_monster(1)]))
        .monster_provider(AttackHeroProvider)
        .build();
    assert!(matches!(
        runtime.step().await,
        Err(RuntimeError::MissingHero)
    ));
}

#[tokio::test]
async fn stepping_a_finished_encounter_errors() {
    init_tracing();

    let mut runtime = Runtime::builder()
        .state(state_with(vec![armed_hero()]))
        .hero_provider(ScriptedProvider::new(std::iter::empty()))
        .monster_provider(AttackHeroProvider)
        .build();

    // No monsters spawned: the encounter is already won.
    assert_eq!(runtime.outcome(), Some(EncounterOutcome::HeroVictory));
    assert!(matches!(
        runtime.step().await,
        Err(RuntimeError::EncounterOver(EncounterOutcome::HeroVictory))
    ));
}
