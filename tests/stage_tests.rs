use platformer_phys::{
    ActorIntent, SimulationConfig, Stage, StageLoader, World,
    bodies::tags,
    error::PhysicsError,
    math::Vector2,
    stage::DEFAULT_STAGE,
};
use approx::assert_relative_eq;

const DT: f32 = 1.0 / 60.0;

fn glyph_count(glyph: char) -> usize {
    DEFAULT_STAGE.iter().flat_map(|row| row.chars()).filter(|&c| c == glyph).count()
}

#[test]
fn test_default_stage_layout() {
    let stage = Stage::default_stage();
    assert_eq!(stage.height(), 18);
    assert_eq!(stage.width(), 20);
    assert_eq!(stage.spawn_column(), Some(0));
    assert_eq!(stage.glyph(17, 3), Some('-'));
    assert_eq!(stage.glyph(18, 0), None);
    assert_eq!(Stage::parse(&DEFAULT_STAGE.join("\n")).unwrap(), stage);
}

#[test]
fn test_loader_builds_terrain_and_player() {
    let stage = Stage::default_stage();
    let world = StageLoader::default().load(&stage, SimulationConfig::default()).unwrap();

    let blocks = world.bodies().find_all_by_tag(tags::BLOCK).count();
    let bridges = world.bodies().find_all_by_tag(tags::BRIDGE).count();
    assert_eq!(blocks, glyph_count('o'));
    assert_eq!(bridges, glyph_count('-'));
    assert_eq!(world.body_count(), blocks + bridges + 1);

    // Player: 0.3 x 0.7 of a block, centred over the first bottom block, two rows up
    let player = world.get_player().unwrap();
    assert_eq!(world.find_by_tag(tags::PLAYER), Ok(player));
    let body = world.get_body(player).unwrap();
    assert!(!body.is_fixed());
    assert_relative_eq!(body.get_position(), Vector2::new(15.0, 465.0));
    assert_relative_eq!(body.get_size(), Vector2::new(9.0, 21.0), epsilon = 1.0e-4);

    // Terrain cells sit on the grid; bridges are a tenth of a block tall
    for (_, body) in world.bodies().iter_fixed() {
        let position = body.get_position();
        assert_eq!(position.x % 30.0, 0.0);
        assert_eq!(position.y % 30.0, 0.0);
        if body.is_bridge() {
            assert_eq!(body.get_tag(), tags::BRIDGE);
            assert_relative_eq!(body.get_size().y, 3.0, epsilon = 1.0e-4);
        } else {
            assert_eq!(body.get_size(), Vector2::new(30.0, 30.0));
        }
    }
}

#[test]
fn test_player_lands_on_the_bottom_row() {
    let mut world = StageLoader::default()
        .load(&Stage::default_stage(), SimulationConfig::default())
        .unwrap();
    let player = world.get_player().unwrap();

    for _ in 0..120 {
        world.step(DT).unwrap();
    }

    let body = world.get_body(player).unwrap();
    assert!(body.is_grounded());
    assert_eq!(world.get_body(body.get_contacts().y_pos.unwrap()).unwrap().get_tag(), tags::BLOCK);
    assert!(body.get_rect().bottom() < 510.0);
    assert!(body.get_rect().bottom() >= 509.0);

    // Walk right along the floor for a bit
    for _ in 0..30 {
        world.set_intent(ActorIntent::moving(1.0));
        world.step(DT).unwrap();
    }
    let body = world.get_body(player).unwrap();
    assert!(body.get_position().x > 15.0);
    assert!(body.is_grounded());
}

#[test]
fn test_populate_existing_world() {
    let stage = Stage::parse(
        "
        ____
        _--_
        oooo
        ",
    )
    .unwrap();

    let mut world = World::new();
    let player = StageLoader::with_block_size(10.0).populate(&stage, &mut world).unwrap();

    assert_eq!(world.get_player(), Some(player));
    assert_eq!(world.body_count(), 7);
    // Spawn is centred in cell (0, 0): two rows above the bottom row
    assert_relative_eq!(world.get_body(player).unwrap().get_position(), Vector2::new(5.0, 5.0));
}

#[test]
fn test_invalid_stages() {
    let invalid = |result: Result<Stage, PhysicsError>| matches!(result, Err(PhysicsError::InvalidStage(_)));

    assert!(invalid(Stage::parse("")));
    assert!(invalid(Stage::parse("\n\n   \n")));
    assert!(invalid(Stage::from_rows(&["o", "o"])));
    assert!(invalid(Stage::from_rows(&["___", "__", "ooo"])));
    assert!(invalid(Stage::from_rows(&["___", "___", "-_-"])));
    assert!(Stage::from_rows(&["___", "___", "_o_"]).is_ok());
}

#[cfg(feature = "procgen")]
#[test]
fn test_generated_stage() {
    use rand::{rngs::StdRng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(3);
    let stage = Stage::generate(&mut rng, 12, 10).unwrap();
    assert_eq!(stage.height(), 10);
    assert_eq!(stage.width(), 12);
    assert_eq!(stage.to_rows().last().unwrap().as_str(), "oooooooooooo");

    // Only every third row from the bottom carries terrain
    for (i, row) in stage.to_rows().iter().enumerate() {
        if (stage.height() - 1 - i) % 3 != 0 {
            assert!(row.chars().all(|c| c == '_'), "row {} is {}", i, row);
        }
    }

    assert!(Stage::generate(&mut rng, 0, 10).is_err());
    assert!(Stage::generate(&mut rng, 5, 2).is_err());
}
