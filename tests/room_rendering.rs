//! Integration tests: whole rooms rendered against recording surfaces, so
//! the exact draw sequences can be asserted without a window.

use parallax::{
    config, DrawJournal, DrawOp, Layer, Object, Position, RecordingSurface, Room, ViewerState,
};
use std::rc::Rc;

fn sprite(journal: &Rc<DrawJournal>, name: &str) -> Rc<Object<RecordingSurface>> {
    Rc::new(Object::new(RecordingSurface::new(journal, name, 32.0, 32.0)))
}

/// The compiled-in demo scene, rebuilt over recording surfaces: a
/// 1000x1000 play layer with four trees and a 640x480 cloud layer with four
/// clouds, parallax anchored to the play layer.
fn demo_room(
    journal: &Rc<DrawJournal>,
) -> (Room<RecordingSurface>, Rc<Layer<RecordingSurface>>) {
    let mut play =
        Layer::immediate(RecordingSurface::new(journal, "play-bg", 1000.0, 1000.0));
    let mut clouds =
        Layer::immediate(RecordingSurface::new(journal, "clouds-bg", 640.0, 480.0));

    let tree = sprite(journal, "tree");
    let cloud = sprite(journal, "cloud");

    for (x, y) in [(45.0, 100.0), (60.0, 300.0), (600.0, 800.0), (200.0, 800.0)] {
        play.add_object(Position::new(x, y), Rc::clone(&tree));
    }
    for (x, y) in [(10.0, 10.0), (100.0, 10.0), (300.0, 10.0), (10.0, 400.0)] {
        clouds.add_object(Position::new(x, y), Rc::clone(&cloud));
    }

    let play = Rc::new(play);
    let mut room = Room::new();
    room.add_layer(Rc::clone(&play));
    room.add_layer(Rc::new(clouds));
    (room, play)
}

fn blits(ops: &[DrawOp]) -> Vec<(String, Position)> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Blit {
                source, position, ..
            } => Some((source.clone(), *position)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_demo_room_draw_sequence() {
    let journal = DrawJournal::new();
    let mut screen = RecordingSurface::new(&journal, "screen", 640.0, 480.0);
    let (room, play) = demo_room(&journal);

    room.render(&mut screen, &play, Position::new(100.0, 100.0))
        .unwrap();

    let ops = journal.ops();
    // Two backgrounds, eight objects, one present.
    assert_eq!(ops.len(), 11);
    assert_eq!(
        ops.last(),
        Some(&DrawOp::Present {
            target: "screen".into()
        })
    );

    // Play layer first (back), offset (sw/2 - 100, sh/2 - 100); trees in
    // scanline order at placement + offset.
    let expected = vec![
        ("play-bg".to_string(), Position::new(220.0, 140.0)),
        ("tree".to_string(), Position::new(265.0, 240.0)),
        ("tree".to_string(), Position::new(280.0, 440.0)),
        ("tree".to_string(), Position::new(420.0, 940.0)),
        ("tree".to_string(), Position::new(820.0, 940.0)),
        // Cloud layer scrolls slower: its extent is 640x480 against the
        // 1000x1000 center, so its offset is (256, 192).
        ("clouds-bg".to_string(), Position::new(256.0, 192.0)),
        ("cloud".to_string(), Position::new(266.0, 202.0)),
        ("cloud".to_string(), Position::new(356.0, 202.0)),
        ("cloud".to_string(), Position::new(556.0, 202.0)),
        ("cloud".to_string(), Position::new(266.0, 592.0)),
    ];
    assert_eq!(blits(&ops), expected);
}

#[test]
fn test_immediate_render_is_idempotent() {
    let journal = DrawJournal::new();
    let mut screen = RecordingSurface::new(&journal, "screen", 640.0, 480.0);
    let (room, play) = demo_room(&journal);

    room.render(&mut screen, &play, Position::new(100.0, 100.0))
        .unwrap();
    let first = journal.take();

    room.render(&mut screen, &play, Position::new(100.0, 100.0))
        .unwrap();
    let second = journal.take();

    assert_eq!(first, second);
}

#[test]
fn test_cached_layer_recomposites_exactly_once() {
    let journal = DrawJournal::new();
    let mut screen = RecordingSurface::new(&journal, "screen", 640.0, 480.0);

    let background = RecordingSurface::new(&journal, "bg", 200.0, 200.0);
    let buffer = RecordingSurface::new(&journal, "cache", 200.0, 200.0);
    let mut layer = Layer::cached(background, buffer);
    layer.add_object(Position::new(5.0, 5.0), sprite(&journal, "obj"));

    layer.render(&mut screen, Position::origin());
    let first = journal.take();
    // Recomposite (clear, background, object) plus the cache blit itself.
    assert_eq!(
        first,
        vec![
            DrawOp::Clear {
                target: "cache".into()
            },
            DrawOp::Blit {
                source: "bg".into(),
                target: "cache".into(),
                position: Position::origin(),
            },
            DrawOp::Blit {
                source: "obj".into(),
                target: "cache".into(),
                position: Position::new(5.0, 5.0),
            },
            DrawOp::Blit {
                source: "cache".into(),
                target: "screen".into(),
                position: Position::origin(),
            },
        ]
    );

    // No placement change: the second render is a single cache blit.
    layer.render(&mut screen, Position::new(3.0, 0.0));
    let second = journal.take();
    assert_eq!(
        second,
        vec![DrawOp::Blit {
            source: "cache".into(),
            target: "screen".into(),
            position: Position::new(3.0, 0.0),
        }]
    );

    // Adding an object re-dirties the cache: one more full recomposite.
    layer.add_object(Position::new(1.0, 1.0), sprite(&journal, "obj2"));
    layer.render(&mut screen, Position::origin());
    let third = journal.take();
    assert_eq!(third.len(), 5); // clear + bg + 2 objects + cache blit
    assert!(matches!(third[0], DrawOp::Clear { .. }));
}

#[test]
fn test_three_left_steps_then_render() {
    let mut state = ViewerState::new();
    assert_eq!(state.viewpoint, Position::new(100.0, 100.0));

    for _ in 0..3 {
        state.apply_step(Position::new(-config::STEP_SIZE, 0.0));
    }
    assert_eq!(state.viewpoint, Position::new(70.0, 100.0));

    let journal = DrawJournal::new();
    let mut screen = RecordingSurface::new(&journal, "screen", 640.0, 480.0);
    let (room, play) = demo_room(&journal);

    room.render(&mut screen, &play, state.viewpoint).unwrap();

    // Center layer offset is (sw/2 - v.x, sh/2 - v.y).
    let first_blit = &journal.ops()[0];
    assert_eq!(
        *first_blit,
        DrawOp::Blit {
            source: "play-bg".into(),
            target: "screen".into(),
            position: Position::new(250.0, 140.0),
        }
    );
}

#[test]
fn test_duplicate_placements_survive_in_a_room_render() {
    let journal = DrawJournal::new();
    let mut screen = RecordingSurface::new(&journal, "screen", 640.0, 480.0);

    let mut layer = Layer::immediate(RecordingSurface::new(&journal, "bg", 640.0, 480.0));
    layer.add_object(Position::new(50.0, 50.0), sprite(&journal, "one"));
    layer.add_object(Position::new(50.0, 50.0), sprite(&journal, "two"));
    let layer = Rc::new(layer);

    let mut room = Room::new();
    room.add_layer(Rc::clone(&layer));
    room.render(&mut screen, &layer, Position::origin()).unwrap();

    let sources: Vec<String> = blits(&journal.ops())
        .into_iter()
        .map(|(source, _)| source)
        .collect();
    assert_eq!(
        sources,
        vec!["bg".to_string(), "one".to_string(), "two".to_string()]
    );
}
