use std::time::Duration;

use life_automaton::{neighbor_counts, step, Grid, RawConfig, RuleSet, SimulationController, State};

const TICK: Duration = Duration::from_millis(100);

fn grid(text: &str) -> Grid {
    Grid::from_text(text).unwrap()
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_steps() {
    let start = grid(
        ".#......\n\
         ..#.....\n\
         ###.....\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n",
    );
    let moved = grid(
        "........\n\
         ..#.....\n\
         ...#....\n\
         .###....\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n",
    );

    let mut sim = SimulationController::new();
    sim.load(start.clone(), RuleSet::conway(), TICK);
    for _ in 0..4 {
        sim.step();
    }
    assert_eq!(sim.current_step(), 4);
    assert_eq!(sim.current_grid(), Some(&moved));

    // 32 steps carry it across the 8x8 torus back to where it began
    for _ in 4..32 {
        sim.step();
    }
    assert_eq!(sim.current_grid(), Some(&start));
}

#[test]
fn lone_cell_dies() {
    let mut g = Grid::new(5, 5).unwrap();
    g.set(2, 2, true);
    let next = step(&g, &RuleSet::conway());
    assert_eq!(next.population(), 0);
}

#[test]
fn null_rule_kills_everything_in_one_step() {
    let config = RawConfig {
        birth: String::new(),
        survival: String::new(),
        ..RawConfig::default()
    };
    let mut sim = SimulationController::new();
    sim.configure(&config.parse().unwrap().with_seed(5)).unwrap();
    assert!(sim.population() > 0);

    let next = sim.step().unwrap();
    assert_eq!(next.population(), 0);
}

#[test]
fn full_grid_survives_under_s8() {
    let full = grid("######\n######\n######\n######\n");
    let mut sim = SimulationController::new();
    sim.load(full.clone(), "B/S8".parse().unwrap(), TICK);
    sim.play();
    for _ in 0..10 {
        sim.step();
    }
    assert_eq!(sim.current_step(), 11);
    assert_eq!(sim.current_grid(), Some(&full));
}

#[test]
fn corner_cell_reaches_across_every_edge() {
    let (width, height) = (7, 5);
    let mut g = Grid::new(width, height).unwrap();
    g.set(0, 0, true);
    let counts = neighbor_counts(&g);
    assert_eq!((counts.width(), counts.height()), (width, height));

    let expected = [
        (0, 1),
        (1, 0),
        (1, 1),
        (0, width - 1),
        (1, width - 1),
        (height - 1, 0),
        (height - 1, 1),
        (height - 1, width - 1),
    ];
    for r in 0..height {
        for c in 0..width {
            let want = u8::from(expected.contains(&(r, c)));
            assert_eq!(counts.get(r, c), Some(want), "cell ({r}, {c})");
        }
    }
}

#[test]
fn step_reads_previous_generation_only() {
    // A sequential in-place update would let the first birth feed the
    // cells after it; the simultaneous update keeps this a blinker.
    let rules = RuleSet::conway();
    let a = grid(".....\n.....\n.###.\n.....\n.....\n");
    let b = step(&a, &rules);
    assert_eq!(b.population(), 3);
    assert_eq!(step(&b, &rules), a);
}

#[test]
fn scheduler_drives_steps_until_paused() {
    let mut sim = SimulationController::new();
    sim.configure(&RawConfig::default().parse().unwrap().with_seed(9))
        .unwrap();
    assert_eq!(sim.interval(), Some(Duration::from_millis(500)));

    sim.play();
    let mut ticks = 0;
    while sim.is_running() {
        sim.step();
        ticks += 1;
        if ticks == 5 {
            sim.pause();
        }
    }
    assert_eq!(sim.state(), State::Paused);
    assert_eq!(sim.current_step(), 6);
}
