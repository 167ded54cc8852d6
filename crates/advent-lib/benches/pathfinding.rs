use advent_lib::{
    build_grid_graph, build_oriented_graph, shortest_distances, shortest_path_members, Graph,
    Grid, Heading, Pose, Position, TURN_COST,
};
use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;

const MAZE: &str = "\
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################";

static GRID: Lazy<Grid> = Lazy::new(|| Grid::parse(MAZE).expect("maze parses"));
static ORIENTED: Lazy<Graph<Pose>> = Lazy::new(|| build_oriented_graph(&GRID, TURN_COST));
static PLAIN: Lazy<Graph<Position>> = Lazy::new(|| build_grid_graph(&GRID));

fn start_pose() -> Pose {
    Pose::new(GRID.require(b'S').expect("start marker"), Heading::East)
}

fn benchmark_pathfinding(c: &mut Criterion) {
    c.bench_function("build_oriented_graph", |b| {
        b.iter(|| black_box(build_oriented_graph(&GRID, TURN_COST).len()));
    });

    c.bench_function("grid_distances", |b| {
        let graph = &*PLAIN;
        let start = start_pose().position;
        b.iter(|| black_box(shortest_distances(graph, start).len()));
    });

    c.bench_function("oriented_distances", |b| {
        let graph = &*ORIENTED;
        let start = start_pose();
        b.iter(|| black_box(shortest_distances(graph, start).len()));
    });

    c.bench_function("oriented_best_path_members", |b| {
        let graph = &*ORIENTED;
        let reversed = graph.transpose();
        let distances = shortest_distances(graph, start_pose());
        let end = GRID.require(b'E').expect("end marker");
        let targets = Heading::ALL.map(|heading| Pose::new(end, heading));
        b.iter(|| black_box(shortest_path_members(&reversed, &distances, targets).len()));
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
