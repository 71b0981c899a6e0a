use common::Rect;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadtree::{Config, QuadTree};
use rand::prelude::*;

#[derive(Copy, Clone, PartialEq)]
struct Item {
    id: u32,
    rect: Rect,
}

fn item_rect(item: &Item) -> Rect {
    item.rect
}

fn random_item(rng: &mut ThreadRng, id: u32) -> Item {
    let left = rng.gen_range(0.0..95.0);
    let top = rng.gen_range(0.0..95.0);
    Item {
        id,
        rect: Rect::new(left, top, left + 5.0, top + 5.0),
    }
}

fn world() -> Rect {
    Rect::new(0.0, 0.0, 100.0, 100.0)
}

fn insert_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();

    c.bench_function("quadtree_insert", |b| {
        let mut tree = QuadTree::new(world(), item_rect as fn(&Item) -> Rect);
        let mut id = 0;
        b.iter(|| {
            tree.push(black_box(random_item(&mut rng, id)));
            id += 1;
        })
    });
}

fn query_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut tree = QuadTree::new(world(), item_rect as fn(&Item) -> Rect);
    for id in 0..1000 {
        tree.push(random_item(&mut rng, id));
    }

    c.bench_function("quadtree_query", |b| {
        b.iter(|| {
            let left = rng.gen_range(0.0..80.0);
            let top = rng.gen_range(0.0..80.0);
            let region = Rect::new(left, top, left + 20.0, top + 20.0);
            tree.query(black_box(region)).count()
        })
    });
}

fn nodes_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut tree = QuadTree::new_with_config(
        world(),
        item_rect as fn(&Item) -> Rect,
        Config {
            max_objects: 2,
            max_depth: 8,
        },
    );
    for id in 0..1000 {
        tree.push(random_item(&mut rng, id));
    }

    c.bench_function("quadtree_nodes", |b| {
        b.iter(|| {
            tree.nodes()
                .map(|node| black_box(node.objects().len()))
                .sum::<usize>()
        })
    });
}

fn remove_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();

    c.bench_function("quadtree_remove_reinsert", |b| {
        let mut tree = QuadTree::new(world(), item_rect as fn(&Item) -> Rect);
        let mut items = Vec::new();
        for id in 0..1000 {
            let item = random_item(&mut rng, id);
            tree.push(item);
            items.push(item);
        }
        b.iter(|| {
            let index = rng.gen_range(0..items.len());
            if let Some(item) = tree.remove(black_box(&items[index])) {
                tree.push(item);
            }
        })
    });
}

criterion_group!(
    benches,
    insert_benchmark,
    query_benchmark,
    nodes_benchmark,
    remove_benchmark
);
criterion_main!(benches);
