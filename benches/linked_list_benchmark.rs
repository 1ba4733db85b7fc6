use criterion::{black_box, criterion_group, criterion_main, Criterion};
use furrow::{DoublyLinkedList, LinkedList};
use std::collections::LinkedList as StdLinkedList;

fn bench_linked_list_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("linked_list_iter");

    group.bench_function("std_linked_list_iter", |b| {
        let list: StdLinkedList<u64> = (0..1000).collect();
        b.iter(|| {
            let mut sum = 0;
            for x in &list {
                sum += *x;
            }
            black_box(sum);
        });
    });

    group.bench_function("linked_list_iter", |b| {
        let list: LinkedList<u64> = (0..1000).collect();
        b.iter(|| {
            let mut sum = 0;
            for x in &list {
                sum += *x;
            }
            black_box(sum);
        });
    });

    group.bench_function("doubly_linked_list_iter_rev", |b| {
        let list: DoublyLinkedList<u64> = (0..1000).collect();
        b.iter(|| {
            let sum: u64 = list.iter().rev().sum();
            black_box(sum);
        });
    });

    group.finish();
}

fn bench_linked_list_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("linked_list_push_pop");

    group.bench_function("std_linked_list_push_pop", |b| {
        b.iter(|| {
            let mut list = StdLinkedList::new();
            for i in 0..1000 {
                list.push_back(i);
            }
            while list.pop_front().is_some() {}
        });
    });

    group.bench_function("linked_list_append_remove_first", |b| {
        b.iter(|| {
            let mut list = LinkedList::new();
            for i in 0..1000 {
                list.append(i);
            }
            while list.remove_first().is_some() {}
        });
    });

    group.bench_function("doubly_linked_list_append_remove_last", |b| {
        b.iter(|| {
            let mut list = DoublyLinkedList::new();
            for i in 0..1000 {
                list.append(i);
            }
            while list.remove_last().is_some() {}
        });
    });

    group.finish();
}

fn bench_linked_list_indexed(c: &mut Criterion) {
    let mut group = c.benchmark_group("linked_list_indexed");

    group.bench_function("linked_list_get_middle", |b| {
        let list: LinkedList<u64> = (0..1000).collect();
        b.iter(|| black_box(list.get(black_box(500))));
    });

    group.bench_function("doubly_linked_list_get_near_tail", |b| {
        let list: DoublyLinkedList<u64> = (0..1000).collect();
        b.iter(|| black_box(list.get(black_box(990))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_linked_list_iter,
    bench_linked_list_push_pop,
    bench_linked_list_indexed
);
criterion_main!(benches);
