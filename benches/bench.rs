use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bstree::{Traversal, Tree};

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in an unbalanced manner. This adds elements in an
/// ascending manner so the tree degenerates into a list.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    for x in 0..num_nodes_in_full_tree(num_levels) as i32 {
        tree.insert(x).expect("values are distinct");
    }
    tree
}

/// Builds a tree by inserting values in a balanced manner, so that even without
/// self-balancing the resulting tree has `num_levels` full levels.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    let xs: Vec<i32> = (0..num_nodes_in_full_tree(num_levels) as i32).collect();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid]).expect("values are distinct");
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a read-only function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of trees before finishing the group.
fn bench_read_helper(c: &mut Criterion, name: &str, f: impl Fn(&Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // For trees of size 2^3, 2^7, etc....
    for num_levels in [3, 7, 11, 15] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = 2usize.pow(num_levels as u32) - 2;
        for (shape, tree) in tree_tests {
            let id = BenchmarkId::new(shape, largest_element_in_tree);

            group.bench_with_input(id, &largest_element_in_tree, |b, _| {
                b.iter(|| {
                    f(&tree, black_box(largest_element_in_tree as i32));
                })
            });
        }
    }

    group.finish();
}

/// Helper to bench a mutating function on a BST. Each iteration gets its own
/// clone of the tree; only the closure itself is timed.
fn bench_mutate_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = 2usize.pow(num_levels as u32) - 2;
        for (shape, tree) in tree_tests {
            let id = BenchmarkId::new(shape, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree as i32));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

/// All benches run against balanced and unbalanced trees of various sizes and test
/// successful and unsuccessful actions.
pub fn criterion_benchmark(c: &mut Criterion) {
    bench_read_helper(c, "find", |tree, i| {
        let _node = black_box(tree.find(&i));
    });
    bench_read_helper(c, "find-miss", |tree, i| {
        let _node = black_box(tree.find(&(i + 1)));
    });
    bench_read_helper(c, "kth-smallest-median", |tree, i| {
        let _node = black_box(tree.kth_smallest((i as usize + 1) / 2));
    });
    bench_read_helper(c, "traverse-in-order", |tree, _i| {
        let report = tree.traverse(Traversal::InOrder, |value, _walk| {
            black_box(value);
        });
        black_box(report);
    });

    bench_mutate_helper(c, "insert", |tree, i| {
        tree.insert(i + 1).expect("value is not in the tree");
    });
    bench_mutate_helper(c, "remove", |tree, i| {
        tree.remove(&i).expect("value is in the tree");
    });
    bench_mutate_helper(c, "remove-miss", |tree, i| {
        let _err = tree.remove(&(i + 1));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
