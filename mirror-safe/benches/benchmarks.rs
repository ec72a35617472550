use mirror_safe::{process, Point, SafeChecker};

fn main() {
    divan::main();
}

const SAMPLE: &str = "5 6 1 4
2 3
1 2
2 5
4 2
5 5";

/// A staircase of `\` and `/` pairs that drags both beams across the whole
/// grid before they leave it.
fn staircase(side: u32, steps: u32) -> (Vec<Point>, Vec<Point>) {
    let stride = side / (steps + 1);
    let mut left_to_up = Vec::new();
    let mut left_to_down = Vec::new();
    for step in 1..=steps {
        let at = step * stride;
        left_to_down.push(Point::new(step, at));
        left_to_down.push(Point::new(side - step + 1, at));
        left_to_up.push(Point::new(at, side - step + 1));
    }
    (left_to_up, left_to_down)
}

#[divan::bench]
fn sample() {
    process(divan::black_box(SAMPLE)).unwrap();
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn large_grid(bencher: divan::Bencher, steps: u32) {
    let side = 1_000_000;
    let (left_to_up, left_to_down) = staircase(side, steps);
    let checker = SafeChecker::new(side, side, &left_to_up, &left_to_down).unwrap();
    bencher.bench(|| divan::black_box(&checker).check_safe().unwrap());
}
