use plcore::prelude::*;

fn main() {
    let mut sampler = Sampler::new("y=x^2-4");
    println!("{} -> {}", sampler.expression(), sampler.normalized());

    let points = sampler
        .sample_over(-5.0, 5.0, SampleOptions::default())
        .unwrap();
    for (x, y) in points {
        println!("({x}, {y})");
    }
}
